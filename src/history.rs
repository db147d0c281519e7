// history.rs

/// Submitted command lines plus a recall cursor in `[0, len]`.
/// `cursor == len` means nothing is recalled.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        Self { entries: Vec::new(), cursor: 0 }
    }

    /// Appends `entry` verbatim unless it is blank, and parks the cursor past
    /// the newest entry.
    pub fn record(&mut self, entry: &str) -> bool {
        if entry.trim().is_empty() {
            return false;
        }
        self.entries.push(entry.to_string());
        self.cursor = self.entries.len();
        true
    }

    /// Moves the cursor one step toward the oldest entry, stopping at 0.
    /// Returns the new cursor only if it moved.
    pub fn previous(&mut self) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }
        let next = self.cursor.saturating_sub(1);
        self.move_to(next)
    }

    /// Moves the cursor one step toward `len`.
    pub fn next(&mut self) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }
        let len = self.entries.len();
        let next = if self.cursor >= len - 1 { len } else { self.cursor + 1 };
        self.move_to(next)
    }

    fn move_to(&mut self, cursor: usize) -> Option<usize> {
        if cursor == self.cursor {
            return None;
        }
        self.cursor = cursor;
        Some(cursor)
    }

    /// The input line the current cursor stands for.
    pub fn resolve(&self) -> &str {
        self.entries.get(self.cursor).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn cursor(&self) -> usize {
        self.cursor
    }
    pub fn all(&self) -> &[String] {
        &self.entries
    }
}
