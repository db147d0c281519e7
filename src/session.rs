// session.rs

use crate::command::Command;
use crate::history::History;
use crate::navigate::Link;
use crate::render::{DisplayBlock, Renderer};
use tracing::debug;
use uuid::Uuid;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct EntryId(Uuid);

impl EntryId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum EntryContent {
    /// The submitted line itself. Kept in the log but never drawn.
    Echo(String),
    Block(DisplayBlock),
}

#[derive(Clone, Debug)]
pub struct Entry {
    pub id: EntryId,
    pub content: EntryContent,
}

impl Entry {
    fn echo(raw: &str) -> Self {
        Self { id: EntryId::new(), content: EntryContent::Echo(raw.to_string()) }
    }

    fn block(block: DisplayBlock) -> Self {
        Self { id: EntryId::new(), content: EntryContent::Block(block) }
    }

    pub fn block_ref(&self) -> Option<&DisplayBlock> {
        match &self.content {
            EntryContent::Block(b) => Some(b),
            EntryContent::Echo(_) => None,
        }
    }
}

/// Output entries in display order. Only ever appended to or emptied.
#[derive(Clone, Debug, Default)]
pub struct OutputLog {
    entries: Vec<Entry>,
}

impl OutputLog {
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn visible(&self) -> impl Iterator<Item = &DisplayBlock> {
        self.entries.iter().filter_map(Entry::block_ref)
    }

    fn replace(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
    }
}

/// What a submission asks the host to do beyond redrawing.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Dispatch {
    pub command: Command,
    pub navigate: Option<Link>,
}

#[derive(Debug, Default)]
pub struct Session {
    input: String,
    log: OutputLog,
    history: History,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Direct typing.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn log(&self) -> &OutputLog {
        &self.log
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Interprets `raw`, appends its output, records it, and empties the
    /// input. Never fails: unknown text gets an invalid notice plus help.
    pub fn submit<R: Renderer + ?Sized>(&mut self, raw: &str, renderer: &R) -> Dispatch {
        let command = Command::parse(raw);
        let mut entries = std::mem::take(&mut self.log.entries);
        entries.push(Entry::echo(raw));

        match command {
            Command::About => entries.push(Entry::block(renderer.about(raw))),
            Command::Skills => entries.push(Entry::block(renderer.skills(raw))),
            Command::Projects => entries.push(Entry::block(renderer.projects(raw))),
            Command::Contact => entries.push(Entry::block(renderer.contact(raw))),
            Command::Help => entries.push(Entry::block(renderer.help(raw, true))),
            Command::Clear => entries.clear(),
            Command::LinkedIn | Command::GitHub => {}
            Command::Unknown => {
                entries.push(Entry::block(renderer.invalid(raw)));
                entries.push(Entry::block(renderer.help("Help", false)));
            }
        }
        self.log.replace(entries);

        let recorded = self.history.record(raw);
        self.input.clear();
        debug!(?command, recorded, log_len = self.log.len(), "dispatched");

        Dispatch { command, navigate: command.link() }
    }

    /// Arrow up. Returns the new input when the cursor moved.
    pub fn recall_previous(&mut self) -> Option<&str> {
        self.history.previous()?;
        Some(self.resolve_input())
    }

    /// Arrow down. Returns the new input when the cursor moved.
    pub fn recall_next(&mut self) -> Option<&str> {
        self.history.next()?;
        Some(self.resolve_input())
    }

    fn resolve_input(&mut self) -> &str {
        self.input = self.history.resolve().to_string();
        &self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{BlockKind, PortfolioRenderer};

    fn submit(s: &mut Session, raw: &str) -> Dispatch {
        s.set_input(raw);
        s.submit(raw, &PortfolioRenderer)
    }

    fn kinds(s: &Session) -> Vec<BlockKind> {
        s.log().visible().map(|b| b.kind).collect()
    }

    #[test]
    fn known_command_appends_echo_and_block() {
        let mut s = Session::new();
        let d = submit(&mut s, "about");
        assert_eq!(d, Dispatch { command: Command::About, navigate: None });
        assert_eq!(s.log().len(), 2);
        assert!(s.log().entries()[0].block_ref().is_none());
        assert_eq!(s.log().entries()[0].content, EntryContent::Echo("about".into()));
        assert_eq!(kinds(&s), vec![BlockKind::About]);
    }

    #[test]
    fn each_content_command_renders_its_block() {
        let mut s = Session::new();
        for raw in ["skills", "projects", "contact", "help"] {
            submit(&mut s, raw);
        }
        assert_eq!(
            kinds(&s),
            vec![
                BlockKind::Skills,
                BlockKind::Projects,
                BlockKind::Contact,
                BlockKind::Help { explicit: true }
            ]
        );
        assert_eq!(s.log().len(), 8);
    }

    #[test]
    fn uppercase_matches_lowercase() {
        let mut upper = Session::new();
        let mut lower = Session::new();
        let a = submit(&mut upper, "ABOUT");
        let b = submit(&mut lower, "about");
        assert_eq!(a.command, b.command);
        assert_eq!(kinds(&upper), kinds(&lower));
        assert_eq!(upper.history().all(), ["ABOUT"]);
    }

    #[test]
    fn unknown_command_adds_invalid_then_fallback_help() {
        let mut s = Session::new();
        let d = submit(&mut s, "sudo");
        assert_eq!(d, Dispatch { command: Command::Unknown, navigate: None });
        assert_eq!(s.log().len(), 3);
        assert_eq!(kinds(&s), vec![BlockKind::Invalid, BlockKind::Help { explicit: false }]);
        let help = s.log().visible().last().unwrap();
        assert_eq!(help.lines[0].text, "$ Help");
    }

    #[test]
    fn clear_empties_log() {
        let mut s = Session::new();
        submit(&mut s, "about");
        submit(&mut s, "nope");
        assert_eq!(submit(&mut s, "clear").command, Command::Clear);
        assert!(s.log().is_empty());
        assert_eq!(s.history().all(), ["about", "nope", "clear"]);
    }

    #[test]
    fn profile_links_request_navigation_without_visible_output() {
        let mut s = Session::new();
        assert_eq!(submit(&mut s, "github").navigate, Some(Link::GitHub));
        assert_eq!(submit(&mut s, "LinkedIn").navigate, Some(Link::LinkedIn));
        assert_eq!(s.log().len(), 2);
        assert_eq!(s.log().visible().count(), 0);
    }

    #[test]
    fn blank_submissions_echo_but_skip_history() {
        let mut s = Session::new();
        submit(&mut s, "");
        submit(&mut s, "   ");
        assert!(s.history().is_empty());
        assert_eq!(s.history().cursor(), 0);
        // blank lines are not keywords, so they still get invalid + help
        assert_eq!(s.log().len(), 6);
    }

    #[test]
    fn submit_records_verbatim_and_resets_input() {
        let mut s = Session::new();
        submit(&mut s, "  about  ");
        assert_eq!(s.history().all(), ["  about  "]);
        assert_eq!(s.history().cursor(), 1);
        assert_eq!(s.input(), "");
        assert_eq!(kinds(&s), vec![BlockKind::Invalid, BlockKind::Help { explicit: false }]);
    }

    #[test]
    fn recall_walks_history_and_overwrites_input() {
        let mut s = Session::new();
        for raw in ["a", "b", "c"] {
            submit(&mut s, raw);
        }
        assert_eq!(s.recall_previous(), Some("c"));
        assert_eq!(s.recall_previous(), Some("b"));
        assert_eq!(s.recall_previous(), Some("a"));
        assert_eq!(s.recall_previous(), None);
        assert_eq!(s.history().cursor(), 0);
        assert_eq!(s.input(), "a");
        assert_eq!(s.recall_next(), Some("b"));
        assert_eq!(s.recall_next(), Some("c"));
        assert_eq!(s.recall_next(), Some(""));
        assert_eq!(s.recall_next(), None);
        assert_eq!(s.history().cursor(), 3);
        assert_eq!(s.input(), "");
    }

    #[test]
    fn recall_without_cursor_move_keeps_typed_input() {
        let mut s = Session::new();
        submit(&mut s, "a");
        s.recall_previous();
        s.set_input("a-edited");
        assert_eq!(s.recall_previous(), None);
        assert_eq!(s.input(), "a-edited");
    }

    #[test]
    fn recall_on_empty_history_is_noop() {
        let mut s = Session::new();
        s.set_input("typed");
        assert_eq!(s.recall_previous(), None);
        assert_eq!(s.recall_next(), None);
        assert_eq!(s.input(), "typed");
        assert_eq!(s.history().cursor(), 0);
    }

    #[test]
    fn entry_ids_are_unique() {
        let mut s = Session::new();
        submit(&mut s, "help");
        submit(&mut s, "x");
        let ids: std::collections::HashSet<_> = s.log().entries().iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), s.log().len());
    }
}
