// screen.rs

use crate::render::{DisplayBlock, Line, Style};
use crate::session::OutputLog;
use std::io::{self, Write};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const RESET: &str = "\x1b[0m";
/// Cursor up one line, then erase that line.
const ERASE_PREVIOUS_LINE: &str = "\x1b[1A\x1b[2K";

fn ansi(style: Style) -> Option<&'static str> {
    match style {
        Style::Plain => None,
        Style::Prompt => Some("\x1b[1;32m"),
        Style::Heading => Some("\x1b[1;36m"),
        Style::Accent => Some("\x1b[33m"),
        Style::Error => Some("\x1b[31m"),
    }
}

/// Writes the welcome block and then the visible log entries, newest last so
/// the terminal keeps the latest output in view.
pub struct Screen<W: Write> {
    out: W,
    welcome: DisplayBlock,
    color: bool,
    /// The line editor echoed the accepted line onto `out`.
    interactive: bool,
    /// Number of log entries already on screen.
    drawn: usize,
}

impl<W: Write> Screen<W> {
    pub fn new(out: W, welcome: DisplayBlock, color: bool) -> Self {
        Self { out, welcome, color, interactive: false, drawn: 0 }
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn start(&mut self) -> io::Result<()> {
        self.drawn = 0;
        let welcome = self.welcome.clone();
        self.block(&welcome)?;
        self.flush()
    }

    /// Wipes the terminal and starts over from the welcome block.
    pub fn clear(&mut self) -> io::Result<()> {
        ignore_broken_pipe(self.out.write_all(CLEAR_SCREEN.as_bytes()))?;
        self.start()
    }

    /// Removes the line the editor left behind after Enter, so a submission
    /// shows only what its entries draw.
    pub fn erase_input(&mut self) -> io::Result<()> {
        if !self.interactive {
            return Ok(());
        }
        ignore_broken_pipe(self.out.write_all(ERASE_PREVIOUS_LINE.as_bytes()))?;
        self.flush()
    }

    /// Draws whatever was appended to `log` since the last call.
    pub fn sync(&mut self, log: &OutputLog) -> io::Result<()> {
        if log.len() < self.drawn {
            self.clear()?;
        }
        for entry in &log.entries()[self.drawn..] {
            if let Some(block) = entry.block_ref() {
                self.block(block)?;
            }
        }
        self.drawn = log.len();
        self.flush()
    }

    /// A one-off line outside the log, e.g. a link that could not be opened.
    pub fn notice(&mut self, text: &str) -> io::Result<()> {
        self.line(&Line { style: Style::Accent, text: text.to_string() })?;
        self.flush()
    }

    fn block(&mut self, block: &DisplayBlock) -> io::Result<()> {
        for line in &block.lines {
            self.line(line)?;
        }
        Ok(())
    }

    fn line(&mut self, line: &Line) -> io::Result<()> {
        let code = if self.color { ansi(line.style) } else { None };
        let result = match code {
            Some(code) => writeln!(self.out, "{}{}{}", code, line.text, RESET),
            None => writeln!(self.out, "{}", line.text),
        };
        ignore_broken_pipe(result)
    }

    fn flush(&mut self) -> io::Result<()> {
        ignore_broken_pipe(self.out.flush())
    }

    #[cfg(test)]
    pub(crate) fn output(&self) -> &W {
        &self.out
    }
}

fn ignore_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(ref e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
