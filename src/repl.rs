// repl.rs

use crate::command::Command;
use crate::completion::KeywordCompleter;
use crate::config::Config;
use crate::navigate::{BrowserNavigator, Link, Navigator};
use crate::render::{PortfolioRenderer, Renderer};
use crate::screen::Screen;
use crate::session::Session;
use anyhow::{anyhow, Context as _};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{
    Cmd, CompletionType, ConditionalEventHandler, Editor, Event, EventContext, EventHandler, KeyCode,
    KeyEvent, Modifiers, Movement, RepeatCount,
};
use std::io::{self, IsTerminal, Write};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info};

type SharedSession = Arc<Mutex<Session>>;

fn lock(session: &SharedSession) -> anyhow::Result<MutexGuard<'_, Session>> {
    session.lock().map_err(|_| anyhow!("session state poisoned"))
}

#[derive(Clone, Copy, Debug)]
enum Direction {
    Previous,
    Next,
}

/// Arrow-key binding that walks the session history and swaps the edit line
/// for the recalled text.
struct Recall {
    session: SharedSession,
    direction: Direction,
}

/// Syncs the typed `line` into the session, moves the recall cursor, and
/// says how the edit line should change.
fn recall_cmd(session: &mut Session, line: &str, direction: Direction) -> Cmd {
    session.set_input(line);
    let recalled = match direction {
        Direction::Previous => session.recall_previous(),
        Direction::Next => session.recall_next(),
    }
    .map(str::to_string);
    debug!(?direction, cursor = session.history().cursor(), "recall");
    match recalled {
        Some(text) => Cmd::Replace(Movement::WholeLine, Some(text)),
        None => Cmd::Noop,
    }
}

impl ConditionalEventHandler for Recall {
    fn handle(&self, _evt: &Event, _n: RepeatCount, _positive: bool, ctx: &EventContext) -> Option<Cmd> {
        let mut session = self.session.lock().ok()?;
        Some(recall_cmd(&mut session, ctx.line(), self.direction))
    }
}

fn bind_recall(rl: &mut Editor<KeywordCompleter, DefaultHistory>, session: &SharedSession) {
    for (key, direction) in [(KeyCode::Up, Direction::Previous), (KeyCode::Down, Direction::Next)] {
        let handler = Recall { session: Arc::clone(session), direction };
        rl.bind_sequence(KeyEvent(key, Modifiers::NONE), EventHandler::Conditional(Box::new(handler)));
    }
}

fn follow_link<W: Write>(
    link: Link,
    config: &Config,
    navigator: &impl Navigator,
    screen: &mut Screen<W>,
) -> io::Result<()> {
    if !config.open_links {
        return screen.notice(link.url());
    }
    match navigator.open(link) {
        Ok(()) => Ok(()),
        Err(err) => screen.notice(&format!("could not open {}: {}", link.url(), err)),
    }
}

/// Runs one submitted line through the session and brings the screen and the
/// outside world up to date.
fn handle_line<W: Write>(
    line: &str,
    session: &SharedSession,
    config: &Config,
    renderer: &impl Renderer,
    navigator: &impl Navigator,
    screen: &mut Screen<W>,
) -> anyhow::Result<()> {
    let dispatch = {
        let mut session = lock(session)?;
        session.set_input(line);
        let dispatch = session.submit(line, renderer);
        screen.erase_input()?;
        if dispatch.command == Command::Clear {
            screen.clear()?;
        }
        screen.sync(session.log())?;
        dispatch
    };
    if let Some(link) = dispatch.navigate {
        follow_link(link, config, navigator, screen)?;
    }
    Ok(())
}

pub fn start_repl(config: &Config) -> anyhow::Result<()> {
    let editor_config = rustyline::Config::builder()
        .completion_type(CompletionType::List)
        .auto_add_history(false)
        .build();
    let mut rl: Editor<KeywordCompleter, DefaultHistory> =
        Editor::with_config(editor_config).context("failed to create line editor")?;
    rl.set_helper(Some(KeywordCompleter::new()));

    let session: SharedSession = Arc::new(Mutex::new(Session::new()));
    bind_recall(&mut rl, &session);

    let renderer = PortfolioRenderer;
    let navigator = BrowserNavigator;
    let stdout = io::stdout();
    let interactive = stdout.is_terminal();
    let mut screen = Screen::new(stdout, renderer.welcome(), config.color).interactive(interactive);
    screen.start()?;
    info!("session started");

    loop {
        match rl.readline(&config.prompt) {
            Ok(line) => handle_line(&line, &session, config, &renderer, &navigator, &mut screen)?,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("failed to read input"),
        }
    }

    info!(submitted = lock(&session)?.history().len(), "session ended");
    Ok(())
}
