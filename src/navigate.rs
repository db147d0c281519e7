// navigate.rs

use std::io;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Link {
    LinkedIn,
    GitHub,
}

impl Link {
    pub fn url(self) -> &'static str {
        match self {
            Link::LinkedIn => "https://www.linkedin.com/in/soubhik-singha-mahapatra-487964255/",
            Link::GitHub => "https://github.com/Soubhik-10",
        }
    }
}

#[derive(Debug, Error)]
pub enum NavigateError {
    #[error("{opener}: {source}")]
    Spawn {
        opener: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Something that can show a URL outside the terminal.
pub trait Navigator {
    fn open(&self, link: Link) -> Result<(), NavigateError>;
}

/// Hands URLs to the desktop's default handler. The opener is spawned and
/// left running; its exit status is never collected.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

impl BrowserNavigator {
    #[cfg(target_os = "macos")]
    fn opener(url: &str) -> (&'static str, Command) {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        ("open", cmd)
    }

    #[cfg(target_os = "windows")]
    fn opener(url: &str) -> (&'static str, Command) {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", url]);
        ("start", cmd)
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    fn opener(url: &str) -> (&'static str, Command) {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        ("xdg-open", cmd)
    }
}

/// Waits for the opener off the input thread so it does not linger as a
/// zombie once it exits.
fn reap(mut child: Child) -> JoinHandle<io::Result<ExitStatus>> {
    thread::spawn(move || {
        let status = child.wait();
        if let Ok(status) = &status {
            debug!(%status, "link opener exited");
        }
        status
    })
}

impl Navigator for BrowserNavigator {
    fn open(&self, link: Link) -> Result<(), NavigateError> {
        let (opener, mut cmd) = Self::opener(link.url());
        cmd.stdin(Stdio::null()).stdout(Stdio::null()).stderr(Stdio::null());
        match cmd.spawn() {
            Ok(child) => {
                debug!(pid = child.id(), url = link.url(), "opened link");
                reap(child);
                Ok(())
            }
            Err(source) => {
                warn!(url = link.url(), %source, "{opener} failed");
                Err(NavigateError::Spawn { opener, source })
            }
        }
    }
}
