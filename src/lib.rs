//! A terminal portfolio: type `about`, `skills`, `projects` and friends
//! instead of clicking around a web page.

pub mod command;
pub mod completion;
pub mod config;
pub mod history;
pub mod navigate;
pub mod render;
pub mod repl;
pub mod screen;
pub mod session;
