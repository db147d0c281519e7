// completion.rs

use crate::command::Command;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// Tab-completes the command vocabulary.
#[derive(Debug, Default)]
pub struct KeywordCompleter;

impl KeywordCompleter {
    pub fn new() -> Self {
        Self
    }

    pub fn candidates(prefix: &str) -> Vec<&'static str> {
        let prefix = prefix.to_lowercase();
        let mut names: Vec<&'static str> = Command::KEYWORDS
            .iter()
            .map(|(name, _)| *name)
            .filter(|name| name.starts_with(&prefix))
            .collect();
        names.sort_unstable();
        names
    }
}

impl Completer for KeywordCompleter {
    type Candidate = Pair;
    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let completions = Self::candidates(&line[..pos])
            .into_iter()
            .map(|name| Pair { display: name.to_string(), replacement: name.to_string() })
            .collect();
        Ok((0, completions))
    }
}

impl Hinter for KeywordCompleter {
    type Hint = String;
    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for KeywordCompleter {}

impl Validator for KeywordCompleter {}

impl Helper for KeywordCompleter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completes_by_prefix() {
        assert_eq!(KeywordCompleter::candidates("c"), vec!["clear", "contact"]);
        assert_eq!(KeywordCompleter::candidates("pro"), vec!["projects"]);
        assert_eq!(KeywordCompleter::candidates("x"), Vec::<&str>::new());
    }

    #[test]
    fn prefix_is_case_insensitive() {
        assert_eq!(KeywordCompleter::candidates("GI"), vec!["github"]);
    }

    #[test]
    fn empty_prefix_lists_everything() {
        assert_eq!(KeywordCompleter::candidates("").len(), Command::KEYWORDS.len());
    }
}
