// config.rs

use thiserror::Error;

pub const PROMPT_VAR: &str = "PORTFOLIO_PROMPT";
pub const NO_BROWSER_VAR: &str = "PORTFOLIO_NO_BROWSER";
pub const LOG_VAR: &str = "PORTFOLIO_LOG";
pub const NO_COLOR_VAR: &str = "NO_COLOR";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: expected a boolean, got {value:?}")]
    InvalidBool { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub prompt: String,
    /// Hand links to the desktop instead of just printing them.
    pub open_links: bool,
    pub color: bool,
    /// `tracing` filter directive.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: "$ ".to_string(),
            open_links: true,
            color: true,
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(prompt) = lookup(PROMPT_VAR) {
            config.prompt = prompt;
        }
        if let Some(value) = lookup(NO_BROWSER_VAR) {
            config.open_links = !parse_bool(NO_BROWSER_VAR, &value)?;
        }
        if lookup(NO_COLOR_VAR).is_some_and(|v| !v.is_empty()) {
            config.color = false;
        }
        if let Some(filter) = lookup(LOG_VAR).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }
        Ok(config)
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool { var, value: value.to_string() }),
    }
}
