use std::env;
use std::io::IsTerminal;

pub const LOG_VAR: &str = "KASH_LOG";

/// Runtime settings. The shell takes no command-line flags, so everything
/// here comes from the environment it was started in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub log_filter: Option<String>,
    pub interactive: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::from_lookup(|key| env::var(key).ok());
        config.interactive = std::io::stdin().is_terminal();
        config
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup(LOG_VAR).filter(|f| !f.trim().is_empty());

        Config {
            log_filter,
            interactive: false,
        }
    }
}
