use std::fmt;

pub mod executor;
pub mod signal;
pub mod status;

pub use executor::{Launcher, ProcessLauncher};
pub use status::{wait_for, ChildStatus, Termination};

use crate::error::os_message;

#[derive(Debug)]
pub enum ProcessError {
    /// The program could not be started (not found, not executable, ...).
    Spawn(std::io::Error),
    Wait(std::io::Error),
    SignalError(String),
}

impl From<ctrlc::Error> for ProcessError {
    fn from(e: ctrlc::Error) -> Self {
        ProcessError::SignalError(e.to_string())
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Spawn(e) => write!(f, "{}", os_message(e)),
            ProcessError::Wait(e) => write!(f, "wait: {}", os_message(e)),
            ProcessError::SignalError(msg) => write!(f, "signal: {}", msg),
        }
    }
}

impl std::error::Error for ProcessError {}
