use crate::process::ProcessError;

#[derive(Debug)]
pub enum ShellError {
    Readline(rustyline::error::ReadlineError),
    Io(std::io::Error),
    ProcessError(ProcessError),
}

impl From<rustyline::error::ReadlineError> for ShellError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        ShellError::Readline(err)
    }
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl From<ProcessError> for ShellError {
    fn from(err: ProcessError) -> Self {
        ShellError::ProcessError(err)
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Readline(e) => write!(f, "{}", e),
            ShellError::Io(e) => write!(f, "{}", os_message(e)),
            ShellError::ProcessError(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ShellError {}

/// Renders an I/O error the way `perror` would: the OS description without
/// the trailing ` (os error N)` that `io::Error`'s `Display` appends.
pub fn os_message(err: &std::io::Error) -> String {
    let text = err.to_string();
    match err.raw_os_error() {
        Some(code) => text
            .strip_suffix(&format!(" (os error {})", code))
            .map(str::to_owned)
            .unwrap_or(text),
        None => text,
    }
}
