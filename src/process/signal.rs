use crate::process::ProcessError;

/// Keeps SIGINT from killing the shell itself. The terminal still delivers it
/// to the foreground child, which has default dispositions after exec, so
/// Ctrl-C ends the running program and the wait reports it as signaled.
pub fn setup_signal_handlers() -> Result<(), ProcessError> {
    ctrlc::set_handler(|| tracing::debug!("interrupt received"))?;
    Ok(())
}
