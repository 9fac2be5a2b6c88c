use std::ffi::OsString;
use std::process::{Child, Command, Stdio};

use libc::pid_t;

use super::{wait_for, ProcessError, Termination};

/// Runs an external program to completion.
pub trait Launcher {
    fn launch(&mut self, args: &[OsString]) -> Result<Termination, ProcessError>;
}

/// Spawns real child processes. The program is looked up on `PATH` unless
/// its name contains a `/`. The child inherits the environment, working
/// directory and standard streams.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&mut self, args: &[OsString]) -> Result<Termination, ProcessError> {
        let Some((program, rest)) = args.split_first() else {
            return Err(ProcessError::Spawn(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "empty command",
            )));
        };

        let mut child = Command::new(program)
            .args(rest)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(ProcessError::Spawn)?;

        let pid = child.id() as pid_t;
        tracing::debug!(pid, ?args, "spawned");

        let termination = settle(&mut child, wait_for(pid))?;
        tracing::debug!(pid, ?termination, "child finished");
        Ok(termination)
    }
}

/// On success `wait_for` has already reaped the child and dropping it does
/// not wait again. If the wait failed, reap it here so no zombie is left.
fn settle(
    child: &mut Child,
    waited: Result<Termination, ProcessError>,
) -> Result<Termination, ProcessError> {
    if waited.is_err() {
        if let Err(e) = child.wait() {
            tracing::warn!(pid = child.id(), error = %e, "could not reap child");
        }
    }
    waited
}
