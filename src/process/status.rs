use std::io;

use libc::{c_int, pid_t};

use super::ProcessError;

/// What `waitpid` reported about a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildStatus {
    Running,
    Stopped(i32),
    Exited(i32),
    Signaled(i32),
}

/// How a child finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Exited(i32),
    Signaled(i32),
}

impl ChildStatus {
    pub fn from_raw(raw: c_int) -> Self {
        if libc::WIFEXITED(raw) {
            ChildStatus::Exited(libc::WEXITSTATUS(raw))
        } else if libc::WIFSIGNALED(raw) {
            ChildStatus::Signaled(libc::WTERMSIG(raw))
        } else if libc::WIFSTOPPED(raw) {
            ChildStatus::Stopped(libc::WSTOPSIG(raw))
        } else {
            ChildStatus::Running
        }
    }

    /// Only exit and death by signal end a wait. A stopped child is still ours.
    pub fn termination(self) -> Option<Termination> {
        match self {
            ChildStatus::Exited(code) => Some(Termination::Exited(code)),
            ChildStatus::Signaled(sig) => Some(Termination::Signaled(sig)),
            ChildStatus::Running | ChildStatus::Stopped(_) => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.termination().is_some()
    }
}

/// Blocks until `pid` exits or is killed, reaping it.
pub fn wait_for(pid: pid_t) -> Result<Termination, ProcessError> {
    loop {
        let mut raw: c_int = 0;
        // SAFETY: `raw` is a valid out-pointer for the duration of the call.
        let rc = unsafe { libc::waitpid(pid, &mut raw, libc::WUNTRACED) };
        if rc == -1 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                continue;
            }
            return Err(ProcessError::Wait(err));
        }

        let status = ChildStatus::from_raw(raw);
        tracing::debug!(pid, ?status, "child status");
        if let Some(termination) = status.termination() {
            return Ok(termination);
        }
    }
}
