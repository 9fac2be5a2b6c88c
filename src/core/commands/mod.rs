use std::ffi::OsString;
use std::io::Write;
use std::os::unix::ffi::OsStrExt;

mod cd;
mod exit;
mod help;

pub use cd::CdCommand;
pub use exit::ExitCommand;
pub use help::{HelpCommand, HELP_TEXT};

use crate::core::state::{ShellState, WorkingDir};
use crate::error::os_message;
use crate::process::{Launcher, ProcessError};

/// Builtin names in lookup order.
pub const BUILTINS: [&str; 3] = ["help", "exit", "cd"];

#[derive(Debug)]
pub enum CommandError {
    MissingArgument(&'static str),
    ChangeDir(std::io::Error),
    Output(std::io::Error),
    Launch(ProcessError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::MissingArgument(cmd) => write!(f, "{}: missing argument", cmd),
            CommandError::ChangeDir(err) => write!(f, "cd: {}", os_message(err)),
            CommandError::Output(err) => write!(f, "{}", os_message(err)),
            CommandError::Launch(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::Launch(err)
    }
}

/// What the loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit(i32),
}

/// Everything a command may touch while it runs.
pub struct Context<'a, D> {
    pub state: &'a mut ShellState<D>,
    pub launcher: &'a mut dyn Launcher,
    pub out: &'a mut dyn Write,
}

pub trait Command {
    fn execute<D: WorkingDir>(
        &self,
        args: &[OsString],
        ctx: &mut Context<'_, D>,
    ) -> Result<Flow, CommandError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandKind {
    Help(HelpCommand),
    Exit(ExitCommand),
    Cd(CdCommand),
    External(OsString),
}

impl CommandKind {
    /// Picks the command for an argument vector by exact match on its first
    /// token. Anything that is not a builtin is an external program.
    pub fn classify(args: &[OsString]) -> Option<CommandKind> {
        let name = args.first()?;
        let kind = match name.as_bytes() {
            b"help" => CommandKind::Help(HelpCommand),
            b"exit" => CommandKind::Exit(ExitCommand),
            b"cd" => CommandKind::Cd(CdCommand),
            _ => CommandKind::External(name.clone()),
        };
        Some(kind)
    }

    pub fn is_builtin(&self) -> bool {
        !matches!(self, CommandKind::External(_))
    }
}

impl Command for CommandKind {
    fn execute<D: WorkingDir>(
        &self,
        args: &[OsString],
        ctx: &mut Context<'_, D>,
    ) -> Result<Flow, CommandError> {
        match self {
            CommandKind::Help(cmd) => cmd.execute(args, ctx),
            CommandKind::Exit(cmd) => cmd.execute(args, ctx),
            CommandKind::Cd(cmd) => cmd.execute(args, ctx),
            CommandKind::External(_) => {
                // The exit status is observed for the wait only.
                ctx.launcher.launch(args)?;
                Ok(Flow::Continue)
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::process::Termination;

    /// Records launches instead of spawning anything.
    #[derive(Default)]
    pub struct RecordingLauncher {
        pub launched: Vec<Vec<OsString>>,
        pub fail_with: Option<i32>,
    }

    impl Launcher for RecordingLauncher {
        fn launch(&mut self, args: &[OsString]) -> Result<Termination, ProcessError> {
            self.launched.push(args.to_vec());
            match self.fail_with {
                Some(code) => Err(ProcessError::Spawn(std::io::Error::from_raw_os_error(code))),
                None => Ok(Termination::Exited(0)),
            }
        }
    }

    pub fn argv(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }
}
