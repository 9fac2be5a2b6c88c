use std::ffi::OsString;

use super::{Command, CommandError, Context, Flow};
use crate::core::state::WorkingDir;

/// Ends the shell with status 0. Arguments are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute<D: WorkingDir>(
        &self,
        _args: &[OsString],
        _ctx: &mut Context<'_, D>,
    ) -> Result<Flow, CommandError> {
        tracing::debug!("exit requested");
        Ok(Flow::Exit(0))
    }
}
