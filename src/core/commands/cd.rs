use std::ffi::OsString;
use std::path::Path;

use super::{Command, CommandError, Context, Flow};
use crate::core::state::WorkingDir;

/// `cd DIR`. Relative paths resolve against the current directory; tokens
/// after DIR are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CdCommand;

impl Command for CdCommand {
    fn execute<D: WorkingDir>(
        &self,
        args: &[OsString],
        ctx: &mut Context<'_, D>,
    ) -> Result<Flow, CommandError> {
        let target = args.get(1).ok_or(CommandError::MissingArgument("cd"))?;

        ctx.state
            .dir
            .change(Path::new(target))
            .map_err(CommandError::ChangeDir)?;
        tracing::debug!(dir = ?target, "changed directory");
        Ok(Flow::Continue)
    }
}
