use std::ffi::OsString;

use super::{Command, CommandError, Context, Flow};
use crate::core::state::WorkingDir;

pub const HELP_TEXT: &str = "Kash - the Kinda Aimless Shell. \
The following commands are built in:
  cd       Change the working directory.
  exit     Exit the shell.
  help     Print this help text.
";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelpCommand;

impl Command for HelpCommand {
    fn execute<D: WorkingDir>(
        &self,
        _args: &[OsString],
        ctx: &mut Context<'_, D>,
    ) -> Result<Flow, CommandError> {
        ctx.out
            .write_all(HELP_TEXT.as_bytes())
            .and_then(|_| ctx.out.flush())
            .map_err(CommandError::Output)?;
        Ok(Flow::Continue)
    }
}
