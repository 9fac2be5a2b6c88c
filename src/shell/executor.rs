use std::ffi::{OsStr, OsString};
use std::io::Write;

use super::tokenizer::split_line;
use crate::core::commands::{Command, CommandKind, Context, Flow};
use crate::core::state::WorkingDir;
use crate::input::LineReader;
use crate::process::Launcher;

pub(crate) trait CommandHandler {
    /// Runs one input line. Returns the exit status if the shell should stop.
    fn execute_line(&mut self, line: &OsStr) -> Option<i32>;

    fn execute(&mut self, args: &[OsString]) -> Flow;
}

impl<R: LineReader, D: WorkingDir, L: Launcher> CommandHandler for super::Shell<R, D, L> {
    fn execute_line(&mut self, line: &OsStr) -> Option<i32> {
        let args = split_line(line);
        if args.is_empty() {
            return None;
        }

        match self.execute(&args) {
            Flow::Continue => None,
            Flow::Exit(code) => Some(code),
        }
    }

    fn execute(&mut self, args: &[OsString]) -> Flow {
        let Some(kind) = CommandKind::classify(args) else {
            return Flow::Continue;
        };
        tracing::debug!(?kind, "dispatch");

        let mut ctx = Context {
            state: &mut self.state,
            launcher: &mut self.launcher,
            out: &mut *self.out,
        };

        match kind.execute(args, &mut ctx) {
            Ok(flow) => flow,
            Err(e) => {
                // Command failures are reported and the loop carries on.
                if let Err(write_err) = writeln!(self.err, "kash: {}", e) {
                    tracing::warn!(error = %write_err, "could not report command error");
                }
                Flow::Continue
            }
        }
    }
}
