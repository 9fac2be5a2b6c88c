use std::io::{self, Write};

mod executor;
pub mod tokenizer;

use crate::{
    config::Config,
    core::state::{ProcessDir, ShellState, WorkingDir},
    error::ShellError,
    input::{EditorReader, LineReader, ReadOutcome, StreamReader},
    process::{Launcher, ProcessLauncher},
};

pub(crate) use executor::CommandHandler;

pub const PROMPT: &str = "> ";

/// Exit status when input runs out.
pub const END_OF_INPUT_STATUS: i32 = 1;

pub struct Shell<R, D, L> {
    pub(crate) reader: R,
    pub(crate) state: ShellState<D>,
    pub(crate) launcher: L,
    pub(crate) out: Box<dyn Write>,
    pub(crate) err: Box<dyn Write>,
}

impl Shell<Box<dyn LineReader>, ProcessDir, ProcessLauncher> {
    /// A shell on the real stdio, working directory and process table.
    pub fn new(config: &Config) -> Result<Self, ShellError> {
        let reader: Box<dyn LineReader> = if config.interactive {
            Box::new(EditorReader::new()?)
        } else {
            Box::new(StreamReader::new(io::stdin().lock(), io::stdout()))
        };

        Ok(Shell::with_parts(
            reader,
            ProcessDir,
            ProcessLauncher,
            Box::new(io::stdout()),
            Box::new(io::stderr()),
        ))
    }
}

impl<R: LineReader, D: WorkingDir, L: Launcher> Shell<R, D, L> {
    pub fn with_parts(
        reader: R,
        dir: D,
        launcher: L,
        out: Box<dyn Write>,
        err: Box<dyn Write>,
    ) -> Self {
        Shell {
            reader,
            state: ShellState::new(dir),
            launcher,
            out,
            err,
        }
    }

    /// Reads and runs commands until `exit` or end of input, returning the
    /// status the process should exit with.
    pub fn run(&mut self) -> Result<i32, ShellError> {
        loop {
            let line = match self.reader.read_line(PROMPT)? {
                ReadOutcome::Line(line) => line,
                ReadOutcome::EndOfInput => {
                    tracing::debug!("end of input");
                    return Ok(END_OF_INPUT_STATUS);
                }
            };

            if let Some(code) = self.execute_line(&line) {
                return Ok(code);
            }
        }
    }

    pub fn state(&self) -> &ShellState<D> {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::testing::{argv, RecordingLauncher};
    use crate::core::commands::HELP_TEXT;
    use crate::core::state::fake::FakeDir;
    use std::cell::RefCell;
    use std::io::Cursor;
    use std::path::PathBuf;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl SharedBuf {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.borrow()).into_owned()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    type TestShell = Shell<StreamReader<Cursor<Vec<u8>>, SharedBuf>, FakeDir, RecordingLauncher>;

    fn shell(input: &str, dir: FakeDir) -> (TestShell, SharedBuf, SharedBuf) {
        let out = SharedBuf::default();
        let err = SharedBuf::default();
        let reader = StreamReader::new(Cursor::new(input.as_bytes().to_vec()), out.clone());
        let shell = Shell::with_parts(
            reader,
            dir,
            RecordingLauncher::default(),
            Box::new(out.clone()),
            Box::new(err.clone()),
        );
        (shell, out, err)
    }

    #[test]
    fn test_help_cd_exit_session() -> Result<(), ShellError> {
        let (mut sh, out, err) = shell("help\ncd /tmp\nexit\nhelp\n", FakeDir::new("/", &["/tmp"]));

        assert_eq!(sh.run()?, 0);
        assert_eq!(out.text(), format!("> {}> > ", HELP_TEXT));
        assert_eq!(err.text(), "");
        assert_eq!(sh.state().dir.cwd, PathBuf::from("/tmp"));
        assert!(sh.launcher.launched.is_empty());
        Ok(())
    }

    #[test]
    fn test_end_of_input_exits_one() -> Result<(), ShellError> {
        let (mut sh, out, _) = shell("", FakeDir::new("/", &[]));
        assert_eq!(sh.run()?, 1);
        assert_eq!(out.text(), "> ");
        Ok(())
    }

    #[test]
    fn test_blank_lines_reprompt() -> Result<(), ShellError> {
        let (mut sh, out, err) = shell("\n   \n\t\n", FakeDir::new("/", &[]));
        assert_eq!(sh.run()?, 1);
        assert_eq!(out.text(), "> > > > ");
        assert_eq!(err.text(), "");
        assert!(sh.launcher.launched.is_empty());
        Ok(())
    }

    #[test]
    fn test_cd_errors_do_not_stop_the_loop() -> Result<(), ShellError> {
        let (mut sh, _, err) = shell("cd\ncd /nonexistent-path\ncd /tmp\n", FakeDir::new("/", &["/tmp"]));
        assert_eq!(sh.run()?, 1);
        assert_eq!(
            err.text(),
            "kash: cd: missing argument\nkash: cd: No such file or directory\n"
        );
        assert_eq!(sh.state().dir.cwd, PathBuf::from("/tmp"));
        Ok(())
    }

    #[test]
    fn test_external_commands_are_launched_in_order() -> Result<(), ShellError> {
        let (mut sh, _, _) = shell("ls -l\n  echo  a\tb \n", FakeDir::new("/", &[]));
        assert_eq!(sh.run()?, 1);
        assert_eq!(
            sh.launcher.launched,
            vec![argv(&["ls", "-l"]), argv(&["echo", "a", "b"])]
        );
        Ok(())
    }

    #[test]
    fn test_launch_failure_reported_and_loop_continues() -> Result<(), ShellError> {
        let (mut sh, out, err) = shell("nope\nhelp\n", FakeDir::new("/", &[]));
        sh.launcher.fail_with = Some(libc::ENOENT);

        assert_eq!(sh.run()?, 1);
        assert_eq!(err.text(), "kash: No such file or directory\n");
        assert!(out.text().contains(HELP_TEXT));
        Ok(())
    }
}
