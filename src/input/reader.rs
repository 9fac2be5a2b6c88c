use std::ffi::OsString;
use std::io::{BufRead, Write};
use std::os::unix::ffi::OsStringExt;

use rustyline::config::Configurer;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::ShellError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// One line of input, trailing newline removed. May be empty. The bytes
    /// are kept as read; they need not be UTF-8.
    Line(OsString),
    EndOfInput,
}

/// Source of command lines. Shows `prompt` before each read.
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError>;
}

impl<T: LineReader + ?Sized> LineReader for Box<T> {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError> {
        (**self).read_line(prompt)
    }
}

/// Reads from any buffered stream, writing the prompt to `out` first.
/// Used whenever stdin is not a terminal.
pub struct StreamReader<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> StreamReader<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }
}

impl<R: BufRead, W: Write> LineReader for StreamReader<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError> {
        self.out.write_all(prompt.as_bytes())?;
        self.out.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(ReadOutcome::EndOfInput);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }

        let line = OsString::from_vec(buf);
        tracing::trace!(?line, "read line");
        Ok(ReadOutcome::Line(line))
    }
}

/// Line editor for interactive terminals. History lives in memory only.
pub struct EditorReader {
    editor: DefaultEditor,
}

impl EditorReader {
    pub fn new() -> Result<Self, ShellError> {
        let mut editor = DefaultEditor::new()?;
        editor.set_auto_add_history(true);
        Ok(Self { editor })
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                tracing::trace!(line = %line, "read line");
                Ok(ReadOutcome::Line(line.into()))
            }
            // Ctrl-C drops whatever was typed and re-prompts.
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Line(OsString::new())),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::EndOfInput),
            Err(e) => Err(e.into()),
        }
    }
}
