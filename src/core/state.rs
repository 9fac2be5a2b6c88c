use std::env;
use std::io;
use std::path::{Path, PathBuf};

/// Access to the process-wide working directory.
pub trait WorkingDir {
    fn current(&self) -> io::Result<PathBuf>;
    fn change(&mut self, path: &Path) -> io::Result<()>;
}

/// The real working directory of this process, inherited by every child.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessDir;

impl WorkingDir for ProcessDir {
    fn current(&self) -> io::Result<PathBuf> {
        env::current_dir()
    }

    fn change(&mut self, path: &Path) -> io::Result<()> {
        env::set_current_dir(path)
    }
}

/// State carried across loop iterations.
pub struct ShellState<D> {
    pub dir: D,
}

impl<D: WorkingDir> ShellState<D> {
    pub fn new(dir: D) -> Self {
        Self { dir }
    }
}
