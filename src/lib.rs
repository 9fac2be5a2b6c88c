pub mod config;
pub mod error;
pub mod logging;
pub mod shell;

pub mod core;
pub mod input;
pub mod process;
