mod reader;

pub use reader::{EditorReader, LineReader, ReadOutcome, StreamReader};
