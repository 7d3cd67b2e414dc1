mod reader;
mod types;
mod writer;

pub use reader::read_log;
pub use types::*;
pub use writer::{write_log, LogError};
