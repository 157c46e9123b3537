pub mod delimited;

pub use delimited::{InputError, REQUIRED_COLUMNS, read_timeline, read_timeline_file};
