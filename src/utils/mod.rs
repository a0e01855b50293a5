pub mod ansi;
pub mod file_parsing;
pub mod logging;
