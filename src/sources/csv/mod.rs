mod csv_file_source;
mod parser;

pub use csv_file_source::CsvFileSource;
