pub mod csv;
pub mod source;

pub use csv::CsvFileSource;
pub use source::DataSource;
