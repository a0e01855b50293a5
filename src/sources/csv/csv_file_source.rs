use crate::core::Dataset;
use crate::error::EvalError;
use crate::sources::csv::parser::{is_blank, parse_header_line, parse_record};
use crate::sources::source::DataSource;

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::PathBuf;
use std::sync::Arc;

/// Comma-separated file with a header row of column names. One column holds
/// the label (the last one unless told otherwise); every other column must
/// be numeric.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
    label_column: Option<usize>,
}

impl CsvFileSource {
    pub fn new(path: PathBuf, label_column: Option<usize>) -> Self {
        Self { path, label_column }
    }

    fn relation_name(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unnamed_relation".to_string())
    }
}

impl DataSource for CsvFileSource {
    fn load(&self) -> Result<Dataset, EvalError> {
        let reader = BufReader::new(File::open(&self.path)?);
        let mut lines = reader.lines().enumerate();

        let (header, label_idx) = loop {
            let Some((i, line)) = lines.next() else {
                return Err(EvalError::Io(std::io::Error::new(
                    ErrorKind::UnexpectedEof,
                    format!("{} has no header row", self.path.display()),
                )));
            };
            let line = line?;
            if is_blank(&line) {
                continue;
            }
            ftlog::debug!("header found on line {}", i + 1);
            break parse_header_line(&self.relation_name(), &line, self.label_column)?;
        };
        let width = header.number_of_features() + 1;

        let mut rows = Vec::new();
        let mut labels = Vec::new();
        for (i, line) in lines {
            let line = line?;
            if is_blank(&line) {
                continue;
            }
            let (values, label) = parse_record(&line, i + 1, width, label_idx)?;
            rows.push(values);
            labels.push(label);
        }

        let dataset = Dataset::new(Arc::new(header), rows, labels)?;
        ftlog::info!(
            "loaded {} rows with {} features from {}",
            dataset.len(),
            dataset.number_of_features(),
            self.path.display()
        );
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().expect("tempfile");
        f.write_all(contents.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn loads_header_rows_and_labels() {
        let csv = "\u{feff}Season,Age,Sitting,Output\n\
                   -0.33,0.69,0.88,N\n\
                   \n\
                   -0.33,0.94,0.31,O\n\
                   1,0.5,0.5,N\n";
        let tf = write_csv(csv);
        let ds = CsvFileSource::new(tf.path().to_path_buf(), None)
            .load()
            .expect("load");

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.number_of_features(), 3);
        assert_eq!(ds.header().feature_at_index(0), Some("Season"));
        assert_eq!(ds.header().label_name(), "Output");
        assert_eq!(ds.rows()[1], vec![-0.33, 0.94, 0.31]);
        assert_eq!(ds.labels(), &["N", "O", "N"]);
    }

    #[test]
    fn missing_file_is_io_not_found() {
        let err = CsvFileSource::new("no/such/file.csv".into(), None)
            .load()
            .unwrap_err();
        match err {
            EvalError::Io(e) => assert_eq!(e.kind(), ErrorKind::NotFound),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn empty_file_is_unexpected_eof() {
        let tf = write_csv("\n\n");
        let err = CsvFileSource::new(tf.path().to_path_buf(), None)
            .load()
            .unwrap_err();
        match err {
            EvalError::Io(e) => assert_eq!(e.kind(), ErrorKind::UnexpectedEof),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn header_only_is_invalid_input() {
        let tf = write_csv("a,b,label\n");
        let err = CsvFileSource::new(tf.path().to_path_buf(), None)
            .load()
            .unwrap_err();
        assert!(matches!(err, EvalError::InvalidInput(_)));
    }

    #[test]
    fn non_numeric_cell_is_fatal_and_names_the_line() {
        let tf = write_csv("a,b,label\n1,2,N\n3,oops,O\n");
        let err = CsvFileSource::new(tf.path().to_path_buf(), None)
            .load()
            .unwrap_err();
        match err {
            EvalError::Parse {
                line,
                column,
                value,
            } => {
                assert_eq!(line, 3);
                assert_eq!(column, 1);
                assert_eq!(value, "oops");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn explicit_label_column() {
        let tf = write_csv("class,x\nA,1\nB,2\n");
        let ds = CsvFileSource::new(tf.path().to_path_buf(), Some(0))
            .load()
            .unwrap();
        assert_eq!(ds.labels(), &["A", "B"]);
        assert_eq!(ds.rows(), &[vec![1.0], vec![2.0]]);
    }
}
