use crate::core::{DatasetHeader, parse_feature_value};
use crate::error::EvalError;
use crate::utils::file_parsing::{split_csv_preserving_quotes, strip_bom, strip_surrounding_quotes};

pub(super) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Resolves the label column against the header width. `None` means the
/// last column.
pub(super) fn resolve_label_column(
    width: usize,
    label_column: Option<usize>,
) -> Result<usize, EvalError> {
    if width < 2 {
        return Err(EvalError::invalid_input(format!(
            "need at least one feature column and a label column, found {width} column(s)"
        )));
    }
    match label_column {
        None => Ok(width - 1),
        Some(idx) if idx < width => Ok(idx),
        Some(idx) => Err(EvalError::invalid_config(format!(
            "label column {idx} is out of range for {width} columns"
        ))),
    }
}

/// Parses the first line of the file into a header. Returns the header and
/// the resolved label column index.
pub(super) fn parse_header_line(
    relation_name: &str,
    line: &str,
    label_column: Option<usize>,
) -> Result<(DatasetHeader, usize), EvalError> {
    let names: Vec<String> = split_csv_preserving_quotes(strip_bom(line.trim_end()))
        .iter()
        .map(|t| strip_surrounding_quotes(t).to_string())
        .collect();

    let label_idx = resolve_label_column(names.len(), label_column)?;

    let mut feature_names = Vec::with_capacity(names.len() - 1);
    let mut label_name = String::new();
    for (i, name) in names.into_iter().enumerate() {
        if i == label_idx {
            label_name = name;
        } else {
            feature_names.push(name);
        }
    }

    Ok((
        DatasetHeader::new(relation_name.to_string(), feature_names, label_name),
        label_idx,
    ))
}

/// Parses one data line into its feature values and label.
/// `line_no` is the 1-based line number in the file, used in errors.
pub(super) fn parse_record(
    line: &str,
    line_no: usize,
    width: usize,
    label_idx: usize,
) -> Result<(Vec<f64>, String), EvalError> {
    let tokens = split_csv_preserving_quotes(line.trim_end());
    if tokens.len() != width {
        return Err(EvalError::invalid_input(format!(
            "line {line_no}: number of columns ({}) differs from header ({width})",
            tokens.len()
        )));
    }

    let mut values = Vec::with_capacity(width - 1);
    let mut label = String::new();
    for (idx, raw) in tokens.iter().enumerate() {
        if idx == label_idx {
            label = strip_surrounding_quotes(raw).to_string();
            continue;
        }
        values.push(parse_feature_value(strip_surrounding_quotes(raw), line_no, idx)?);
    }

    if label.is_empty() {
        return Err(EvalError::invalid_input(format!(
            "line {line_no}: empty label"
        )));
    }

    Ok((values, label))
}
