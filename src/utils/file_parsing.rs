const UTF8_BOM: char = '\u{feff}';

/// Splits a delimited line on `delimiter`, ignoring delimiters inside
/// single or double quotes. Quotes are kept in the returned tokens.
pub fn split_delimited_preserving_quotes(line: &str, delimiter: char) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => {
                quote = None;
                current.push(c);
            }
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                current.push(c);
            }
            None if c == delimiter => tokens.push(std::mem::take(&mut current)),
            None => current.push(c),
        }
    }
    tokens.push(current);
    tokens
}

pub fn split_csv_preserving_quotes(line: &str) -> Vec<String> {
    split_delimited_preserving_quotes(line, ',')
}

pub fn strip_surrounding_quotes(s: &str) -> &str {
    let s = s.trim();
    for q in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(q) && s.ends_with(q) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Spreadsheet exports often prefix the first line with a byte-order mark.
pub fn strip_bom(s: &str) -> &str {
    s.strip_prefix(UTF8_BOM).unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_plain_fields() {
        assert_eq!(split_csv_preserving_quotes("a,b,,c"), vec!["a", "b", "", "c"]);
    }

    #[test]
    fn keeps_commas_inside_quotes() {
        assert_eq!(
            split_csv_preserving_quotes("\"x,y\",2,'p,q'"),
            vec!["\"x,y\"", "2", "'p,q'"]
        );
    }

    #[test]
    fn strips_matching_quotes_only() {
        assert_eq!(strip_surrounding_quotes(" \"N\" "), "N");
        assert_eq!(strip_surrounding_quotes("'O'"), "O");
        assert_eq!(strip_surrounding_quotes("\"O'"), "\"O'");
        assert_eq!(strip_surrounding_quotes("\""), "\"");
    }

    #[test]
    fn strips_leading_bom() {
        assert_eq!(strip_bom("\u{feff}Season,Age"), "Season,Age");
        assert_eq!(strip_bom("Season"), "Season");
    }
}
