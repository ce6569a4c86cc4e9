use super::normalizer::normalize_column;
use super::{DatasetError, DatasetRow};
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) const TEXT_COLUMN: &str = "text";
pub(crate) const LABEL_COLUMN: &str = "label";

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<DatasetRow>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(reader);

    let headers: csv::StringRecord = csv_reader
        .headers()?
        .iter()
        .map(normalize_column)
        .collect();

    for column in [TEXT_COLUMN, LABEL_COLUMN] {
        if !headers.iter().any(|header| header == column) {
            return Err(DatasetError::MissingColumn { column });
        }
    }

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(|position| position.line()).unwrap_or(0);
        let row: RawRow = record.deserialize(Some(&headers))?;

        rows.push(DatasetRow {
            line,
            text: row.text,
            label: row.label.unwrap_or_default(),
        });
    }

    Ok(rows)
}

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(default, deserialize_with = "empty_cell_as_none")]
    text: Option<String>,
    #[serde(default)]
    label: Option<String>,
}

/// Only a cell with no characters at all counts as missing; whitespace is text.
fn empty_cell_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_rows_and_ignores_extra_columns() {
        let rows = parse_rows(Cursor::new(
            "id,text,label,source\n1,Markets rally on record growth,Business,wire\n2,\"Lawsuit, filed\",Tech,wire\n",
        ))
        .expect("parse");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].text.as_deref(), Some("Markets rally on record growth"));
        assert_eq!(rows[0].label, "Business");
        assert_eq!(rows[0].line, 2);
        assert_eq!(rows[1].text.as_deref(), Some("Lawsuit, filed"));
        assert_eq!(rows[1].line, 3);
    }

    #[test]
    fn blank_and_short_rows_have_no_text() {
        let rows = parse_rows(Cursor::new("label,text\nWorld,\nSports\n")).expect("parse");
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.text.is_none()));
        assert_eq!(rows[1].label, "Sports");
    }

    #[test]
    fn cells_are_kept_as_read() {
        let rows = parse_rows(Cursor::new("text,label\n\"   \",World\nhello, World \n")).expect("parse");
        assert_eq!(rows[0].text.as_deref(), Some("   "));
        assert_eq!(rows[0].label, "World");
        assert_eq!(rows[1].text.as_deref(), Some("hello"));
        assert_eq!(rows[1].label, " World ");
    }

    #[test]
    fn missing_label_column_is_reported() {
        let error = parse_rows(Cursor::new("text,category\nhello,World\n"))
            .expect_err("label column required");
        assert!(matches!(error, DatasetError::MissingColumn { column: "label" }));
    }

    #[test]
    fn headers_are_normalized() {
        let rows = parse_rows(Cursor::new("\u{feff}Text , LABEL\nhello,World\n")).expect("parse");
        assert_eq!(rows[0].label, "World");
    }

    #[test]
    fn empty_input_is_missing_text_column() {
        let error = parse_rows(Cursor::new("")).expect_err("empty file rejected");
        assert!(matches!(error, DatasetError::MissingColumn { column: "text" }));
    }
}
