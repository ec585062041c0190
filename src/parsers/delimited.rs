//! Delimited-text loader (CSV/TSV/TXT).

use crate::error::ParseFailure;
use crate::model::GenericTable;
use crate::parsers::decode;

/// Load delimited-text bytes into a table.
///
/// The first record after comment/preamble cleanup is the header; every
/// cell is kept as a raw string. Ragged rows are tolerated - extra fields
/// are dropped and missing fields left absent.
pub(crate) fn load(data: &[u8], forced: Option<u8>) -> Result<GenericTable, ParseFailure> {
    let (block, delimiter) =
        decode::prepare_delimited(data, forced).ok_or(ParseFailure::EmptyResult)?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(block.as_bytes());

    let mut records = reader.records();
    let header = loop {
        match records.next() {
            Some(Ok(record)) => break record,
            Some(Err(err)) => {
                tracing::debug!("Skipping unreadable header record: {err}");
            }
            None => return Err(ParseFailure::EmptyResult),
        }
    };
    let columns: Vec<String> = header.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for result in records {
        match result {
            Ok(record) => {
                rows.push(record.iter().map(|cell| Some(cell.to_string())).collect());
            }
            Err(err) => tracing::debug!("Skipping unreadable record: {err}"),
        }
    }

    Ok(GenericTable::from_rows(columns, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_basic_csv() {
        let table = load(b"Ref,Value,Qty\nR1,10k,2\nC1,100nF,1\n", None).expect("table");
        assert_eq!(table.columns(), ["Ref", "Value", "Qty"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[0][0].as_deref(), Some("R1"));
    }

    #[test]
    fn test_load_semicolon_detected() {
        let table = load(b"Ref;Value\nR1;4.7k\n", None).expect("table");
        assert_eq!(table.columns(), ["Ref", "Value"]);
        assert_eq!(table.rows()[0][1].as_deref(), Some("4.7k"));
    }

    #[test]
    fn test_load_forced_tab() {
        let table = load(b"Ref\tValue\nR1\t10k\n", Some(b'\t')).expect("table");
        assert_eq!(table.columns(), ["Ref", "Value"]);
    }

    #[test]
    fn test_load_ragged_rows() {
        let table = load(b"Ref,Value,Qty\nR1,10k\nC1,100nF,1,extra\n", None).expect("table");
        assert_eq!(table.rows()[0], vec![Some("R1".into()), Some("10k".into()), None]);
        assert_eq!(table.rows()[1].len(), 3);
    }

    #[test]
    fn test_load_quoted_fields() {
        let table = load(b"Ref,Value\n\"R1, R2\",10k\n", None).expect("table");
        assert_eq!(table.rows()[0][0].as_deref(), Some("R1, R2"));
    }

    #[test]
    fn test_load_empty_input_is_no_result() {
        assert!(load(b"", None).is_err());
        assert!(load(b"# nothing but comments\n", None).is_err());
    }
}
