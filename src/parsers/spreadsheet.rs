//! Spreadsheet-container loader (xlsx, legacy binary xls, ods).

use std::io::{Cursor, Read, Seek};

use calamine::{Data, Ods, Range, Reader, Xls, Xlsx};

use crate::error::ParseFailure;
use crate::model::GenericTable;
use crate::parsers::detection::SpreadsheetKind;

/// Load spreadsheet bytes into a table.
///
/// Only the first worksheet is read; its first row is the header. Cells are
/// stringified without type coercion. A malformed container is a typed
/// failure, never a panic.
pub(crate) fn load(data: &[u8], kind: SpreadsheetKind) -> Result<GenericTable, ParseFailure> {
    let cursor = Cursor::new(data);
    let range = match kind {
        SpreadsheetKind::Xlsx => first_worksheet(Xlsx::new(cursor)),
        SpreadsheetKind::Xls => first_worksheet(Xls::new(cursor)),
        SpreadsheetKind::Ods => first_worksheet(Ods::new(cursor)),
    }?;

    let mut rows = range.rows();
    let header = rows.next().ok_or(ParseFailure::EmptyResult)?;
    let columns: Vec<String> = header
        .iter()
        .map(|cell| cell_to_string(cell).unwrap_or_default())
        .collect();

    let data_rows: Vec<Vec<Option<String>>> =
        rows.map(|row| row.iter().map(cell_to_string).collect()).collect();

    Ok(GenericTable::from_rows(columns, data_rows))
}

fn first_worksheet<RS, R>(opened: Result<R, R::Error>) -> Result<Range<Data>, ParseFailure>
where
    RS: Read + Seek,
    R: Reader<RS>,
    R::Error: std::fmt::Display,
{
    let mut workbook =
        opened.map_err(|err| ParseFailure::DecodeFailed(err.to_string()))?;
    workbook
        .worksheet_range_at(0)
        .ok_or(ParseFailure::EmptyResult)?
        .map_err(|err| ParseFailure::DecodeFailed(err.to_string()))
}

/// Render a cell as its raw string form, `None` for empty or error cells.
///
/// Floats with a zero fraction render without the trailing `.0`, matching
/// how quantity columns appear when a sheet is read with a string schema.
fn cell_to_string(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.is_finite() && f.abs() < 1e15 {
                Some(format!("{}", *f as i64))
            } else {
                Some(f.to_string())
            }
        }
        Data::Bool(b) => Some(b.to_string()),
        Data::DateTime(dt) => Some(dt.as_f64().to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
    }
}
