//! XML Spreadsheet 2003 (SpreadsheetML) BOM dialect.
//!
//! Emitted by Altium Designer and Autodesk Inventor:
//! `<Workbook><Worksheet><Table><Row><Cell><Data>`. The first table row is
//! the header; data rows zip against it positionally, so a short row leaves
//! its trailing columns absent.

use super::dom::Element;
use crate::model::GenericTable;

pub(super) fn extract(root: &Element) -> Option<GenericTable> {
    let table = root
        .descendants("Worksheet")
        .into_iter()
        .find_map(|worksheet| worksheet.child("Table"))?;

    let mut grid: Vec<Vec<String>> = Vec::new();
    for row in table.children("Row") {
        let cells: Vec<String> = row
            .children("Cell")
            .map(|cell| {
                cell.child("Data")
                    .and_then(Element::text_or_none)
                    .unwrap_or("")
                    .to_string()
            })
            .collect();
        if !cells.is_empty() {
            grid.push(cells);
        }
    }

    // Header plus at least one data row.
    if grid.len() < 2 {
        return None;
    }
    let headers = grid.remove(0);

    let mut records = Vec::new();
    for data_row in grid {
        let record: Vec<(String, Option<String>)> = data_row
            .into_iter()
            .enumerate()
            .filter_map(|(position, value)| {
                let header = headers.get(position)?;
                if header.is_empty() {
                    return None;
                }
                Some((header.clone(), (!value.is_empty()).then_some(value)))
            })
            .collect();
        if !record.is_empty() {
            records.push(record);
        }
    }

    (!records.is_empty()).then(|| GenericTable::from_records(records))
}
