//! XML BOM dialect router.
//!
//! Four structurally distinct schema families are supported; the root
//! element's local name decides which extractor runs, once per document.
//! Anything else is an unsupported dialect - a typed no-result, not an
//! error. A dialect that matches but yields zero rows is likewise a typed
//! no-result, distinct from a parse failure.

pub(crate) mod dom;

mod eagle;
mod flat;
mod kicad;
mod spreadsheetml;

use crate::error::ParseFailure;
use crate::model::GenericTable;

/// The recognized XML BOM schema families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum XmlDialect {
    /// KiCad `<export>` netlist/BOM output.
    KiCadExport,
    /// Flat `<schematic><component>` listing.
    FlatSchematic,
    /// Eagle schematic with `<parts><part>` entries.
    Eagle,
    /// XML Spreadsheet 2003 `<Workbook>` (Altium, Autodesk Inventor).
    SpreadsheetMl,
}

impl XmlDialect {
    fn from_root_name(name: &str) -> Option<Self> {
        match name {
            "export" => Some(Self::KiCadExport),
            "schematic" => Some(Self::FlatSchematic),
            "eagle" => Some(Self::Eagle),
            "Workbook" => Some(Self::SpreadsheetMl),
            _ => None,
        }
    }

    fn extract(self, root: &dom::Element) -> Option<GenericTable> {
        match self {
            Self::KiCadExport => kicad::extract(root),
            Self::FlatSchematic => flat::extract(root),
            Self::Eagle => eagle::extract(root),
            Self::SpreadsheetMl => spreadsheetml::extract(root),
        }
    }
}

/// Load XML bytes into a table via the dialect matching the root element.
pub(crate) fn load(data: &[u8]) -> Result<GenericTable, ParseFailure> {
    let root = parse_root(data)?;

    let Some(dialect) = XmlDialect::from_root_name(root.name()) else {
        tracing::debug!("Unrecognized XML root tag: {}", root.name());
        return Err(ParseFailure::UnsupportedFormat(format!(
            "XML root <{}>",
            root.name()
        )));
    };

    dialect.extract(&root).ok_or(ParseFailure::EmptyResult)
}

/// Parse bytes into a root element.
///
/// A strict UTF-8 parse failure triggers exactly one retry decoding the
/// bytes as UTF-16 (byte-order-mark selected endianness, little-endian
/// default) and reparsing; a second failure is permanent.
fn parse_root(data: &[u8]) -> Result<dom::Element, ParseFailure> {
    let strict = std::str::from_utf8(data)
        .ok()
        .and_then(|text| dom::parse(text).ok());
    if let Some(root) = strict {
        return Ok(root);
    }

    let (text, _, _) = encoding_rs::UTF_16LE.decode(data);
    dom::parse(&text).map_err(|err| {
        tracing::debug!("Failed to parse XML BOM: {err}");
        ParseFailure::DecodeFailed(err.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_root_is_unsupported() {
        let result = load(b"<project><file>a.txt</file></project>");
        assert!(matches!(result, Err(ParseFailure::UnsupportedFormat(_))));
    }

    #[test]
    fn test_unparseable_is_decode_failure() {
        let result = load(b"<export><comp ref=");
        assert!(matches!(result, Err(ParseFailure::DecodeFailed(_))));
    }

    #[test]
    fn test_utf16_retry() {
        let doc = "<export><components><comp ref=\"R1\"><value>10k</value></comp></components></export>";
        let mut bytes = vec![0xFF, 0xFE];
        for unit in doc.encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        let table = load(&bytes).expect("utf-16 document");
        assert_eq!(table.row_count(), 1);
    }
}
