//! Artifact classification and path-level false-positive filtering.
//!
//! Classification is decided once per artifact from the path extension
//! alone; the false-positive filter runs before any parsing cost is paid.
//! Ambiguity defaults to rejection: a wrongly accepted file corrupts every
//! downstream aggregate, a wrongly rejected one costs a single row source.

use std::path::Path;

/// Spreadsheet container variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadsheetKind {
    /// Office Open XML workbook.
    Xlsx,
    /// Legacy binary Excel workbook.
    Xls,
    /// OpenDocument spreadsheet.
    Ods,
}

/// How an artifact will be parsed, decided from its path extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFormat {
    /// Delimited text; `Some` forces the delimiter instead of detecting it
    /// (`.tsv` is always tab-separated).
    Delimited(Option<u8>),
    /// Spreadsheet container.
    Spreadsheet(SpreadsheetKind),
    /// One of the XML BOM dialects, routed later by root element.
    Xml,
}

impl ArtifactFormat {
    /// Classify a path by its (case-folded) extension.
    ///
    /// Returns `None` for unsupported extensions; no further work happens
    /// for those artifacts.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let extension = Path::new(path).extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "csv" | "txt" => Some(Self::Delimited(None)),
            "tsv" => Some(Self::Delimited(Some(b'\t'))),
            "xlsx" => Some(Self::Spreadsheet(SpreadsheetKind::Xlsx)),
            "xls" => Some(Self::Spreadsheet(SpreadsheetKind::Xls)),
            "ods" => Some(Self::Spreadsheet(SpreadsheetKind::Ods)),
            "xml" => Some(Self::Xml),
            _ => None,
        }
    }
}

/// Check whether a path carries one of the supported BOM extensions.
///
/// Cheap pre-filter for callers walking large file listings.
#[must_use]
pub fn is_supported_extension(path: &str) -> bool {
    ArtifactFormat::from_path(path).is_some()
}

/// Path substrings marking known non-BOM files: vendored dependency trees,
/// test fixtures, and CAD-tool boilerplate templates.
///
/// Empirically derived from observed corpora, not assumed complete -
/// callers can extend the list through
/// [`ParserConfig`](crate::pipeline::ParserConfig).
pub(crate) const FALSE_POSITIVE_PATTERNS: &[&str] = &[
    "node_modules/",
    "/vendor/",
    "/test/fixtures/",
    "Design Data/GOST/",
    ".github/",
];

/// Whether a path matches a built-in or caller-supplied non-BOM pattern.
pub(crate) fn is_false_positive(path: &str, extra_patterns: &[String]) -> bool {
    FALSE_POSITIVE_PATTERNS
        .iter()
        .any(|pattern| path.contains(pattern))
        || extra_patterns
            .iter()
            .any(|pattern| path.contains(pattern.as_str()))
}
