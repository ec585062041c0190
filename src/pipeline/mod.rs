//! Parse orchestration: bytes + path hint in, resolved component records
//! out.
//!
//! The stages run in fixed order: false-positive path gate, extension
//! classification, decode/load into a generic table, column
//! canonicalization, then quantity and unit-cost resolution. Every failure
//! mode collapses to `None` at this boundary - callers only need "nothing
//! usable", not why - with the concrete reason logged at debug level. One
//! artifact's failure never affects the next; the parser holds no mutable
//! state.

use crate::columns;
use crate::columns::quantity::{infer_quantity, parse_float_str};
use crate::error::ParseFailure;
use crate::model::{GenericTable, ResolvedComponent};
use crate::parsers::detection::{self, ArtifactFormat};
use crate::parsers::{delimited, spreadsheet, xml};

/// Caller-side knobs for [`BomParser`].
///
/// This is versioned data rather than runtime behavior switches: the
/// built-in candidate tables and rule lists are not configurable.
#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    /// Force this delimiter for delimited text instead of auto-detecting
    /// (and instead of the `.tsv` tab default).
    pub forced_delimiter: Option<u8>,
    /// Additional path substrings to reject as non-BOM artifacts. The
    /// built-in patterns always apply; these extend them.
    pub false_positive_patterns: Vec<String>,
}

/// Stateless BOM artifact parser.
///
/// Holds only configuration; [`BomParser::parse`] is safe to call from any
/// number of threads concurrently.
#[derive(Debug, Clone, Default)]
pub struct BomParser {
    config: ParserConfig,
}

impl BomParser {
    /// Parser with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser with caller-supplied configuration.
    #[must_use]
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse one artifact into resolved component records.
    ///
    /// The path is used only for extension and pattern matching, never for
    /// I/O. Returns `None` for unsupported, unparseable, false-positive,
    /// or empty-after-validation input; `Some` is always non-empty.
    #[must_use]
    pub fn parse(&self, data: &[u8], path: &str) -> Option<Vec<ResolvedComponent>> {
        match self.parse_inner(data, path) {
            Ok(components) => Some(components),
            Err(failure) => {
                tracing::debug!("No BOM records from {path}: {failure}");
                None
            }
        }
    }

    fn parse_inner(
        &self,
        data: &[u8],
        path: &str,
    ) -> Result<Vec<ResolvedComponent>, ParseFailure> {
        if detection::is_false_positive(path, &self.config.false_positive_patterns) {
            return Err(ParseFailure::FalsePositivePath(path.to_string()));
        }

        let format = ArtifactFormat::from_path(path)
            .ok_or_else(|| ParseFailure::UnsupportedFormat(path.to_string()))?;

        let table: GenericTable = match format {
            ArtifactFormat::Delimited(extension_delimiter) => delimited::load(
                data,
                self.config.forced_delimiter.or(extension_delimiter),
            )?,
            ArtifactFormat::Spreadsheet(kind) => spreadsheet::load(data, kind)?,
            ArtifactFormat::Xml => xml::load(data)?,
        };
        if table.is_empty() {
            return Err(ParseFailure::EmptyResult);
        }

        let records = columns::canonicalize(&table);
        if records.is_empty() {
            return Err(ParseFailure::EmptyResult);
        }

        Ok(records
            .into_iter()
            .map(|record| ResolvedComponent {
                quantity: infer_quantity(
                    record.reference.as_deref(),
                    record.quantity_raw.as_deref(),
                ),
                unit_cost: parse_float_str(record.unit_cost_raw.as_deref()),
                record,
            })
            .collect())
    }
}

/// Parse one artifact with the default configuration.
///
/// Convenience wrapper over [`BomParser::parse`].
#[must_use]
pub fn parse_bom(data: &[u8], path: &str) -> Option<Vec<ResolvedComponent>> {
    BomParser::new().parse(data, path)
}
