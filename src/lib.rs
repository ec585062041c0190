//! **Turn heterogeneous hardware BOM exports into canonical component records.**
//!
//! `hwbom-tools` parses bill-of-materials artifacts produced by unrelated
//! CAD/EDA tools - delimited text in several dialects, spreadsheet containers,
//! and four XML schema families - and projects them onto a single canonical
//! record shape. It also normalizes two free-text vocabularies (component
//! names and license strings) into stable canonical keys.
//!
//! There is no shared schema across these tools, no declared encoding, and
//! hundreds of observed column-name variants; the crate absorbs that
//! variance so downstream consumers only ever see one table shape.
//!
//! ## Key Features
//!
//! - **Multi-Format Parsing**: CSV/TSV/TXT (delimiter auto-detection,
//!   comment and preamble stripping), xlsx/xls/ods containers, and the
//!   KiCad, Eagle, flat-schematic, and SpreadsheetML XML dialects.
//! - **Encoding Tolerance**: UTF-16 LE/BE and UTF-8 byte-order marks are
//!   honored; everything else decodes as UTF-8 with replacement. Decoding
//!   never raises.
//! - **Column Canonicalization**: priority-ordered, case-insensitive
//!   candidate lists map arbitrary headers onto the 7 canonical fields.
//! - **False-Positive Filtering**: known non-BOM paths (vendored trees,
//!   test fixtures, CAD boilerplate) are rejected before any parsing cost.
//! - **Free-Text Normalizers**: deterministic pure functions for component
//!   names and license strings, usable independently of the parsers.
//!
//! Every call is stateless and performs no I/O; callers can parallelize
//! across threads or processes without coordination. All failure modes
//! collapse to a typed "no result" - one artifact's failure never aborts a
//! batch.
//!
//! ## Getting Started: Parsing a BOM
//!
//! ```
//! use hwbom_tools::parse_bom;
//!
//! let csv = b"Designator,Value,Qty,Manufacturer,MPN\nR1,10k,2,Yageo,RC0402\n";
//! let components = parse_bom(csv, "boards/main/bom.csv").expect("usable BOM");
//!
//! assert_eq!(components.len(), 1);
//! assert_eq!(components[0].record.reference.as_deref(), Some("R1"));
//! assert_eq!(components[0].record.part_number.as_deref(), Some("RC0402"));
//! assert_eq!(components[0].quantity, Some(2));
//! ```
//!
//! ## Normalizing Free Text
//!
//! The two normalizers are plain `&str -> String` functions:
//!
//! ```
//! use hwbom_tools::normalize;
//!
//! assert_eq!(normalize::component::normalize("220R"), "220ohm");
//! assert_eq!(normalize::component::normalize("10µF"), "10uf");
//! assert_eq!(normalize::license::normalize("MIT; Apache-2.0"), "Apache-2.0 + MIT");
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]

pub mod columns;
pub mod model;
pub mod normalize;
pub mod parsers;
pub mod pipeline;

mod error;

pub use columns::quantity::infer_quantity;
pub use model::{CanonicalRecord, GenericTable, ResolvedComponent};
pub use parsers::detection::is_supported_extension;
pub use pipeline::{parse_bom, BomParser, ParserConfig};
