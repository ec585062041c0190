//! Canonical component records - the terminal output of a parse.

use serde::{Deserialize, Serialize};

/// One BOM line projected onto the canonical field set.
///
/// All fields are optional; the retention rule is that a record must carry
/// some signal beyond the footprint (see [`Self::has_component_signal`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    /// Reference designator(s), possibly comma-separated ("R1, R2, R3").
    pub reference: Option<String>,
    /// Component name or value as written in the source.
    pub component_name: Option<String>,
    /// Quantity cell verbatim; resolution happens separately.
    pub quantity_raw: Option<String>,
    /// Manufacturer or vendor name.
    pub manufacturer: Option<String>,
    /// Manufacturer or supplier part number.
    pub part_number: Option<String>,
    /// Unit cost cell verbatim (may carry currency symbols and grouping).
    pub unit_cost_raw: Option<String>,
    /// PCB land pattern (e.g. "0805", "SOIC-8").
    pub footprint: Option<String>,
}

impl CanonicalRecord {
    /// Whether the record carries any field other than the footprint.
    ///
    /// A footprint on its own is not evidence of a component line - file
    /// manifests and library listings also carry footprint columns - so
    /// rows failing this check are dropped.
    #[must_use]
    pub fn has_component_signal(&self) -> bool {
        self.reference.is_some()
            || self.component_name.is_some()
            || self.quantity_raw.is_some()
            || self.manufacturer.is_some()
            || self.part_number.is_some()
            || self.unit_cost_raw.is_some()
    }
}

/// A canonical record with its quantity and unit cost resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedComponent {
    /// The projected string fields.
    #[serde(flatten)]
    pub record: CanonicalRecord,
    /// Resolved integer quantity; `None` when indeterminate, never zero
    /// for a missing value.
    pub quantity: Option<i64>,
    /// Unit cost parsed from the raw cell.
    pub unit_cost: Option<f64>,
}
