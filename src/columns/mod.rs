//! Column canonicalization: projecting arbitrary table headers onto the
//! canonical field set.
//!
//! Seven priority-ordered candidate lists cover the header variants
//! observed across EDA tools; matching is case-insensitive with header
//! whitespace trimmed. For each canonical field the first candidate that
//! exists as a header and holds a non-empty value in the current row wins -
//! a purely deterministic first-match projection, no multi-column
//! concatenation.

pub mod quantity;

pub(crate) mod candidates;

use indexmap::IndexMap;

use crate::model::{CanonicalRecord, GenericTable};

/// Project every table row onto [`CanonicalRecord`], dropping rows without
/// component signal.
///
/// A row survives only if at least one field other than the footprint is
/// present; footprint columns also appear in file manifests and library
/// listings, so a footprint alone is not evidence of a component line.
pub(crate) fn canonicalize(table: &GenericTable) -> Vec<CanonicalRecord> {
    let headers = fold_headers(table.columns());

    table
        .rows()
        .iter()
        .filter_map(|row| {
            let record = CanonicalRecord {
                reference: pick(&headers, row, candidates::REFERENCE_COLS),
                component_name: pick(&headers, row, candidates::NAME_COLS),
                quantity_raw: pick(&headers, row, candidates::QTY_COLS),
                manufacturer: pick(&headers, row, candidates::MFR_COLS),
                part_number: pick(&headers, row, candidates::MPN_COLS),
                unit_cost_raw: pick(&headers, row, candidates::COST_COLS),
                footprint: pick(&headers, row, candidates::FOOTPRINT_COLS),
            };
            record.has_component_signal().then_some(record)
        })
        .collect()
}

/// Map trimmed, lowercased header names to column positions.
///
/// When two headers collide after folding, the later column wins.
fn fold_headers(columns: &[String]) -> IndexMap<String, usize> {
    let mut index = IndexMap::new();
    for (position, name) in columns.iter().enumerate() {
        index.insert(name.trim().to_lowercase(), position);
    }
    index
}

fn pick(
    headers: &IndexMap<String, usize>,
    row: &[Option<String>],
    candidate_names: &[&str],
) -> Option<String> {
    for candidate in candidate_names {
        let Some(&position) = headers.get(*candidate) else {
            continue;
        };
        if let Some(value) = row.get(position).and_then(Option::as_ref) {
            if !value.is_empty() {
                return Some(value.clone());
            }
        }
    }
    None
}
