//! Data model: the generic intermediate table and the canonical output
//! records every source format is normalized into.

mod record;
mod table;

pub use record::{CanonicalRecord, ResolvedComponent};
pub use table::GenericTable;
