//! Candidate header-name tables for column canonicalization.
//!
//! Collected from BOM exports of unrelated EDA and spreadsheet tools; all
//! entries are lowercase and matching is done against trimmed, lowercased
//! headers. Order matters: earlier names are preferred when several
//! candidates appear in the same table.

pub(crate) const REFERENCE_COLS: &[&str] = &[
    "designator",
    "reference",
    "ref",
    "refdes",
    "references",
    "designation",
    "part/designator",
    "ref name (refdes)",
    "refs",
    "reference(s)",
    "designators",
    "reference designator",
    "reference designators",
    "ref des",
    "parts",
    "line-note",
    "line note",
];

pub(crate) const NAME_COLS: &[&str] = &[
    "value",
    "description",
    "device",
    "name",
    "part",
    "comment",
    "component",
    "value5",
    "part description",
    "part name",
    "cmp name",
    "libpart",
    "libref",
    "comments",
    "descr",
    "designitemid",
    "parttype",
];

pub(crate) const QTY_COLS: &[&str] = &[
    "qty",
    "quantity",
    "qnty",
    "count",
    "qty:",
    "quantity per pcb",
    "num used",
    "build quantity",
    "order qty",
    "order qty.",
];

pub(crate) const MFR_COLS: &[&str] = &[
    "manufacturer",
    "mf",
    "vendor",
    "manufacturer 1",
    "manufacturer (avl)",
    "supplier",
    "manufacturer name",
    "manufacturers name",
    "mfr.",
    "mfg",
    "supplier name",
];

pub(crate) const MPN_COLS: &[&str] = &[
    "mpn",
    "manufacturer part",
    "partnumber",
    "manufacturer p/n",
    "partno",
    "part number",
    "part no",
    "manufacture part number",
    "manufacturer part number 1",
    "part no and description",
    "man. p/n",
    "sup. p/n",
    "manufacturer part number",
    "manufacturers part number",
    "manufacturer's part number",
    "mfr. no",
    "mfr. no.",
    "manf part #",
    "mfg part #",
    "digi-key part number",
    "digikey",
    "mouser part number",
    "mouser",
    "lcsc",
    "lcsc part #",
    "lcsc part number",
    "supplier pn",
    "supplier part number",
    "supplier p/n",
    "part no.",
    "p/n",
    "spn",
];

pub(crate) const COST_COLS: &[&str] = &[
    "cost",
    "price",
    "unit price $",
    "cost/pcs",
    "price/part",
    "cost (feb-16)",
    "price (ex. vat)",
    "unit price",
    "unit cost",
    "extended price",
    "total cost",
    "price each",
];

pub(crate) const FOOTPRINT_COLS: &[&str] = &[
    "footprint",
    "package",
    "pattern",
    "case/package",
    "case",
    "pcb footprint",
    "footprint lib",
];
