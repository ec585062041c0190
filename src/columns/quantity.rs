//! Quantity and unit-cost resolution from raw cell text.

/// Parse a quantity-like string to an integer, `None` on failure.
///
/// Tolerates surrounding whitespace, comma grouping, and internal spaces
/// ("1,000", "1 000"); decimals are truncated toward zero.
#[must_use]
pub fn parse_int_str(val: Option<&str>) -> Option<i64> {
    let cleaned = clean_numeric(val?, false)?;
    let value: f64 = cleaned.parse().ok()?;
    if !value.is_finite() || value < i64::MIN as f64 || value > i64::MAX as f64 {
        return None;
    }
    Some(value.trunc() as i64)
}

/// Parse a cost-like string to a float, `None` on failure.
///
/// Same cleanup as [`parse_int_str`] plus currency-symbol removal, since
/// unit-cost cells routinely carry `$` and thousands grouping.
#[must_use]
pub fn parse_float_str(val: Option<&str>) -> Option<f64> {
    let cleaned = clean_numeric(val?, true)?;
    cleaned.parse().ok()
}

fn clean_numeric(val: &str, strip_currency: bool) -> Option<String> {
    let mut cleaned = val.trim().replace([',', ' '], "");
    if strip_currency {
        cleaned = cleaned.replace('$', "");
    }
    (!cleaned.is_empty()).then_some(cleaned)
}

/// Infer component quantity from the raw quantity cell or the reference
/// designators.
///
/// The quantity cell wins when it parses. Otherwise a comma-separated
/// reference ("R1, R2, R3") counts its designators - the common convention
/// of one row covering multiple placements with no quantity column. A bare
/// non-empty reference defaults to 1. With no signal at all the result is
/// `None`, never zero: zero would wrongly assert "present but unused".
#[must_use]
pub fn infer_quantity(reference: Option<&str>, quantity_raw: Option<&str>) -> Option<i64> {
    if let Some(qty) = parse_int_str(quantity_raw) {
        return Some(qty);
    }
    let reference = reference?;
    if reference.contains(',') {
        let designators = reference
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .count();
        if designators > 0 {
            return Some(designators as i64);
        }
    }
    if !reference.trim().is_empty() {
        return Some(1);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_str() {
        assert_eq!(parse_int_str(Some("4")), Some(4));
        assert_eq!(parse_int_str(Some(" 12 ")), Some(12));
        assert_eq!(parse_int_str(Some("1,000")), Some(1000));
        assert_eq!(parse_int_str(Some("2.9")), Some(2));
        assert_eq!(parse_int_str(Some("-3.9")), Some(-3));
        assert_eq!(parse_int_str(Some("ten")), None);
        assert_eq!(parse_int_str(Some("")), None);
        assert_eq!(parse_int_str(Some("   ")), None);
        assert_eq!(parse_int_str(None), None);
    }

    #[test]
    fn test_parse_float_str() {
        assert_eq!(parse_float_str(Some("$1,234.50")), Some(1234.5));
        assert_eq!(parse_float_str(Some("0.07")), Some(0.07));
        assert_eq!(parse_float_str(Some("free")), None);
        assert_eq!(parse_float_str(Some("$")), None);
        assert_eq!(parse_float_str(None), None);
    }

    #[test]
    fn test_infer_quantity_prefers_parseable_cell() {
        assert_eq!(infer_quantity(Some("R1, R2"), Some("4")), Some(4));
        assert_eq!(infer_quantity(None, Some("2")), Some(2));
    }

    #[test]
    fn test_infer_quantity_counts_designators() {
        assert_eq!(infer_quantity(Some("R1, R2, R3"), None), Some(3));
        assert_eq!(infer_quantity(Some("R1,R2"), Some("many")), Some(2));
        assert_eq!(infer_quantity(Some("R1, , R3"), None), Some(2));
    }

    #[test]
    fn test_infer_quantity_defaults_and_null() {
        assert_eq!(infer_quantity(Some("R1"), None), Some(1));
        assert_eq!(infer_quantity(Some("  "), None), None);
        assert_eq!(infer_quantity(None, None), None);
        assert_eq!(infer_quantity(None, Some("n/a")), None);
    }
}
