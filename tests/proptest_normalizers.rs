//! Property-based tests for the free-text normalizers and quantity
//! inference.
//!
//! The normalizers are total functions over arbitrary text; these tests
//! pin that down (no panics, stable output shape) alongside the invariants
//! the pipeline depends on.

use hwbom_tools::normalize::{component, license};
use hwbom_tools::{infer_quantity, parse_bom};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn component_normalize_doesnt_panic(s in "\\PC{0,500}") {
        let _ = component::normalize(&s);
    }

    #[test]
    fn component_normalize_is_trimmed_and_lowercase(s in "\\PC{0,500}") {
        let out = component::normalize(&s);
        prop_assert_eq!(out.trim(), out.as_str());
        prop_assert!(!out.chars().any(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn component_normalize_deterministic(s in "\\PC{0,200}") {
        prop_assert_eq!(component::normalize(&s), component::normalize(&s));
    }

    // Idempotence over the value vocabulary the unit rules target.
    #[test]
    fn component_normalize_idempotent_on_values(
        s in "[0-9]{1,4}(\\.[0-9]{1,2})? ?(kohm|mohm|ohm|r|uf|nf|pf|uh|mh|nh|u|n|p)"
    ) {
        let once = component::normalize(&s);
        prop_assert_eq!(component::normalize(&once), once);
    }

    #[test]
    fn license_normalize_never_empty(s in "\\PC{0,500}") {
        let out = license::normalize(&s);
        prop_assert!(!out.is_empty());
        // Compound output is well-formed: non-empty trimmed parts.
        for part in out.split(" + ") {
            prop_assert!(!part.is_empty());
            prop_assert_eq!(part.trim(), part);
        }
    }

    #[test]
    fn license_normalize_deterministic(s in "\\PC{0,200}") {
        prop_assert_eq!(license::normalize(&s), license::normalize(&s));
    }

    // Without a parseable quantity cell the result is a positive count or
    // nothing - never zero.
    #[test]
    fn inferred_quantity_is_never_zero(reference in "\\PC{0,60}") {
        let qty = infer_quantity(Some(&reference), None);
        prop_assert!(qty.is_none() || qty.is_some_and(|q| q >= 1));
    }

    #[test]
    fn parse_bom_doesnt_panic_on_arbitrary_bytes(
        data in proptest::collection::vec(any::<u8>(), 0..2048),
        ext in "(csv|tsv|txt|xlsx|xls|ods|xml)",
    ) {
        let path = format!("fuzz/bom.{ext}");
        let _ = parse_bom(&data, &path);
    }

    #[test]
    fn parse_bom_csv_never_yields_empty_vec(s in "\\PC{0,1000}") {
        if let Some(components) = parse_bom(s.as_bytes(), "any/bom.csv") {
            prop_assert!(!components.is_empty());
        }
    }
}
