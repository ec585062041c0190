//! KiCad `<export>` BOM dialect.

use super::dom::Element;
use crate::model::GenericTable;

/// One row per `<comp ref=..>` under `<components>`.
///
/// Custom `<fields><field name="X">` entries become columns named `X`
/// verbatim; KiCad stores MPN/manufacturer data there and the names are
/// user-defined, so canonicalization happens later instead of hardcoding
/// them here.
pub(super) fn extract(root: &Element) -> Option<GenericTable> {
    let components = root.child("components")?;

    let mut records = Vec::new();
    for comp in components.children("comp") {
        let mut record: Vec<(String, Option<String>)> = vec![
            ("Reference".to_string(), comp.attr("ref").map(str::to_string)),
            ("Value".to_string(), child_text(comp, "value")),
            ("Footprint".to_string(), child_text(comp, "footprint")),
        ];

        // Older KiCad versions emit these as direct children.
        if let Some(manufacturer) = child_text(comp, "manufacturer") {
            record.push(("Manufacturer".to_string(), Some(manufacturer)));
        }
        if let Some(mpn) = child_text(comp, "mpn") {
            record.push(("MPN".to_string(), Some(mpn)));
        }

        if let Some(fields) = comp.child("fields") {
            for field in fields.children("field") {
                let name = field.attr("name").unwrap_or("").trim();
                if name.is_empty() {
                    continue;
                }
                if let Some(text) = field.text_or_none() {
                    record.push((name.to_string(), Some(text.to_string())));
                }
            }
        }

        records.push(record);
    }

    (!records.is_empty()).then(|| GenericTable::from_records(records))
}

fn child_text(element: &Element, name: &str) -> Option<String> {
    element
        .child(name)
        .and_then(Element::text_or_none)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::super::dom;
    use super::*;

    #[test]
    fn test_extract_components_with_custom_fields() {
        let root = dom::parse(
            r#"<export version="D">
                 <components>
                   <comp ref="R1">
                     <value>10k</value>
                     <footprint>R_0402</footprint>
                     <fields>
                       <field name="MPN">RC0402FR-0710KL</field>
                       <field name="Manufacturer">Yageo</field>
                     </fields>
                   </comp>
                   <comp ref="C1"><value>100nF</value></comp>
                 </components>
               </export>"#,
        )
        .expect("root");

        let table = extract(&root).expect("table");
        assert_eq!(table.row_count(), 2);
        assert_eq!(
            table.columns(),
            ["Reference", "Value", "Footprint", "MPN", "Manufacturer"]
        );
        assert_eq!(table.rows()[0][3].as_deref(), Some("RC0402FR-0710KL"));
        assert_eq!(table.rows()[1][0].as_deref(), Some("C1"));
        assert_eq!(table.rows()[1][3], None);
    }

    #[test]
    fn test_missing_components_element() {
        let root = dom::parse("<export version=\"D\"><design/></export>").expect("root");
        assert!(extract(&root).is_none());
    }

    #[test]
    fn test_zero_components_is_no_result() {
        let root = dom::parse("<export><components/></export>").expect("root");
        assert!(extract(&root).is_none());
    }
}
