//! Eagle schematic BOM dialect.
//!
//! Parts live at `drawing/schematic/parts/part` (the drawing wrapper is
//! optional in some exports, so the schematic element is located at any
//! depth). `name` maps to the reference, `value` to the component name and
//! `device` to the footprint; sibling `<attribute>` elements carry custom
//! data such as MPN and manufacturer.

use super::dom::Element;
use crate::model::GenericTable;

pub(super) fn extract(root: &Element) -> Option<GenericTable> {
    let parts: Vec<&Element> = root
        .descendants("schematic")
        .into_iter()
        .flat_map(|schematic| schematic.children("parts"))
        .flat_map(|parts| parts.children("part"))
        .collect();
    if parts.is_empty() {
        return None;
    }

    let mut records = Vec::new();
    for part in parts {
        // A part without a name has nothing to anchor a BOM line to.
        let Some(name) = part.attr("name").filter(|name| !name.is_empty()) else {
            continue;
        };

        let mut record: Vec<(String, Option<String>)> = vec![
            ("Reference".to_string(), Some(name.to_string())),
            ("Value".to_string(), non_empty(part.attr("value"))),
            ("Footprint".to_string(), non_empty(part.attr("device"))),
        ];

        for attribute in part.children("attribute") {
            let attr_name = attribute.attr("name").unwrap_or("").trim();
            let attr_value = attribute.attr("value").unwrap_or("").trim();
            if !attr_name.is_empty() && !attr_value.is_empty() {
                record.push((attr_name.to_string(), Some(attr_value.to_string())));
            }
        }

        records.push(record);
    }

    (!records.is_empty()).then(|| GenericTable::from_records(records))
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::super::dom;
    use super::*;

    #[test]
    fn test_extract_parts_under_drawing() {
        let root = dom::parse(
            r#"<eagle version="9.6">
                 <drawing>
                   <schematic>
                     <parts>
                       <part name="R1" value="10k" device="R0402">
                         <attribute name="MPN" value="RC0402FR-0710KL"/>
                       </part>
                       <part name="C1" value="100nF" device="C0402"/>
                       <part value="orphan"/>
                     </parts>
                   </schematic>
                 </drawing>
               </eagle>"#,
        )
        .expect("root");

        let table = extract(&root).expect("table");
        // The unnamed part is skipped.
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.columns(), ["Reference", "Value", "Footprint", "MPN"]);
        assert_eq!(table.rows()[0][3].as_deref(), Some("RC0402FR-0710KL"));
        assert_eq!(table.rows()[1][3], None);
    }

    #[test]
    fn test_empty_value_becomes_absent() {
        let root = dom::parse(
            "<eagle><schematic><parts><part name=\"J1\" value=\"\"/></parts></schematic></eagle>",
        )
        .expect("root");
        let table = extract(&root).expect("table");
        assert_eq!(table.rows()[0][1], None);
    }

    #[test]
    fn test_no_parts_is_no_result() {
        let root = dom::parse("<eagle><drawing><board/></drawing></eagle>").expect("root");
        assert!(extract(&root).is_none());
    }
}
