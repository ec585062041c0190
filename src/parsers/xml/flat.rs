//! Flat `<schematic><component>` BOM dialect.
//!
//! Every child tag of a `<component>` becomes a column, e.g.
//! `<component><Reference>C1</Reference><Value>100nF</Value></component>`.

use super::dom::Element;
use crate::model::GenericTable;

pub(super) fn extract(root: &Element) -> Option<GenericTable> {
    let mut records = Vec::new();
    for component in root.children("component") {
        let record: Vec<(String, Option<String>)> = component
            .child_elements()
            .iter()
            .filter_map(|child| {
                child
                    .text_or_none()
                    .map(|text| (child.name().to_string(), Some(text.to_string())))
            })
            .collect();
        if !record.is_empty() {
            records.push(record);
        }
    }

    (!records.is_empty()).then(|| GenericTable::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::super::dom;
    use super::*;

    #[test]
    fn test_extract_child_tags_as_columns() {
        let root = dom::parse(
            "<schematic>\
               <component><Reference>C1</Reference><Value>100nF</Value><Count>1</Count></component>\
               <component><Reference>R1</Reference><Value>10k</Value></component>\
             </schematic>",
        )
        .expect("root");

        let table = extract(&root).expect("table");
        assert_eq!(table.columns(), ["Reference", "Value", "Count"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[1][2], None);
    }

    #[test]
    fn test_no_components_is_no_result() {
        let root = dom::parse("<schematic><title>empty</title></schematic>").expect("root");
        assert!(extract(&root).is_none());
    }
}
