//! Minimal owned element tree over quick-xml events.
//!
//! The BOM dialects are small documents read once and discarded, so a plain
//! owned tree with namespace-stripped names is enough. Parsing is strict -
//! any reader error propagates so the router can run its one-shot UTF-16
//! retry.

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::QName;
use quick_xml::Reader;
use thiserror::Error;

/// Why a document failed to produce an element tree.
#[derive(Error, Debug)]
pub(crate) enum DomError {
    #[error("malformed xml: {0}")]
    Malformed(String),

    #[error("document has no root element")]
    NoRoot,
}

/// One XML element: local name, attributes (local names), concatenated
/// text, and child elements in document order.
#[derive(Debug, Clone)]
pub(crate) struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    /// The element's local name, namespace prefix stripped.
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// Attribute value by local name.
    pub(crate) fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First direct child with the given local name.
    pub(crate) fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Direct children with the given local name, in document order.
    pub(crate) fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// All direct child elements.
    pub(crate) fn child_elements(&self) -> &[Element] {
        &self.children
    }

    /// Descendants (excluding self) with the given local name, in document
    /// order.
    pub(crate) fn descendants(&self, name: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        let mut stack: Vec<&Element> = self.children.iter().rev().collect();
        while let Some(element) = stack.pop() {
            if element.name == name {
                found.push(element);
            }
            stack.extend(element.children.iter().rev());
        }
        found
    }

    /// Trimmed text content, `None` when empty or absent.
    pub(crate) fn text_or_none(&self) -> Option<&str> {
        let text = self.text.trim();
        (!text.is_empty()).then_some(text)
    }
}

/// Parse a document into its root element.
pub(crate) fn parse(text: &str) -> Result<Element, DomError> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Element> = Vec::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|err| DomError::Malformed(err.to_string()))?;
        match event {
            Event::Start(start) => stack.push(element_from_tag(&start)),
            Event::Empty(start) => {
                let element = element_from_tag(&start);
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => return Ok(element),
                }
            }
            Event::Text(content) => {
                if let Some(current) = stack.last_mut() {
                    let unescaped = content
                        .unescape()
                        .map_err(|err| DomError::Malformed(err.to_string()))?;
                    current.text.push_str(&unescaped);
                }
            }
            Event::CData(content) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&content));
                }
            }
            Event::End(_) => {
                let element = stack.pop().ok_or(DomError::NoRoot)?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => return Ok(element),
                }
            }
            Event::Eof => return Err(DomError::NoRoot),
            _ => {}
        }
    }
}

fn element_from_tag(start: &BytesStart) -> Element {
    let attributes = start
        .attributes()
        .filter_map(Result::ok)
        .filter_map(|attr| {
            let key = local_name(attr.key);
            let value = attr.unescape_value().ok()?.into_owned();
            Some((key, value))
        })
        .collect();

    Element {
        name: local_name(start.name()),
        attributes,
        text: String::new(),
        children: Vec::new(),
    }
}

fn local_name(name: QName) -> String {
    String::from_utf8_lossy(name.local_name().as_ref()).into_owned()
}
