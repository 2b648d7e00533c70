//! XML data model

use indexmap::IndexMap;

/// XML document
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub root: Element,
}

/// XML element
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<Content>,
}

/// XML content node
#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    Element(Element),
    Text(String),
}

impl Element {
    /// First child element with the given name.
    ///
    /// Names are compared verbatim, prefix included; `child("q:quakeml")`
    /// and `child("quakeml")` look for different tags.
    pub fn child(&self, name: &str) -> Option<&Element> {
        // Not routed through `children_named`: that iterator ties its
        // item lifetime to the `name` borrow as well as `&self`.
        self.children.iter().find_map(|content| match content {
            Content::Element(element) if element.name == name => Some(element),
            _ => None,
        })
    }

    /// Child elements with the given name, in document order.
    pub fn children_named<'e>(&'e self, name: &'e str) -> impl Iterator<Item = &'e Element> {
        self.children.iter().filter_map(move |content| match content {
            Content::Element(element) if element.name == name => Some(element),
            _ => None,
        })
    }

    /// Text content of the first text child, if any.
    ///
    /// Whitespace-only text nodes are already dropped at parse time, so
    /// this is the element's significant character data.
    pub fn text(&self) -> Option<&str> {
        self.children.iter().find_map(|content| match content {
            Content::Text(text) => Some(text.as_str()),
            _ => None,
        })
    }
}
