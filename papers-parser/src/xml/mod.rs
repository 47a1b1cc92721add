//! Minimal XML element tree for E-utilities responses
//!
//! ESearch and ESummary documents are small and loosely structured (ESummary
//! nests `<Item Name="..">` elements of arbitrary depth), so they are read into
//! a generic owned tree and queried by tag and `Name` attribute instead of being
//! mapped onto fixed serde types.

mod reader_utils;

use quick_xml::events::{BytesStart, Event};
use tracing::{instrument, trace};

use crate::error::{ParseError, Result};
use reader_utils::{decode_name, make_reader, unescape_text};

/// A single XML element with its attributes, text and child elements
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    tag: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<XmlNode>,
}

impl XmlNode {
    /// Parse an XML document and return its root element
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::XmlError`] for malformed markup (including mismatched
    /// end tags), [`ParseError::UnclosedElement`] when the input ends inside an
    /// element and [`ParseError::MissingRoot`] when there is no element at all.
    ///
    /// # Example
    ///
    /// ```
    /// use papers_parser::XmlNode;
    ///
    /// let root = XmlNode::parse("<eSearchResult><Count>2</Count></eSearchResult>")?;
    /// assert_eq!(root.tag(), "eSearchResult");
    /// assert_eq!(root.child("Count").map(|c| c.text()), Some("2"));
    /// # Ok::<(), papers_parser::ParseError>(())
    /// ```
    #[instrument(skip(xml), fields(xml_size = xml.len()))]
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = make_reader(xml);
        let mut buf = Vec::new();
        let mut stack: Vec<XmlNode> = Vec::new();
        let mut root = None;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => stack.push(Self::from_start(e)?),
                Ok(Event::Text(ref e)) => {
                    if let Some(node) = stack.last_mut() {
                        node.text.push_str(&unescape_text(e)?);
                    }
                }
                Ok(Event::CData(ref e)) => {
                    if let Some(node) = stack.last_mut() {
                        node.text.push_str(&String::from_utf8_lossy(e));
                    }
                }
                Ok(Event::End(_)) => {
                    let node = stack.pop().ok_or_else(|| {
                        ParseError::XmlError("unexpected closing tag".to_string())
                    })?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(node),
                        None if root.is_none() => root = Some(node),
                        None => trace!(tag = %node.tag, "Ignoring element after document root"),
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(ParseError::XmlError(format!(
                        "error at position {}: {}",
                        reader.buffer_position(),
                        e
                    )));
                }
                _ => {}
            }
            buf.clear();
        }

        if let Some(open) = stack.pop() {
            return Err(ParseError::UnclosedElement { tag: open.tag });
        }

        root.ok_or(ParseError::MissingRoot)
    }

    fn from_start(e: &BytesStart) -> Result<Self> {
        let mut attributes = Vec::new();
        for attr in e.attributes() {
            let attr = attr.map_err(|err| ParseError::XmlError(err.to_string()))?;
            let value = attr
                .unescape_value()
                .map_err(|err| ParseError::XmlError(err.to_string()))?;
            attributes.push((decode_name(attr.key.as_ref()), value.into_owned()));
        }

        Ok(Self {
            tag: decode_name(e.name().as_ref()),
            attributes,
            ..Self::default()
        })
    }

    /// Element name
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Text content of this element, whitespace-trimmed
    pub fn text(&self) -> &str {
        self.text.trim()
    }

    /// Text content, or `None` when the element is empty
    pub fn non_empty_text(&self) -> Option<&str> {
        Some(self.text()).filter(|t| !t.is_empty())
    }

    /// Value of the named attribute
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First direct child with the given tag
    pub fn child(&self, tag: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// All elements below this one in document order (the node itself excluded)
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }

    /// Descendants with the given tag, in document order
    pub fn descendants_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a XmlNode> {
        self.descendants().filter(move |n| n.tag == tag)
    }

    /// ESummary `<Item Name="...">` descendants with the given `Name`, in document order
    pub fn items_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> {
        self.descendants_named("Item")
            .filter(move |n| n.attribute("Name") == Some(name))
    }

    /// First ESummary item with the given `Name` anywhere below this element
    pub fn find_item(&self, name: &str) -> Option<&XmlNode> {
        self.descendants()
            .find(|n| n.tag == "Item" && n.attribute("Name") == Some(name))
    }
}

/// Pre-order iterator over the descendants of an [`XmlNode`]
pub struct Descendants<'a> {
    stack: Vec<&'a XmlNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a XmlNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
