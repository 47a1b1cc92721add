//! Thin wrappers around `quick_xml::Reader` used by the tree builder

use std::borrow::Cow;

use quick_xml::events::BytesText;
use quick_xml::Reader;

use crate::error::{ParseError, Result};

/// Create a configured `Reader` from a string slice.
///
/// Configuration:
/// - text is not trimmed (reader default), so affiliation strings keep their whitespace
/// - `expand_empty_elements(true)`: turns `<tag/>` into `Start` + `End` events
pub(super) fn make_reader(content: &str) -> Reader<&[u8]> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().expand_empty_elements = true;
    reader
}

/// Unescape a text event (`&amp;` and friends)
pub(super) fn unescape_text<'a>(e: &'a BytesText<'a>) -> Result<Cow<'a, str>> {
    e.unescape()
        .map_err(|err| ParseError::XmlError(err.to_string()))
}

/// Decode an element or attribute name
pub(super) fn decode_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}
