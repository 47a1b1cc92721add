use std::result;

use thiserror::Error;

/// Error types for E-utilities XML parsing
#[derive(Error, Debug)]
pub enum ParseError {
    /// XML parsing failed
    #[error("XML parsing failed: {0}")]
    XmlError(String),

    /// Document ended while an element was still open
    #[error("XML document ended inside <{tag}>")]
    UnclosedElement { tag: String },

    /// Document contained no root element
    #[error("XML document has no root element")]
    MissingRoot,
}

pub type Result<T> = result::Result<T, ParseError>;
