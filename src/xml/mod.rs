//! Owned XML tree, compact writer, canonicalization and the XPath subset
//! needed for XML-DSig.

pub mod c14n;
mod node;
mod writer;
mod xpath;

pub use node::{Document, Element, Node};
pub use writer::XmlWriter;
pub use xpath::XPath;

pub(crate) use node::local_part;

use thiserror::Error;

/// Malformed input, an unsupported expression, or a write failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct XmlError(String);

impl XmlError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
