//! Error types for vector drawable conversion.

use thiserror::Error;

/// Result type alias for vector conversion operations.
pub type Result<T> = std::result::Result<T, VectorError>;

/// Errors that can occur while parsing vector markup.
///
/// These never cross the [`drawable_for`](crate::drawable_for) boundary;
/// callers of the total entry point receive an advisory comment instead.
#[derive(Error, Debug)]
pub enum VectorError {
    /// The markup is not well-formed XML.
    #[error("Markup is not well-formed: {0}")]
    Markup(#[from] quick_xml::Error),

    /// An attribute could not be read.
    #[error("Attribute is not well-formed: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// A closing tag appeared without a matching opening tag.
    #[error("Unbalanced markup: closing tag without an open element")]
    Unbalanced,

    /// The markup parsed but contained no `<svg>` root element.
    #[error("Markup contains no svg root element")]
    NoSvgRoot,
}
