//! Vector and shape drawable generation from design exports.
//!
//! A layer's icon export can arrive as literal svg markup, percent-encoded
//! text, or a data URI tucked into a background style. This crate decodes
//! whatever is there, converts real vector markup into Android
//! `VectorDrawable` text, and falls back to a flat `<shape>` synthesized
//! from CSS when no markup is found. The top-level entry point is total:
//! every call returns usable text or an advisory comment, never an error.
//!
//! # Example
//!
//! ```
//! use decal_core::StyleMap;
//! use decal_style::ColorTable;
//! use decal_vector::drawable_for;
//!
//! let style = StyleMap::new();
//! let svg = r#"<svg viewBox="0 0 24 24"><circle cx="12" cy="12" r="10"/></svg>"#;
//! let drawable = drawable_for(svg, &style, &ColorTable::builtin());
//! assert!(drawable.starts_with("<vector"));
//! ```

pub mod decode;
pub mod drawable;
pub mod error;
pub mod shape;
pub mod tree;

pub use decode::resolve_markup;
pub use drawable::vector_drawable;
pub use error::{Result, VectorError};
pub use shape::shape_drawable;
pub use tree::{parse_svg, SvgElement};

use decal_core::StyleMap;
use decal_style::ColorTable;

const NO_CONTENT_ADVISORY: &str = "<!-- No drawable content found for this layer -->";
const INVALID_MARKUP_ADVISORY: &str = "<!-- Error: Invalid SVG content -->";

/// Produces drawable text for a layer.
///
/// Resolution order: decoded vector markup when any strategy finds some, a
/// flat `<shape>` from styles otherwise, an advisory comment as the last
/// resort. Total; the call never fails.
pub fn drawable_for(payload: &str, style: &StyleMap, table: &ColorTable) -> String {
    if let Some(markup) = resolve_markup(payload, style) {
        match vector_drawable(&markup, table) {
            Ok(xml) => return xml,
            Err(error) => log::debug!("vector markup did not convert: {}", error),
        }
        return shape_drawable(style, table)
            .unwrap_or_else(|| INVALID_MARKUP_ADVISORY.to_string());
    }
    shape_drawable(style, table).unwrap_or_else(|| NO_CONTENT_ADVISORY.to_string())
}
