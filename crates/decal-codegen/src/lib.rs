//! Code generation from design node trees to Android UI notations.
//!
//! This crate takes the flat CSS-like style maps and node trees exported by
//! the design side and produces either Android layout XML or Jetpack Compose
//! builder code. Style maps are first classified into a widget role, then the
//! role decides which tag or composable is emitted and which attributes or
//! modifiers carry the styling.
//!
//! # Example
//!
//! ```
//! use decal_codegen::{CodeGenerator, SequentialIds, XmlGenerator};
//! use decal_core::StyleMap;
//!
//! let mut generator = XmlGenerator::with_ids(SequentialIds::new());
//! let style = StyleMap::from_declarations("color: #333; font-size: 14px");
//! let xml = generator.generate_style(&style);
//! assert!(xml.starts_with("<TextView"));
//! ```

pub mod attr;
pub mod classify;
pub mod generators;
pub mod id;

pub use attr::AttributeSet;
pub use classify::{classify, WidgetKind};
pub use generators::{
    CodeGenerator, ComposeGenerator, GeneratedCode, Notation, WidgetMap, XmlGenerator,
};
pub use id::{IdSource, RandomIds, SequentialIds};
