//! Core data model for the decal design-to-code transpiler.
//!
//! This crate defines the types every other decal crate consumes:
//! - Design node trees as exported by the design tool
//! - Flat CSS-like style maps with typed property lookup
//! - Fill (paint) records

pub mod node;
pub mod style;

pub use node::*;
pub use style::*;
