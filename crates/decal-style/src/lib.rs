//! CSS value utilities shared by the decal generators.
//!
//! Everything here is pure string-to-string (or string-to-value) work:
//! - Length conversion between px and dp/sp, in both notations
//! - Box-model shorthand expansion
//! - Color parsing, the project color table, and resource resolution
//!
//! These functions never fail. A generator must always produce output,
//! so malformed values pass through or degrade instead of erroring.

pub mod box_model;
pub mod color;
pub mod unit;

pub use box_model::*;
pub use color::*;
pub use unit::*;
