//! Inline rich text markup renderer.
//!
//! See the [`richtext`] crate for details.

pub use richtext::*;
