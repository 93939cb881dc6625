//! Parser for rich text markup.
//!
//! This module contains the lexer, the nesting stack, the span collector and
//! the driver that ties them together.

mod collector;
mod lexer;
mod markup;
mod nesting;
mod tag;

pub use lexer::{Lexer, Token};
pub use markup::parse;
pub use tag::{Tag, TagKind};
