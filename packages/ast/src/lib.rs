//! Typed tree of an AFX document, as handed over by a markup parser.

pub mod node;
pub mod parse;

pub use node::{AstNode, Element, Props};
pub use parse::Parse;
