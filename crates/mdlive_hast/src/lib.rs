//! Document tree model for rendered Markdown ("hast"-style).
//!
//! A Markdown/HTML parser hands us its syntax tree as JSON; this crate
//! deserializes it into a closed [`Node`] sum type that the renderer can
//! match on exhaustively. Node kinds the parser may emit but we do not
//! understand deserialize into [`Node::Unknown`] rather than failing the
//! whole document.

mod attributes;
mod error;
mod node;

pub use attributes::Attributes;
pub use error::{DocumentError, Result};
pub use node::{Node, parse_document};
