//! Tree-to-view conversion for live Markdown rendering.
//!
//! Takes the document tree an external Markdown parser produces (see
//! `mdlive_hast`) and maps every node onto a view node of the hosting UI
//! framework. Math expressions and fenced code blocks get dedicated view
//! nodes; plain text is re-scanned for bracket-delimited inline formulas.
//!
//! The core is framework-agnostic: all construction goes through the
//! [`ViewBuilder`] trait, so the same walk can target a terminal, HTML,
//! or anything else that can build five kinds of node.
//!
//! # Example
//!
//! ```no_run
//! use mdlive_hast::parse_document;
//! use mdlive_render::{Rendered, TreeRenderer};
//! # use mdlive_render::ViewBuilder;
//! # struct MyView;
//! # impl ViewBuilder for MyView {
//! #     type Node = String;
//! #     fn text(&self, v: &str) -> String { v.into() }
//! #     fn element(&self, _: &str, _: &mdlive_hast::Attributes, c: Vec<String>) -> String { c.concat() }
//! #     fn container(&self, c: Vec<String>) -> String { c.concat() }
//! #     fn code_block(&self, c: &str, _: &str) -> String { c.into() }
//! #     fn math(&self, f: &str, _: bool) -> String { f.into() }
//! # }
//!
//! fn main() -> Result<(), mdlive_hast::DocumentError> {
//!     let tree = parse_document(r#"{"type": "root", "children": []}"#)?;
//!     let renderer = TreeRenderer::new(MyView);
//!     if let Rendered::One(view) = renderer.render(&tree) {
//!         // hand `view` to the UI
//!     }
//!     Ok(())
//! }
//! ```

mod inline_math;
mod renderer;
mod view;

pub use inline_math::{Segment, Segments, scan, segments};
pub use renderer::TreeRenderer;
pub use view::{Rendered, ViewBuilder};
