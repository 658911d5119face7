use mdlive_hast::Node;

use crate::inline_math::{Segment, scan};
use crate::view::{Rendered, ViewBuilder};

/// Class the parser puts on math code nodes.
const MATH_LANGUAGE: &str = "language-math";
/// Class distinguishing inline math on a `code` element.
const MATH_INLINE: &str = "math-inline";
/// Class distinguishing display math on a `pre > code` element.
const MATH_DISPLAY: &str = "math-display";
/// Prefix fenced-code classes carry in front of the language tag.
const LANGUAGE_PREFIX: &str = "language-";

/// Converts a document tree into view nodes, one subtree per call.
///
/// The walk is synchronous, stateless, and never fails: a malformed
/// subtree degrades to generic rendering or to nothing, and the rest of
/// the document still renders. Each call is independent; re-rendering a
/// grown document is simply calling [`TreeRenderer::render`] again on
/// the fresh tree.
pub struct TreeRenderer<B> {
    builder: B,
}

impl<B: ViewBuilder> TreeRenderer<B> {
    pub fn new(builder: B) -> Self {
        Self { builder }
    }

    pub fn builder(&self) -> &B {
        &self.builder
    }

    /// Render one node and its subtree.
    pub fn render(&self, node: &Node) -> Rendered<B::Node> {
        match node {
            Node::Text { value } => self.render_text(value),

            Node::Element { tag_name, attributes, children } => {
                // Inline math is a bare `code` element tagged by the
                // parser; its subtree holds only the formula source.
                if tag_name == "code"
                    && attributes.has_class(MATH_LANGUAGE)
                    && attributes.has_class(MATH_INLINE)
                {
                    return Rendered::One(self.builder.math(&node.text_content(), true));
                }

                if tag_name == "pre"
                    && let Some(rendered) = self.render_pre(children)
                {
                    return rendered;
                }

                // Generic element: recurse, drop empty results, rebuild.
                Rendered::One(self.builder.element(
                    tag_name,
                    attributes,
                    self.render_children(children),
                ))
            }

            Node::Root { children } => {
                Rendered::One(self.builder.container(self.render_children(children)))
            }

            Node::Unknown { kind, raw } => {
                tracing::warn!(kind = %kind, node = %raw, "Unhandled document node kind");
                Rendered::None
            }
        }
    }

    /// Render every child in order into one flat child list.
    pub fn render_children(&self, children: &[Node]) -> Vec<B::Node> {
        let mut out = Vec::with_capacity(children.len());
        for child in children {
            self.render(child).push_into(&mut out);
        }
        out
    }

    fn render_text(&self, value: &str) -> Rendered<B::Node> {
        match scan(value) {
            None => Rendered::One(self.builder.text(value)),
            Some(parts) => Rendered::Many(
                parts
                    .into_iter()
                    .map(|segment| match segment {
                        Segment::Text(text) => self.builder.text(text),
                        Segment::Formula(formula) => self.builder.math(&formula, true),
                    })
                    .collect(),
            ),
        }
    }

    /// Specialized handling for `pre`: display math or a fenced code
    /// block, keyed off the first `code` child. A `pre` without one
    /// returns `None` so the caller falls back to generic rendering.
    fn render_pre(&self, children: &[Node]) -> Option<Rendered<B::Node>> {
        let (code, attributes) = children.iter().find_map(|child| match child {
            Node::Element { tag_name, attributes, .. } if tag_name == "code" => {
                Some((child, attributes))
            }
            _ => None,
        })?;

        let source = code.text_content();

        if attributes.has_class(MATH_LANGUAGE) && attributes.has_class(MATH_DISPLAY) {
            return Some(Rendered::One(self.builder.math(&source, false)));
        }

        let language = attributes
            .first_class()
            .map(|class| class.strip_prefix(LANGUAGE_PREFIX).unwrap_or(class))
            .unwrap_or_default();
        Some(Rendered::One(self.builder.code_block(&source, language)))
    }
}
