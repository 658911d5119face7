use mdlive_hast::Attributes;

/// Construction capability the renderer needs from a UI framework.
///
/// One method per kind of view node the walk can produce. Implementors
/// own the concrete node representation; the renderer never inspects a
/// node after building it, only passes it up into its parent's child
/// list.
pub trait ViewBuilder {
    type Node;

    /// A plain text leaf.
    fn text(&self, value: &str) -> Self::Node;

    /// A generic element carrying the source node's tag and attributes.
    fn element(&self, tag_name: &str, attributes: &Attributes, children: Vec<Self::Node>)
    -> Self::Node;

    /// The top-level wrapper around a document's children.
    fn container(&self, children: Vec<Self::Node>) -> Self::Node;

    /// A fenced code block. `language` is empty when the fence had none.
    fn code_block(&self, code: &str, language: &str) -> Self::Node;

    /// A math formula, inline or display.
    fn math(&self, formula: &str, inline: bool) -> Self::Node;
}

/// Result of rendering one document node.
///
/// A node renders to nothing (unrecognized kinds), to one view node, or
/// to several siblings (a text run split around inline formulas). Parents
/// flatten these into a single child list with [`Rendered::push_into`].
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered<V> {
    None,
    One(V),
    Many(Vec<V>),
}

impl<V> Rendered<V> {
    pub fn is_none(&self) -> bool {
        matches!(self, Rendered::None)
    }

    /// Append the produced view nodes, if any, to a child list.
    pub fn push_into(self, out: &mut Vec<V>) {
        match self {
            Rendered::None => {}
            Rendered::One(node) => out.push(node),
            Rendered::Many(nodes) => out.extend(nodes),
        }
    }

    /// The produced view nodes as a flat list.
    pub fn into_vec(self) -> Vec<V> {
        let mut out = Vec::new();
        self.push_into(&mut out);
        out
    }
}
