use span_util::Span;

/// Arena index of an [`IfNode`] inside a [`BlockTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// An `#if … #endif` block. The opening line owns every arm of the block;
/// the arms point back at it through `belong`.
#[derive(Debug, Clone, PartialEq)]
pub struct IfNode {
    pub condition: String,
    /// Span of the `#if` line itself.
    pub span: Span,
    /// Blocks nested directly inside the if arm.
    pub body: Vec<NodeId>,
    pub else_ifs: Vec<ElseIfNode>,
    pub else_branch: Option<ElseNode>,
    pub end_if: EndIfNode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElseIfNode {
    pub condition: String,
    pub span: Span,
    pub body: Vec<NodeId>,
    pub belong: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElseNode {
    pub span: Span,
    pub body: Vec<NodeId>,
    pub belong: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EndIfNode {
    pub span: Span,
    pub belong: NodeId,
}

/// Every if block of one source, stored as a flat arena.
///
/// Arena order is the order in which `#if` lines open. `roots` lists the
/// blocks that are not nested inside any other block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockTree {
    nodes: Vec<IfNode>,
    roots: Vec<NodeId>,
}

impl BlockTree {
    pub fn new(nodes: Vec<IfNode>, roots: Vec<NodeId>) -> BlockTree {
        BlockTree { nodes, roots }
    }

    pub fn node(&self, id: NodeId) -> &IfNode {
        &self.nodes[id.0]
    }

    pub fn nodes(&self) -> &[IfNode] {
        &self.nodes
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
