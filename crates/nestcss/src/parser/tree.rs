//! Rule tree produced by the scanner.
//!
//! The tree is an arena: [`RuleTree`] owns every [`Node`] and nodes refer to
//! each other through [`NodeId`] indices. A node's `parent` link is therefore
//! purely structural and never keeps anything alive.

/// Selector text given to the root node of every tree.
pub const ROOT_SELECTOR: &str = "root";

/// Index of a node inside its [`RuleTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A rule block: a selector or at-rule prelude plus what its braces enclose.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    /// Trimmed selector or at-rule text, e.g. `.box`, `&:hover`, `@media print`.
    pub selector: String,
    pub parent: Option<NodeId>,
    /// Nested blocks in source order.
    pub children: Vec<NodeId>,
    /// Raw declaration fragments in source order, e.g. `color: red;`.
    pub properties: Vec<String>,
}

impl Node {
    fn new(selector: String, parent: Option<NodeId>) -> Self {
        Self {
            selector,
            parent,
            children: Vec::new(),
            properties: Vec::new(),
        }
    }

    /// True for `@media`, `@font-face`, `@supports` and friends.
    pub fn is_at_rule(&self) -> bool {
        self.selector.starts_with('@')
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleTree {
    nodes: Vec<Node>,
}

impl RuleTree {
    /// Creates a tree holding only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(ROOT_SELECTOR.to_string(), None)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn is_root(&self, id: NodeId) -> bool {
        id == self.root()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Appends a new child under `parent` and returns its id.
    pub(crate) fn add_child(&mut self, parent: NodeId, selector: String) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(selector, Some(parent)));
        self.nodes[parent.0].children.push(id);
        id
    }

    pub(crate) fn add_property(&mut self, id: NodeId, property: String) {
        self.node_mut(id).properties.push(property);
    }

    /// Children of `id` in source order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.node(id)
            .children
            .iter()
            .map(move |&child| (child, self.node(child)))
    }

    /// Number of nodes, root excluded.
    pub fn rule_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Number of ancestors between `id` and the root; the root itself is at depth 0.
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.node(id).parent;
        while let Some(parent) = current {
            depth += 1;
            current = self.node(parent).parent;
        }
        depth
    }

    /// Deepest nesting level in the tree.
    pub fn max_depth(&self) -> usize {
        // Children are always pushed after their parent, so one forward pass suffices.
        let mut depths = vec![0usize; self.nodes.len()];
        let mut max = 0;
        for (index, node) in self.nodes.iter().enumerate() {
            if let Some(parent) = node.parent {
                depths[index] = depths[parent.0] + 1;
                max = max.max(depths[index]);
            }
        }
        max
    }
}

impl Default for RuleTree {
    fn default() -> Self {
        Self::new()
    }
}
