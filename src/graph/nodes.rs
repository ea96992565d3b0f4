//! Graph node types for the note graph

/// Border color assigned by policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeColor {
    /// Note outside the working set, pulled in as a link target
    Boundary,
}

impl NodeColor {
    pub fn as_graphviz(self) -> &'static str {
        match self {
            NodeColor::Boundary => "blue",
        }
    }
}

/// Fill assigned by policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeFill {
    /// Note tagged `unvisited`
    Unvisited,
}

impl NodeFill {
    pub fn as_graphviz(self) -> &'static str {
        match self {
            NodeFill::Unvisited => "lightgrey",
        }
    }
}

/// Presentation attributes of a node.
///
/// Attributes only accumulate: [`NodeAttributes::merge`] overwrites keys the
/// update sets and leaves every other key as it was.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeAttributes {
    pub color: Option<NodeColor>,
    pub fill: Option<NodeFill>,
    pub boundary: bool,
    pub unreachable: bool,
}

impl NodeAttributes {
    pub fn boundary() -> Self {
        Self {
            color: Some(NodeColor::Boundary),
            boundary: true,
            ..Self::default()
        }
    }

    /// Add the unvisited fill when `unvisited` is set
    pub fn with_unvisited(mut self, unvisited: bool) -> Self {
        if unvisited {
            self.fill = Some(NodeFill::Unvisited);
        }
        self
    }

    pub fn merge(&mut self, update: NodeAttributes) {
        if update.color.is_some() {
            self.color = update.color;
        }
        if update.fill.is_some() {
            self.fill = update.fill;
        }
        self.boundary |= update.boundary;
        self.unreachable |= update.unreachable;
    }
}

/// A node in the note graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub attributes: NodeAttributes,
}
