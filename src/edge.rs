use std::fmt::{Debug, Display};

use crate::Node;

/// An undirected edge `{u, v}` given by its two endpoints.
///
/// Both representations accept either orientation; `Edge(u, v)` and `Edge(v, u)` insert the
/// same adjacency, so tests compare edges after [`Edge::normalized`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// Number of edges of a graph
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{},{}}}", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Orients the edge from its smaller to its larger endpoint
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns *true* if the edge is oriented from its smaller to its larger endpoint
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }
}

impl From<(Node, Node)> for Edge {
    fn from((u, v): (Node, Node)) -> Self {
        Edge(u, v)
    }
}

impl From<&Edge> for Edge {
    fn from(edge: &Edge) -> Self {
        *edge
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize() {
        assert_eq!(Edge(3, 1).normalized(), Edge(1, 3));
        assert_eq!(Edge(1, 3).normalized(), Edge(1, 3));
        assert!(Edge(2, 2).is_normalized());
        assert!(!Edge(4, 2).is_normalized());
    }

    #[test]
    fn endpoint_pairs() {
        let e: Edge = (1, 2).into();
        assert_eq!(e, Edge(1, 2));
        assert_eq!(Edge::from(&Edge(5, 0)), Edge(5, 0));
        assert_eq!(format!("{:?}", Edge(0, 7)), "{0,7}");
    }
}
