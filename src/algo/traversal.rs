/*!
Breadth-first and depth-first traversals.

Both searches are written once against [`AdjacencyList`] and are therefore available for every
representation of this crate. The only representation-specific ingredient is the order in
which `neighbors_of` enumerates a neighborhood (ascending for [`MatrixGraph`], newest first for
[`ListGraph`]), which in turn determines the traversal order.

Each search owns its visited-set and frontier, so a graph can be traversed any number of times
(also concurrently by multiple shared borrows) without resetting any state.
*/

use super::*;
use log::debug;
use std::collections::VecDeque;

/// Common interface for querying visited-states during a traversal.
pub trait TraversalState {
    /// Returns a reference to the set of visited nodes.
    fn visited(&self) -> &NodeBitSet;

    /// Checks if a given node `u` has already been visited (or is scheduled to be).
    fn did_visit_node(&self, u: Node) -> bool {
        self.visited().get_bit(u)
    }
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
///
/// A node is marked visited when it is enqueued and returned when it is dequeued, hence
/// every reachable node is returned exactly once and nodes are returned by non-decreasing
/// distance from the start.
pub struct BFS<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    queue: VecDeque<Node>,
}

impl<'a, G> BFS<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new BFS starting at `start`.
    ///
    /// # Errors
    /// Returns `GraphError::InvalidVertexIndex` if `start` is not a vertex of `graph`.
    pub fn new(graph: &'a G, start: Node) -> GraphResult<Self> {
        graph.check_vertex(start)?;
        debug!("BFS from {start} over {} vertices", graph.number_of_nodes());

        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);

        // each node is enqueued at most once
        let mut queue = VecDeque::with_capacity(graph.len());
        queue.push_back(start);

        Ok(Self {
            graph,
            visited,
            queue,
        })
    }
}

impl<G> TraversalState for BFS<'_, G>
where
    G: AdjacencyList,
{
    fn visited(&self) -> &NodeBitSet {
        &self.visited
    }
}

impl<G> Iterator for BFS<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for v in self.graph.neighbors_of(u) {
            if !self.visited.get_bit(v) {
                self.visited.set_bit(v);
                self.queue.push_back(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.queue.len(),
            Some(self.queue.len() + self.graph.len() - self.visited.cardinality() as usize),
        )
    }
}

/// A DFS traversal iterator over the graph, returning nodes in preorder.
///
/// The order is exactly that of the recursive formulation
/// (mark `u`, emit `u`, recurse into every still unvisited neighbor of `u` in order).
/// Instead of the call stack, the search keeps one partially consumed neighbor iterator per
/// node on the current path; the path never holds more than `n` nodes.
pub struct DFS<'a, G>
where
    G: AdjacencyList + 'a,
{
    graph: &'a G,
    visited: NodeBitSet,
    start: Option<Node>,
    stack: Vec<G::NeighborIter<'a>>,
}

impl<'a, G> DFS<'a, G>
where
    G: AdjacencyList + 'a,
{
    /// Creates a new DFS starting at `start`.
    ///
    /// # Errors
    /// Returns `GraphError::InvalidVertexIndex` if `start` is not a vertex of `graph`.
    pub fn new(graph: &'a G, start: Node) -> GraphResult<Self> {
        graph.check_vertex(start)?;
        debug!("DFS from {start} over {} vertices", graph.number_of_nodes());

        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);

        Ok(Self {
            graph,
            visited,
            start: Some(start),
            stack: Vec::with_capacity(graph.len()),
        })
    }

    fn enter(&mut self, u: Node) -> Node {
        self.stack.push(self.graph.neighbors_of(u));
        u
    }
}

impl<'a, G> TraversalState for DFS<'a, G>
where
    G: AdjacencyList + 'a,
{
    fn visited(&self) -> &NodeBitSet {
        &self.visited
    }
}

impl<'a, G> Iterator for DFS<'a, G>
where
    G: AdjacencyList + 'a,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.start.take() {
            return Some(self.enter(start));
        }

        while let Some(neighbors) = self.stack.last_mut() {
            let visited = &self.visited;
            match neighbors.find(|&v| !visited.get_bit(v)) {
                Some(v) => {
                    self.visited.set_bit(v);
                    return Some(self.enter(v));
                }
                None => {
                    self.stack.pop();
                }
            }
        }

        None
    }
}

/// Provides BFS/DFS directly as methods on graph data structures.
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use adjgraphs::{prelude::*, algo::*};
    ///
    /// let g = MatrixGraph::from_edges(3, [(0, 2), (0, 1)]).unwrap();
    ///
    /// let order: Vec<_> = g.bfs(0).unwrap().collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn bfs(&self, start: Node) -> GraphResult<BFS<'_, Self>> {
        BFS::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search (DFS) preorder**.
    ///
    /// # Examples
    /// ```
    /// use adjgraphs::{prelude::*, algo::*};
    ///
    /// let g = ListGraph::from_edges(3, [(0, 1), (0, 2)]).unwrap();
    ///
    /// let order: Vec<_> = g.dfs(0).unwrap().collect();
    /// assert_eq!(order, vec![0, 2, 1]);
    /// ```
    fn dfs(&self, start: Node) -> GraphResult<DFS<'_, Self>> {
        DFS::new(self, start)
    }

    /// Collects the complete BFS order from `start`
    fn bfs_order(&self, start: Node) -> GraphResult<Vec<Node>> {
        Ok(self.bfs(start)?.collect())
    }

    /// Collects the complete DFS preorder from `start`
    fn dfs_order(&self, start: Node) -> GraphResult<Vec<Node>> {
        Ok(self.dfs(start)?.collect())
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

#[cfg(test)]
pub mod tests {
    use super::*;
    use itertools::Itertools;

    //  / 2 --- \
    // 1         4 - 3
    //  \ 0 - 5 /
    const EDGES: [(Node, Node); 6] = [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)];

    #[test]
    fn bfs_order_matrix() {
        let graph = MatrixGraph::from_edges(6, EDGES).unwrap();

        assert_eq!(graph.bfs_order(1).unwrap(), vec![1, 0, 2, 5, 4, 3]);
        assert_eq!(graph.bfs_order(3).unwrap(), vec![3, 4, 2, 5, 1, 0]);
    }

    #[test]
    fn bfs_order_list() {
        let graph = ListGraph::from_edges(6, EDGES).unwrap();

        // neighbors of 1: [0, 2], of 0: [5, 1], of 2: [4, 1]
        assert_eq!(graph.bfs_order(1).unwrap(), vec![1, 0, 2, 5, 4, 3]);
    }

    #[test]
    fn dfs_order_matrix() {
        let graph = MatrixGraph::from_edges(6, EDGES).unwrap();
        assert_eq!(graph.dfs_order(1).unwrap(), vec![1, 0, 5, 4, 2, 3]);
    }

    #[test]
    fn dfs_order_list() {
        let graph = ListGraph::from_edges(6, EDGES).unwrap();
        // neighbors of 5: [4, 0], of 4: [5, 2, 3]
        assert_eq!(graph.dfs_order(1).unwrap(), vec![1, 0, 5, 4, 2, 3]);
        assert_eq!(graph.dfs_order(3).unwrap(), vec![3, 4, 5, 0, 1, 2]);
    }

    #[test]
    fn unreachable_nodes_are_skipped() {
        let graph = MatrixGraph::from_edges(6, [(0, 1), (1, 2), (3, 4)]).unwrap();

        assert_eq!(graph.bfs_order(0).unwrap(), vec![0, 1, 2]);
        assert_eq!(graph.dfs_order(4).unwrap(), vec![4, 3]);
        assert_eq!(graph.dfs_order(5).unwrap(), vec![5]);
    }

    #[test]
    fn invalid_start() {
        let graph = ListGraph::from_edges(5, [(0, 1)]).unwrap();

        assert_eq!(
            graph.bfs(7).err(),
            Some(GraphError::InvalidVertexIndex {
                vertex: 7,
                num_vertices: 5
            })
        );
        assert!(graph.dfs(5).is_err());
        assert!(graph.bfs_order(5).is_err());

        let empty = MatrixGraph::try_new(0).unwrap();
        assert!(empty.dfs_order(0).is_err());
    }

    #[test]
    fn traversal_state() {
        let graph = MatrixGraph::from_edges(4, [(0, 1), (1, 2)]).unwrap();

        let mut bfs = graph.bfs(0).unwrap();
        assert!(bfs.did_visit_node(0));
        assert!(!bfs.did_visit_node(1));
        assert_eq!(bfs.next(), Some(0));
        assert!(bfs.did_visit_node(1));
        assert_eq!(bfs.by_ref().collect_vec(), vec![1, 2]);
        assert!(!bfs.did_visit_node(3));
        assert_eq!(bfs.next(), None);

        let mut dfs = graph.dfs(2).unwrap();
        assert_eq!(dfs.next(), Some(2));
        assert!(!dfs.did_visit_node(1));
        assert_eq!(dfs.collect_vec(), vec![1, 0]);
    }

    #[test]
    fn reusable_graph() {
        let graph = ListGraph::from_edges(3, [(0, 1), (1, 2)]).unwrap();
        let first = graph.dfs_order(0).unwrap();

        // interleaved searches do not share state
        let mut a = graph.bfs(2).unwrap();
        let mut b = graph.bfs(2).unwrap();
        assert_eq!(a.next(), b.next());
        assert_eq!(a.collect_vec(), b.collect_vec());

        assert_eq!(graph.dfs_order(0).unwrap(), first);
    }

    #[test]
    fn duplicate_entries_do_not_duplicate_output() {
        let graph = ListGraph::from_edges(3, [(0, 1), (0, 1), (1, 1), (1, 2)]).unwrap();
        assert_eq!(graph.bfs_order(0).unwrap(), vec![0, 1, 2]);
        assert_eq!(graph.dfs_order(0).unwrap(), vec![0, 1, 2]);
    }
}
