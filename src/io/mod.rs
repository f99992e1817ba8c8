/*!
# IO

Deterministic text output for graphs and traversal orders.

- [`MatrixGraph`] prints `n` rows of `n` space separated `0`/`1` entries.
- [`ListGraph`] prints one line `Vertex i: n1 -> n2 -> ... -> END` per vertex, listing
  the neighbors in their current (newest first) order.
- [`write_traversal`] prints a labelled line of space separated nodes, e.g. `BFS (Matrix): 0 1 4 2 3`.

Both graph types also implement [`Display`] with exactly the text written by [`TextWrite`].
*/

use std::{
    fmt::{self, Display},
    io::{Result, Write},
};

use itertools::Itertools;

use crate::prelude::*;

/// Sentinel terminating every line of the list representation
pub const LIST_END: &str = "END";

/// Trait for graphs that can be written as human readable text.
pub trait TextWrite: Display {
    /// Writes the text representation of the graph to `writer`.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_text<W>(&self, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        write!(writer, "{self}")
    }

    /// Writes the text representation of the graph to stdout.
    ///
    /// # Errors
    /// Returns an error if writing to stdout fails.
    fn print(&self) -> Result<()> {
        self.try_write_text(std::io::stdout().lock())
    }
}

impl TextWrite for MatrixGraph {}
impl TextWrite for ListGraph {}

impl Display for MatrixGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for u in self.vertices() {
            let row = self
                .vertices()
                .map(|v| u8::from(self.has_edge(u, v)))
                .join(" ");
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

impl Display for ListGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for u in self.vertices() {
            write!(f, "Vertex {u}: ")?;
            for v in self.neighbors_of(u) {
                write!(f, "{v} -> ")?;
            }
            writeln!(f, "{LIST_END}")?;
        }
        Ok(())
    }
}

/// Writes `"{label}: v1 v2 ... vk"` followed by a line break.
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_traversal<W, I>(mut writer: W, label: &str, order: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = Node>,
{
    writeln!(writer, "{label}: {}", order.into_iter().join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_text() {
        let graph = MatrixGraph::from_edges(3, [(0, 1), (1, 2)]).unwrap();

        let mut buf = Vec::new();
        graph.try_write_text(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "0 1 0\n1 0 1\n0 1 0\n");
        assert_eq!(graph.to_string(), "0 1 0\n1 0 1\n0 1 0\n");
    }

    #[test]
    fn list_text() {
        let graph = ListGraph::from_edges(3, [(0, 1), (0, 2)]).unwrap();

        let mut buf = Vec::new();
        graph.try_write_text(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Vertex 0: 2 -> 1 -> END\nVertex 1: 0 -> END\nVertex 2: 0 -> END\n"
        );
    }

    #[test]
    fn isolated_vertices() {
        let graph = ListGraph::try_new(2).unwrap();
        assert_eq!(graph.to_string(), "Vertex 0: END\nVertex 1: END\n");

        let graph = MatrixGraph::try_new(0).unwrap();
        assert_eq!(graph.to_string(), "");
    }

    #[test]
    fn traversal_line() {
        let mut buf = Vec::new();
        write_traversal(&mut buf, "BFS (Matrix)", [0, 1, 4, 2, 3]).unwrap();
        write_traversal(&mut buf, "DFS (List)", std::iter::empty()).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "BFS (Matrix): 0 1 4 2 3\nDFS (List): \n"
        );
    }
}
