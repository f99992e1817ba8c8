//! Builds the 5-vertex reference graph in both representations, prints them and runs
//! BFS and DFS from vertex 0 on each.
//!
//! Run with `RUST_LOG=trace` to see the library's log output.

use std::io::Write;

use adjgraphs::{algo::*, io::write_traversal, prelude::*};

const EDGES: [(Node, Node); 6] = [(0, 1), (0, 4), (1, 2), (1, 3), (1, 4), (3, 4)];
const START: Node = 0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let matrix = MatrixGraph::from_edges(5, EDGES)?;
    writeln!(out, "Adjacency Matrix Representation:")?;
    matrix.try_write_text(&mut out)?;
    write_traversal(&mut out, "BFS (Matrix)", matrix.bfs(START)?)?;
    write_traversal(&mut out, "DFS (Matrix)", matrix.dfs(START)?)?;

    let list = ListGraph::from_edges(5, EDGES)?;
    writeln!(out, "\nAdjacency List Representation:")?;
    list.try_write_text(&mut out)?;
    write_traversal(&mut out, "BFS (List)", list.bfs(START)?)?;
    write_traversal(&mut out, "DFS (List)", list.dfs(START)?)?;

    Ok(())
}
