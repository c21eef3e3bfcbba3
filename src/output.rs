use std::fmt::Write;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::Graph;

/// Returns a graph in the plain text format read by [`crate::input::from_str`].
///
/// Node lines, one blank line, then edge lines. Numbers use the shortest
/// representation that parses back to the same value.
pub fn to_str(graph: &Graph) -> String {
    let mut output = String::new();

    for node in &graph.nodes {
        writeln!(
            output,
            "{} {} {} {} {}",
            node.id,
            node.x,
            node.y,
            node.label,
            marked(node.marked)
        )
        .unwrap();
    }

    writeln!(output).unwrap();

    for edge in &graph.edges {
        writeln!(
            output,
            "{} {} {} {} {} {}",
            edge.x1,
            edge.y1,
            edge.x2,
            edge.y2,
            edge.label,
            marked(edge.marked)
        )
        .unwrap();
    }

    output
}

/// Writes the graph to a file in the plain text format.
pub fn to_file(graph: &Graph, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, to_str(graph)).map_err(|e| Error::io(path, e))
}

fn marked(marked: bool) -> u8 {
    if marked { 1 } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{from_file, from_str};
    use crate::testing::grids::generate_grid_graph;
    use crate::types::{Edge, Node};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_to_str() {
        let graph = Graph::new(
            vec![Node::new(0, 0.0, 0.0, "S", true), Node::new(1, 5.5, -5.0, "T", false)],
            vec![Edge::new((0.0, 0.0), (5.5, -5.0), "7", false)],
        );
        assert_eq!(to_str(&graph), "0 0 0 S 1\n1 5.5 -5 T 0\n\n0 0 5.5 -5 7 0\n");
    }

    #[test]
    fn test_reload_grid() {
        let grid = generate_grid_graph(3, 4);
        assert_eq!(from_str(&to_str(&grid)).unwrap(), grid);
    }

    #[test]
    fn test_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Graph.dat");
        let grid = generate_grid_graph(2, 2);
        to_file(&grid, &path).unwrap();
        assert_eq!(from_file(&path).unwrap(), grid);
    }
}
