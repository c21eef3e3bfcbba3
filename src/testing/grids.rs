use crate::types::{Edge, Graph, Node};

/// Generates a grid graph with the specified number of rows and columns.
///
/// Node `r * cols + c` sits at `(c, -r)` and is labeled `n{index}`.
/// Edges join horizontal and vertical neighbours and are labeled with
/// their running index.
#[allow(dead_code)]
pub fn generate_grid_graph(rows: usize, cols: usize) -> Graph {
    let mut graph = Graph::default();
    let position = |r: usize, c: usize| (c as f64, -(r as f64));

    for r in 0..rows {
        for c in 0..cols {
            let index = r * cols + c;
            let (x, y) = position(r, c);
            graph.nodes.push(Node::new(index as i64, x, y, format!("n{index}"), false));
        }
    }

    for r in 0..rows {
        for c in 0..cols {
            if r + 1 < rows {
                let label = graph.edges.len().to_string();
                graph.edges.push(Edge::new(position(r, c), position(r + 1, c), label, false));
            }
            if c + 1 < cols {
                let label = graph.edges.len().to_string();
                graph.edges.push(Edge::new(position(r, c), position(r, c + 1), label, false));
            }
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_grid() {
        let grid = generate_grid_graph(2, 2);
        let positions: Vec<_> = grid.nodes.iter().map(Node::position).collect();
        assert_eq!(positions, vec![(0.0, 0.0), (1.0, 0.0), (0.0, -1.0), (1.0, -1.0)]);
        assert_eq!(grid.edges.len(), 4);
    }
}
