use hashbrown::HashMap;
use petgraph::graph::NodeIndex;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{Graph, UnGraph};

/// Attaches every edge to the nodes sitting on its endpoints.
///
/// Node `i` of the input becomes petgraph node `i`, and edge `j` becomes
/// petgraph edge `j`. Coordinates must match exactly; when several nodes
/// share a position the first one in input order is used.
///
/// Fails with [`Error::DanglingEdge`] for the first endpoint without a node.
pub fn resolve(graph: &Graph) -> Result<UnGraph> {
    let mut result = UnGraph::with_capacity(graph.nodes.len(), graph.edges.len());
    let mut by_position: HashMap<(u64, u64), NodeIndex> = HashMap::new();

    for node in &graph.nodes {
        let index = result.add_node(node.clone());
        by_position.entry(key(node.position())).or_insert(index);
    }

    for (i, edge) in graph.edges.iter().enumerate() {
        let lookup = |(x, y): (f64, f64)| {
            by_position
                .get(&key((x, y)))
                .copied()
                .ok_or(Error::DanglingEdge { index: i, x, y })
        };
        let source = lookup(edge.from())?;
        let target = lookup(edge.to())?;
        result.add_edge(source, target, edge.clone());
    }

    debug!(
        nodes = result.node_count(),
        edges = result.edge_count(),
        "edges attached to nodes"
    );
    Ok(result)
}

// Bit pattern of the position, with -0.0 folded into 0.0.
fn key((x, y): (f64, f64)) -> (u64, u64) {
    let bits = |v: f64| if v == 0.0 { 0u64 } else { v.to_bits() };
    (bits(x), bits(y))
}
