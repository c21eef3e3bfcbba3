use crate::types::{Edge, Graph, Node};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Random graph with `n` nodes and `m` edges.
///
/// Every edge joins two existing node positions, so the result always
/// resolves with [`crate::topology::resolve`] when `n > 0`.
/// With `n == 0` no edges are generated.
#[allow(dead_code)]
pub fn random_graph(n: usize, m: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::default();

    for i in 0..n {
        let x = rng.random_range(-100.0..100.0);
        let y = rng.random_range(-100.0..100.0);
        graph.nodes.push(Node::new(i as i64, x, y, format!("v{i}"), rng.random_bool(0.3)));
    }

    if n == 0 {
        return graph;
    }

    for i in 0..m {
        let s = rng.random_range(0..n);
        let t = rng.random_range(0..n);
        let weight = rng.random_range(1..100u32);
        let edge = Edge::new(
            graph.nodes[s].position(),
            graph.nodes[t].position(),
            weight.to_string(),
            i % 4 == 0,
        );
        graph.edges.push(edge);
    }

    graph
}
