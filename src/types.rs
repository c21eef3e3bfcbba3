/// A labeled point of the figure.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// Sequence number from the input, not guaranteed to be unique.
    pub id: i64,
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub marked: bool,
}

impl Node {
    pub fn new(id: i64, x: f64, y: f64, label: impl Into<String>, marked: bool) -> Self {
        Node {
            id,
            x,
            y,
            label: label.into(),
            marked,
        }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// A labeled segment between two coordinate pairs.
///
/// Endpoints are plain coordinates, not node references.
/// Use [`crate::topology::resolve`] to attach them to nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub label: String,
    pub marked: bool,
}

impl Edge {
    pub fn new(from: (f64, f64), to: (f64, f64), label: impl Into<String>, marked: bool) -> Self {
        Edge {
            x1: from.0,
            y1: from.1,
            x2: to.0,
            y2: to.1,
            label: label.into(),
            marked,
        }
    }

    pub fn from(&self) -> (f64, f64) {
        (self.x1, self.y1)
    }

    pub fn to(&self) -> (f64, f64) {
        (self.x2, self.y2)
    }

    pub fn midpoint(&self) -> (f64, f64) {
        ((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }
}

/// Nodes followed by edges, both in input order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Graph { nodes, edges }
    }

    /// The first node in input order. Used for the figure title.
    pub fn start_node(&self) -> Option<&Node> {
        self.nodes.first()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Every coordinate the figure has to show: node positions and both edge endpoints.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.nodes
            .iter()
            .map(Node::position)
            .chain(self.edges.iter().flat_map(|e| [e.from(), e.to()]))
    }
}

/// Which block of the input a line belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Section {
    Nodes,
    Edges,
}

impl Section {
    /// Number of whitespace separated fields a record of this section has.
    pub fn field_count(&self) -> usize {
        match self {
            Section::Nodes => 5,
            Section::Edges => 6,
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Section::Nodes => write!(f, "node"),
            Section::Edges => write!(f, "edge"),
        }
    }
}

/// Undirected graph with edges attached to nodes, see [`crate::topology::resolve`].
pub type UnGraph = petgraph::graph::UnGraph<Node, Edge>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_node_is_first() {
        let graph = Graph::new(
            vec![Node::new(3, 1.0, 1.0, "A", false), Node::new(0, 0.0, 0.0, "B", true)],
            vec![],
        );
        assert_eq!(graph.start_node().map(|n| n.label.as_str()), Some("A"));
        assert_eq!(Graph::default().start_node(), None);
    }

    #[test]
    fn test_points_include_edge_endpoints() {
        let graph = Graph::new(
            vec![Node::new(0, 1.0, 2.0, "A", false)],
            vec![Edge::new((3.0, 4.0), (5.0, 6.0), "e", false)],
        );
        let points: Vec<_> = graph.points().collect();
        assert_eq!(points, vec![(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)]);
    }

    #[test]
    fn test_midpoint() {
        let edge = Edge::new((0.0, 0.0), (5.0, -5.0), "7", true);
        assert_eq!(edge.midpoint(), (2.5, -2.5));
    }
}
