use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, ParseErrorKind, Result};
use crate::types::{Edge, Graph, Node, Section};

/// Reads a graph from a file.
///
/// The path is checked before anything is opened: a missing path or
/// a path that is not a regular file yields [`Error::InputNotFound`].
///
/// Input format, whitespace separated:
/// - node lines `id x y label marked`,
/// - one blank line,
/// - edge lines `x1 y1 x2 y2 label marked`.
///
/// `marked` is an integer, only `1` means marked.
/// Labels cannot contain whitespace.
///
/// <div class="warning">
///
/// > Every blank line switches to the edge block, so a blank line before
/// > the first node puts all records into the edge block.
///
/// </div>
///
/// Example input:
/// ```text
/// 0 0.0 0.0 S 1
/// 1 5.0 5.0 T 0
///
/// 0.0 0.0 5.0 5.0 7 0
/// ```
pub fn from_file(path: impl AsRef<Path>) -> Result<Graph> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::InputNotFound(path.to_path_buf()));
    }
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let reader = BufReader::new(file);
    let graph = parse_graph(reader).map_err(|e| match e {
        Error::Io { source, .. } => Error::io(path, source),
        other => other,
    })?;
    debug!(
        path = %path.display(),
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "graph loaded"
    );
    Ok(graph)
}

/// This is equivalent to [`from_file`], but takes string as an input.
///
/// ```
/// let graph = graph_plot::input::from_str("0 0.0 0.0 S 1\n\n0 0 1 1 e 0\n").unwrap();
/// assert_eq!(graph.nodes.len(), 1);
/// assert_eq!(graph.edges.len(), 1);
/// ```
pub fn from_str(input: &str) -> Result<Graph> {
    let cursor = Cursor::new(input);
    let reader = BufReader::new(cursor);
    parse_graph(reader)
}

/// Parses the node block and the edge block from `reader`.
///
/// Stops at the first malformed line, nothing is returned in that case.
pub fn parse_graph<R: BufRead>(reader: R) -> Result<Graph> {
    let mut graph = Graph::default();
    let mut section = Section::Nodes;

    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::io("<input>", e))?;
        let line = line.trim();
        if line.is_empty() {
            section = Section::Edges;
            continue;
        }
        let fields: Vec<_> = line.split_whitespace().collect();
        let parsed = match section {
            Section::Nodes => parse_node(&fields).map(|node| graph.nodes.push(node)),
            Section::Edges => parse_edge(&fields).map(|edge| graph.edges.push(edge)),
        };
        parsed.map_err(|kind| Error::Parse { line: i + 1, kind })?;
    }

    Ok(graph)
}

fn parse_node(fields: &[&str]) -> std::result::Result<Node, ParseErrorKind> {
    let [id, x, y, label, marked] = fields else {
        return Err(field_count(Section::Nodes, fields.len()));
    };
    Ok(Node {
        id: int_field("id", id)?,
        x: float_field("x", x)?,
        y: float_field("y", y)?,
        label: label.to_string(),
        marked: marked_field(marked)?,
    })
}

fn parse_edge(fields: &[&str]) -> std::result::Result<Edge, ParseErrorKind> {
    let [x1, y1, x2, y2, label, marked] = fields else {
        return Err(field_count(Section::Edges, fields.len()));
    };
    Ok(Edge {
        x1: float_field("x1", x1)?,
        y1: float_field("y1", y1)?,
        x2: float_field("x2", x2)?,
        y2: float_field("y2", y2)?,
        label: label.to_string(),
        marked: marked_field(marked)?,
    })
}

fn field_count(section: Section, found: usize) -> ParseErrorKind {
    ParseErrorKind::FieldCount {
        section,
        expected: section.field_count(),
        found,
    }
}

fn int_field(field: &'static str, token: &str) -> std::result::Result<i64, ParseErrorKind> {
    i64::from_str(token).map_err(|_| ParseErrorKind::InvalidInteger {
        field,
        token: token.to_string(),
    })
}

fn float_field(field: &'static str, token: &str) -> std::result::Result<f64, ParseErrorKind> {
    f64::from_str(token).map_err(|_| ParseErrorKind::InvalidFloat {
        field,
        token: token.to_string(),
    })
}

// Only an exact 1 marks, any other integer leaves the record unmarked.
fn marked_field(token: &str) -> std::result::Result<bool, ParseErrorKind> {
    Ok(int_field("marked", token)? == 1)
}
