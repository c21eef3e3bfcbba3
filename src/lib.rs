//! # graph_plot
//!
//! Reads graphs stored as plain text and draws them.
//!
//! The input is a block of node lines, a blank line and a block of edge
//! lines, see [`input::from_file`]. The figure is an SVG document
//! ([`visualize::render_svg`]) that can be saved as `.svg` or `.png`
//! ([`export::save`]).
//!
//! ```
//! use graph_plot::{PlotConfig, input, visualize};
//!
//! let graph = input::from_str("0 0.0 0.0 S 1\n1 5.0 5.0 T 0\n\n0.0 0.0 5.0 5.0 7 0\n").unwrap();
//! assert_eq!(graph.start_node().unwrap().label, "S");
//!
//! let svg = visualize::render_svg(&graph, &PlotConfig::default());
//! assert!(svg.contains("Start Node: S"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod output;
pub mod topology;
pub mod types;
pub mod visualize;

#[cfg(test)]
mod testing;

pub use config::PlotConfig;
pub use error::{Error, ParseErrorKind, Result};
pub use types::{Edge, Graph, Node, Section, UnGraph};
