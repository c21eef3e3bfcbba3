use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Graph;

/// Title used by [`PlotConfig::default`].
pub const DEFAULT_TITLE: &str = "Dijkstra Graph Plot (Start Node: {start})";

/// Placeholder in a title template replaced by the start node label.
pub const START_PLACEHOLDER: &str = "{start}";

/// How a graph is drawn.
///
/// Sizes in points are converted at 100 px per inch, so a 1200x1200
/// figure matches a 12x12 inch canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Title template, see [`START_PLACEHOLDER`]. `None` draws no title.
    pub title: Option<String>,
    pub show_legend: bool,
    pub show_axes: bool,
    /// Figure size in pixels.
    pub width: u32,
    pub height: u32,
    /// Node marker area in pt^2.
    pub node_size: f64,
    /// Edge stroke width in pt.
    pub line_width: f64,
    pub node_font_size: f64,
    pub edge_font_size: f64,
    pub title_font_size: f64,
    /// Vertical distance between a label and its anchor in pt.
    pub label_offset: f64,
    pub marked_color: String,
    pub unmarked_color: String,
    pub background: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            title: Some(DEFAULT_TITLE.to_string()),
            show_legend: true,
            show_axes: false,
            width: 1200,
            height: 1200,
            node_size: 100.0,
            line_width: 4.0,
            node_font_size: 16.0,
            edge_font_size: 14.0,
            title_font_size: 30.0,
            label_offset: 10.0,
            marked_color: "red".to_string(),
            unmarked_color: "blue".to_string(),
            background: "white".to_string(),
        }
    }
}

impl PlotConfig {
    /// Bare figure: no title, no legend, axes visible and smaller markers.
    pub fn plain() -> Self {
        PlotConfig {
            title: None,
            show_legend: false,
            show_axes: true,
            node_size: 80.0,
            ..PlotConfig::default()
        }
    }

    /// Loads a TOML file. Keys that are not present keep their default.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        toml::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The title for `graph`, with the start node label substituted.
    ///
    /// A graph without nodes shows `none` as its start node.
    pub fn title_for(&self, graph: &Graph) -> Option<String> {
        let template = self.title.as_deref()?;
        let start = graph.start_node().map_or("none", |node| node.label.as_str());
        Some(template.replace(START_PLACEHOLDER, start))
    }

    pub fn color(&self, marked: bool) -> &str {
        if marked {
            &self.marked_color
        } else {
            &self.unmarked_color
        }
    }
}
