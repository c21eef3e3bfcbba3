use std::io::Write;
use std::path::Path;

use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg;
use tracing::{debug, info};

use crate::config::PlotConfig;
use crate::error::{Error, Result};
use crate::types::Graph;
use crate::visualize::render_svg;

/// Image formats the figure can be saved as.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    /// Picks the format from the file extension, ignoring case.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match extension.as_str() {
            "svg" => Ok(OutputFormat::Svg),
            "png" => Ok(OutputFormat::Png),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Renders `graph` and saves it to `path`, in the format its extension names.
///
/// Nothing is written when the extension is not supported.
pub fn save(graph: &Graph, config: &PlotConfig, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let format = OutputFormat::from_path(path)?;
    let svg = render_svg(graph, config);
    match format {
        OutputFormat::Svg => write_svg(&svg, Some(path))?,
        OutputFormat::Png => {
            let png = rasterize(&svg)?;
            std::fs::write(path, png).map_err(|e| Error::io(path, e))?;
        }
    }
    info!(path = %path.display(), ?format, "figure saved");
    Ok(())
}

/// Writes an SVG document to `output`, or to stdout when there is none.
pub fn write_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, svg).map_err(|e| Error::io(path, e)),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(svg.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| Error::io("<stdout>", e))
        }
    }
}

/// Converts an SVG document into PNG bytes, using the system fonts for text.
pub fn rasterize(svg: &str) -> Result<Vec<u8>> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    debug!(faces = options.fontdb.len(), "fonts loaded");

    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|err| Error::Render(format!("failed to parse generated SVG: {err}")))?;
    let size = tree.size().to_int_size();
    let mut pixmap = Pixmap::new(size.width(), size.height()).ok_or_else(|| {
        Error::Render(format!(
            "failed to allocate {}x{} surface",
            size.width(),
            size.height()
        ))
    })?;

    resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|err| Error::Render(format!("failed to encode PNG: {err}")))
}
