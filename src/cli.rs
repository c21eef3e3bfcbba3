use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;
use tracing::debug;

use crate::config::PlotConfig;
use crate::error::{Error, Result};
use crate::export::{save, write_svg};
use crate::input::from_file;
use crate::visualize::render_svg;

const USAGE: &str = "expected -input=<path> -output=<path>";

#[derive(Parser, Debug)]
#[command(
    name = "graph_plot",
    about = "Plot a graph stored as node and edge lines to SVG or PNG",
    version
)]
pub struct Cli {
    /// Graph data file
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Image to write (.svg or .png), SVG goes to stdout when omitted
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Title template, {start} is replaced by the start node label
    #[arg(long, value_name = "TEMPLATE")]
    title: Option<String>,

    /// Do not draw the legend
    #[arg(long)]
    no_legend: bool,

    /// Draw the axis frame with ticks
    #[arg(long)]
    axes: bool,

    /// Start from the bare style: no title, no legend, axes visible
    #[arg(long, conflicts_with = "config")]
    plain: bool,

    /// TOML file with plot settings, flags take precedence
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Everything one run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub config: PlotConfig,
}

impl Cli {
    pub fn into_options(self) -> Result<PlotOptions> {
        let input = self
            .input
            .ok_or_else(|| Error::Usage(format!("no input file, {USAGE}")))?;

        let mut config = match (&self.config, self.plain) {
            (Some(path), _) => PlotConfig::from_file(path)?,
            (None, true) => PlotConfig::plain(),
            (None, false) => PlotConfig::default(),
        };
        if let Some(title) = self.title {
            config.title = Some(title);
        }
        if self.no_legend {
            config.show_legend = false;
        }
        if self.axes {
            config.show_axes = true;
        }

        Ok(PlotOptions {
            input,
            output: self.output,
            config,
        })
    }
}

/// Parses `args` (program name first) and plots the graph.
///
/// Fewer than two arguments is a usage error. Help and version requests
/// print and succeed.
pub fn run<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    if args.len() < 3 && !wants_info(&args) {
        return Err(Error::Usage(USAGE.to_string()));
    }

    let cli = match Cli::try_parse_from(normalize_args(args)) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print().map_err(|e| Error::io("<stdout>", e))?;
            return Ok(());
        }
        Err(e) => return Err(Error::Usage(e.to_string().trim_end().to_string())),
    };
    debug!(?cli, "arguments parsed");

    plot(&cli.into_options()?)
}

/// Loads the input and writes the figure.
pub fn plot(options: &PlotOptions) -> Result<()> {
    let graph = from_file(&options.input)?;
    match &options.output {
        Some(path) => save(&graph, &options.config, path),
        None => write_svg(&render_svg(&graph, &options.config), None),
    }
}

/// Accepts `-input=x` next to the usual `--input=x`.
fn normalize_args(args: Vec<String>) -> Vec<String> {
    args.into_iter()
        .enumerate()
        .map(|(i, arg)| {
            if i > 0 && arg.len() > 2 && arg.starts_with('-') && !arg.starts_with("--") {
                format!("-{arg}")
            } else {
                arg
            }
        })
        .collect()
}

fn wants_info(args: &[String]) -> bool {
    args.iter().skip(1).any(|arg| {
        matches!(
            arg.as_str(),
            "-h" | "-help" | "--help" | "-V" | "-version" | "--version"
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn parse(list: &[&str]) -> PlotOptions {
        Cli::try_parse_from(normalize_args(args(list)))
            .unwrap()
            .into_options()
            .unwrap()
    }

    #[test]
    fn test_normalize_args() {
        assert_eq!(
            normalize_args(args(&["-prog", "-input=a", "--output=b", "-h", "-", "value"])),
            args(&["-prog", "--input=a", "--output=b", "-h", "-", "value"])
        );
    }

    #[test]
    fn test_single_dash_flags() {
        let options = parse(&["graph_plot", "-input=Graph.dat", "-output=graph.png"]);
        assert_eq!(
            options,
            PlotOptions {
                input: PathBuf::from("Graph.dat"),
                output: Some(PathBuf::from("graph.png")),
                config: PlotConfig::default(),
            }
        );
    }

    #[test]
    fn test_overrides() {
        let options = parse(&[
            "graph_plot",
            "-input=Graph.dat",
            "-title=Route {start}",
            "-no-legend",
            "-axes",
        ]);
        assert_eq!(options.output, None);
        assert_eq!(options.config.title.as_deref(), Some("Route {start}"));
        assert!(!options.config.show_legend);
        assert!(options.config.show_axes);
    }

    #[test]
    fn test_plain() {
        let options = parse(&["graph_plot", "-input=Graph.dat", "-plain"]);
        assert_eq!(options.config, PlotConfig::plain());
    }

    #[test]
    fn test_too_few_arguments() {
        assert!(matches!(run(args(&["graph_plot"])), Err(Error::Usage(_))));
        assert!(matches!(
            run(args(&["graph_plot", "-input=Graph.dat"])),
            Err(Error::Usage(_))
        ));
    }

    #[test]
    fn test_input_required() {
        assert!(matches!(
            run(args(&["graph_plot", "-output=a.svg", "-axes"])),
            Err(Error::Usage(_))
        ));
    }

    #[test]
    fn test_unknown_flag() {
        assert!(matches!(
            run(args(&["graph_plot", "-input=a", "-colour=red"])),
            Err(Error::Usage(_))
        ));
    }

    #[test]
    fn test_missing_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("Graph.dat");
        let output = dir.path().join("graph.svg");
        let result = run(vec![
            "graph_plot".to_string(),
            format!("-input={}", input.display()),
            format!("-output={}", output.display()),
        ]);
        assert!(matches!(result, Err(Error::InputNotFound(_))));
        assert!(!output.exists());
    }
}
