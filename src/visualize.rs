use std::fmt::Write;

use tracing::warn;

use crate::config::PlotConfig;
use crate::types::Graph;

/// Pixels per typographic point (100 dpi).
pub const PX_PER_PT: f64 = 100.0 / 72.0;

const FONT_FAMILY: &str = "DejaVu Sans, Arial, sans-serif";
const TICK_FONT_SIZE: f64 = 10.0;
const TICK_LENGTH: f64 = 3.5;
const LEGEND_FONT_SIZE: f64 = 14.0;
const LEGEND_MARKER_SIZE: f64 = 15.0;
// Relative padding added around the data on each axis.
const DATA_MARGIN: f64 = 0.05;
const MAX_TICKS: usize = 100;

/// Generates an SVG document showing `graph`.
///
/// Edges are drawn below nodes. Marked items use `config.marked_color`,
/// the rest `config.unmarked_color`. Node labels sit above the node,
/// edge labels above the middle of the edge.
///
/// Items with a non-finite coordinate are skipped.
pub fn render_svg(graph: &Graph, config: &PlotConfig) -> String {
    let frame = Frame::new(graph, config);
    let (width, height) = (config.width, config.height);
    let mut output = String::new();

    writeln!(
        output,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    )
    .unwrap();
    writeln!(
        output,
        "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        escape_xml(&config.background)
    )
    .unwrap();

    if config.show_axes {
        draw_axes(&mut output, &frame);
    }

    let line_width = config.line_width * PX_PER_PT;
    let offset = config.label_offset * PX_PER_PT;

    writeln!(output, "  <g id=\"edges\">").unwrap();
    for (i, edge) in graph.edges.iter().enumerate() {
        let (Some((x1, y1)), Some((x2, y2))) = (frame.map(edge.from()), frame.map(edge.to())) else {
            warn!(edge = i, label = %edge.label, "skipping edge with non-finite coordinates");
            continue;
        };
        writeln!(
            output,
            "    <line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" stroke=\"{}\" stroke-width=\"{line_width:.2}\" stroke-linecap=\"square\"/>",
            escape_xml(config.color(edge.marked))
        )
        .unwrap();
        let (mx, my) = ((x1 + x2) / 2.0, (y1 + y2) / 2.0);
        draw_text(&mut output, mx, my - offset, config.edge_font_size, "middle", &edge.label);
    }
    writeln!(output, "  </g>").unwrap();

    let radius = config.node_size.max(0.0).sqrt() / 2.0 * PX_PER_PT;
    writeln!(output, "  <g id=\"nodes\">").unwrap();
    for node in &graph.nodes {
        let Some((x, y)) = frame.map(node.position()) else {
            warn!(id = node.id, label = %node.label, "skipping node with non-finite coordinates");
            continue;
        };
        writeln!(
            output,
            "    <circle cx=\"{x:.2}\" cy=\"{y:.2}\" r=\"{radius:.2}\" fill=\"{}\"/>",
            escape_xml(config.color(node.marked))
        )
        .unwrap();
        draw_text(&mut output, x, y - offset, config.node_font_size, "middle", &node.label);
    }
    writeln!(output, "  </g>").unwrap();

    if let Some(title) = config.title_for(graph) {
        let x = (frame.left + frame.right) / 2.0;
        let y = frame.top - 6.0 * PX_PER_PT;
        draw_text(&mut output, x, y, config.title_font_size, "middle", &title);
    }

    if config.show_legend {
        draw_legend(&mut output, graph, config, &frame);
    }

    writeln!(output, "</svg>").unwrap();
    output
}

/// Maps data coordinates onto the plot area of the figure.
#[derive(Debug, Clone)]
struct Frame {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
    x_range: (f64, f64),
    y_range: (f64, f64),
}

impl Frame {
    fn new(graph: &Graph, config: &PlotConfig) -> Self {
        let (w, h) = (config.width as f64, config.height as f64);
        let (x_range, y_range) = data_bounds(graph.points());
        Frame {
            left: 0.125 * w,
            right: 0.9 * w,
            top: 0.12 * h,
            bottom: 0.89 * h,
            x_range: pad(x_range),
            y_range: pad(y_range),
        }
    }

    /// Figure position of a data point, `None` for non-finite input.
    fn map(&self, (x, y): (f64, f64)) -> Option<(f64, f64)> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        Some((self.map_x(x), self.map_y(y)))
    }

    fn map_x(&self, x: f64) -> f64 {
        self.left + fraction(x, self.x_range) * (self.right - self.left)
    }

    // SVG grows downwards, the data grows upwards.
    fn map_y(&self, y: f64) -> f64 {
        self.bottom - fraction(y, self.y_range) * (self.bottom - self.top)
    }

    fn contains(&self, (x, y): (f64, f64)) -> bool {
        self.left <= x && x <= self.right && self.top <= y && y <= self.bottom
    }
}

/// Smallest and largest finite coordinate per axis.
fn data_bounds(points: impl Iterator<Item = (f64, f64)>) -> ((f64, f64), (f64, f64)) {
    let mut x_range = (f64::INFINITY, f64::NEG_INFINITY);
    let mut y_range = (f64::INFINITY, f64::NEG_INFINITY);
    for (x, y) in points.filter(|(x, y)| x.is_finite() && y.is_finite()) {
        x_range = (x_range.0.min(x), x_range.1.max(x));
        y_range = (y_range.0.min(y), y_range.1.max(y));
    }
    if x_range.0 > x_range.1 {
        return ((0.0, 1.0), (0.0, 1.0));
    }
    (x_range, y_range)
}

/// Position of `v` inside `range`, 0 at the low end and 1 at the high end.
///
/// Works on halves so that the span of any finite range stays finite.
fn fraction(v: f64, (lo, hi): (f64, f64)) -> f64 {
    (v / 2.0 - lo / 2.0) / (hi / 2.0 - lo / 2.0)
}

/// Adds the data margin, or widens a range too narrow to divide by.
///
/// The result always has `hi / 2 - lo / 2 > 0` and finite ends.
fn pad((lo, hi): (f64, f64)) -> (f64, f64) {
    let half_span = hi / 2.0 - lo / 2.0;
    if half_span > 0.0 {
        let margin = half_span * (2.0 * DATA_MARGIN);
        let padded = (lo - margin, hi + margin);
        if padded.0.is_finite() && padded.1.is_finite() {
            return padded;
        }
        return (lo, hi);
    }
    // Wide enough to survive rounding at the magnitude of the value.
    let widen = 1f64.max(lo.abs().max(hi.abs()) * 1e-9);
    let low = if (lo - widen).is_finite() { lo - widen } else { lo };
    let high = if (hi + widen).is_finite() { hi + widen } else { hi };
    (low, high)
}

/// Tick positions covering `range` with a 1, 2 or 5 times power of ten step.
///
/// Yields no ticks when no usable step exists or more than [`MAX_TICKS`] would be drawn.
fn ticks((lo, hi): (f64, f64)) -> (Vec<f64>, f64) {
    let raw = (hi / 2.0 - lo / 2.0) / 2.5;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = match raw / magnitude {
        r if r <= 1.0 => magnitude,
        r if r <= 2.0 => 2.0 * magnitude,
        r if r <= 5.0 => 5.0 * magnitude,
        _ => 10.0 * magnitude,
    };
    if !step.is_finite() || step <= 0.0 {
        return (Vec::new(), step);
    }
    let first = (lo / step).ceil();
    let last = (hi / step).floor();
    if !first.is_finite() || !last.is_finite() || !(0.0..=MAX_TICKS as f64).contains(&(last - first)) {
        return (Vec::new(), step);
    }
    let values = (first as i64..=last as i64).map(|i| i as f64 * step).collect();
    (values, step)
}

fn tick_label(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 {
        0
    } else {
        (-step.log10()).ceil() as usize
    };
    // Avoids printing "-0".
    let value = if value.abs() < step / 2.0 { 0.0 } else { value };
    format!("{value:.decimals$}")
}

fn draw_axes(output: &mut String, frame: &Frame) {
    let tick = TICK_LENGTH * PX_PER_PT;
    let font = TICK_FONT_SIZE * PX_PER_PT;

    writeln!(
        output,
        "  <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"none\" stroke=\"black\" stroke-width=\"1\"/>",
        frame.left,
        frame.top,
        frame.right - frame.left,
        frame.bottom - frame.top
    )
    .unwrap();

    let (xs, x_step) = ticks(frame.x_range);
    for x in xs {
        let px = frame.map_x(x);
        writeln!(
            output,
            "  <line x1=\"{px:.2}\" y1=\"{:.2}\" x2=\"{px:.2}\" y2=\"{:.2}\" stroke=\"black\" stroke-width=\"1\"/>",
            frame.bottom,
            frame.bottom + tick
        )
        .unwrap();
        draw_text(output, px, frame.bottom + tick + font, TICK_FONT_SIZE, "middle", &tick_label(x, x_step));
    }

    let (ys, y_step) = ticks(frame.y_range);
    for y in ys {
        let py = frame.map_y(y);
        writeln!(
            output,
            "  <line x1=\"{:.2}\" y1=\"{py:.2}\" x2=\"{:.2}\" y2=\"{py:.2}\" stroke=\"black\" stroke-width=\"1\"/>",
            frame.left - tick,
            frame.left
        )
        .unwrap();
        draw_text(output, frame.left - 2.0 * tick, py + font / 3.0, TICK_FONT_SIZE, "end", &tick_label(y, y_step));
    }
}

const LEGEND_ENTRIES: [(&str, bool, bool); 4] = [
    ("Unmarked Node", false, false),
    ("Marked Node", true, false),
    ("Unmarked Edge", false, true),
    ("Marked Edge", true, true),
];

/// Draws the legend into the corner of the plot area that hides the fewest points.
fn draw_legend(output: &mut String, graph: &Graph, config: &PlotConfig, frame: &Frame) {
    let font = LEGEND_FONT_SIZE * PX_PER_PT;
    let row = 1.6 * font;
    let gap = 0.5 * font;
    let handle = 2.0 * font;
    let longest = LEGEND_ENTRIES.iter().map(|(text, ..)| text.len()).max().unwrap_or(0);
    let width = gap + handle + gap + 0.6 * font * longest as f64 + gap;
    let height = 2.0 * gap + row * LEGEND_ENTRIES.len() as f64;
    let inset = 0.5 * font;

    let corners = [
        (frame.right - inset - width, frame.top + inset),
        (frame.left + inset, frame.top + inset),
        (frame.left + inset, frame.bottom - inset - height),
        (frame.right - inset - width, frame.bottom - inset - height),
    ];
    let points: Vec<_> = graph
        .points()
        .chain(graph.edges.iter().map(|e| e.midpoint()))
        .filter_map(|p| frame.map(p))
        .filter(|&p| frame.contains(p))
        .collect();
    let hidden = |&(x, y): &(f64, f64)| {
        points
            .iter()
            .filter(|&&(px, py)| x <= px && px <= x + width && y <= py && py <= y + height)
            .count()
    };
    // min_by_key keeps the first corner on ties.
    let (x, y) = corners.iter().copied().min_by_key(|c| hidden(c)).unwrap_or(corners[0]);

    writeln!(output, "  <g id=\"legend\">").unwrap();
    writeln!(
        output,
        "    <rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{width:.2}\" height=\"{height:.2}\" rx=\"4\" fill=\"white\" fill-opacity=\"0.8\" stroke=\"#cccccc\"/>"
    )
    .unwrap();
    for (i, (text, marked, is_edge)) in LEGEND_ENTRIES.iter().enumerate() {
        let cy = y + gap + row * (i as f64 + 0.5);
        let color = escape_xml(config.color(*marked));
        if *is_edge {
            writeln!(
                output,
                "    <line x1=\"{:.2}\" y1=\"{cy:.2}\" x2=\"{:.2}\" y2=\"{cy:.2}\" stroke=\"{color}\" stroke-width=\"{:.2}\"/>",
                x + gap,
                x + gap + handle,
                config.line_width * PX_PER_PT
            )
            .unwrap();
        } else {
            writeln!(
                output,
                "    <circle cx=\"{:.2}\" cy=\"{cy:.2}\" r=\"{:.2}\" fill=\"{color}\"/>",
                x + gap + handle / 2.0,
                LEGEND_MARKER_SIZE / 2.0 * PX_PER_PT
            )
            .unwrap();
        }
        draw_text(output, x + 2.0 * gap + handle, cy + font / 3.0, LEGEND_FONT_SIZE, "start", text);
    }
    writeln!(output, "  </g>").unwrap();
}

fn draw_text(output: &mut String, x: f64, y: f64, size_pt: f64, anchor: &str, text: &str) {
    writeln!(
        output,
        "    <text x=\"{x:.2}\" y=\"{y:.2}\" font-family=\"{FONT_FAMILY}\" font-size=\"{:.2}\" text-anchor=\"{anchor}\">{}</text>",
        size_pt * PX_PER_PT,
        escape_xml(text)
    )
    .unwrap();
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
