/// Example of plotting a graph given as a string.
/// I use it with `cargo run --example plot > graph.svg`
use graph_plot::PlotConfig;
use graph_plot::input::from_str;
use graph_plot::visualize::render_svg;

fn main() {
    // S --3-- A
    // |       |
    // 7       2
    // |       |
    // B --1-- T
    let input = "
            0 0.0 5.0 S 1
            1 5.0 5.0 A 1
            2 0.0 0.0 B 0
            3 5.0 0.0 T 1

            0.0 5.0 5.0 5.0 3 1
            0.0 5.0 0.0 0.0 7 0
            5.0 5.0 5.0 0.0 2 1
            0.0 0.0 5.0 0.0 1 0
            ";

    let graph = from_str(input).expect("inline graph should parse");

    print!("{}", render_svg(&graph, &PlotConfig::default()));
}
