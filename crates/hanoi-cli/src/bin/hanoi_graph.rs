// hanoi-graph: Export the laid-out state graph as JSON.
//
// The output holds the SVG viewBox, node geometry, one record per state with
// its position, and one coloured record per directed move.
//
// Usage:
//   hanoi-graph [--scale N] [--node-size N] [--padding N] [--pretty]
//
// Environment:
//   HANOI_SCALE, HANOI_NODE_SIZE, HANOI_PADDING override the defaults.

use clap::Parser;
use tracing::info;

use hanoi_cli::LayoutArgs;

#[derive(Parser, Debug)]
#[command(name = "hanoi-graph", about = "Export the Sierpinski layout of the state graph")]
struct Cli {
    #[command(flatten)]
    layout: LayoutArgs,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    hanoi_cli::init_tracing();
    let cli = Cli::parse();

    let export = hanoi_cli::export_graph(&cli.layout)?;
    info!(
        nodes = export.nodes.len(),
        edges = export.edges.len(),
        view_box = %export.view_box,
        "exported graph"
    );
    hanoi_cli::write_json(&export, cli.pretty)
}
