// hanoi-site: Page manifest for a static site with one page per state.
//
// For the direct model each page lists its neighbouring states together with
// the disk and pegs of the move. For the select model each page carries the
// target of a click on each of the three pegs, or null.
//
// Usage:
//   hanoi-site [--model direct|select] [--pretty]

use clap::Parser;
use tracing::info;

use hanoi_cli::Model;

#[derive(Parser, Debug)]
#[command(name = "hanoi-site", about = "Generate the per-state page manifest")]
struct Cli {
    /// Interaction model the pages are generated for
    #[arg(long, value_enum, default_value_t = Model::Direct)]
    model: Model,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    hanoi_cli::init_tracing();
    let cli = Cli::parse();

    let manifest = hanoi_cli::manifest(cli.model);
    info!(model = ?cli.model, pages = manifest.page_count(), "built page manifest");
    hanoi_cli::write_json(&manifest, cli.pretty)
}
