// hanoi-states: List every state of an interaction model.
//
// Prints one encoded state per line, or a JSON array with --json.
//
// Usage:
//   hanoi-states [--model direct|select] [--json]

use std::io::{self, Write};

use clap::Parser;
use tracing::info;

use hanoi_cli::Model;

#[derive(Parser, Debug)]
#[command(name = "hanoi-states", about = "List every Tower of Hanoi state of a model")]
struct Cli {
    /// Interaction model whose states are listed
    #[arg(long, value_enum, default_value_t = Model::Direct)]
    model: Model,

    /// Print a JSON array instead of one state per line
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    hanoi_cli::init_tracing();
    let cli = Cli::parse();

    let states = hanoi_cli::state_names(cli.model);
    info!(model = ?cli.model, count = states.len(), "enumerated states");

    if cli.json {
        hanoi_cli::write_json(&states, false)
    } else {
        let mut text = states.join("\n");
        text.push('\n');
        io::stdout().lock().write_all(text.as_bytes())?;
        Ok(())
    }
}
