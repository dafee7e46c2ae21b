// hanoi-moves: Legal moves out of Tower of Hanoi states.
//
// Reads encoded states from the arguments, or from stdin (one per line) when
// none are given, and prints the legal actions out of each. Invalid states
// are reported on stderr and skipped; the exit status is non-zero if any
// input was rejected.
//
// Usage:
//   hanoi-moves [--model direct|select] [--json] [STATE...]

use std::io::{self, BufRead, Write};

use anyhow::{Context, bail};
use clap::Parser;
use tracing::warn;

use hanoi_cli::{Model, MoveRecord};

#[derive(Parser, Debug)]
#[command(name = "hanoi-moves", about = "Print the legal moves out of Tower of Hanoi states")]
struct Cli {
    /// Interaction model used to interpret the states
    #[arg(long, value_enum, default_value_t = Model::Direct)]
    model: Model,

    /// Print one JSON array of moves per input line
    #[arg(long)]
    json: bool,

    /// Encoded states, e.g. `abca`; read from stdin when omitted
    states: Vec<String>,
}

fn print_moves(
    out: &mut impl Write,
    state: &str,
    moves: &[MoveRecord],
    json: bool,
) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer(&mut *out, moves)?;
        writeln!(out)?;
    } else if moves.is_empty() {
        writeln!(out, "{state}: (no moves)")?;
    } else {
        for record in moves {
            writeln!(out, "{}", record.describe())?;
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    hanoi_cli::init_tracing();
    let cli = Cli::parse();

    let inputs: Vec<String> = if cli.states.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<Result<_, _>>()
            .context("failed to read states from stdin")?
    } else {
        cli.states
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut rejected = 0usize;

    for line in &inputs {
        let state = line.trim();
        if state.is_empty() {
            continue;
        }
        match hanoi_cli::moves_from(state, cli.model) {
            Ok(moves) => print_moves(&mut out, state, &moves, cli.json)?,
            Err(e) => {
                warn!(state, error = %e, "rejected state");
                rejected += 1;
            }
        }
    }
    out.flush()?;

    if rejected > 0 {
        bail!("{rejected} invalid state(s)");
    }
    Ok(())
}
