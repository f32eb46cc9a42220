//! Replays a command script against an AVL tree of words.
//!
//! ```text
//! dendrologist <order-code> <command-file>
//! ```
//!
//! Set `RUST_LOG=debug` (or `trace` to see every rotation) for a log on stderr.

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use dendrology::order::OrderCode;
use dendrology::script::{self, Interpreter};

const ORDER_CODES: &str = "\
Order codes:
   0  increasing length, then reverse lexicographic
  -1  reverse lexicographic
   1  lexicographic
  -2  decreasing length
   2  increasing length
  -3  decreasing length, then reverse lexicographic
   3  increasing length, then lexicographic";

#[derive(Debug, Parser)]
#[command(
    name = "dendrologist",
    version,
    about = "Builds an AVL tree of words from a command script",
    after_help = ORDER_CODES,
    allow_negative_numbers = true
)]
struct Cli {
    /// How to order the words, from -3 to 3 (see below).
    order_code: OrderCode,

    /// File of whitespace-separated commands: stats, traverse, paths, insert <word>,
    /// delete <word>.
    command_file: PathBuf,
}

/// Initialize the logger. Defaults to warnings only; `RUST_LOG` overrides it.
fn initialize_logger() {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

fn main() -> anyhow::Result<()> {
    initialize_logger();
    let cli = Cli::parse();

    let script = fs::read_to_string(&cli.command_file)
        .with_context(|| format!("reading command file {}", cli.command_file.display()))?;
    let commands = script::parse(&script)
        .with_context(|| format!("parsing command file {}", cli.command_file.display()))?;
    info!("ordering words by {}", cli.order_code);

    let mut interpreter = Interpreter::new(cli.order_code);
    let stdout = io::stdout();
    interpreter
        .run(&commands, &mut stdout.lock())
        .context("writing report")?;
    Ok(())
}
