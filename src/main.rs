use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use tally::count;
use tally::logging;
use tracing::debug;

/// Count word frequencies in parallel
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Count word frequencies with a MapReduce-style worker pool", long_about = None)]
struct Cli {
    /// Input file; reads piped stdin when omitted
    input: Option<PathBuf>,

    /// Number of parallel map workers (default: available CPU parallelism)
    #[arg(short, long)]
    workers: Option<usize>,

    /// Emit the ranked result as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let text = read_input(&cli)?;
    let workers = cli.workers.unwrap_or_else(default_workers);
    debug!(
        "Counting {} bytes of input with {} workers",
        text.len(),
        workers
    );

    let ranked = count::count(&text, workers).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else {
        for entry in &ranked {
            println!("{:>8}  {}", entry.count, entry.word);
        }
    }

    Ok(())
}

/// Read the document from the input file, or from stdin when piped.
///
/// Entirely absent input is an error; empty content is not, and produces an
/// empty ranked result downstream.
fn read_input(cli: &Cli) -> Result<String> {
    match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut stdin = std::io::stdin();
            if stdin.is_terminal() {
                bail!("no input supplied: pass a file or pipe text on stdin");
            }
            let mut text = String::new();
            stdin
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn default_workers() -> usize {
    std::thread::available_parallelism().map_or(1, |n| n.get())
}
