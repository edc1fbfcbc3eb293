//! CLI entrypoint for the seqbench harness.
//!
//! Invoked without arguments it measures the compiled-in sizes and run count and
//! prints the ANSI-styled comparison table to stdout.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use seqbench_harness::structured_log::LogEmitter;
use seqbench_harness::{Comparison, HarnessConfig};

/// Compare contiguous and dynamic integer sequences operation by operation.
#[derive(Debug, Parser)]
#[command(name = "seqbench")]
#[command(about = "Micro-benchmark harness for contiguous vs dynamic sequences")]
struct Cli {
    /// Sequence size to measure; repeat for several (default: 1000, 10000, 100000, 1000000).
    #[arg(long = "size", value_name = "N")]
    sizes: Vec<usize>,
    /// Repetitions averaged per cell (default: 100).
    #[arg(long)]
    runs: Option<u32>,
    /// Seed the value source for reproducible contents.
    #[arg(long)]
    seed: Option<u64>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Ansi)]
    format: Format,
    /// Write a JSONL progress log to this path.
    #[arg(long)]
    log: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Table with ANSI style tokens.
    Ansi,
    /// Table without style tokens.
    Plain,
    /// JSON document.
    Json,
}

impl Cli {
    fn config(&self) -> HarnessConfig {
        let mut config = HarnessConfig::default();
        if !self.sizes.is_empty() {
            config.sizes.clone_from(&self.sizes);
        }
        if let Some(runs) = self.runs {
            config.runs = runs;
        }
        config.seed = self.seed;
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = cli.config();
    config.validate()?;

    if let Some(seed) = config.seed {
        seqbench_core::rng::reseed(seed);
    }

    eprintln!(
        "Measuring {} cells ({} sizes x {} implementations), {} runs each",
        config.cell_count(),
        config.sizes.len(),
        seqbench_core::SeqKind::COUNT,
        config.runs
    );

    let comparison = match &cli.log {
        Some(path) => {
            let run_id = format!("seqbench-{}", std::process::id());
            let mut log = LogEmitter::to_file(path, &run_id)?;
            let comparison = Comparison::new_logged(&config.sizes, config.runs, &mut log)?;
            eprintln!("Wrote progress log to {}", path.display());
            comparison
        }
        None => Comparison::new(&config.sizes, config.runs)?,
    };

    match cli.format {
        Format::Ansi => comparison.print()?,
        Format::Plain => print!("{}", comparison.to_report().render_plain()),
        Format::Json => println!("{}", comparison.to_report().to_json()),
    }

    Ok(())
}
