use anyhow::Result;
use clap::{Parser, ValueEnum};

use gn_dendrogram::{data, storage, Config, GirvanNewman, TieRule};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TieRuleArg {
    /// Skip tied edges sharing a row or column with the last removal
    RowAndColumn,
    /// Only skip edges already removed
    ExactEdge,
}

impl From<TieRuleArg> for TieRule {
    fn from(arg: TieRuleArg) -> Self {
        match arg {
            TieRuleArg::RowAndColumn => TieRule::RowAndColumn,
            TieRuleArg::ExactEdge => TieRule::ExactEdge,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "gn-dendrogram",
    about = "Girvan-Newman community dendrograms for weighted directed graphs"
)]
struct Cli {
    /// Path to input edge list (`src dst [weight]` per line)
    #[clap(long)]
    input: String,

    /// Output directory for results
    #[clap(long, default_value = "gn_results")]
    output_dir: String,

    /// Stop after this many splits
    #[clap(long)]
    max_splits: Option<usize>,

    /// Filter for removing tied edges
    #[clap(long, value_enum, default_value = "row-and-column")]
    tie_rule: TieRuleArg,

    /// Score edges on a single thread
    #[clap(long)]
    sequential: bool,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0")]
    threads: usize,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    // Set number of threads
    let num_threads = if args.threads > 0 {
        args.threads
    } else {
        num_cpus::get()
    };

    log::info!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    log::info!("Input: {}", args.input);
    log::info!("Output: {}", args.output_dir);

    // 1. Load data
    let original = data::load_edge_list(&args.input)?;

    // 2. Partition a working copy; the original is kept for scoring levels
    let config = Config::new(args.tie_rule.into(), !args.sequential, args.max_splits);
    let mut graph = original.clone();
    let partition = match GirvanNewman::new(config).run(&mut graph) {
        Ok(partition) => partition,
        Err(incomplete) => {
            // Keep the splits recorded before the failure
            log::warn!("Saving partial results: {}", incomplete.error);
            storage::save_results(&incomplete.partial, &original, &args.output_dir)?;
            return Err(incomplete.into());
        }
    };

    let (level, q) = partition.best_level(&original);
    log::info!("Best level {} with modularity {:.4}", level, q);

    // 3. Save results
    storage::save_results(&partition, &original, &args.output_dir)?;

    log::info!("Analysis complete. Results saved to {}", args.output_dir);

    Ok(())
}
