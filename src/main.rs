//! Wordle Calibrator - CLI
//!
//! Entropy-weighted Wordle guessing engine with a simulation-driven weight
//! calibrator.

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use log::{LevelFilter, info, warn};
use rustc_hash::FxHashMap;
use std::io;
use std::path::PathBuf;
use wordle_calibrator::{
    commands::{
        analyze_word, precompute_opening, run_optimization, run_play, run_simulation, solve_word,
    },
    output::{
        print_analysis_result, print_entropy_table, print_optimization_result,
        print_simulation_summary, print_solve_result,
    },
    persist,
    solver::{Context, EngineConfig, GuessSelector, OptimizerConfig, StrategyType},
    wordlists::{load_dictionary, load_frequencies},
};

#[derive(Parser)]
#[command(
    name = "wordle_calibrator",
    about = "Wordle guessing engine with entropy-weighted scoring and a weight calibrator",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line
    #[arg(short, long, global = true, default_value = "data/words.txt")]
    dictionary: PathBuf,

    /// Usage frequency table, `word count` per line
    #[arg(short, long, global = true)]
    frequencies: Option<PathBuf>,

    /// Score weights file
    #[arg(short, long, global = true, default_value = "weights.txt")]
    weights: PathBuf,

    /// Opening entropy cache (CSV); computed and written when missing
    #[arg(long, global = true)]
    entropy_cache: Option<PathBuf>,

    /// Guesses allowed per game
    #[arg(long, global = true, default_value_t = 6)]
    max_guesses: usize,

    /// Exponent of the distinct-letter ratio in the composite score
    #[arg(long, global = true, default_value_t = 1.5)]
    uniqueness_exponent: f64,

    /// Break score ties by usage frequency before the lexically smallest word
    #[arg(long, global = true)]
    prefer_common: bool,

    /// Strategy: composite (default) or disambiguate
    #[arg(short, long, global = true, default_value = "composite")]
    strategy: String,

    /// Enable info logging and detailed reports
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assistant for a live game (default)
    Play,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,
    },

    /// Show the composite score breakdown of a word
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Simulate games on random answers
    Simulate {
        /// Number of games
        #[arg(short = 'n', long, default_value_t = 100)]
        games: usize,

        /// Random seed
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Write the per-game log as CSV
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Grid search the score weights
    Optimize {
        /// Grid spacing in (0, 1]
        #[arg(long, default_value_t = 0.1)]
        step: f64,

        /// Games per grid point
        #[arg(short = 'n', long, default_value_t = 50)]
        games: usize,

        /// Random seed for the answer sample
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Save the best weights to the weights file
        #[arg(long)]
        save: bool,
    },

    /// Compute the opening entropy table and write it as CSV
    Precompute {
        /// Output CSV path
        #[arg(short, long, default_value = "opening_entropy.csv")]
        output: PathBuf,

        /// Number of top words to print
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    if cli.verbose {
        env_logger::builder().filter_level(LevelFilter::Info).init();
        info!("Verbose output enabled (ignoring RUST_LOG environment variable)");
    } else {
        env_logger::init();
    }

    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let ctx = load_context(&cli, true)?;
            let selector = load_selector(&cli, &ctx)?;
            let stdin = io::stdin();
            run_play(&ctx, &selector, &mut stdin.lock(), &mut io::stdout())
                .context("interactive session failed")?;
        }
        Commands::Solve { word } => {
            let ctx = load_context(&cli, true)?;
            let selector = load_selector(&cli, &ctx)?;
            let result = solve_word(&ctx, &selector, &word)?;
            print_solve_result(&result, cli.verbose);
        }
        Commands::Analyze { word } => {
            let ctx = load_context(&cli, cli.entropy_cache.is_some())?;
            let selector = load_selector(&cli, &ctx)?;
            let result = analyze_word(&ctx, selector.scorer(), &word)?;
            print_analysis_result(&result);
        }
        Commands::Simulate {
            games,
            seed,
            output,
        } => {
            let ctx = load_context(&cli, true)?;
            let selector = load_selector(&cli, &ctx)?;
            let report = run_simulation(&ctx, &selector, games, seed, true);
            print_simulation_summary(&report);

            if let Some(path) = output {
                persist::save_simulation_log(&path, &report.records, ctx.config().max_guesses)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("\nSimulation log written to {}", path.display());
            }
        }
        Commands::Optimize {
            step,
            games,
            seed,
            save,
        } => {
            let ctx = load_context(&cli, true)?;
            let config = OptimizerConfig {
                step,
                games_per_point: games,
                seed,
                strategy: StrategyType::from_name(&cli.strategy),
            };
            let result = run_optimization(&ctx, config, true)?;
            print_optimization_result(&result, cli.verbose);

            if save {
                persist::save_weights(&cli.weights, result.best.weights)
                    .with_context(|| format!("failed to write {}", cli.weights.display()))?;
                println!("\nWeights saved to {}", cli.weights.display());
            }
        }
        Commands::Precompute { output, top } => {
            let ctx = load_context(&cli, false)?;
            let table = precompute_opening(&ctx, true);
            persist::save_entropy_cache(&output, &table)
                .with_context(|| format!("failed to write {}", output.display()))?;
            print_entropy_table(&table, top);
            println!("\nOpening entropy written to {}", output.display());
        }
    }

    Ok(())
}

/// Load the dictionary and frequencies, attaching the opening entropy table
/// when `with_opening` is set
fn load_context(cli: &Cli, with_opening: bool) -> Result<Context> {
    let words = load_dictionary(&cli.dictionary)
        .with_context(|| format!("failed to read dictionary {}", cli.dictionary.display()))?;

    let frequencies = match &cli.frequencies {
        Some(path) => load_frequencies(path)
            .with_context(|| format!("failed to read frequencies {}", path.display()))?,
        None => FxHashMap::default(),
    };

    let config = EngineConfig {
        max_guesses: cli.max_guesses,
        uniqueness_exponent: cli.uniqueness_exponent,
        prefer_common_words: cli.prefer_common,
    };
    let ctx = Context::new(words, frequencies, config).with_context(|| {
        format!(
            "cannot build engine from dictionary {}",
            cli.dictionary.display()
        )
    })?;

    if !with_opening {
        return Ok(ctx);
    }

    let Some(path) = &cli.entropy_cache else {
        return Ok(ctx.with_opening_entropy());
    };

    if path.exists() {
        let table = persist::load_entropy_cache(path)
            .with_context(|| format!("failed to read entropy cache {}", path.display()))?;
        if table.covers(ctx.words()) {
            info!("Loaded {} opening entropies from {}", table.len(), path.display());
            return Ok(ctx.with_opening_table(table));
        }
        warn!(
            "Entropy cache {} does not match the dictionary, rebuilding it",
            path.display()
        );
    }

    let ctx = ctx.with_opening_entropy();
    if let Some(table) = ctx.opening_entropy() {
        persist::save_entropy_cache(path, table)
            .with_context(|| format!("failed to write entropy cache {}", path.display()))?;
    }
    Ok(ctx)
}

fn load_selector(cli: &Cli, ctx: &Context) -> Result<GuessSelector> {
    let weights = persist::load_weights(&cli.weights)
        .with_context(|| format!("failed to read weights {}", cli.weights.display()))?;
    info!("Using weights {weights} with {} strategy", cli.strategy);

    Ok(GuessSelector::for_context(
        ctx,
        weights,
        StrategyType::from_name(&cli.strategy),
    ))
}
