mod game;
mod ui;

use clap::{Parser, Subcommand, ValueEnum};
use tiles_core::level;
use tiles_core::search::Strategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    /// Clairvoyant debug searcher (reads the real RNG stream)
    Oracle,
    Minimax,
    AlphaBeta,
    CachingMinimax,
    CachingAlphaBeta,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Strategy {
        match arg {
            StrategyArg::Oracle => Strategy::Oracle,
            StrategyArg::Minimax => Strategy::Minimax,
            StrategyArg::AlphaBeta => Strategy::AlphaBeta,
            StrategyArg::CachingMinimax => Strategy::CachingMinimax,
            StrategyArg::CachingAlphaBeta => Strategy::CachingAlphaBeta,
        }
    }
}

#[derive(Parser, Debug, Clone)]
struct EngineParams {
    /// RNG seed; a random seed is drawn when omitted
    #[arg(long)]
    seed: Option<u32>,

    #[arg(short, long, default_value_t = level::DEFAULT_LEVEL)]
    level: usize,

    #[arg(long, value_enum, default_value_t = StrategyArg::CachingAlphaBeta)]
    strategy: StrategyArg,
}

#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Option<SubCommands>,

    #[command(flatten)]
    engine_params: EngineParams,
}

#[derive(Debug, Subcommand)]
enum SubCommands {
    /// Headless autoplay: the engine plays itself and prints the outcome
    Auto {
        /// Stop after this many moves (default: play until finished)
        #[arg(long)]
        moves: Option<u64>,

        #[command(flatten)]
        engine_params: EngineParams,
    },
}

fn main() {
    let args = Cli::parse();
    match args.command {
        Some(SubCommands::Auto {
            moves,
            engine_params,
        }) => {
            validate_level(engine_params.level);
            ui::run_auto(&engine_params, moves);
        }
        None => {
            validate_level(args.engine_params.level);
            if let Err(err) = ui::ui_loop(&args.engine_params) {
                eprintln!("Failed to run UI: {err}");
                std::process::exit(1);
            }
        }
    }
}

fn validate_level(level: usize) {
    if level >= level::level_count() {
        eprintln!(
            "Invalid level {level}; valid range is 0 to {}",
            level::level_count() - 1
        );
        std::process::exit(1);
    }
}
