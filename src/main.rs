//! Chain Reaction against (or between) negamax AIs
//!
//! Opens a window by default; `--headless --ai-vs-ai` plays in the terminal.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::{error, info};

use chain_reaction::config::{DEFAULT_DEPTH, DEFAULT_HARD_CEILING};
use chain_reaction::ui::{ChainReactionApp, TerminalView};
use chain_reaction::{EngineConfig, Game, GameConfig, GameError, Heuristic, ResultLog};

#[derive(Parser, Debug)]
#[command(name = "chain-reaction", about = "Chain Reaction with a negamax AI")]
struct Args {
    /// Search depth in plies
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    ai_depth: u32,

    /// Per-move search budget in seconds (unlimited when omitted)
    #[arg(long)]
    time_limit: Option<f64>,

    /// Leaf evaluation: difference, weighted, frontier, mobility or imminent
    #[arg(long, default_value_t = Heuristic::default())]
    heuristic: Heuristic,

    /// Let the AI play Red as well
    #[arg(long)]
    ai_vs_ai: bool,

    /// Number of consecutive games
    #[arg(long, default_value_t = 1)]
    games: u32,

    /// Append one CSV row per finished game to this file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Seconds to wait for a search before playing a random move
    #[arg(long, default_value_t = DEFAULT_HARD_CEILING.as_secs_f64())]
    hard_ceiling: f64,

    /// Play in the terminal instead of a window
    #[arg(long, requires = "ai_vs_ai")]
    headless: bool,
}

impl Args {
    fn into_config(self) -> Result<GameConfig, String> {
        let time_limit = self.time_limit.map(seconds).transpose()?;
        let hard_ceiling = seconds(self.hard_ceiling)?;
        Ok(GameConfig {
            engine: EngineConfig {
                depth: self.ai_depth,
                time_limit,
                heuristic: self.heuristic,
            },
            ai_vs_ai: self.ai_vs_ai,
            games: self.games,
            csv: self.csv,
            hard_ceiling,
            headless: self.headless,
        })
    }
}

fn seconds(value: f64) -> Result<Duration, String> {
    Duration::try_from_secs_f64(value).map_err(|_| format!("invalid duration: {value} seconds"))
}

/// Play every game in the terminal, recording each result.
fn run_headless(config: &GameConfig, mut results: Option<ResultLog>) -> Result<(), GameError> {
    let mut view = TerminalView::stdout();

    for number in 1..=config.games {
        info!("starting game {number} of {}", config.games);
        let game = Game::play_out(config, &mut view)?;

        let Some(winner) = game.winner() else {
            continue;
        };
        if let Some(log) = &mut results {
            log.record(number, winner, game.board())?;
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Args::parse().into_config()?;
    info!(
        "depth {} heuristic {} time limit {:?} ceiling {:?}",
        config.engine.depth, config.engine.heuristic, config.engine.time_limit, config.hard_ceiling
    );

    let results = config.csv.as_ref().map(ResultLog::create).transpose()?;

    if config.headless {
        return match run_headless(&config, results) {
            Err(GameError::Interrupted) => Ok(()),
            other => other.map_err(Into::into),
        };
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 760.0])
            .with_min_inner_size([480.0, 520.0])
            .with_title("Chain Reaction"),
        ..Default::default()
    };

    eframe::run_native(
        "Chain Reaction",
        options,
        Box::new(move |cc| Ok(Box::new(ChainReactionApp::new(cc, config, results)))),
    )
    .map_err(|err| {
        error!("window closed with error: {err}");
        err.to_string().into()
    })
}
