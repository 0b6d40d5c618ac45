//! Command-line driver for the heuristic battle agent.
//!
//! Usage:
//!   pokemon-heuristic decide snapshot.json --explain
//!   pokemon-heuristic decide snapshot.json --config scoring.ron --agent strongest
//!   pokemon-heuristic default-config > scoring.ron

use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use ordered_float::OrderedFloat;
use pokemon_heuristic::{
    AgentError, AgentResult, BattleSnapshot, Behavior, FormulaOracle, HeuristicAgent, MoveScorer,
    RandomAgent, ScoredMove, ScoringConfig, StrongestMoveAgent,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pokemon-heuristic", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decide one turn from a JSON battle snapshot
    Decide {
        /// Path to the snapshot JSON
        snapshot: PathBuf,

        /// RON file overriding the default scoring constants
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Which agent makes the decision
        #[arg(short, long, value_enum, default_value_t = AgentKind::Heuristic)]
        agent: AgentKind,

        /// Print every move score, best first
        #[arg(long)]
        explain: bool,
    },

    /// Print the default scoring configuration as RON
    DefaultConfig,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AgentKind {
    Heuristic,
    Strongest,
    Random,
}

fn print_ranking(scores: &[ScoredMove]) {
    let mut ranked: Vec<&ScoredMove> = scores.iter().collect();
    // Stable sort keeps listed order among equal scores.
    ranked.sort_by_key(|scored| std::cmp::Reverse(OrderedFloat(scored.score)));
    for scored in ranked {
        println!("  {:>8.1}  {:<20} {}", scored.score, scored.move_id, scored.kind);
    }
}

fn decide(
    snapshot_path: PathBuf,
    config_path: Option<PathBuf>,
    agent: AgentKind,
    explain: bool,
) -> AgentResult<()> {
    let snapshot = BattleSnapshot::load(&snapshot_path)?;
    let config = match config_path {
        Some(path) => ScoringConfig::load(&path)?,
        None => ScoringConfig::default(),
    };
    info!(
        "[{}] deciding turn {} with the {:?} agent ({:?} policy)",
        snapshot.battle_id, snapshot.turn, agent, config.policy
    );

    let action = match agent {
        AgentKind::Heuristic => {
            let heuristic = HeuristicAgent::new(MoveScorer::new(FormulaOracle::new(), config));
            let (action, scores) = heuristic.decide_with_scores(&snapshot);
            if explain {
                print_ranking(&scores);
            }
            action
        }
        AgentKind::Strongest => StrongestMoveAgent::new().decide_action(&snapshot),
        AgentKind::Random => RandomAgent.decide_action(&snapshot),
    };

    println!("{}", action);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Decide {
            snapshot,
            config,
            agent,
            explain,
        } => decide(snapshot, config, agent, explain),
        Commands::DefaultConfig => ScoringConfig::default()
            .to_ron()
            .map(|text| println!("{}", text))
            .map_err(AgentError::from),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
