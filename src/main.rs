// Command-line harness: perft, single searches, and automated games.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use mailbox_chess::engines::engine_negamax::NegamaxEngine;
use mailbox_chess::engines::engine_random::RandomEngine;
use mailbox_chess::engines::engine_trait::Engine;
use mailbox_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use mailbox_chess::game_state::chess_types::*;
use mailbox_chess::move_generation::legal_move_apply::apply_move;
use mailbox_chess::move_generation::legal_move_generator::{game_status, GameStatus};
use mailbox_chess::move_generation::perft::{perft, perft_divide};
use mailbox_chess::search::board_scoring::PieceSquareScorer;
use mailbox_chess::search::negamax::{SearchConfig, Searcher};
use mailbox_chess::utils::render_game_state::render_game_state;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count leaf nodes of the legal move tree
    Perft {
        depth: u8,
        #[arg(long, default_value = STARTING_POSITION_FEN)]
        fen: String,
        /// Print the node count below each root move
        #[arg(long)]
        divide: bool,
    },
    /// Search one position and print the best move
    Search {
        #[arg(long, default_value = STARTING_POSITION_FEN)]
        fen: String,
        #[arg(long, default_value_t = SearchConfig::default().depth)]
        depth: u8,
    },
    /// Play the engine against an opponent until the game ends
    Play {
        #[arg(long, default_value = STARTING_POSITION_FEN)]
        fen: String,
        #[arg(long, default_value_t = SearchConfig::default().depth)]
        depth: u8,
        #[arg(long, default_value_t = 200)]
        max_plies: u32,
        #[arg(long, value_enum, default_value_t = Opponent::Negamax)]
        opponent: Opponent,
        /// Seed for the random opponent
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Opponent {
    Negamax,
    Random,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run(args.command) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Perft { depth, fen, divide } => run_perft(&fen, depth, divide),
        Command::Search { fen, depth } => run_search(&fen, depth),
        Command::Play {
            fen,
            depth,
            max_plies,
            opponent,
            seed,
        } => run_play(&fen, depth, max_plies, opponent, seed),
    }
}

fn load(fen: &str) -> Result<GameState> {
    GameState::from_fen(fen).with_context(|| format!("cannot load position `{fen}`"))
}

fn run_perft(fen: &str, depth: u8, divide: bool) -> Result<()> {
    let mut game = load(fen)?;

    if divide {
        let counts = perft_divide(&mut game, depth);
        for (mv, nodes) in &counts {
            println!("{mv}: {nodes}");
        }
        let total: u64 = counts.iter().map(|(_, nodes)| nodes).sum();
        println!();
        println!("Nodes searched: {total}");
    } else {
        println!("{}", perft(&mut game, depth));
    }
    Ok(())
}

fn run_search(fen: &str, depth: u8) -> Result<()> {
    let mut game = load(fen)?;
    let result = Searcher::new(PieceSquareScorer).search(&mut game, depth);

    match result.best_move {
        Some(mv) => println!("bestmove {mv} score {}", result.score),
        None => println!("bestmove (none) score {}", result.score),
    }
    info!(
        "nodes {} quiescence nodes {}",
        result.stats.nodes, result.stats.quiescence_nodes
    );
    Ok(())
}

fn run_play(fen: &str, depth: u8, max_plies: u32, opponent: Opponent, seed: Option<u64>) -> Result<()> {
    let mut game = load(fen)?;
    let config = SearchConfig { depth };

    let mut light: Box<dyn Engine> = Box::new(NegamaxEngine::new(config));
    let mut dark: Box<dyn Engine> = match opponent {
        Opponent::Negamax => Box::new(NegamaxEngine::new(config)),
        Opponent::Random => Box::new(match seed {
            Some(seed) => RandomEngine::with_seed(seed),
            None => RandomEngine::new(),
        }),
    };
    info!("{} (light) vs {} (dark)", light.name(), dark.name());

    let mut plies = 0;
    while plies < max_plies {
        let engine = match game.side_to_move {
            Color::Light => &mut light,
            Color::Dark => &mut dark,
        };
        let output = engine.choose_move(&mut game);
        for line in &output.info_lines {
            log::debug!("{line}");
        }
        let Some(mv) = output.best_move else {
            break;
        };

        println!("{:>3}. {mv}", plies + 1);
        apply_move(&mut game, &mv);
        plies += 1;
    }

    println!("{}", render_game_state(&game));
    println!("{}", game.get_fen());
    match game_status(&mut game) {
        GameStatus::Checkmate => println!(
            "Checkmate, {} wins",
            match game.side_to_move {
                Color::Light => "dark",
                Color::Dark => "light",
            }
        ),
        GameStatus::Stalemate => println!("Stalemate"),
        GameStatus::Ongoing => println!("Stopped after {plies} plies"),
    }
    Ok(())
}
