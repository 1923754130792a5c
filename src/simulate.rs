//! Batch simulation for statistics gathering.
//!
//! Plays full contests to termination, sequentially or in parallel, and
//! records one summary per game. Records serialize to JSONL for downstream
//! analysis.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::board::{GamePhase, RunState, Team, TEAM_COUNT};
use crate::engine::Game;
use crate::resolve::winner;

/// Configuration for batch simulation.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Hard turn cap per game. Point-conserving consolidations can ping-pong
    /// indefinitely, so not every contest reaches a stalemate on its own.
    pub max_turns: u32,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Suppress per-game progress output.
    pub quiet: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            num_games: 10,
            max_turns: 10_000,
            threads: 4,
            seed: 0,
            quiet: false,
        }
    }
}

/// A completed game's summary record.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    /// Sequential game ID.
    pub game_id: usize,
    /// Total turns played, including the terminating stalemate turn.
    pub turns: u32,
    /// Turn on which the conflict phase began, if reached.
    pub conflict_start_turn: Option<u32>,
    /// The higher-scoring team at termination, if not a tie.
    pub winner: Option<Team>,
    /// Final score per team, indexed by team ordinal.
    pub final_scores: [u32; TEAM_COUNT],
    /// Final owned-cell count per team.
    pub final_cells: [u32; TEAM_COUNT],
    /// Whether the game hit the turn cap instead of a stalemate.
    pub capped: bool,
}

/// Plays a single game to termination (or the turn cap) and returns its
/// record.
pub fn play_game(config: &SimulationConfig, game_id: usize, rng: &mut SmallRng) -> GameRecord {
    let mut game = Game::new();
    game.start();

    let mut conflict_start_turn = None;
    while game.run_state() == RunState::Running && game.turn() < config.max_turns {
        game.advance_turn(rng);
        if conflict_start_turn.is_none() && game.phase() == GamePhase::Conflict {
            conflict_start_turn = Some(game.turn());
        }
    }

    let scores = game.scores();
    GameRecord {
        game_id,
        turns: game.turn(),
        conflict_start_turn,
        winner: winner(&scores),
        final_scores: scores.totals(),
        final_cells: [
            game.grid().cell_count(Team::Blue),
            game.grid().cell_count(Team::Red),
        ],
        capped: game.run_state() == RunState::Running,
    }
}

/// Runs batch simulation, producing all game records.
///
/// When `config.threads > 1`, games are played concurrently using rayon.
pub fn run_simulations(config: &SimulationConfig) -> Vec<GameRecord> {
    let mut games = Vec::with_capacity(config.num_games);
    run_simulations_with_callback(config, |game| {
        games.push(game);
    });
    games
}

/// Runs batch simulation, calling `on_game` with each completed record.
///
/// This allows the caller to process games incrementally (e.g. write to
/// disk) rather than waiting for the whole batch.
pub fn run_simulations_with_callback<F>(config: &SimulationConfig, on_game: F)
where
    F: FnMut(GameRecord) + Send,
{
    if config.threads > 1 {
        run_parallel(config, on_game);
    } else {
        run_sequential(config, on_game);
    }
}

/// Sequential runner: one rng drives all games in order.
fn run_sequential<F>(config: &SimulationConfig, mut on_game: F)
where
    F: FnMut(GameRecord),
{
    let mut rng = if config.seed != 0 {
        SmallRng::seed_from_u64(config.seed)
    } else {
        SmallRng::from_entropy()
    };

    for i in 0..config.num_games {
        let game_start = Instant::now();
        let game = play_game(config, i, &mut rng);
        if !config.quiet {
            report_progress(&game, i + 1, config.num_games, game_start.elapsed().as_secs_f64());
        }
        on_game(game);
    }
}

/// Parallel runner: games play concurrently on a rayon pool and a channel
/// delivers completed records to the callback on the calling thread.
fn run_parallel<F>(config: &SimulationConfig, mut on_game: F)
where
    F: FnMut(GameRecord) + Send,
{
    use rayon::prelude::*;
    use std::sync::mpsc;

    let completed = AtomicUsize::new(0);
    let (tx, rx) = mpsc::channel::<GameRecord>();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .expect("failed to build rayon thread pool");

    let config_clone = config.clone();
    let handle = std::thread::spawn(move || {
        pool.install(|| {
            (0..config_clone.num_games)
                .into_par_iter()
                .for_each_with(tx, |tx, i| {
                    let mut rng = if config_clone.seed != 0 {
                        SmallRng::seed_from_u64(config_clone.seed.wrapping_add(i as u64))
                    } else {
                        SmallRng::from_entropy()
                    };
                    let game_start = Instant::now();
                    let game = play_game(&config_clone, i, &mut rng);
                    if !config_clone.quiet {
                        let n = completed.fetch_add(1, Ordering::Relaxed) + 1;
                        report_progress(
                            &game,
                            n,
                            config_clone.num_games,
                            game_start.elapsed().as_secs_f64(),
                        );
                    }
                    let _ = tx.send(game);
                });
        });
    });

    for game in rx {
        on_game(game);
    }

    handle.join().expect("simulation worker thread panicked");
}

/// Prints one progress line per completed game to stderr.
fn report_progress(game: &GameRecord, done: usize, total: usize, elapsed: f64) {
    let outcome = match game.winner {
        Some(w) => format!("{} wins", w),
        None => "tie".to_string(),
    };
    eprintln!(
        "Game {}/{}: {} after {} turns ({:.1}s)",
        done, total, outcome, game.turns, elapsed,
    );
}

/// Writes game records as JSONL (one JSON object per line).
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> std::io::Result<()> {
    for game in games {
        let line = serde_json::to_string(game)?;
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

/// Prints a summary of batch results to stderr.
pub fn print_summary(games: &[GameRecord]) {
    let total = games.len();
    let mut blue_wins = 0usize;
    let mut red_wins = 0usize;
    let mut ties = 0usize;
    let mut capped = 0usize;
    let mut total_turns = 0u64;

    for game in games {
        total_turns += u64::from(game.turns);
        match game.winner {
            Some(Team::Blue) => blue_wins += 1,
            Some(Team::Red) => red_wins += 1,
            None => ties += 1,
        }
        if game.capped {
            capped += 1;
        }
    }

    eprintln!("=== Simulation Summary ===");
    eprintln!("Games: {}", total);
    eprintln!(
        "Avg turns/game: {:.1}",
        total_turns as f64 / total.max(1) as f64
    );
    eprintln!(
        "Blue wins: {} ({:.1}%)",
        blue_wins,
        100.0 * blue_wins as f64 / total.max(1) as f64
    );
    eprintln!(
        "Red wins: {} ({:.1}%)",
        red_wins,
        100.0 * red_wins as f64 / total.max(1) as f64
    );
    eprintln!("Ties: {}", ties);
    eprintln!("Turn-capped games: {}", capped);
}
