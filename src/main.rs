//! Gridwar -- a two-team territory-control simulation.
//!
//! This binary reads control commands from stdin and writes the grid,
//! scoreboard, and event log to stdout. The cadence between turns is left to
//! the operator: `step` and `run` advance the contest explicitly.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use gridwar::board::{Grid, Position, RunState, Team, GRID_SIZE};
use gridwar::engine::Game;
use gridwar::protocol::{parse_command, Command, CommandError};

/// Maximum retained event-log entries.
const LOG_CAPACITY: usize = 100;

/// Turn cap for the `run` command, matching the batch runner's default.
const RUN_TURN_CAP: u32 = 10_000;

/// Runs the main command loop, reading commands from stdin and writing
/// responses to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut game = Game::new();
    let mut rng = SmallRng::from_entropy();
    let mut log: VecDeque<String> = VecDeque::with_capacity(LOG_CAPACITY);
    push_log(&mut log, "Simulation initialized.".to_string());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Ok(c) => c,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        match cmd {
            Command::Start => {
                game.start();
                writeln!(out, "state {}", game.run_state()).unwrap();
            }
            Command::Pause => {
                game.pause();
                writeln!(out, "state {}", game.run_state()).unwrap();
            }
            Command::Reset => {
                game.reset();
                push_log(&mut log, "Simulation reset.".to_string());
                writeln!(out, "state {}", game.run_state()).unwrap();
            }
            Command::Step { count } => {
                advance(&mut game, &mut rng, count, &mut log, &mut out);
            }
            Command::Run => {
                advance(&mut game, &mut rng, RUN_TURN_CAP, &mut log, &mut out);
                if game.run_state() == RunState::Running {
                    writeln!(out, "note turn cap reached").unwrap();
                }
            }
            Command::Seed { value } => {
                rng = SmallRng::seed_from_u64(value);
                writeln!(out, "seed {}", value).unwrap();
            }
            Command::Show => {
                writeln!(
                    out,
                    "turn {} phase {} state {}",
                    game.turn(),
                    game.phase(),
                    game.run_state()
                )
                .unwrap();
                write!(out, "{}", render_grid(game.grid())).unwrap();
                write_scores(&game, &mut out);
            }
            Command::Scores => {
                write_scores(&game, &mut out);
            }
            Command::Log => {
                for entry in &log {
                    writeln!(out, "{}", entry).unwrap();
                }
            }
            Command::Help => {
                print_usage(&mut out);
            }
            Command::Quit => {
                break;
            }
        }
        out.flush().unwrap();
    }
}

/// Advances up to `count` turns, echoing and logging every event.
fn advance<W: Write>(
    game: &mut Game,
    rng: &mut SmallRng,
    count: u32,
    log: &mut VecDeque<String>,
    out: &mut W,
) {
    for _ in 0..count {
        if game.run_state() != RunState::Running {
            break;
        }
        for event in game.advance_turn(rng) {
            writeln!(out, "event {}", event).unwrap();
            push_log(log, event);
        }
    }
}

/// Writes the scoreboard line.
fn write_scores<W: Write>(game: &Game, out: &mut W) {
    let scores = game.scores();
    writeln!(
        out,
        "scores blue={} red={}",
        scores.get(Team::Blue),
        scores.get(Team::Red)
    )
    .unwrap();
}

/// Renders the grid as text: `.` for an empty cell, the owner glyph and
/// point value otherwise.
fn render_grid(grid: &Grid) -> String {
    let mut s = String::new();
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let cell = grid.cell(Position::new(row, col));
            match cell.owner {
                Some(team) => {
                    s.push(team.glyph());
                    s.push_str(&format!("{:<4}", cell.points));
                }
                None => s.push_str(".    "),
            }
        }
        s.push('\n');
    }
    s
}

/// Appends to the rolling log, discarding the oldest entry beyond capacity.
fn push_log(log: &mut VecDeque<String>, entry: String) {
    if log.len() == LOG_CAPACITY {
        log.pop_front();
    }
    log.push_back(entry);
}

/// Prints command usage.
fn print_usage<W: Write>(out: &mut W) {
    writeln!(out, "commands:").unwrap();
    writeln!(out, "  start        begin or resume the simulation").unwrap();
    writeln!(out, "  pause        pause a running simulation").unwrap();
    writeln!(out, "  reset        return to the initial seeded state").unwrap();
    writeln!(out, "  step [n]     advance up to n turns (default 1)").unwrap();
    writeln!(out, "  run          advance until the contest finishes").unwrap();
    writeln!(out, "  seed <n>     reseed the randomness source").unwrap();
    writeln!(out, "  show         print turn, phase, grid, and scores").unwrap();
    writeln!(out, "  scores       print the score totals").unwrap();
    writeln!(out, "  log          print the recent event log").unwrap();
    writeln!(out, "  quit         exit").unwrap();
}
