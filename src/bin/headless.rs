//! Headless runner: steps the game with a scripted policy and writes one
//! line per frame to stdout.
//!
//! `--format json` writes a `GameSnapshot` plus the frame's action and
//! `done` flag; `--format packed` writes the hex packet the LED controller
//! would receive for the same frame.

use std::io::{self, BufWriter, Write};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::{debug, info};

use ledtris::core::{GameSnapshot, GameState, SimpleRng};
use ledtris::logging;
use ledtris::term::{brightness_frame, pack_frame, packing::to_hex};
use ledtris::types::{Action, FRAME_HZ};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Policy {
    /// Never press anything; pieces fall by gravity alone.
    Idle,
    /// Uniform choice among idle, left, right, down and rotate.
    Random,
    /// Hold down every frame.
    Drop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Packed,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Seed for the game and for the random policy.
    #[arg(long, default_value_t = 1)]
    seed: u32,
    /// Frames to simulate.
    #[arg(long, default_value_t = 30 * FRAME_HZ as u64)]
    frames: u64,
    #[arg(long, value_enum, default_value_t = Policy::Random)]
    policy: Policy,
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
    /// Stop after the first game over.
    #[arg(long, default_value_t = false)]
    stop_on_done: bool,
}

#[derive(Serialize)]
struct FrameRecord<'a> {
    action: Action,
    done: bool,
    #[serde(flatten)]
    snapshot: &'a GameSnapshot,
}

const RANDOM_ACTIONS: [Action; 5] = [
    Action::None,
    Action::Left,
    Action::Right,
    Action::Down,
    Action::Rotate,
];

fn choose(policy: Policy, rng: &mut SimpleRng) -> Action {
    match policy {
        Policy::Idle => Action::None,
        Policy::Drop => Action::Down,
        Policy::Random => RANDOM_ACTIONS[rng.next_index(RANDOM_ACTIONS.len())],
    }
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    logging::init_stderr("info")?;
    info!(seed = args.seed, frames = args.frames, policy = ?args.policy, "headless run");

    let mut game = GameState::new(args.seed);
    let mut policy_rng = SimpleRng::new(args.seed.rotate_left(16) ^ 0x5bd1_e995);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut games_over = 0u32;
    let mut best_score = 0u32;
    let mut lines = 0u64;
    let mut frames_run = 0u64;

    for _ in 0..args.frames {
        let action = choose(args.policy, &mut policy_rng);
        let outcome = game.step(action);
        frames_run += 1;

        match args.format {
            Format::Json => {
                let snapshot = game.snapshot();
                let record = FrameRecord {
                    action,
                    done: outcome.done,
                    snapshot: &snapshot,
                };
                serde_json::to_writer(&mut out, &record)?;
                out.write_all(b"\n")?;
            }
            Format::Packed => {
                let packet = pack_frame(&brightness_frame(game.render()), false);
                writeln!(out, "{}", to_hex(&packet))?;
            }
        }

        if outcome.done {
            games_over += 1;
            best_score = best_score.max(outcome.score);
            lines += outcome.score as u64;
            debug!(score = outcome.score, "game over");
            if args.stop_on_done {
                break;
            }
        }
    }
    out.flush()?;

    best_score = best_score.max(game.score());
    lines += game.score() as u64;
    info!(frames = frames_run, games_over, best_score, lines, "run finished");
    Ok(())
}
