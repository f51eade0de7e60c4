//! Rig Hopper entry point.
//!
//! Headless demo driver: runs a session with a small auto-jump policy and
//! prints either a final summary or, with `--watch`, the track every tick.

use std::thread;
use std::time::Duration;

use clap::Parser;

use rig_hopper::sim::Game;
use rig_hopper::{GameMeta, Preset, Session};

#[derive(Parser)]
#[command(name = "rig-hopper", about = "Rig Hopper obstacle-run demo")]
struct Cli {
    /// Parameter preset (normal, easy, hard, long-track, short-jump)
    #[arg(default_value = "normal")]
    preset: String,

    /// Seed for obstacle widths; omit for a fresh one
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many ticks even if the run is still alive
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Redraw the track every tick, paced to the display frame rate
    #[arg(long)]
    watch: bool,

    /// Print the final state as JSON instead of the text summary
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let Some(preset) = Preset::from_str(&cli.preset) else {
        eprintln!(
            "Unknown preset '{}'. Valid options: normal, easy, hard, long-track, short-jump.",
            cli.preset
        );
        std::process::exit(1);
    };

    let mut session = match cli.seed {
        Some(seed) => Session::with_seed(preset.config(), seed),
        None => Session::new(preset.config()),
    };
    log::info!(
        "Starting {} run with seed {}",
        preset.as_str(),
        session.game().seed()
    );

    let meta = GameMeta::default();
    let frame = Duration::from_millis(u64::from(1000 / meta.frame_rate.max(1)));

    for _ in 0..cli.ticks {
        if should_jump(session.game()) {
            session.jump();
        }
        session.tick();

        if session.game().should_level_complete() {
            session.set_level_complete(true);
            session.advance_level_if_complete();
        }

        if cli.watch {
            print_frame(&session);
            thread::sleep(frame);
        }

        if session.game().state().game_over {
            break;
        }
    }

    if let Some(rank) = session.submit_score_if_high() {
        log::info!("Run placed at rank {} on the board", rank);
    }

    if cli.json {
        match serde_json::to_string_pretty(&session.game().state().snapshot()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize snapshot: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print_summary(&session);
    }
}

/// Jump as late as possible: only when an obstacle would be on the truck
/// after its next move. Later jumps leave more airborne ticks for the
/// obstacle to pass underneath.
fn should_jump(game: &Game) -> bool {
    let state = game.state();
    if state.game_over || state.is_airborne() {
        return false;
    }
    let truck = game.config().truck_position;
    let speed = game.config().obstacle_base_speed + (state.level / 2) as i32;
    state
        .obstacles
        .iter()
        .any(|o| o.trailing_edge() >= truck && o.leading_edge() - truck <= speed)
}

fn print_frame(session: &Session) {
    let game = session.game();
    let state = game.state();
    println!(
        "{}  score {:>6}  lives {}  level {:>2}{}",
        state.render_track(game.config()),
        state.score,
        state.lives,
        state.level,
        if state.is_airborne() { "  (airborne)" } else { "" }
    );
}

fn print_summary(session: &Session) {
    let state = session.game().state();
    let stats = session.stats();

    println!();
    println!("=== Run Summary ===");
    println!("Seed:    {}", session.game().seed());
    println!("Ticks:   {}", state.tick_counter);
    println!("Score:   {}", state.score);
    println!("Level:   {}", state.level);
    println!("Lives:   {}", state.lives);
    println!("Jumps:   {} ({} rejected)", stats.jumps, stats.rejected_jumps);
    println!(
        "Cleared: {} obstacles, {} crashes, {} level-ups",
        stats.cleared, stats.crashes, stats.level_ups
    );

    if !session.high_scores().is_empty() {
        println!();
        println!("=== High Scores ===");
        for (i, entry) in session.high_scores().entries().iter().enumerate() {
            println!("{:>3}. {:>8}  level {}", i + 1, entry.score, entry.level);
        }
    }
}
