//! Wave Rush entry point
//!
//! Headless demo: runs the simulation for a fixed number of ticks with the
//! built-in autopilot and logs what happens. Rendering, real input, and frame
//! pacing belong to an embedding platform loop, which would call
//! [`wave_rush::sim::tick`] once per 60 Hz frame exactly as this loop does.
//!
//! Usage: `wave-rush [seed] [ticks] [tuning.json]`

use std::error::Error;

use wave_rush::Tuning;
use wave_rush::consts::SIM_DT;
use wave_rush::sim::{GameEvent, GameState, TickInput, tick};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = match args.next() {
        Some(arg) => arg.parse()?,
        None => 1,
    };
    let ticks: u64 = match args.next() {
        Some(arg) => arg.parse()?,
        None => 60 * 60,
    };
    let tuning = match args.next() {
        Some(path) => Tuning::from_json(&std::fs::read_to_string(path)?)?,
        None => Tuning::default(),
    };

    log::info!("seed {seed}, {ticks} ticks");
    let mut state = GameState::with_tuning(seed, tuning);
    let mut input = TickInput {
        autopilot: true,
        ..Default::default()
    };

    let mut runs: u32 = 1;
    let mut best: u32 = 0;
    for _ in 0..ticks {
        let events = tick(&mut state, &input, SIM_DT);
        input.restart = false;

        for event in events {
            match event {
                GameEvent::Scored => log::debug!("score {}", state.score),
                GameEvent::Died => {
                    best = best.max(state.score);
                    // The pilot restarts on the next tick, like a player mashing A
                    input.restart = true;
                }
                GameEvent::Restarted => runs += 1,
            }
        }
    }

    best = best.max(state.score);
    log::info!(
        "done: {runs} run(s), best score {best}, final speed {:.3}",
        state.pipe_speed
    );
    Ok(())
}
