//! Elevator Jump entry point
//!
//! Native builds run a headless demo: the autopilot plays a number of rounds
//! on a stepped clock and the highscore is persisted as usual.
//!
//! Usage: `elevator-jump [ROUNDS] [SETTINGS_PATH]`

use std::path::PathBuf;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use elevator_jump::platform::{Clock, SteppedClock};
use elevator_jump::platform::time::tick_duration;
use elevator_jump::sim::{Autopilot, GameEvent, RoundStatus};
use elevator_jump::{Game, JsonFileStore, Settings};

/// Ticks shown on the result screen before the next round
const RESULT_PAUSE_TICKS: u32 = 90;
/// Safety cap on ticks per round
const MAX_ROUND_TICKS: u32 = 100_000;

fn main() {
    env_logger::init();
    log::info!("Elevator Jump (headless) starting...");

    let mut args = std::env::args().skip(1);
    let rounds: u32 = args.next().and_then(|a| a.parse().ok()).unwrap_or(10);
    let settings_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("settings.json"));

    let settings = Settings::load(&settings_path);
    let store = JsonFileStore::new(settings.highscore_path.clone());
    let tick = tick_duration(settings.tick_rate);
    let clock = SteppedClock::new();
    let seed: u64 = rand::random();
    let mut pilot_rng = Pcg32::seed_from_u64(seed ^ 0x5eed);

    let mut game = Game::new(settings, store, clock.clone(), seed);

    for round in 1..=rounds {
        // Sometimes late, sometimes early, mostly in the window
        let pilot = Autopilot::sample(&mut pilot_rng, 1, 24);
        let mut ticks = 0;
        loop {
            if pilot.wants_jump(game.round().state(), game.round().config()) {
                game.on_jump_requested();
            }
            clock.advance(tick);
            ticks += 1;
            if let RoundStatus::Resolved(_) = game.on_tick(clock.now()) {
                break;
            }
            if ticks >= MAX_ROUND_TICKS {
                log::error!("Round {} did not resolve after {} ticks", round, ticks);
                return;
            }
        }

        for event in game.drain_events() {
            match event {
                GameEvent::PerfectJump { combo } => println!("  * perfect! combo {}", combo),
                GameEvent::NewHighscore { level } => println!("  * new best: {}", level),
                _ => log::debug!("{:?}", event),
            }
        }

        if let Some(screen) = game.result_screen() {
            let (headline, detail) = screen.lines();
            let hud = game.hud();
            println!(
                "round {:>3} (lead {:>2} ticks): {} {} | level {} best {}",
                round,
                pilot.lead_ticks,
                headline,
                detail.unwrap_or_default(),
                hud.level,
                hud.best
            );
        }

        // Result pause before the next round
        clock.advance(tick * RESULT_PAUSE_TICKS);
        game.next_round();
    }

    println!(
        "Played {} rounds, best level {}",
        game.rounds_played(),
        game.session().highscore
    );
}
