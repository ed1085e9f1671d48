//! Headless scripted runner: builds a session from a scenario and drives it
//! with a simple bot until it ends or the time cap hits. Used by the
//! harness binary and by integration tests.

use data_runtime::configs::difficulty::{self, Difficulty};
use data_runtime::parse::parse_difficulty;
use data_runtime::scenario::Scenario;

use crate::{InputFrame, RectWalls, SessionPhase, SessionState};
use crate::level::LevelGeometry;
use crate::systems::powerup::{self, Boost};

const FRAME_DT: f32 = 1.0 / 60.0;
const DEFAULT_ARENA: [f32; 2] = [2500.0, 1500.0];
const DEFAULT_MAX_SECONDS: f32 = 300.0;
const DEFAULT_FIRE_PERIOD_S: f32 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Won,
    Lost,
    TimedOut,
}

#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub outcome: RunOutcome,
    pub score: u32,
    pub seconds: f32,
    pub frames: u32,
}

/// Run a scenario to completion with the scripted bot: stand at spawn,
/// click at the nearest enemy on a fixed cadence, always take the first
/// powerup offer.
pub fn run_scenario(scn: &Scenario) -> RunSummary {
    let difficulty = parse_difficulty(&scn.difficulty).unwrap_or_else(|| {
        log::warn!("unknown difficulty '{}', falling back to easy", scn.difficulty);
        Difficulty::Easy
    });
    let tuning = difficulty::load_default(difficulty).unwrap_or_else(|e| {
        log::warn!("difficulty config unusable ({e:#}), using defaults");
        difficulty::DifficultyTuning::defaults(difficulty)
    });
    let [w, h] = scn.arena.unwrap_or(DEFAULT_ARENA);
    let level = RectWalls::open(w, h);
    let seed = scn.seed.unwrap_or(42);
    let mut state = SessionState::new(difficulty, tuning, level.player_spawn(), seed);

    for name in &scn.grant_boosts {
        match Boost::parse(name) {
            Some(b) => powerup::apply(&mut state, b),
            None => log::warn!("unknown boost '{name}' in scenario, skipping"),
        }
    }

    let max_seconds = scn.max_seconds.unwrap_or(DEFAULT_MAX_SECONDS);
    let fire_period = scn.bot_fire_period_s.unwrap_or(DEFAULT_FIRE_PERIOD_S);
    let max_frames = (max_seconds / FRAME_DT).ceil() as u32;
    let mut fire_clock = 0.0f32;
    let mut frames = 0u32;

    while frames < max_frames && state.in_progress() {
        if matches!(state.phase, SessionPhase::ChoosingPowerup { .. }) {
            state.choose_powerup(0);
        }
        fire_clock += FRAME_DT;
        let mut input = InputFrame::default();
        if fire_clock >= fire_period {
            if let Some(target) = nearest_enemy(&state) {
                fire_clock -= fire_period;
                input.fire = true;
                input.pointer = target;
            }
        }
        state.step(&level, &input, FRAME_DT);
        state.drain_events();
        frames += 1;
    }

    let outcome = match state.phase {
        SessionPhase::Won => RunOutcome::Won,
        SessionPhase::Lost => RunOutcome::Lost,
        _ => RunOutcome::TimedOut,
    };
    let summary = RunSummary {
        outcome,
        score: state.score,
        seconds: frames as f32 * FRAME_DT,
        frames,
    };
    log::info!(
        "scenario finished: outcome={:?} score={} t={:.1}s",
        summary.outcome,
        summary.score,
        summary.seconds
    );
    summary
}

fn nearest_enemy(state: &SessionState) -> Option<glam::Vec2> {
    let p = state.player.pos;
    state
        .enemies
        .iter()
        .min_by(|a, b| {
            let da = (a.pos - p).length_squared();
            let db = (b.pos - p).length_squared();
            da.total_cmp(&db)
        })
        .map(|e| e.pos)
}
