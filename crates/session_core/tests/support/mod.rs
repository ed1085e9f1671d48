#![allow(dead_code)]

use data_runtime::configs::difficulty::{Difficulty, DifficultyTuning};
use glam::{Vec2, vec2};
use session_core::{RectWalls, SessionState};

pub fn easy_session(spawn: Vec2) -> SessionState {
    SessionState::new(Difficulty::Easy, DifficultyTuning::defaults(Difficulty::Easy), spawn, 7)
}

pub fn hard_session(spawn: Vec2) -> SessionState {
    SessionState::new(Difficulty::Hard, DifficultyTuning::defaults(Difficulty::Hard), spawn, 7)
}

pub fn open_arena() -> RectWalls {
    RectWalls::open(2500.0, 1500.0)
}

pub fn arena_center() -> Vec2 {
    vec2(1250.0, 750.0)
}
