//! Level geometry seam. The sim never parses level files; it only asks the
//! provider for bounds, a spawn point, and wall-overlap queries.

use glam::{Vec2, vec2};

use crate::geom::Aabb;

pub trait LevelGeometry {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    fn player_spawn(&self) -> Vec2;
    fn rect_intersects_wall(&self, rect: &Aabb) -> bool;
}

/// Rectangle-list implementation used by tests and the headless harness.
#[derive(Debug, Clone, Default)]
pub struct RectWalls {
    pub width: f32,
    pub height: f32,
    pub spawn: Vec2,
    pub walls: Vec<Aabb>,
}

impl RectWalls {
    /// Open arena with a centered spawn and no walls.
    pub fn open(width: f32, height: f32) -> Self {
        Self { width, height, spawn: vec2(width * 0.5, height * 0.5), walls: Vec::new() }
    }

    pub fn with_walls(mut self, walls: Vec<Aabb>) -> Self {
        self.walls = walls;
        self
    }
}

impl LevelGeometry for RectWalls {
    fn width(&self) -> f32 {
        self.width
    }
    fn height(&self) -> f32 {
        self.height
    }
    fn player_spawn(&self) -> Vec2 {
        self.spawn
    }
    fn rect_intersects_wall(&self, rect: &Aabb) -> bool {
        // Vacuously false with no walls.
        self.walls.iter().any(|w| w.intersects(rect))
    }
}
