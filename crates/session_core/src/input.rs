//! Sampled per-frame input state delivered by the host each frame.

use glam::Vec2;

#[derive(Debug, Clone, Copy, Default)]
pub struct InputFrame {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Aim target in world space.
    pub pointer: Vec2,
    /// Click happened this frame.
    pub fire: bool,
    /// Escape pressed this frame (pause toggle).
    pub escape: bool,
}

impl InputFrame {
    /// Desired movement as a unit vector; diagonals are normalized.
    pub fn move_axis(&self) -> Vec2 {
        let mut v = Vec2::ZERO;
        if self.up {
            v.y -= 1.0;
        }
        if self.down {
            v.y += 1.0;
        }
        if self.left {
            v.x -= 1.0;
        }
        if self.right {
            v.x += 1.0;
        }
        v.normalize_or_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonals_are_normalized() {
        let f = InputFrame { up: true, right: true, ..Default::default() };
        let v = f.move_axis();
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert!(v.x > 0.0 && v.y < 0.0);
        let idle = InputFrame::default();
        assert_eq!(idle.move_axis(), Vec2::ZERO);
    }

    #[test]
    fn opposite_keys_cancel() {
        let f = InputFrame { left: true, right: true, ..Default::default() };
        assert_eq!(f.move_axis(), Vec2::ZERO);
    }
}
