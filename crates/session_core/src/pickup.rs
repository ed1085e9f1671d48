//! Static pickups: consumable items and score coins.

use glam::{Vec2, vec2};

use crate::geom::Aabb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Heal,
    Speed,
    Freezer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickupKind {
    Item(ItemKind),
    Coin,
}

#[derive(Debug, Clone, Copy)]
pub struct Pickup {
    pub kind: PickupKind,
    pub pos: Vec2,
}

impl Pickup {
    pub fn new(kind: PickupKind, pos: Vec2) -> Self {
        Self { kind, pos }
    }

    pub fn size(&self) -> Vec2 {
        match self.kind {
            PickupKind::Item(_) => vec2(45.0, 45.0),
            PickupKind::Coin => vec2(40.0, 40.0),
        }
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size())
    }
}
