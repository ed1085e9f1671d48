//! Frame systems. `schedule` runs them in a fixed order; everything else is
//! a focused helper over `SessionState`.

pub mod boss;
pub mod collision;
pub mod freeze;
pub mod movement;
pub mod powerup;
pub mod projectiles;
pub mod schedule;
pub mod spawn;
