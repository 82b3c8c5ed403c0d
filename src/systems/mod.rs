//! Per-update game systems.
//!
//! - `movement`: key input to velocity
//! - `physics`: velocity to position, with wall collision
//! - `animation`: walk cycle frames
//! - `combat`: contact attacks and monster death

pub mod animation;
pub mod combat;
pub mod movement;
pub mod physics;

pub use animation::update_walk_animation;
pub use combat::{despawn_dead_monsters, resolve_contact_attacks, AttackOutcome};
pub use movement::apply_movement_input;
