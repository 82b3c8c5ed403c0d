//! Contact combat: the player hits every monster it touches.

use crate::components::{Combat, EntityKind, Footprint, Health, Position};
use hecs::{Entity, World};
use log::{debug, info};

/// One hit dealt during an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackOutcome {
    pub target: Entity,
    pub damage: i32,
    pub killed: bool,
}

/// Damage dealt by an attacker. Defense is not subtracted yet.
pub fn attack_damage(attacker: &Combat) -> i32 {
    attacker.power
}

/// The player attacks each overlapping monster once per call.
pub fn resolve_contact_attacks(world: &mut World, player: Entity) -> Vec<AttackOutcome> {
    puffin::profile_function!();
    let (bounds, damage) = {
        let Ok(mut query) = world.query_one::<(&Position, &Footprint, &Combat)>(player) else {
            return Vec::new();
        };
        let Some((pos, footprint, combat)) = query.get() else {
            return Vec::new();
        };
        (footprint.aabb(pos.as_vec2()), attack_damage(combat))
    };

    let mut outcomes = Vec::new();
    for (id, (kind, pos, footprint, health)) in
        world.query_mut::<(&EntityKind, &Position, &Footprint, &mut Health)>()
    {
        if *kind != EntityKind::Monster || health.is_dead() {
            continue;
        }
        if !footprint.aabb(pos.as_vec2()).overlaps(&bounds) {
            continue;
        }
        let dealt = health.apply_damage(damage);
        debug!("Player hits {:?} for {} ({} left)", id, dealt, health.current());
        outcomes.push(AttackOutcome {
            target: id,
            damage: dealt,
            killed: health.is_dead(),
        });
    }
    outcomes
}

/// Remove monsters with no health left; returns the despawned entities.
pub fn despawn_dead_monsters(world: &mut World) -> Vec<Entity> {
    let dead: Vec<Entity> = world
        .query::<(&EntityKind, &Health)>()
        .iter()
        .filter(|(_, (kind, health))| **kind == EntityKind::Monster && health.is_dead())
        .map(|(id, _)| id)
        .collect();

    for &id in &dead {
        let _ = world.despawn(id);
        info!("Monster {:?} died", id);
    }
    dead
}
