//! Game session: generation, spawning and the per-update pipeline.

use crate::camera::ViewportCamera;
use crate::components::{Footprint, Health, MovementInput, Position};
use crate::config::GameConfig;
use crate::constants::*;
use crate::dungeon_gen::{Dungeon, DungeonGenerator};
use crate::error::Result;
use crate::grid::Grid;
use crate::spawning::{self, find_spawn_point, monsters, TileCollider};
use crate::systems::{self, physics, AttackOutcome};
use crate::world_gen::{TreePlacement, WorldGenerator};
use glam::Vec2;
use hecs::{Entity, World};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Direction keys the session reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
}

/// What happened during one update
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    pub moved: bool,
    pub camera_moved: bool,
    pub attacks: Vec<AttackOutcome>,
    pub despawned: Vec<Entity>,
}

pub struct Game {
    pub config: GameConfig,
    pub seed: u64,
    pub dungeon: Dungeon,
    pub trees: Vec<TreePlacement>,
    pub world: World,
    pub player: Entity,
    pub camera: ViewportCamera,
    collider: TileCollider,
}

impl Game {
    /// Validate the config, generate the dungeon and overworld, and spawn
    /// the player, monsters and trees.
    pub fn new(config: GameConfig) -> Result<Self> {
        puffin::profile_function!();
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        info!("Starting session with seed {}", seed);

        let dungeon = DungeonGenerator::generate(&config.dungeon, &mut rng)?;

        let mut world_gen = WorldGenerator::new(&config.world, config.tile_size)?;
        world_gen.populate(&mut rng);
        let trees = world_gen.into_trees();

        let collider = TileCollider::new(config.tile_size);
        let footprint = Footprint::square(ENTITY_FOOTPRINT);
        let mut world = World::new();

        let player_at = find_spawn_point(
            &dungeon.grid,
            footprint,
            config.tile_size,
            &collider,
            config.max_spawn_attempts,
            &mut rng,
        )?;
        let player = spawning::spawn_player(&mut world, player_at, &config.player);

        let monster = monsters::GHOUL.with_config(&config.monsters);
        for _ in 0..config.monsters.count {
            let at = find_spawn_point(
                &dungeon.grid,
                footprint,
                config.tile_size,
                &collider,
                config.max_spawn_attempts,
                &mut rng,
            )?;
            monster.spawn(&mut world, at);
        }

        for tree in &trees {
            spawning::spawn_tree(&mut world, tree.position);
        }

        let mut camera = ViewportCamera::new(&config.viewport);
        camera.center_on(player_at);

        info!(
            "Spawned player at {:?}, {} {}(s), {} trees",
            player_at,
            config.monsters.count,
            monster.name,
            trees.len()
        );

        Ok(Self {
            config,
            seed,
            dungeon,
            trees,
            world,
            player,
            camera,
            collider,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.dungeon.grid
    }

    /// Record a key press or release for the player
    pub fn set_key(&mut self, key: Key, pressed: bool) {
        if let Ok(mut input) = self.world.get::<&mut MovementInput>(self.player) {
            match key {
                Key::Up => input.up = pressed,
                Key::Down => input.down = pressed,
                Key::Left => input.left = pressed,
                Key::Right => input.right = pressed,
            }
        }
    }

    /// Advance one fixed step: movement, physics, animation, combat, camera.
    pub fn update(&mut self) -> FrameReport {
        puffin::profile_function!();
        systems::apply_movement_input(&mut self.world);
        let moved = physics::step(&mut self.world, &self.dungeon.grid, &self.collider);
        systems::update_walk_animation(&mut self.world);

        let attacks = systems::resolve_contact_attacks(&mut self.world, self.player);
        let despawned = systems::despawn_dead_monsters(&mut self.world);

        let camera_moved = self.camera.follow(self.player_position());

        FrameReport {
            moved,
            camera_moved,
            attacks,
            despawned,
        }
    }

    pub fn player_position(&self) -> Vec2 {
        self.world
            .get::<&Position>(self.player)
            .map(|pos| pos.as_vec2())
            .unwrap_or(Vec2::ZERO)
    }

    pub fn player_health(&self) -> Option<Health> {
        self.world.get::<&Health>(self.player).ok().map(|h| *h)
    }
}
