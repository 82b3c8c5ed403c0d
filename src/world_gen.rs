//! Overworld decoration: scattered trees and density-falloff forests.
//!
//! Independent of the dungeon grid; positions are not checked against walls
//! or against each other.

use crate::config::WorldConfig;
use crate::error::{Result, RoguelikeError};
use glam::Vec2;
use log::debug;
use rand::Rng;

/// A tree at grid cell `(x, y)` = `(col, row)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TreePlacement {
    pub cell: (i32, i32),
    /// World pixels: `cell * tile_size`
    pub position: Vec2,
}

impl TreePlacement {
    fn at(x: i32, y: i32, tile_size: i32) -> Self {
        Self {
            cell: (x, y),
            position: Vec2::new((x * tile_size) as f32, (y * tile_size) as f32),
        }
    }
}

pub struct WorldGenerator {
    config: WorldConfig,
    tile_size: i32,
    trees: Vec<TreePlacement>,
}

impl WorldGenerator {
    /// Fails with `InvalidConfig` if the world config or tile size can't be
    /// sampled from.
    pub fn new(config: &WorldConfig, tile_size: i32) -> Result<Self> {
        config.validate()?;
        if tile_size <= 0 {
            return Err(RoguelikeError::invalid("tile_size", "must be positive"));
        }
        Ok(Self {
            config: config.clone(),
            tile_size,
            trees: Vec::new(),
        })
    }

    pub fn trees(&self) -> &[TreePlacement] {
        &self.trees
    }

    pub fn into_trees(self) -> Vec<TreePlacement> {
        self.trees
    }

    /// Scatter `tree_count` trees over uniformly random cells.
    pub fn place_random_trees(&mut self, rng: &mut impl Rng) -> &[TreePlacement] {
        puffin::profile_function!();
        for _ in 0..self.config.tree_count {
            let x = rng.gen_range(0..self.config.width);
            let y = rng.gen_range(0..self.config.height);
            self.trees.push(TreePlacement::at(x, y, self.tile_size));
        }
        &self.trees
    }

    /// Grow a forest in the `(2 * radius + 1)` square around `center`.
    ///
    /// Each cell scores `radius - distance`. Cells at or beyond the radius get
    /// nothing; otherwise a roll in `[0, floor(score)]` must beat
    /// `score / forest_density`. Returns how many trees were added.
    pub fn generate_forest(&mut self, center: (i32, i32), radius: i32, rng: &mut impl Rng) -> usize {
        puffin::profile_function!();
        let density = self.config.forest_density;
        let before = self.trees.len();

        for dx in -radius..=radius {
            for dy in -radius..=radius {
                let distance = ((dx * dx + dy * dy) as f32).sqrt();
                let closeness = radius as f32 - distance;
                if closeness <= 0.0 {
                    continue;
                }
                let roll = rng.gen_range(0..=closeness as i32);
                if roll as f32 > closeness / density {
                    self.trees
                        .push(TreePlacement::at(center.0 + dx, center.1 + dy, self.tile_size));
                }
            }
        }

        let added = self.trees.len() - before;
        debug!("Forest at {:?} (radius {}): {} trees", center, radius, added);
        added
    }

    /// Random scatter followed by every forest listed in the config.
    pub fn populate(&mut self, rng: &mut impl Rng) -> &[TreePlacement] {
        self.place_random_trees(rng);
        let forests = self.config.forests.clone();
        for forest in forests {
            self.generate_forest(forest.center, forest.radius, rng);
        }
        &self.trees
    }
}
