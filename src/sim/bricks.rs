//! Brick set
//!
//! Ordered collection of static bricks. Order only drives the collision scan;
//! at most one brick is struck per tick.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, Rect};
use crate::settings::BrickLayout;

/// Outcome of striking a brick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickStrike {
    /// Index of the brick in scan order at the time of the hit
    pub index: usize,
    /// False when the last-brick guard kept it in place
    pub removed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrickSet {
    bricks: Vec<Entity>,
}

impl BrickSet {
    pub fn new(bricks: Vec<Entity>) -> Self {
        Self { bricks }
    }

    /// Build the grid described by `layout`, row by row
    pub fn from_layout(layout: &BrickLayout) -> Self {
        let bricks = layout
            .centers()
            .map(|center| Entity::brick(center, layout.size))
            .collect();
        Self { bricks }
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.bricks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.bricks.iter()
    }

    /// Index of the first brick overlapping `rect`; the scan stops there
    pub fn first_overlapping(&self, rect: &Rect) -> Option<usize> {
        self.bricks.iter().position(|b| b.rect().overlaps(rect))
    }

    /// Remove the brick at `index` unless it is the only one left
    ///
    /// The final brick can be hit but never removed, so a round cannot be
    /// cleared. Returns whether a brick was removed.
    pub fn remove_guarded(&mut self, index: usize) -> bool {
        if self.bricks.len() > 1 && index < self.bricks.len() {
            self.bricks.remove(index);
            true
        } else {
            false
        }
    }
}
