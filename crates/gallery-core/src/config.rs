//! Static lookup tables and tunables.
//!
//! `GalleryConfig::default()` reproduces the stock room; tests and embedders
//! may swap in a different wall table or shorter delays.

use crate::catalog::{FrameSize, Wall};
use crate::constants::*;
use fnv::FnvHashMap;
use glam::Vec3;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallConfig {
    pub position: Vec3,
    /// Euler angles in degrees.
    pub rotation: Vec3,
    /// Usable span along the wall.
    pub width: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WallTable {
    walls: FnvHashMap<Wall, WallConfig>,
}

impl WallTable {
    pub fn empty() -> Self {
        Self {
            walls: FnvHashMap::default(),
        }
    }

    pub fn with(mut self, wall: Wall, config: WallConfig) -> Self {
        self.walls.insert(wall, config);
        self
    }

    pub fn without(mut self, wall: Wall) -> Self {
        self.walls.remove(&wall);
        self
    }

    #[inline]
    pub fn get(&self, wall: Wall) -> Option<&WallConfig> {
        self.walls.get(&wall)
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }
}

impl Default for WallTable {
    fn default() -> Self {
        let wall = |position, rotation, width| WallConfig {
            position: vec3(position),
            rotation: vec3(rotation),
            width,
        };
        Self::empty()
            .with(
                Wall::North,
                wall(NORTH_WALL_POSITION, NORTH_WALL_ROTATION, HORIZONTAL_WALL_WIDTH),
            )
            .with(
                Wall::South,
                wall(SOUTH_WALL_POSITION, SOUTH_WALL_ROTATION, HORIZONTAL_WALL_WIDTH),
            )
            .with(
                Wall::East,
                wall(EAST_WALL_POSITION, EAST_WALL_ROTATION, VERTICAL_WALL_WIDTH),
            )
            .with(
                Wall::West,
                wall(WEST_WALL_POSITION, WEST_WALL_ROTATION, VERTICAL_WALL_WIDTH),
            )
    }
}

/// Picture and frame dimensions for one frame size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSizeConfig {
    pub width: f32,
    pub height: f32,
    pub frame_width: f32,
    pub frame_height: f32,
}

impl FrameSizeConfig {
    pub fn for_size(size: FrameSize) -> Self {
        match size {
            FrameSize::Small => Self {
                width: 1.5,
                height: 1.2,
                frame_width: 1.7,
                frame_height: 1.4,
            },
            FrameSize::Medium => Self {
                width: 2.0,
                height: 1.5,
                frame_width: 2.2,
                frame_height: 1.7,
            },
            FrameSize::Large => Self {
                width: 2.5,
                height: 1.8,
                frame_width: 2.7,
                frame_height: 2.0,
            },
        }
    }

    /// Vertical offset of the label plate relative to the frame centre.
    #[inline]
    pub fn label_y(&self) -> f32 {
        -self.frame_height / 2.0 - LABEL_GAP
    }
}

#[derive(Clone, Debug)]
pub struct GalleryConfig {
    pub walls: WallTable,
    pub wrap_width: usize,
    pub auto_hide_delay: Duration,
    pub loading_delay: Duration,
    pub welcome_hide_delay: Duration,
    pub orientation_debounce: Duration,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            walls: WallTable::default(),
            wrap_width: DESCRIPTION_WRAP_WIDTH,
            auto_hide_delay: Duration::from_millis(AUTO_HIDE_DELAY_MS),
            loading_delay: Duration::from_millis(LOADING_DELAY_MS),
            welcome_hide_delay: Duration::from_millis(WELCOME_HIDE_DELAY_MS),
            orientation_debounce: Duration::from_millis(ORIENTATION_DEBOUNCE_MS),
        }
    }
}
