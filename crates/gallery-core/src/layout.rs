//! Wall layout: evenly spaced slots, centred on each wall.

use crate::catalog::{ArtworkRecord, Wall};
use crate::config::WallTable;
use glam::Vec3;
use smallvec::SmallVec;

/// Gap between neighbours (and between the outer items and the wall edges)
/// when `count` items share a wall of `wall_width`.
#[inline]
pub fn compute_spacing(count: usize, wall_width: f32) -> f32 {
    wall_width / (count as f32 + 1.0)
}

/// Offsets of `count` items measured from the wall's midpoint, in order.
pub fn slot_offsets(count: usize, wall_width: f32) -> SmallVec<[f32; 8]> {
    let spacing = compute_spacing(count, wall_width);
    let half = wall_width / 2.0;
    (0..count)
        .map(|i| spacing * (i as f32 + 1.0) - half)
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutSlot {
    pub x_offset: f32,
    pub z_offset: f32,
}

impl LayoutSlot {
    /// Puts `offset` on the axis the wall runs along.
    #[inline]
    pub fn on_wall(wall: Wall, offset: f32) -> Self {
        if wall.is_horizontal() {
            Self {
                x_offset: offset,
                z_offset: 0.0,
            }
        } else {
            Self {
                x_offset: 0.0,
                z_offset: offset,
            }
        }
    }

    #[inline]
    pub fn apply(&self, base: Vec3) -> Vec3 {
        Vec3::new(base.x + self.x_offset, base.y, base.z + self.z_offset)
    }
}

/// Artworks sharing a wall, as indices into the catalog slice.
#[derive(Clone, Debug, PartialEq)]
pub struct WallGroup {
    pub wall: Wall,
    pub members: SmallVec<[usize; 4]>,
}

/// Groups in order of each wall's first appearance; catalog order inside.
/// Walls nobody hangs on get no group.
pub fn group_by_wall(artworks: &[ArtworkRecord]) -> Vec<WallGroup> {
    let mut groups: Vec<WallGroup> = Vec::with_capacity(Wall::ALL.len());
    for (i, a) in artworks.iter().enumerate() {
        match groups.iter_mut().find(|g| g.wall == a.wall_position) {
            Some(g) => g.members.push(i),
            None => groups.push(WallGroup {
                wall: a.wall_position,
                members: smallvec::smallvec![i],
            }),
        }
    }
    groups
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Index into the artwork slice the plan was computed from.
    pub artwork: usize,
    pub wall: Wall,
    pub slot: LayoutSlot,
    pub position: Vec3,
    pub rotation: Vec3,
}

pub fn plan_layout(artworks: &[ArtworkRecord], walls: &WallTable) -> Vec<Placement> {
    let mut placements = Vec::with_capacity(artworks.len());
    for group in group_by_wall(artworks) {
        let Some(cfg) = walls.get(group.wall) else {
            log::warn!(
                "[layout] no configuration for wall `{}`; skipping {} artwork(s)",
                group.wall,
                group.members.len()
            );
            continue;
        };
        let offsets = slot_offsets(group.members.len(), cfg.width);
        for (&artwork, &offset) in group.members.iter().zip(offsets.iter()) {
            let slot = LayoutSlot::on_wall(group.wall, offset);
            placements.push(Placement {
                artwork,
                wall: group.wall,
                slot,
                position: slot.apply(cfg.position),
                rotation: cfg.rotation,
            });
        }
    }
    log::debug!("[layout] planned {} placements", placements.len());
    placements
}
