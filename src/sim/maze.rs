//! Procedural cubicle maze layout
//!
//! A level's wall set is assembled from a fixed base cell, a cyclic
//! per-level extra set, a 2x2 tiling of that cell across the floor, a
//! perimeter border, and inward "blocker" stubs that break up perimeter
//! running lanes. Generation is pure: the same level index always yields
//! the same wall list.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// One rectangular wall, described by its footprint center and extents
/// on the ground plane. Immutable once generated for a level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub x: f32,
    pub z: f32,
    pub width: f32,
    pub depth: f32,
    pub height: f32,
}

impl Wall {
    pub fn new(x: f32, z: f32, width: f32, depth: f32) -> Self {
        Self {
            x,
            z,
            width,
            depth,
            height: WALL_HEIGHT,
        }
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Footprint min corner (x, z)
    #[inline]
    pub fn footprint_min(&self) -> Vec2 {
        Vec2::new(self.x - self.width / 2.0, self.z - self.depth / 2.0)
    }

    /// Footprint max corner (x, z)
    #[inline]
    pub fn footprint_max(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.z + self.depth / 2.0)
    }

    /// Full 3D bounds, floor to wall top
    #[inline]
    pub fn aabb(&self) -> (Vec3, Vec3) {
        let min = self.footprint_min();
        let max = self.footprint_max();
        (
            Vec3::new(min.x, 0.0, min.y),
            Vec3::new(max.x, self.height, max.y),
        )
    }

    #[inline]
    fn translated(&self, dx: f32, dz: f32) -> Self {
        Self {
            x: self.x + dx,
            z: self.z + dz,
            ..*self
        }
    }
}

/// The fixed cubicle layout every level starts from
fn base_layout() -> Vec<Wall> {
    const T: f32 = WALL_THICKNESS;
    vec![
        Wall::new(-10.0, -10.0, 8.0, T),
        Wall::new(-10.0, -10.0, T, 6.0),
        Wall::new(-4.0, -12.0, T, 6.0),
        Wall::new(-4.0, -6.0, 6.0, T),
        Wall::new(4.0, -10.0, 8.0, T),
        Wall::new(8.0, -7.0, T, 6.0),
        Wall::new(10.0, -2.0, 10.0, T),
        Wall::new(-8.0, -2.0, 10.0, T),
        Wall::new(-12.0, 2.0, T, 8.0),
        Wall::new(-4.0, 2.0, T, 10.0),
        Wall::new(0.0, 6.0, 8.0, T),
        Wall::new(6.0, 4.0, 8.0, T),
        Wall::new(10.0, 7.0, T, 6.0),
        Wall::new(-8.0, 10.0, 8.0, T),
        Wall::new(4.0, 10.0, 6.0, T),
        Wall::new(7.0, 12.0, T, 4.0),
    ]
}

/// Per-level extra walls, indexed cyclically by `level % 10`
fn level_extras(level: u8) -> Vec<Wall> {
    const T: f32 = WALL_THICKNESS;
    match level % 10 {
        1 => vec![
            Wall::new(-2.0, -14.0, 6.0, T),
            Wall::new(2.0, -8.0, T, 6.0),
            Wall::new(12.0, 2.0, T, 8.0),
        ],
        2 => vec![
            Wall::new(-14.0, -6.0, T, 8.0),
            Wall::new(-2.0, 8.0, 6.0, T),
            Wall::new(6.0, 12.0, 6.0, T),
        ],
        3 => vec![
            Wall::new(-6.0, -2.0, 6.0, T),
            Wall::new(2.0, 2.0, T, 8.0),
            Wall::new(12.0, -12.0, T, 6.0),
        ],
        4 => vec![
            Wall::new(-12.0, 12.0, 6.0, T),
            Wall::new(0.0, -4.0, 8.0, T),
            Wall::new(12.0, 8.0, 8.0, T),
        ],
        5 => vec![
            Wall::new(-6.0, 6.0, T, 8.0),
            Wall::new(6.0, -6.0, T, 8.0),
            Wall::new(-2.0, 12.0, 6.0, T),
        ],
        6 => vec![
            Wall::new(-12.0, -12.0, 6.0, T),
            Wall::new(0.0, 0.0, 8.0, T),
            Wall::new(12.0, -4.0, 6.0, T),
        ],
        7 => vec![
            Wall::new(-4.0, -4.0, T, 8.0),
            Wall::new(4.0, 8.0, T, 8.0),
            Wall::new(-10.0, 4.0, 8.0, T),
        ],
        8 => vec![
            Wall::new(-14.0, 0.0, T, 8.0),
            Wall::new(6.0, -12.0, 8.0, T),
            Wall::new(8.0, 2.0, T, 8.0),
        ],
        9 => vec![
            Wall::new(-10.0, 14.0, 8.0, T),
            Wall::new(0.0, -8.0, T, 8.0),
            Wall::new(10.0, -6.0, 6.0, T),
        ],
        _ => Vec::new(),
    }
}

/// Base cell layout for a level: fixed walls plus the cyclic extra set
pub fn generate_layout(level: u8) -> Vec<Wall> {
    let mut walls = base_layout();
    walls.extend(level_extras(level));
    walls
}

/// Duplicate a cell layout across the floor: every wall is translated by
/// every (offset_x, offset_z) pair in the Cartesian product of `offsets`
/// with itself.
pub fn tile(base: &[Wall], offsets: &[f32]) -> Vec<Wall> {
    let mut walls = Vec::with_capacity(base.len() * offsets.len() * offsets.len());
    for &ox in offsets {
        for &oz in offsets {
            walls.extend(base.iter().map(|w| w.translated(ox, oz)));
        }
    }
    walls
}

/// Four walls forming a square perimeter of edge length `size`
pub fn generate_border(size: f32, height: f32) -> Vec<Wall> {
    let half = size / 2.0;
    vec![
        Wall::new(0.0, -half, size, WALL_THICKNESS).with_height(height),
        Wall::new(0.0, half, size, WALL_THICKNESS).with_height(height),
        Wall::new(-half, 0.0, WALL_THICKNESS, size).with_height(height),
        Wall::new(half, 0.0, WALL_THICKNESS, size).with_height(height),
    ]
}

/// Short inward stubs at regular intervals along each perimeter edge.
/// Without these the outer lane is an unobstructed loop around the maze.
pub fn generate_border_blockers(size: f32, spacing: f32, blocker_length: f32) -> Vec<Wall> {
    let half = size / 2.0;
    let start = -half + spacing;
    let end = half - spacing;
    let inward = blocker_length / 2.0 + WALL_THICKNESS;
    let mut walls = Vec::new();

    let mut x = start;
    while x <= end + 1e-4 {
        walls.push(Wall::new(x, -half + inward, WALL_THICKNESS, blocker_length));
        walls.push(Wall::new(x, half - inward, WALL_THICKNESS, blocker_length));
        x += spacing;
    }

    let mut z = start;
    while z <= end + 1e-4 {
        walls.push(Wall::new(-half + inward, z, blocker_length, WALL_THICKNESS));
        walls.push(Wall::new(half - inward, z, blocker_length, WALL_THICKNESS));
        z += spacing;
    }

    walls
}

/// Complete wall set for a level: the base cell tiled across the 2x2
/// macro-grid, the perimeter border, and the border blockers.
pub fn level_walls(level: u8) -> Vec<Wall> {
    level_walls_with(level, BORDER_SPACING, BLOCKER_LENGTH)
}

/// `level_walls` with overridable perimeter tuning
pub fn level_walls_with(level: u8, border_spacing: f32, blocker_length: f32) -> Vec<Wall> {
    let half_tile = TILE_SIZE / 2.0;
    let mut walls = tile(&generate_layout(level), &[-half_tile, half_tile]);
    walls.extend(generate_border(FLOOR_SIZE, BORDER_HEIGHT));
    walls.extend(generate_border_blockers(
        FLOOR_SIZE,
        border_spacing,
        blocker_length,
    ));
    walls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_deterministic() {
        assert_eq!(generate_layout(3), generate_layout(3));
        assert_eq!(generate_layout(0).len(), 16);
        assert_eq!(generate_layout(1).len(), 19);
    }

    #[test]
    fn test_extras_cycle() {
        assert_eq!(generate_layout(2), generate_layout(12));
        assert_ne!(generate_layout(2), generate_layout(3));
    }

    #[test]
    fn test_tile_quadruples_and_offsets() {
        let base = vec![Wall::new(1.0, 2.0, 4.0, WALL_THICKNESS)];
        let tiled = tile(&base, &[-15.0, 15.0]);
        assert_eq!(tiled.len(), 4);
        let positions: Vec<(f32, f32)> = tiled.iter().map(|w| (w.x, w.z)).collect();
        for expected in [(-14.0, -13.0), (-14.0, 17.0), (16.0, -13.0), (16.0, 17.0)] {
            assert!(positions.contains(&expected), "missing {expected:?}");
        }
    }

    #[test]
    fn test_border_encloses_square() {
        let border = generate_border(60.0, 4.0);
        assert_eq!(border.len(), 4);
        assert!(border.iter().all(|w| w.height == 4.0));
        let north = &border[0];
        assert_eq!(north.z, -30.0);
        assert_eq!(north.width, 60.0);
    }

    #[test]
    fn test_blocker_count_and_inset() {
        // floor 60, spacing 10: positions -20..=20 -> 5 per side, 2 sides, 2 axes
        let blockers = generate_border_blockers(60.0, 10.0, 5.0);
        assert_eq!(blockers.len(), 20);
        let inward = 5.0 / 2.0 + WALL_THICKNESS;
        assert!(
            blockers
                .iter()
                .all(|w| w.x.abs() == 30.0 - inward || w.z.abs() == 30.0 - inward)
        );
    }

    #[test]
    fn test_level_walls_composition() {
        let walls = level_walls(0);
        // 16 base walls * 4 tiles + 4 border + 20 blockers
        assert_eq!(walls.len(), 16 * 4 + 4 + 20);
        // every wall has a positive footprint
        assert!(walls.iter().all(|w| w.width > 0.0 && w.depth > 0.0));
    }

    #[test]
    fn test_wall_aabb() {
        let w = Wall::new(2.0, -3.0, 4.0, 1.0);
        let (min, max) = w.aabb();
        assert_eq!(min, glam::Vec3::new(0.0, 0.0, -3.5));
        assert_eq!(max, glam::Vec3::new(4.0, WALL_HEIGHT, -2.5));
    }
}
