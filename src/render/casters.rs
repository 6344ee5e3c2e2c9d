//! Grid traversal (DDA) ray caster.
use raylib::prelude::*;

use crate::world::grid::Grid;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayHit {
    pub hit: bool,
    /// Distance along the ray to the boundary of the hit cell, or the
    /// maximum range when nothing was hit.
    pub distance: f32,
}

impl RayHit {
    #[inline]
    pub fn miss(max_distance: f32) -> Self {
        Self { hit: false, distance: max_distance }
    }
}

/// Walks the ray from `origin` cell boundary by cell boundary and stops at
/// the first solid cell.
///
/// `dir` should be a unit vector for distances in grid units. Cells outside
/// the grid are transparent; the origin cell itself is never tested. When the
/// next x and y boundaries are equally far the x boundary is crossed first.
pub fn cast_ray(origin: Vector2, dir: Vector2, grid: &Grid, max_distance: f32) -> RayHit {
    if dir.x == 0.0 && dir.y == 0.0 {
        return RayHit::miss(max_distance);
    }

    let mut cell_x = origin.x.floor() as i32;
    let mut cell_y = origin.y.floor() as i32;

    let step_x = if dir.x > 0.0 { 1 } else { -1 };
    let step_y = if dir.y > 0.0 { 1 } else { -1 };

    // ray length to cross one whole cell along each axis; an axis the ray
    // never moves along gets a crossing that is out of range
    let unit_x = if dir.x == 0.0 { max_distance } else { (1.0 + (dir.y / dir.x).powi(2)).sqrt() };
    let unit_y = if dir.y == 0.0 { max_distance } else { (1.0 + (dir.x / dir.y).powi(2)).sqrt() };

    let mut len_x = if dir.x == 0.0 {
        max_distance
    } else if dir.x > 0.0 {
        ((cell_x + 1) as f32 - origin.x) * unit_x
    } else {
        (origin.x - cell_x as f32) * unit_x
    };
    let mut len_y = if dir.y == 0.0 {
        max_distance
    } else if dir.y > 0.0 {
        ((cell_y + 1) as f32 - origin.y) * unit_y
    } else {
        (origin.y - cell_y as f32) * unit_y
    };

    loop {
        let distance;
        if len_x <= len_y {
            distance = len_x;
            if distance >= max_distance {
                return RayHit::miss(max_distance);
            }
            cell_x += step_x;
            len_x += unit_x;
        } else {
            distance = len_y;
            if distance >= max_distance {
                return RayHit::miss(max_distance);
            }
            cell_y += step_y;
            len_y += unit_y;
        }

        if grid.is_solid(cell_x, cell_y) {
            return RayHit { hit: true, distance };
        }
    }
}

/// Ray from `origin` at `angle` radians.
#[inline]
pub fn cast_angle(origin: Vector2, angle: f32, grid: &Grid, max_distance: f32) -> RayHit {
    cast_ray(origin, Vector2::new(angle.cos(), angle.sin()), grid, max_distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_1_SQRT_2, FRAC_PI_2, PI};

    const EPS: f32 = 1e-4;

    #[test]
    fn hits_border_straight_ahead() {
        let grid = Grid::sample();
        let hit = cast_ray(Vector2::new(2.0, 2.0), Vector2::new(1.0, 0.0), &grid, 16.0);
        assert!(hit.hit);
        assert!((hit.distance - 4.0).abs() < EPS);
    }

    #[test]
    fn hits_in_all_four_axis_directions() {
        let grid = Grid::sample();
        let o = Vector2::new(2.5, 2.5);
        let cases = [
            (Vector2::new(1.0, 0.0), 3.5),
            (Vector2::new(-1.0, 0.0), 1.5),
            (Vector2::new(0.0, -1.0), 1.5),
            // column 2 going down meets the inner wall at row 5
            (Vector2::new(0.0, 1.0), 2.5),
        ];
        for (dir, expected) in cases {
            let hit = cast_ray(o, dir, &grid, 16.0);
            assert!(hit.hit, "{dir:?}");
            assert!((hit.distance - expected).abs() < EPS, "{dir:?}: {}", hit.distance);
        }
    }

    #[test]
    fn angle_helper_matches_direction() {
        let grid = Grid::sample();
        let hit = cast_angle(Vector2::new(2.5, 2.5), PI, &grid, 16.0);
        assert!((hit.distance - 1.5).abs() < EPS);
        let hit = cast_angle(Vector2::new(2.5, 2.5), -FRAC_PI_2, &grid, 16.0);
        assert!((hit.distance - 1.5).abs() < EPS);
    }

    #[test]
    fn miss_reports_max_range() {
        let grid = Grid::parse("000\n000\n000\n").unwrap();
        let hit = cast_ray(Vector2::new(1.5, 1.5), Vector2::new(0.6, 0.8), &grid, 10.0);
        assert_eq!(hit, RayHit::miss(10.0));
    }

    #[test]
    fn wall_beyond_range_is_a_miss() {
        let grid = Grid::sample();
        let hit = cast_ray(Vector2::new(2.0, 2.0), Vector2::new(1.0, 0.0), &grid, 3.5);
        assert!(!hit.hit);
        assert_eq!(hit.distance, 3.5);
    }

    #[test]
    fn zero_direction_is_a_miss() {
        let grid = Grid::sample();
        let hit = cast_ray(Vector2::new(2.0, 2.0), Vector2::new(0.0, 0.0), &grid, 16.0);
        assert_eq!(hit, RayHit::miss(16.0));
    }

    #[test]
    fn diagonal_hit_distance() {
        // from (1.5, 1.5) heading (1, 1)/sqrt2 the first solid cell is (3, 3),
        // entered through its corner at (3, 3)
        let grid = Grid::parse("00000\n00000\n00000\n00010\n00000\n").unwrap();
        let dir = Vector2::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2);
        let hit = cast_ray(Vector2::new(1.5, 1.5), dir, &grid, 16.0);
        assert!(hit.hit);
        assert!((hit.distance - 1.5 * 2f32.sqrt()).abs() < 1e-3);
    }

    #[test]
    fn translation_shifts_distance_by_offset() {
        let grid = Grid::sample();
        let dir = Vector2::new(1.0, 0.0);
        let a = cast_ray(Vector2::new(1.25, 3.5), dir, &grid, 16.0);
        let b = cast_ray(Vector2::new(2.25, 3.5), dir, &grid, 16.0);
        assert!(a.hit && b.hit);
        assert!((a.distance - b.distance - 1.0).abs() < EPS);

        let dir = Vector2::new(0.0, -1.0);
        let a = cast_ray(Vector2::new(4.5, 4.75), dir, &grid, 16.0);
        let b = cast_ray(Vector2::new(4.5, 3.75), dir, &grid, 16.0);
        assert!((a.distance - b.distance - 1.0).abs() < EPS);
    }

    #[test]
    fn exact_tie_crosses_x_first() {
        // both boundaries are sqrt(0.5) away; only the cell to the right is solid
        let grid = Grid::parse("010\n000\n000\n").unwrap();
        let dir = Vector2::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2);
        let hit = cast_ray(Vector2::new(0.5, 0.5), dir, &grid, 16.0);
        assert!(hit.hit);
        assert!((hit.distance - FRAC_1_SQRT_2).abs() < EPS);

        // mirrored: only the cell below is solid, so the x-first walk passes it
        let grid = Grid::parse("000\n100\n000\n").unwrap();
        let hit = cast_ray(Vector2::new(0.5, 0.5), dir, &grid, 16.0);
        assert!(!hit.hit);
    }

    #[test]
    fn leaves_grid_without_hit() {
        let grid = Grid::parse("000\n000\n").unwrap();
        let hit = cast_ray(Vector2::new(0.5, 0.5), Vector2::new(-1.0, 0.0), &grid, 5.0);
        assert_eq!(hit, RayHit::miss(5.0));
    }
}
