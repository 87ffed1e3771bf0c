// src/utils/geometry.rs

use crate::map::{Direction, GridPos};

/// A point in canvas space, in points, with `y` growing downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_sq_to(&self, other: &Point2D) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Maps grid cells to canvas space and back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileGeometry {
    pub tile_size: f32,
    pub inset: f32,
}

impl TileGeometry {
    pub fn new(tile_size: f32, inset: f32) -> Self {
        Self { tile_size, inset }
    }

    /// Top-left corner of a cell.
    pub fn cell_origin(&self, cell: GridPos) -> Point2D {
        Point2D::new(
            cell.x as f32 * self.tile_size,
            cell.y as f32 * self.tile_size,
        )
    }

    /// Centre of a cell.
    pub fn cell_center(&self, cell: GridPos) -> Point2D {
        let origin = self.cell_origin(cell);
        let half = self.tile_size / 2.0;
        Point2D::new(origin.x + half, origin.y + half)
    }

    /// The cell containing `point`, or `None` when it lies outside a
    /// `width` x `height` grid.
    pub fn cell_at(&self, point: Point2D, width: usize, height: usize) -> Option<GridPos> {
        if point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let x = (point.x / self.tile_size).floor() as usize;
        let y = (point.y / self.tile_size).floor() as usize;
        (x < width && y < height).then(|| GridPos::new(x, y))
    }

    /// The eight anchor points of a cell: the four inset corners first, then
    /// the four inset edge midpoints (top, bottom, left, right).
    pub fn anchor_points(&self, cell: GridPos) -> [Point2D; 8] {
        let Point2D { x: left, y: top } = self.cell_origin(cell);
        let right = left + self.tile_size;
        let bottom = top + self.tile_size;
        let mid_x = left + self.tile_size / 2.0;
        let mid_y = top + self.tile_size / 2.0;
        let o = self.inset;
        [
            Point2D::new(left + o, top + o),
            Point2D::new(right - o, top + o),
            Point2D::new(left + o, bottom - o),
            Point2D::new(right - o, bottom - o),
            Point2D::new(mid_x, top + o),
            Point2D::new(mid_x, bottom - o),
            Point2D::new(left + o, mid_y),
            Point2D::new(right - o, mid_y),
        ]
    }

    /// The anchor of `cell` closest to `target`. Ties go to the earliest
    /// anchor in [`TileGeometry::anchor_points`] order.
    pub fn nearest_anchor(&self, cell: GridPos, target: Point2D) -> Point2D {
        let anchors = self.anchor_points(cell);
        let mut best = anchors[0];
        let mut best_dist = best.distance_sq_to(&target);
        for anchor in &anchors[1..] {
            let dist = anchor.distance_sq_to(&target);
            if dist < best_dist {
                best = *anchor;
                best_dist = dist;
            }
        }
        best
    }
}

/// Classifies the displacement from `start` to `end` into a compass
/// direction. Diagonals win whenever both axes move.
pub fn compass_direction(start: Point2D, end: Point2D) -> Direction {
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    if dx > 0.0 && dy > 0.0 {
        Direction::SE
    } else if dx > 0.0 && dy < 0.0 {
        Direction::NE
    } else if dx < 0.0 && dy > 0.0 {
        Direction::SW
    } else if dx < 0.0 && dy < 0.0 {
        Direction::NW
    } else if dx > 0.0 {
        Direction::E
    } else if dx < 0.0 {
        Direction::W
    } else if dy > 0.0 {
        Direction::S
    } else if dy < 0.0 {
        Direction::N
    } else {
        Direction::Undetermined
    }
}
