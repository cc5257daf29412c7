//! Viewport geometry in logical units.

/// Logical units per terminal cell, horizontally.
pub const CELL_WIDTH: f32 = 8.0;

/// Logical units per terminal cell, vertically.
pub const CELL_HEIGHT: f32 = 16.0;

/// A point in logical units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Center of the terminal cell at `column`, `row`.
    pub fn from_cell(column: u16, row: u16) -> Self {
        Self {
            x: column as f32 * CELL_WIDTH + CELL_WIDTH / 2.0,
            y: row as f32 * CELL_HEIGHT + CELL_HEIGHT / 2.0,
        }
    }
}

/// Size of the drawing area in logical units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Viewport covering a terminal area of `columns` × `rows` cells.
    pub fn from_cells(columns: u16, rows: u16) -> Self {
        Self {
            width: columns as f32 * CELL_WIDTH,
            height: rows as f32 * CELL_HEIGHT,
        }
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// A viewport with no area can't be drawn to.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn contains(&self, point: Point) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cells() {
        let viewport = Viewport::from_cells(80, 24);
        assert_eq!(viewport.width, 640.0);
        assert_eq!(viewport.height, 384.0);
        assert!(!viewport.is_empty());
        assert!(Viewport::from_cells(0, 24).is_empty());
    }

    #[test]
    fn test_point_distance() {
        assert_eq!(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_cell_center_is_inside_viewport() {
        let viewport = Viewport::from_cells(10, 5);
        assert!(viewport.contains(Point::from_cell(9, 4)));
        assert!(!viewport.contains(Point::from_cell(10, 4)));
    }
}
