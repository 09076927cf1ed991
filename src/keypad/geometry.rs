//! Placement of round keys on a grid, and pointer hit-testing.

use super::key::{Key, LAYOUT};
use crate::config::KeypadConfig;

/// A pointer position, in the same units as [`KeyGeometry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Grid of square cells, each holding one circular key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyGeometry {
    pub button_size: u32,
    pub gap: u32,
    pub padding: u32,
}

impl From<&KeypadConfig> for KeyGeometry {
    fn from(config: &KeypadConfig) -> Self {
        Self {
            button_size: config.button_size,
            gap: config.gap,
            padding: config.padding,
        }
    }
}

impl Default for KeyGeometry {
    fn default() -> Self {
        Self::from(&KeypadConfig::default())
    }
}

impl KeyGeometry {
    /// Top-left corner of the cell at `row`, `col`.
    pub fn cell_origin(&self, row: usize, col: usize) -> Point {
        let stride = i64::from(self.button_size) + i64::from(self.gap);
        let offset = |index: usize| (i64::from(self.padding) + index as i64 * stride) as i32;
        Point::new(offset(col), offset(row))
    }

    /// Total width and height of the grid including padding.
    pub fn size(&self) -> (u32, u32) {
        let extent = |count: u32| {
            2 * self.padding + count * self.button_size + count.saturating_sub(1) * self.gap
        };
        (extent(LAYOUT[0].len() as u32), extent(LAYOUT.len() as u32))
    }

    /// Whether `point` falls inside the circle inscribed in the cell at
    /// `row`, `col`.
    pub fn contains(&self, row: usize, col: usize, point: Point) -> bool {
        let origin = self.cell_origin(row, col);
        let radius = i64::from(self.button_size / 2);
        let center_x = i64::from(origin.x) + radius;
        let center_y = i64::from(origin.y) + radius;
        let dx = i64::from(point.x) - center_x;
        let dy = i64::from(point.y) - center_y;
        dx * dx + dy * dy <= radius * radius
    }

    /// The key whose circle contains `point`. Corners of a cell and the gaps
    /// between cells hit nothing.
    pub fn hit_test(&self, point: Point) -> Option<Key> {
        LAYOUT.iter().enumerate().find_map(|(row, keys)| {
            keys.iter()
                .enumerate()
                .find(|(col, _)| self.contains(row, *col, point))
                .map(|(_, key)| *key)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center_of(geometry: &KeyGeometry, key: Key) -> Point {
        let (row, col) = key.position().unwrap();
        let origin = geometry.cell_origin(row, col);
        let half = (geometry.button_size / 2) as i32;
        Point::new(origin.x + half, origin.y + half)
    }

    #[test]
    fn test_cell_origins() {
        let geometry = KeyGeometry::default();
        assert_eq!(geometry.cell_origin(0, 0), Point::new(18, 18));
        assert_eq!(geometry.cell_origin(1, 2), Point::new(18 + 2 * 112, 18 + 112));
        assert_eq!(geometry.size(), (36 + 4 * 96 + 3 * 16, 36 + 5 * 96 + 4 * 16));
    }

    #[test]
    fn test_centers_hit_their_key() {
        let geometry = KeyGeometry::default();
        for key in LAYOUT.iter().flatten() {
            assert_eq!(geometry.hit_test(center_of(&geometry, *key)), Some(*key));
        }
    }

    #[test]
    fn test_circle_edge() {
        let geometry = KeyGeometry::default();
        let center = center_of(&geometry, Key::Digit(5));
        assert_eq!(
            geometry.hit_test(Point::new(center.x + 48, center.y)),
            Some(Key::Digit(5))
        );
        assert_eq!(geometry.hit_test(Point::new(center.x + 49, center.y)), None);
    }

    #[test]
    fn test_cell_corner_misses() {
        let geometry = KeyGeometry::default();
        // Inside the square cell of AC, outside its circle
        assert_eq!(geometry.hit_test(Point::new(20, 20)), None);
        // Padding and gaps
        assert_eq!(geometry.hit_test(Point::new(5, 60)), None);
        assert_eq!(geometry.hit_test(Point::new(18 + 96 + 8, 66)), None);
        assert_eq!(geometry.hit_test(Point::new(-100, -100)), None);
    }
}
