//! Enemy spawn map: a tile grid scrolled past the screen, loaded from
//! JSON. Each non-zero tile id in a column triggers a spawn when the
//! scroll cursor reaches that column.

use serde::{Deserialize, Serialize};

/// Tile grid in row-major order. Tile id 0 means empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnMap {
    /// Width in tiles.
    pub width: u32,
    /// Height in tiles.
    pub height: u32,
    /// Tile edge length in world units.
    pub tile_size: f32,
    tiles: Vec<u32>,
}

impl SpawnMap {
    pub fn new(width: u32, height: u32, tile_size: f32, tiles: Vec<u32>) -> Self {
        Self {
            width,
            height,
            tile_size,
            tiles,
        }
    }

    /// Parse a map from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Tile id at (row, col); 0 for anything out of range.
    pub fn at(&self, row: u32, col: u32) -> u32 {
        if row >= self.height || col >= self.width {
            return 0;
        }
        self.tiles
            .get((row * self.width + col) as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Total scroll length of the map in world units.
    pub fn pixel_width(&self) -> f32 {
        self.width as f32 * self.tile_size
    }
}

/// Scroll cursor over a spawn map. Advances with the scroll speed and
/// yields each tile column exactly once as it is crossed, looping back
/// to the start past the end of the map.
#[derive(Debug, Clone)]
pub struct MapCursor {
    current_x: f32,
    processed_x: f32,
}

impl MapCursor {
    /// Start the cursor `start_x` units in, so the map's first columns
    /// arrive after one screen width of scrolling.
    pub fn new(start_x: f32) -> Self {
        Self {
            current_x: start_x,
            processed_x: start_x,
        }
    }

    /// Advance by `dt` seconds. Returns the next column index when the
    /// cursor crosses a tile boundary. A column is yielded at most once;
    /// at the end of the map both counters loop to zero.
    pub fn advance(&mut self, dt: f32, scroll_speed: f32, map: &SpawnMap) -> Option<u32> {
        self.current_x += scroll_speed * dt;
        if self.current_x >= map.pixel_width() {
            self.current_x = 0.0;
            self.processed_x = 0.0;
        }
        if self.current_x - self.processed_x >= map.tile_size {
            self.processed_x += map.tile_size;
            return Some((self.processed_x / map.tile_size) as u32);
        }
        None
    }
}
