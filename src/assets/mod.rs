//! Data-driven assets: the JSON spawn map and the cursor that walks it.

pub mod spawn_map;

pub use spawn_map::{MapCursor, SpawnMap};
