pub mod config;
pub mod types;

pub use config::GameConfig;
pub use types::{GameEvent, SoundCue};
