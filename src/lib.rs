//! skyraid: a pooled-actor 2D side-scrolling shoot-em-up core.
//!
//! The crate is the whole game brain behind a thin host: the host
//! pushes input events, calls [`SceneDriver::frame`] once per tick,
//! then drains sound cues and game events and draws the instance
//! buffer filled by [`SceneDriver::render`].
//!
//! Layering, bottom up:
//! - `extensions`: easing curves and scripted [`Motion`] programs
//! - `components`: [`Sprite`] and frame [`Animation`]
//! - `core`: [`Actor`], fixed-capacity [`ActorPool`]s, and the
//!   all-pairs collision engine
//! - `assets`: the JSON [`SpawnMap`] and its scroll cursor
//! - `input` / `renderer`: the host-facing queues and buffers
//! - `game`: weapon state, contact handlers, scenes, and the driver

pub mod api;
pub mod assets;
pub mod components;
pub mod core;
pub mod extensions;
pub mod game;
pub mod input;
pub mod renderer;

pub use crate::api::{GameConfig, GameEvent, SoundCue};
pub use crate::assets::{MapCursor, SpawnMap};
pub use crate::components::{Animation, Sprite};
pub use crate::core::{detect_collisions, Actor, ActorKind, ActorPool, ItemKind, Rect, Weapon};
pub use crate::extensions::{Easing, Motion};
pub use crate::game::{GameState, SceneDriver};
pub use crate::input::{GamePad, InputEvent, InputQueue};
pub use crate::renderer::{RenderBuffer, RenderInstance};
