pub mod actor;
pub mod collision;
pub mod pool;

pub use actor::{Actor, ActorKind, ItemKind, Weapon};
pub use collision::{detect_collisions, Rect};
pub use pool::ActorPool;
