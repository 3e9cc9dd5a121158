pub mod queue;

pub use queue::{buttons, GamePad, InputEvent, InputQueue};
