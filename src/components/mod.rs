pub mod animation;
pub mod sprite;

pub use animation::Animation;
pub use sprite::Sprite;
