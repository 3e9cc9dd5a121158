// extensions/mod.rs
//
// Decoupled helper systems: pure easing math and the scripted motion
// programs that drive all non-player kinematics.

pub mod easing;
pub mod motion;

pub use easing::{ease, lerp, Easing};
pub use motion::Motion;
