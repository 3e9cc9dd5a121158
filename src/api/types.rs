use bytemuck::{Pod, Zeroable};

/// An audio cue emitted by game logic into the per-frame sound list.
/// The host maps each cue to a prepared sound and plays it; the BGM
/// cues bracket the main scene's background track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum SoundCue {
    PlayerShot,
    LaserFire,
    Blast,
    ItemGet,
    GameStart,
    BgmPlay,
    BgmStop,
}

/// A game event communicated to the host. Generic container: `kind`
/// identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    pub const KIND_SCORE: f32 = 1.0;
    pub const KIND_STATE: f32 = 2.0;

    /// The player's score changed.
    pub fn score(value: u32) -> Self {
        Self {
            kind: Self::KIND_SCORE,
            a: value as f32,
            ..Default::default()
        }
    }

    /// The scene driver switched state.
    pub fn state(index: u32) -> Self {
        Self {
            kind: Self::KIND_STATE,
            a: index as f32,
            ..Default::default()
        }
    }
}
