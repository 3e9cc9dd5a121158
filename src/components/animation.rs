//! Frame animation for sprite cell sequences.
//!
//! A single sequence of atlas cells played at a fixed rate, looping
//! (enemy flight cycles) or one-shot (blast effects).

/// Animation state for a sprite.
#[derive(Debug, Clone)]
pub struct Animation {
    /// Frame cells as (col, row) pairs in the atlas.
    frames: Vec<(f32, f32)>,
    /// Seconds per frame.
    frame_duration: f32,
    /// Whether to loop when reaching the end.
    looping: bool,
    /// Current frame index.
    index: usize,
    /// Time accumulated in the current frame.
    timer: f32,
    /// Whether playback is active.
    playing: bool,
}

impl Animation {
    /// Create from an explicit frame list.
    pub fn from_frames(frames: Vec<(f32, f32)>, fps: f32, looping: bool) -> Self {
        Self {
            frames,
            frame_duration: 1.0 / fps,
            looping,
            index: 0,
            timer: 0.0,
            playing: true,
        }
    }

    /// Create a strip of consecutive rows in one column.
    pub fn vertical_strip(col: f32, start_row: f32, frame_count: u32, fps: f32, looping: bool) -> Self {
        let frames = (0..frame_count)
            .map(|i| (col, start_row + i as f32))
            .collect();
        Self::from_frames(frames, fps, looping)
    }

    /// Current frame cell (col, row).
    pub fn current_frame(&self) -> Option<(f32, f32)> {
        self.frames.get(self.index).copied()
    }

    /// Whether a one-shot animation has played through.
    pub fn is_finished(&self) -> bool {
        if self.frames.is_empty() {
            return true;
        }
        !self.looping && !self.playing
    }

    /// Advance by `dt` seconds. Returns true if the frame changed.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.playing || self.frames.is_empty() {
            return false;
        }

        self.timer += dt;
        let mut frame_changed = false;

        while self.timer >= self.frame_duration {
            self.timer -= self.frame_duration;
            self.index += 1;
            frame_changed = true;

            if self.index >= self.frames.len() {
                if self.looping {
                    self.index = 0;
                } else {
                    self.index = self.frames.len() - 1;
                    self.playing = false;
                    break;
                }
            }
        }

        frame_changed
    }
}
