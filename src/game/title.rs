//! Title screen: a short intro delay, then wait for confirm, then a
//! blinking start lockout before gameplay begins.

use glam::Vec2;

use crate::api::config::GameConfig;
use crate::api::types::SoundCue;
use crate::components::sprite::Sprite;
use crate::game::cells;
use crate::game::GameState;
use crate::input::queue::{buttons, GamePad};
use crate::renderer::instance::RenderBuffer;

const INTRO_DELAY: f32 = 0.5;
const START_DELAY: f32 = 1.0;
const BLINK_HZ: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Input is ignored while the screen settles.
    Intro,
    /// Waiting for the player to confirm.
    Idle,
    /// Confirm received; the logo blinks until the transition.
    Starting,
}

pub struct TitleScene {
    background: Sprite,
    logo: Sprite,
    mode: Mode,
    timer: f32,
}

impl TitleScene {
    pub fn new(config: &GameConfig) -> Self {
        let background = Sprite::new(
            cells::BACKGROUND.0,
            cells::BACKGROUND.1,
            Vec2::new(config.world_width, config.world_height),
        );
        let logo = Sprite::new(cells::TITLE_LOGO.0, cells::TITLE_LOGO.1, Vec2::new(480.0, 120.0))
            .with_pos(Vec2::new(0.0, 100.0));
        Self {
            background,
            logo,
            mode: Mode::Intro,
            timer: INTRO_DELAY,
        }
    }

    pub fn reset(&mut self) {
        self.mode = Mode::Intro;
        self.timer = INTRO_DELAY;
        self.logo.alpha = 1.0;
    }

    pub fn update(
        &mut self,
        dt: f32,
        pad: &GamePad,
        sounds: &mut Vec<SoundCue>,
    ) -> Option<GameState> {
        match self.mode {
            Mode::Intro => {
                self.timer -= dt;
                if self.timer <= 0.0 {
                    self.mode = Mode::Idle;
                }
            }
            Mode::Idle => {
                if pad.pressed(buttons::CONFIRM) || pad.pressed(buttons::FIRE) {
                    sounds.push(SoundCue::GameStart);
                    self.mode = Mode::Starting;
                    self.timer = START_DELAY;
                }
            }
            Mode::Starting => {
                self.timer -= dt;
                let phase = (self.timer * BLINK_HZ) as i32;
                self.logo.alpha = if phase % 2 == 0 { 1.0 } else { 0.25 };
                if self.timer <= 0.0 {
                    return Some(GameState::Main);
                }
            }
        }
        None
    }

    pub fn render(&self, buf: &mut RenderBuffer) {
        buf.push_sprite(&self.background);
        buf.push_sprite(&self.logo);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::queue::InputEvent;

    fn confirm_pad() -> GamePad {
        let mut pad = GamePad::new();
        pad.apply(&[InputEvent::KeyDown { key_code: 13 }]);
        pad
    }

    #[test]
    fn confirm_is_ignored_during_intro() {
        let mut title = TitleScene::new(&GameConfig::default());
        let mut sounds = Vec::new();
        assert_eq!(title.update(0.1, &confirm_pad(), &mut sounds), None);
        assert!(sounds.is_empty());
        assert_eq!(title.mode, Mode::Intro);
    }

    #[test]
    fn confirm_after_intro_starts_with_lockout() {
        let mut title = TitleScene::new(&GameConfig::default());
        let mut sounds = Vec::new();
        let idle = GamePad::new();
        title.update(0.6, &idle, &mut sounds);
        assert_eq!(title.mode, Mode::Idle);

        assert_eq!(title.update(0.016, &confirm_pad(), &mut sounds), None);
        assert_eq!(sounds, vec![SoundCue::GameStart]);
        assert_eq!(title.mode, Mode::Starting);

        // The lockout runs out regardless of further input.
        let mut next = None;
        for _ in 0..70 {
            next = title.update(0.016, &idle, &mut sounds);
            if next.is_some() {
                break;
            }
        }
        assert_eq!(next, Some(GameState::Main));
    }

    #[test]
    fn reset_returns_to_intro() {
        let mut title = TitleScene::new(&GameConfig::default());
        let mut sounds = Vec::new();
        title.update(0.6, &GamePad::new(), &mut sounds);
        title.update(0.016, &confirm_pad(), &mut sounds);
        title.reset();
        assert_eq!(title.mode, Mode::Intro);
        assert_eq!(title.logo.alpha, 1.0);
    }
}
