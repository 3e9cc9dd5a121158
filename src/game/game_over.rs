//! Game-over screen: a lockout so the player can't skip past it by
//! accident, then confirm returns to the title.

use glam::Vec2;

use crate::api::config::GameConfig;
use crate::components::sprite::Sprite;
use crate::game::cells;
use crate::game::GameState;
use crate::input::queue::{buttons, GamePad};
use crate::renderer::instance::RenderBuffer;

const LOCKOUT: f32 = 1.0;

pub struct GameOverScene {
    background: Sprite,
    logo: Sprite,
    timer: f32,
}

impl GameOverScene {
    pub fn new(config: &GameConfig) -> Self {
        let background = Sprite::new(
            cells::BACKGROUND.0,
            cells::BACKGROUND.1,
            Vec2::new(config.world_width, config.world_height),
        );
        let logo = Sprite::new(
            cells::GAME_OVER_LOGO.0,
            cells::GAME_OVER_LOGO.1,
            Vec2::new(400.0, 80.0),
        );
        Self {
            background,
            logo,
            timer: LOCKOUT,
        }
    }

    pub fn reset(&mut self) {
        self.timer = LOCKOUT;
    }

    pub fn update(&mut self, dt: f32, pad: &GamePad) -> Option<GameState> {
        if self.timer > 0.0 {
            self.timer -= dt;
            return None;
        }
        if pad.pressed(buttons::CONFIRM) || pad.pressed(buttons::FIRE) {
            return Some(GameState::Title);
        }
        None
    }

    pub fn render(&self, buf: &mut RenderBuffer) {
        buf.push_sprite(&self.background);
        buf.push_sprite(&self.logo);
    }
}
