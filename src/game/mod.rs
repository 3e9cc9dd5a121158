//! Game layer: weapon state, contact handlers, the three scenes, and
//! the driver that owns them.

pub mod contact;
pub mod game_over;
pub mod main_scene;
pub mod title;
pub mod weapon;

use crate::api::config::GameConfig;
use crate::api::types::{GameEvent, SoundCue};
use crate::assets::spawn_map::SpawnMap;
use crate::input::queue::{GamePad, InputQueue};
use crate::renderer::instance::RenderBuffer;

use game_over::GameOverScene;
use main_scene::MainScene;
use title::TitleScene;

/// Atlas cell coordinates (col, row) for everything the game draws.
pub mod cells {
    use crate::core::actor::ItemKind;

    pub const PLAYER: (f32, f32) = (0.0, 0.0);
    /// The player ship is two cells wide.
    pub const PLAYER_SPAN: f32 = 2.0;
    pub const NORMAL_BULLET: (f32, f32) = (2.0, 0.0);
    pub const LASER_HEAD: (f32, f32) = (4.0, 0.0);
    pub const LASER_BODY: (f32, f32) = (3.5, 0.0);
    pub const LASER_TAIL: (f32, f32) = (3.0, 0.0);
    /// Enemy flight frames live in one atlas column.
    pub const ENEMY_COL: f32 = 15.0;
    /// First frame of the 5-frame blast strip.
    pub const BLAST: (f32, f32) = (13.0, 0.0);
    pub const ITEM_ROW: f32 = 1.0;
    pub const BACKGROUND: (f32, f32) = (0.0, 8.0);
    pub const TITLE_LOGO: (f32, f32) = (0.0, 9.0);
    pub const GAME_OVER_LOGO: (f32, f32) = (0.0, 11.0);

    pub fn item_col(kind: ItemKind) -> f32 {
        match kind {
            ItemKind::NormalShot => 3.0,
            ItemKind::Laser => 4.0,
            ItemKind::Score => 5.0,
        }
    }
}

/// Which scene is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Title,
    Main,
    GameOver,
}

impl GameState {
    /// Stable index reported to the host in state events.
    pub fn index(self) -> u32 {
        match self {
            GameState::Title => 0,
            GameState::Main => 1,
            GameState::GameOver => 2,
        }
    }
}

/// Owns the three scenes, the pad, and the per-frame host outboxes.
/// The host calls `frame` once per tick, then drains sounds and events
/// and reads the render buffer.
pub struct SceneDriver {
    state: GameState,
    title: TitleScene,
    main: MainScene,
    game_over: GameOverScene,
    pad: GamePad,
    sounds: Vec<SoundCue>,
    events: Vec<GameEvent>,
}

impl SceneDriver {
    pub fn new(config: GameConfig, map: SpawnMap) -> Self {
        Self {
            state: GameState::Title,
            title: TitleScene::new(&config),
            game_over: GameOverScene::new(&config),
            main: MainScene::new(config, map),
            pad: GamePad::new(),
            sounds: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.main.score()
    }

    /// Advance the game one frame: fold the queued input into the pad,
    /// run the active scene, and apply any scene transition.
    pub fn frame(&mut self, dt: f32, input: &mut InputQueue) {
        self.pad.apply(&input.drain());

        let score_before = self.main.score();
        let next = match self.state {
            GameState::Title => self.title.update(dt, &self.pad, &mut self.sounds),
            GameState::Main => {
                self.main.handle_input(&self.pad, &mut self.sounds);
                self.main.update(dt, &mut self.sounds)
            }
            GameState::GameOver => self.game_over.update(dt, &self.pad),
        };

        if self.main.score() != score_before {
            self.events.push(GameEvent::score(self.main.score()));
        }
        if let Some(next) = next {
            self.transition(next);
        }
    }

    fn transition(&mut self, next: GameState) {
        log::info!("scene transition {:?} -> {:?}", self.state, next);
        if self.state == GameState::Main {
            self.main.finalize(&mut self.sounds);
        }
        match next {
            GameState::Title => self.title.reset(),
            GameState::Main => self.main.reset(&mut self.sounds),
            GameState::GameOver => self.game_over.reset(),
        }
        self.state = next;
        self.events.push(GameEvent::state(next.index()));
    }

    /// Fill the instance buffer with the active scene's sprites.
    pub fn render(&self, buf: &mut RenderBuffer) {
        buf.clear();
        match self.state {
            GameState::Title => self.title.render(buf),
            GameState::Main => self.main.render(buf),
            GameState::GameOver => self.game_over.render(buf),
        }
    }

    /// Drain the sound cues queued since the last call.
    pub fn take_sounds(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.sounds)
    }

    /// Drain the host events queued since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
