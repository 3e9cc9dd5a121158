//! The gameplay scene: player ship, pooled enemies/bullets/effects/items,
//! tile-driven spawning, weapon firing, and the three collision passes.

use glam::Vec2;

use crate::api::config::GameConfig;
use crate::api::types::SoundCue;
use crate::assets::spawn_map::{MapCursor, SpawnMap};
use crate::components::animation::Animation;
use crate::components::sprite::Sprite;
use crate::core::actor::{Actor, ActorKind, ItemKind, Weapon};
use crate::core::collision::{detect_collisions, Rect};
use crate::core::pool::ActorPool;
use crate::extensions::easing::Easing;
use crate::extensions::motion::Motion;
use crate::game::cells;
use crate::game::contact::{
    bullet_vs_enemy, player_vs_enemy, player_vs_item, BulletFx, PickupFx, RamFx,
};
use crate::game::weapon::WeaponState;
use crate::game::GameState;
use crate::input::queue::{buttons, GamePad};
use crate::renderer::instance::RenderBuffer;

/// Map tile ids that trigger a spawn. A plain enemy, or one carrying
/// the item it drops when shot down.
const TILE_ENEMY: u32 = 256;
const TILE_ENEMY_SHOT_ITEM: u32 = 228;
const TILE_ENEMY_LASER_ITEM: u32 = 229;
const TILE_ENEMY_SCORE_ITEM: u32 = 230;

pub struct MainScene {
    player: Actor,
    player_velocity: Vec2,
    enemies: ActorPool,
    bullets: ActorPool,
    effects: ActorPool,
    items: ActorPool,
    score: u32,
    weapon: WeaponState,
    map: SpawnMap,
    cursor: MapCursor,
    /// Countdown from player death to the game-over transition.
    down_timer: Option<f32>,
    background: Sprite,
    config: GameConfig,
}

impl MainScene {
    pub fn new(config: GameConfig, map: SpawnMap) -> Self {
        let background = Sprite::new(
            cells::BACKGROUND.0,
            cells::BACKGROUND.1,
            Vec2::new(config.world_width, config.world_height),
        );
        Self {
            player: Self::make_player(&config),
            player_velocity: Vec2::ZERO,
            enemies: ActorPool::new(config.enemy_capacity),
            bullets: ActorPool::new(config.bullet_capacity),
            effects: ActorPool::new(config.effect_capacity),
            items: ActorPool::new(config.item_capacity),
            score: 0,
            weapon: WeaponState::new(),
            cursor: MapCursor::new(config.world_width),
            map,
            down_timer: None,
            background,
            config,
        }
    }

    fn make_player(config: &GameConfig) -> Actor {
        let sprite = Sprite::new(cells::PLAYER.0, cells::PLAYER.1, Vec2::new(64.0, 32.0))
            .with_span(cells::PLAYER_SPAN)
            .with_pos(Vec2::new(-config.world_width * 0.25, 0.0));
        Actor::new(
            ActorKind::Player,
            sprite,
            Rect::new(-24.0, -8.0, 48.0, 16.0),
            1,
        )
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Fresh run: full pools reset, score zeroed, starting loadout,
    /// cursor one screen ahead of the map. Starts the background track.
    pub fn reset(&mut self, sounds: &mut Vec<SoundCue>) {
        self.player = Self::make_player(&self.config);
        self.player_velocity = Vec2::ZERO;
        self.enemies.reset();
        self.bullets.reset();
        self.effects.reset();
        self.items.reset();
        self.score = 0;
        self.weapon.reset();
        self.cursor = MapCursor::new(self.config.world_width);
        self.down_timer = None;
        sounds.push(SoundCue::BgmPlay);
    }

    /// Leaving the scene: stop the track and clear the pools.
    pub fn finalize(&mut self, sounds: &mut Vec<SoundCue>) {
        self.enemies.reset();
        self.bullets.reset();
        self.effects.reset();
        self.items.reset();
        sounds.push(SoundCue::BgmStop);
    }

    /// Translate the pad into steering and firing for this frame.
    pub fn handle_input(&mut self, pad: &GamePad, sounds: &mut Vec<SoundCue>) {
        if !self.player.is_alive() {
            self.player_velocity = Vec2::ZERO;
            return;
        }

        let mut dir = Vec2::ZERO;
        if pad.held(buttons::UP) {
            dir.y += 1.0;
        }
        if pad.held(buttons::DOWN) {
            dir.y -= 1.0;
        }
        if pad.held(buttons::LEFT) {
            dir.x -= 1.0;
        }
        if pad.held(buttons::RIGHT) {
            dir.x += 1.0;
        }
        self.player_velocity = if dir != Vec2::ZERO {
            dir.normalize() * self.config.player_speed
        } else {
            Vec2::ZERO
        };

        match self.weapon.weapon {
            Weapon::NormalShot => {
                let firing = pad.pressed(buttons::FIRE)
                    || (pad.held(buttons::FIRE) && self.weapon.shot_timer <= 0.0);
                if firing {
                    self.fire_normal(sounds);
                    self.weapon.shot_timer = self.config.shot_cooldown;
                }
            }
            Weapon::Laser => {
                if pad.held(buttons::FIRE) && self.weapon.laser_count < 0 {
                    self.weapon.laser_count = 0;
                    self.weapon.laser_anchor_x = self.player.sprite.pos.x + 32.0;
                    self.weapon.laser_tail = None;
                    sounds.push(SoundCue::LaserFire);
                }
            }
        }
    }

    /// One fan volley from the player's nose.
    fn fire_normal(&mut self, sounds: &mut Vec<SoundCue>) {
        sounds.push(SoundCue::PlayerShot);
        let origin = self.player.sprite.pos + Vec2::new(32.0, 0.0);
        for &angle in self.weapon.spray_angles() {
            let delta = Vec2::new(angle.cos(), angle.sin()) * self.config.bullet_speed;
            let sprite = Sprite::new(
                cells::NORMAL_BULLET.0,
                cells::NORMAL_BULLET.1,
                Vec2::splat(32.0),
            )
            .with_pos(origin)
            .with_rotation(angle)
            .with_motion(Motion::move_by(delta, 1.0, Easing::Linear));
            self.bullets.spawn(Actor::new(
                ActorKind::Bullet(Weapon::NormalShot),
                sprite,
                Rect::new(-16.0, -8.0, 32.0, 16.0),
                1,
            ));
        }
    }

    /// Laser beam bookkeeping: emit trailing segments from the anchor
    /// while the beam is discharging, keep live segments on the
    /// player's y, and return to idle once the beam has cleared.
    fn update_laser(&mut self) {
        if self.weapon.laser_count < 0 {
            return;
        }

        let emitted = self.weapon.laser_count as u32;
        if emitted < self.config.laser_length {
            let gap_open = match self.weapon.laser_tail.and_then(|i| self.bullets.get(i)) {
                Some(tail) if tail.is_alive() => {
                    tail.sprite.pos.x - self.weapon.laser_anchor_x >= self.config.laser_spacing
                }
                _ => true,
            };
            if gap_open {
                let cell = if emitted == 0 {
                    cells::LASER_HEAD
                } else if emitted + 1 == self.config.laser_length {
                    cells::LASER_TAIL
                } else {
                    cells::LASER_BODY
                };
                let sprite = Sprite::new(cell.0, cell.1, Vec2::splat(32.0))
                    .with_pos(Vec2::new(
                        self.weapon.laser_anchor_x,
                        self.player.sprite.pos.y,
                    ))
                    .with_motion(Motion::move_by_x(
                        self.config.laser_speed,
                        1.0,
                        Easing::Linear,
                    ));
                let actor = Actor::new(
                    ActorKind::Bullet(Weapon::Laser),
                    sprite,
                    Rect::new(-16.0, -8.0, 32.0, 16.0),
                    self.weapon.laser_health(),
                );
                if let Some(index) = self.bullets.spawn(actor) {
                    self.weapon.laser_tail = Some(index);
                    self.weapon.laser_count += 1;
                }
            }
        } else {
            let cleared = match self.weapon.laser_tail.and_then(|i| self.bullets.get(i)) {
                Some(tail) if tail.is_alive() => {
                    tail.sprite.pos.x - self.weapon.laser_anchor_x
                        >= self.config.laser_reset_distance
                }
                _ => true,
            };
            if cleared {
                self.weapon.laser_count = -1;
                self.weapon.laser_tail = None;
            }
        }

        let y = self.player.sprite.pos.y;
        for actor in self.bullets.alive_mut() {
            if matches!(actor.kind, ActorKind::Bullet(Weapon::Laser)) {
                actor.sprite.pos.y = y;
            }
        }
    }

    /// Spawn the enemies of one map column along the right edge.
    fn spawn_column(&mut self, col: u32) {
        for row in 0..self.map.height {
            let carries = match self.map.at(row, col) {
                TILE_ENEMY => None,
                TILE_ENEMY_SHOT_ITEM => Some(ItemKind::NormalShot),
                TILE_ENEMY_LASER_ITEM => Some(ItemKind::Laser),
                TILE_ENEMY_SCORE_ITEM => Some(ItemKind::Score),
                _ => continue,
            };
            let pos = Vec2::new(
                self.config.world_width * 0.5,
                self.config.world_height * 0.5 - row as f32 * self.map.tile_size,
            );
            let sprite = Sprite::new(cells::ENEMY_COL, 0.0, Vec2::splat(32.0))
                .with_pos(pos)
                .with_animation(Animation::from_frames(
                    vec![
                        (cells::ENEMY_COL, 0.0),
                        (cells::ENEMY_COL, 3.0),
                        (cells::ENEMY_COL, 2.0),
                        (cells::ENEMY_COL, 1.0),
                    ],
                    8.0,
                    true,
                ))
                .with_motion(Motion::parallel(vec![
                    Motion::sequence(
                        4,
                        vec![
                            Motion::move_by_y(100.0, 1.0, Easing::QuadInOut),
                            Motion::move_by_y(-100.0, 1.0, Easing::QuadInOut),
                        ],
                    ),
                    Motion::move_by_x(-1000.0, 8.0, Easing::Linear),
                ]));
            self.enemies.spawn(Actor::new(
                ActorKind::Enemy { carries },
                sprite,
                Rect::new(-16.0, -16.0, 32.0, 32.0),
                1,
            ));
        }
    }

    fn clamp_player(&mut self) {
        let half_w = self.config.world_width * 0.5;
        let half_h = self.config.world_height * 0.5;
        let r = self.player.sprite.rect();
        let pos = &mut self.player.sprite.pos;
        if r.x < -half_w {
            pos.x += -half_w - r.x;
        } else if r.x + r.w > half_w {
            pos.x -= r.x + r.w - half_w;
        }
        if r.y < -half_h {
            pos.y += -half_h - r.y;
        } else if r.y + r.h > half_h {
            pos.y -= r.y + r.h - half_h;
        }
    }

    /// Advance the scene one frame. Returns the next state when the
    /// post-death countdown runs out.
    pub fn update(&mut self, dt: f32, sounds: &mut Vec<SoundCue>) -> Option<GameState> {
        if let Some(timer) = self.down_timer.as_mut() {
            *timer -= dt;
            if *timer <= 0.0 {
                return Some(GameState::GameOver);
            }
        }

        if self.player.is_alive() {
            self.player.sprite.pos += self.player_velocity * dt;
            self.clamp_player();
        }

        self.weapon.tick(dt);
        self.update_laser();

        if let Some(col) = self.cursor.advance(dt, self.config.scroll_speed, &self.map) {
            self.spawn_column(col);
        }

        self.enemies.update(dt);
        self.bullets.update(dt);
        self.effects.update(dt);
        self.items.update(dt);

        {
            let mut ctx = PickupFx {
                score: &mut self.score,
                sounds,
                weapon: &mut self.weapon,
                level_max: self.config.weapon_level_max,
            };
            detect_collisions(
                std::slice::from_mut(&mut self.player),
                self.items.slots_mut(),
                |p, i| player_vs_item(&mut ctx, p, i),
            );
        }
        {
            let mut ctx = BulletFx {
                effects: &mut self.effects,
                items: &mut self.items,
                score: &mut self.score,
                sounds,
                pierce_threshold: self.weapon.pierce_threshold(),
            };
            detect_collisions(self.bullets.slots_mut(), self.enemies.slots_mut(), |b, e| {
                bullet_vs_enemy(&mut ctx, b, e)
            });
        }
        {
            let mut ctx = RamFx {
                effects: &mut self.effects,
                score: &mut self.score,
                down_timer: &mut self.down_timer,
                death_delay: self.config.death_delay,
            };
            detect_collisions(
                std::slice::from_mut(&mut self.player),
                self.enemies.slots_mut(),
                |p, e| player_vs_enemy(&mut ctx, p, e),
            );
        }

        None
    }

    pub fn render(&self, buf: &mut RenderBuffer) {
        buf.push_sprite(&self.background);
        for actor in self.items.alive() {
            buf.push_sprite(&actor.sprite);
        }
        for actor in self.enemies.alive() {
            buf.push_sprite(&actor.sprite);
        }
        if self.player.is_alive() {
            buf.push_sprite(&self.player.sprite);
        }
        for actor in self.bullets.alive() {
            buf.push_sprite(&actor.sprite);
        }
        for actor in self.effects.alive() {
            buf.push_sprite(&actor.sprite);
        }
    }
}
