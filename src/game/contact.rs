//! Contact handlers: the pair-resolution rules run by the collision
//! passes. Each pass builds a small context borrowing just the scene
//! state its handler mutates, then hands a closure to
//! [`detect_collisions`](crate::core::collision::detect_collisions).

use glam::Vec2;

use crate::api::types::SoundCue;
use crate::components::animation::Animation;
use crate::components::sprite::Sprite;
use crate::core::actor::{Actor, ActorKind, ItemKind, Weapon};
use crate::core::collision::Rect;
use crate::core::pool::ActorPool;
use crate::extensions::easing::Easing;
use crate::extensions::motion::Motion;
use crate::game::cells;
use crate::game::weapon::WeaponState;

/// Side effects of the player-vs-items pass.
pub struct PickupFx<'a> {
    pub score: &'a mut u32,
    pub sounds: &'a mut Vec<SoundCue>,
    pub weapon: &'a mut WeaponState,
    pub level_max: u8,
}

/// The player touched a pickup. The item is always consumed.
pub fn player_vs_item(ctx: &mut PickupFx, _player: &mut Actor, item: &mut Actor) {
    ctx.sounds.push(SoundCue::ItemGet);
    if let ActorKind::Item(kind) = item.kind {
        match kind {
            ItemKind::NormalShot => ctx.weapon.equip(Weapon::NormalShot, ctx.level_max),
            ItemKind::Laser => ctx.weapon.equip(Weapon::Laser, ctx.level_max),
            ItemKind::Score => *ctx.score += 1000,
        }
    }
    item.health = 0;
}

/// Side effects of the bullets-vs-enemies pass.
pub struct BulletFx<'a> {
    pub effects: &'a mut ActorPool,
    pub items: &'a mut ActorPool,
    pub score: &'a mut u32,
    pub sounds: &'a mut Vec<SoundCue>,
    pub pierce_threshold: i32,
}

/// A player bullet hit an enemy. The bullet's health doubles as its
/// damage; a laser segment keeps flying while the enemy it just hit
/// still has at least the piercing threshold of health left.
pub fn bullet_vs_enemy(ctx: &mut BulletFx, bullet: &mut Actor, enemy: &mut Actor) {
    enemy.health -= bullet.health;
    let pierces = matches!(bullet.kind, ActorKind::Bullet(Weapon::Laser))
        && enemy.health >= ctx.pierce_threshold;
    if !pierces {
        bullet.health = 0;
    }
    if enemy.health <= 0 {
        *ctx.score += 100;
        ctx.sounds.push(SoundCue::Blast);
        spawn_blast(ctx.effects, enemy.sprite.pos, 1.0);
        if let ActorKind::Enemy { carries: Some(kind) } = enemy.kind {
            drop_item(ctx.items, enemy.sprite.pos, kind);
        }
    }
}

/// Side effects of the player-vs-enemies pass.
pub struct RamFx<'a> {
    pub effects: &'a mut ActorPool,
    pub score: &'a mut u32,
    pub down_timer: &'a mut Option<f32>,
    pub death_delay: f32,
}

/// The player rammed an enemy: the lesser health is subtracted from
/// both sides, so at least one of them dies.
pub fn player_vs_enemy(ctx: &mut RamFx, player: &mut Actor, enemy: &mut Actor) {
    let damage = player.health.min(enemy.health);
    player.health -= damage;
    enemy.health -= damage;
    if enemy.health <= 0 {
        *ctx.score += 100;
        // TODO: ram kills play no Blast cue, unlike bullet kills. Decide
        // whether they should and add the cue here.
        spawn_blast(ctx.effects, enemy.sprite.pos, 1.0);
    }
    if player.health <= 0 {
        spawn_blast(ctx.effects, enemy.sprite.pos, 2.0);
        *ctx.down_timer = Some(ctx.death_delay);
    }
}

/// Spawn a spinning blast effect. Dropped silently when the effect pool
/// is full.
pub fn spawn_blast(effects: &mut ActorPool, pos: Vec2, scale: f32) {
    let sprite = Sprite::new(cells::BLAST.0, cells::BLAST.1, Vec2::splat(32.0))
        .with_pos(pos)
        .with_scale(Vec2::splat(scale))
        .with_animation(Animation::vertical_strip(
            cells::BLAST.0,
            cells::BLAST.1,
            5,
            15.0,
            false,
        ))
        .with_motion(Motion::rotate_by(
            std::f32::consts::FRAC_PI_2,
            20.0 / 60.0,
            Easing::Linear,
        ));
    effects.spawn(Actor::new(ActorKind::Effect, sprite, Rect::default(), 1));
}

/// Drop a pickup at a dead enemy's position, drifting left off screen.
fn drop_item(items: &mut ActorPool, pos: Vec2, kind: ItemKind) {
    let sprite = Sprite::new(cells::item_col(kind), cells::ITEM_ROW, Vec2::splat(32.0))
        .with_pos(pos)
        .with_motion(Motion::move_by(Vec2::new(-800.0, 0.0), 8.0, Easing::Linear));
    items.spawn(Actor::new(
        ActorKind::Item(kind),
        sprite,
        Rect::new(-16.0, -16.0, 32.0, 32.0),
        1,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enemy(health: i32, carries: Option<ItemKind>) -> Actor {
        Actor::new(
            ActorKind::Enemy { carries },
            Sprite::new(cells::ENEMY_COL, 0.0, Vec2::splat(32.0)),
            Rect::new(-16.0, -16.0, 32.0, 32.0),
            health,
        )
    }

    fn bullet(weapon: Weapon, health: i32) -> Actor {
        Actor::new(
            ActorKind::Bullet(weapon),
            Sprite::new(cells::NORMAL_BULLET.0, cells::NORMAL_BULLET.1, Vec2::splat(32.0)),
            Rect::new(-16.0, -8.0, 32.0, 16.0),
            health,
        )
    }

    fn player() -> Actor {
        Actor::new(
            ActorKind::Player,
            Sprite::new(cells::PLAYER.0, cells::PLAYER.1, Vec2::new(64.0, 32.0)),
            Rect::new(-24.0, -8.0, 48.0, 16.0),
            1,
        )
    }

    fn item(kind: ItemKind) -> Actor {
        Actor::new(
            ActorKind::Item(kind),
            Sprite::new(cells::item_col(kind), cells::ITEM_ROW, Vec2::splat(32.0)),
            Rect::new(-16.0, -16.0, 32.0, 32.0),
            1,
        )
    }

    #[test]
    fn normal_shot_dies_on_first_hit() {
        let mut effects = ActorPool::new(8);
        let mut items = ActorPool::new(4);
        let mut score = 0;
        let mut sounds = Vec::new();
        let mut ctx = BulletFx {
            effects: &mut effects,
            items: &mut items,
            score: &mut score,
            sounds: &mut sounds,
            pierce_threshold: 0,
        };
        let mut b = bullet(Weapon::NormalShot, 1);
        let mut e = enemy(3, None);
        bullet_vs_enemy(&mut ctx, &mut b, &mut e);
        assert_eq!(b.health, 0);
        assert_eq!(e.health, 2);
        assert_eq!(score, 0);
    }

    #[test]
    fn kill_scores_and_spawns_blast() {
        let mut effects = ActorPool::new(8);
        let mut items = ActorPool::new(4);
        let mut score = 0;
        let mut sounds = Vec::new();
        let mut ctx = BulletFx {
            effects: &mut effects,
            items: &mut items,
            score: &mut score,
            sounds: &mut sounds,
            pierce_threshold: 0,
        };
        let mut b = bullet(Weapon::NormalShot, 1);
        let mut e = enemy(1, None);
        bullet_vs_enemy(&mut ctx, &mut b, &mut e);
        assert_eq!(e.health, 0);
        assert_eq!(score, 100);
        assert_eq!(sounds, vec![SoundCue::Blast]);
        assert_eq!(effects.alive_count(), 1);
        assert_eq!(items.alive_count(), 0);
    }

    #[test]
    fn laser_pierces_tough_enemy_and_stops_in_weak_one() {
        let mut effects = ActorPool::new(8);
        let mut items = ActorPool::new(4);
        let mut score = 0;
        let mut sounds = Vec::new();
        let mut ctx = BulletFx {
            effects: &mut effects,
            items: &mut items,
            score: &mut score,
            sounds: &mut sounds,
            pierce_threshold: 2,
        };
        // Tough enemy: 5 health, laser deals 2, enemy keeps 3 >= 2.
        let mut laser = bullet(Weapon::Laser, 2);
        let mut tough = enemy(5, None);
        bullet_vs_enemy(&mut ctx, &mut laser, &mut tough);
        assert_eq!(laser.health, 2, "laser must survive the tough enemy");
        assert_eq!(tough.health, 3);
        // Weak enemy: dies, health drops below the threshold, laser stops.
        let mut weak = enemy(2, None);
        bullet_vs_enemy(&mut ctx, &mut laser, &mut weak);
        assert_eq!(laser.health, 0);
        assert!(weak.health <= 0);
        assert_eq!(score, 100);
    }

    #[test]
    fn carrier_kill_drops_its_item() {
        let mut effects = ActorPool::new(8);
        let mut items = ActorPool::new(4);
        let mut score = 0;
        let mut sounds = Vec::new();
        let mut ctx = BulletFx {
            effects: &mut effects,
            items: &mut items,
            score: &mut score,
            sounds: &mut sounds,
            pierce_threshold: 0,
        };
        let mut b = bullet(Weapon::NormalShot, 1);
        let mut e = enemy(1, Some(ItemKind::Laser));
        e.sprite.pos = Vec2::new(120.0, -40.0);
        bullet_vs_enemy(&mut ctx, &mut b, &mut e);
        assert_eq!(items.alive_count(), 1);
        let dropped = items.get(0).unwrap();
        assert_eq!(dropped.kind, ActorKind::Item(ItemKind::Laser));
        assert_eq!(dropped.sprite.pos, Vec2::new(120.0, -40.0));
    }

    #[test]
    fn pickup_upgrades_same_weapon_and_is_idempotent_at_cap() {
        let mut score = 0;
        let mut sounds = Vec::new();
        let mut weapon = WeaponState::new();
        for _ in 0..4 {
            let mut ctx = PickupFx {
                score: &mut score,
                sounds: &mut sounds,
                weapon: &mut weapon,
                level_max: 2,
            };
            let mut p = player();
            let mut i = item(ItemKind::NormalShot);
            player_vs_item(&mut ctx, &mut p, &mut i);
            assert_eq!(i.health, 0, "item must always be consumed");
        }
        assert_eq!(weapon.level, 2);
        assert_eq!(sounds.len(), 4);
        assert_eq!(score, 0);
    }

    #[test]
    fn score_item_adds_bonus() {
        let mut score = 0;
        let mut sounds = Vec::new();
        let mut weapon = WeaponState::new();
        let mut ctx = PickupFx {
            score: &mut score,
            sounds: &mut sounds,
            weapon: &mut weapon,
            level_max: 2,
        };
        let mut p = player();
        let mut i = item(ItemKind::Score);
        player_vs_item(&mut ctx, &mut p, &mut i);
        assert_eq!(score, 1000);
        assert_eq!(weapon.level, 0);
    }

    #[test]
    fn ram_kill_is_mutual_and_arms_death_timer() {
        let mut effects = ActorPool::new(8);
        let mut score = 0;
        let mut down = None;
        let mut ctx = RamFx {
            effects: &mut effects,
            score: &mut score,
            down_timer: &mut down,
            death_delay: 2.0,
        };
        let mut p = player();
        let mut e = enemy(1, None);
        player_vs_enemy(&mut ctx, &mut p, &mut e);
        assert_eq!(p.health, 0);
        assert_eq!(e.health, 0);
        assert_eq!(score, 100);
        assert_eq!(down, Some(2.0));
        // One blast for the enemy, one scaled up for the player.
        assert_eq!(effects.alive_count(), 2);
    }

    #[test]
    fn blast_spawn_is_dropped_on_full_pool() {
        let mut effects = ActorPool::new(1);
        spawn_blast(&mut effects, Vec2::ZERO, 1.0);
        spawn_blast(&mut effects, Vec2::ZERO, 1.0);
        assert_eq!(effects.alive_count(), 1);
    }
}
