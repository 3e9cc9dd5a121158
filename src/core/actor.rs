//! Pooled game entity: a sprite, a hit region and a health counter.

use crate::components::sprite::Sprite;
use crate::core::collision::Rect;

/// Which weapon a bullet came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Weapon {
    #[default]
    NormalShot,
    Laser,
}

/// Pickup kinds dropped by item-carrier enemies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    NormalShot,
    Laser,
    Score,
}

/// Category tag for a pooled actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActorKind {
    /// Blast or other short-lived visual.
    #[default]
    Effect,
    /// The player ship.
    Player,
    /// An enemy, optionally carrying an item it drops on death.
    Enemy { carries: Option<ItemKind> },
    /// A player bullet; the weapon determines piercing behavior.
    Bullet(Weapon),
    /// A floating pickup.
    Item(ItemKind),
}

/// A pooled game entity. `health <= 0` means the slot is dead and free
/// for reuse; for enemies and bullets the positive value doubles as
/// damage remaining (piercing budget).
#[derive(Debug, Clone)]
pub struct Actor {
    /// Visual representation; owns position and all animation state.
    pub sprite: Sprite,
    /// Hit region, relative to the sprite's current position.
    pub collision: Rect,
    /// Liveness / hit points. Dead at or below zero.
    pub health: i32,
    /// Category tag.
    pub kind: ActorKind,
}

impl Default for Actor {
    fn default() -> Self {
        Self {
            sprite: Sprite::default(),
            collision: Rect::default(),
            health: 0,
            kind: ActorKind::default(),
        }
    }
}

impl Actor {
    pub fn new(kind: ActorKind, sprite: Sprite, collision: Rect, health: i32) -> Self {
        Self {
            sprite,
            collision,
            health,
            kind,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Hit region in world space: the collision shape offset by the
    /// sprite's current position.
    pub fn world_rect(&self) -> Rect {
        self.collision.offset(self.sprite.pos)
    }
}
