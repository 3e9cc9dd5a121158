//! Player weapon state machine.
//!
//! Two weapons share one level counter. Normal shot sprays a fan of
//! bullets sized by level; the laser emits a fixed-length beam of
//! trailing segments and must fully discharge before re-triggering.

use crate::core::actor::Weapon;

/// Fan angles in radians, widest spray last. A level-`n` spray uses the
/// first `2n + 1` entries.
const FAN: [f32; 5] = [
    0.0,
    15.0 * std::f32::consts::PI / 180.0,
    -15.0 * std::f32::consts::PI / 180.0,
    30.0 * std::f32::consts::PI / 180.0,
    -30.0 * std::f32::consts::PI / 180.0,
];

/// Current weapon, level, and per-weapon firing bookkeeping.
#[derive(Debug, Clone)]
pub struct WeaponState {
    /// Equipped weapon.
    pub weapon: Weapon,
    /// Power level, 0-based.
    pub level: u8,
    /// Cooldown until the next held-trigger normal shot.
    pub shot_timer: f32,
    /// Segments emitted so far in the active beam; -1 while idle.
    pub laser_count: i32,
    /// Player x at the moment the beam started.
    pub laser_anchor_x: f32,
    /// Bullet-pool slot of the most recently emitted segment.
    pub laser_tail: Option<usize>,
}

impl WeaponState {
    pub fn new() -> Self {
        Self {
            weapon: Weapon::NormalShot,
            level: 0,
            shot_timer: 0.0,
            laser_count: -1,
            laser_anchor_x: 0.0,
            laser_tail: None,
        }
    }

    /// Back to starting loadout (scene init).
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Count down the normal-shot cooldown.
    pub fn tick(&mut self, dt: f32) {
        if self.shot_timer > 0.0 {
            self.shot_timer -= dt;
        }
    }

    /// Pick up a weapon item. The same weapon levels up (clamped at
    /// `level_max`); a different weapon switches, keeping the level.
    /// Either way any in-flight firing bookkeeping is cleared.
    pub fn equip(&mut self, weapon: Weapon, level_max: u8) {
        if self.weapon == weapon {
            self.level = (self.level + 1).min(level_max);
        } else {
            log::debug!("weapon switch {:?} -> {:?} at level {}", self.weapon, weapon, self.level);
            self.weapon = weapon;
        }
        self.shot_timer = 0.0;
        self.laser_count = -1;
        self.laser_tail = None;
    }

    /// Spray angles for one normal-shot volley at the current level.
    pub fn spray_angles(&self) -> &'static [f32] {
        let count = (2 * self.level as usize + 1).min(FAN.len());
        &FAN[..count]
    }

    /// Laser segments only pierce enemies whose health stays at or
    /// above this after the hit.
    pub fn pierce_threshold(&self) -> i32 {
        2 * self.level as i32
    }

    /// Health (doubling as damage) of a laser segment at this level.
    pub fn laser_health(&self) -> i32 {
        2 + 2 * self.level as i32
    }
}

impl Default for WeaponState {
    fn default() -> Self {
        Self::new()
    }
}
