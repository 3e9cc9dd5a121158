//! Axis-aligned rectangle overlap and the pairwise collision engine.
//!
//! Brute-force all-pairs testing between two actor lists. Actor counts
//! are small (at most 128 per pool), so no spatial partitioning is
//! needed or wanted.

use glam::Vec2;

use crate::core::actor::Actor;

/// Axis-aligned rectangle: origin at the lower-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// The same rectangle translated by `by`.
    pub fn offset(self, by: Vec2) -> Self {
        Self {
            x: self.x + by.x,
            y: self.y + by.y,
            ..self
        }
    }

    /// Half-open overlap test: rectangles that merely touch along an
    /// edge do not overlap, and zero-size rectangles never overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

/// Test every alive attacker against every alive defender, invoking
/// `handler` on each overlapping pair.
///
/// After each handler call, if the attacker's health has dropped to or
/// below zero the inner loop breaks: a destroyed attacker resolves at
/// most one effective hit per pass, while the defender that destroyed
/// it may itself have been damaged or killed by the same call.
///
/// The two passes `detect_collisions(a, b, h)` and
/// `detect_collisions(b, a, h)` are not symmetric; callers put the
/// side that should stop on death first.
pub fn detect_collisions<F>(attackers: &mut [Actor], defenders: &mut [Actor], mut handler: F)
where
    F: FnMut(&mut Actor, &mut Actor),
{
    for attacker in attackers.iter_mut() {
        if attacker.health <= 0 {
            continue;
        }
        let attack_rect = attacker.world_rect();
        for defender in defenders.iter_mut() {
            if defender.health <= 0 {
                continue;
            }
            if attack_rect.overlaps(&defender.world_rect()) {
                handler(attacker, defender);
                if attacker.health <= 0 {
                    break;
                }
            }
        }
    }
}
