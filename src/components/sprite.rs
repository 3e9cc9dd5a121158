//! Sprite: position, atlas cell, and the optional animation/motion
//! driving it. The one visual object an actor owns; the collision and
//! contact layers only ever ask it for position and bounds.

use glam::Vec2;

use crate::components::animation::Animation;
use crate::core::collision::Rect;
use crate::extensions::motion::Motion;

/// A placed, optionally animated sprite.
#[derive(Debug, Clone)]
pub struct Sprite {
    /// Position in world space (sprite center).
    pub pos: Vec2,
    /// Rotation in radians.
    pub rotation: f32,
    /// Scale multiplier.
    pub scale: Vec2,
    /// Base world size before scale, used for visual bounds.
    pub size: Vec2,
    /// Atlas column.
    pub col: f32,
    /// Atlas row.
    pub row: f32,
    /// Number of cells the sprite spans (1.0 = single cell).
    pub cell_span: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
    /// Frame animation, if any.
    pub animation: Option<Animation>,
    /// Scripted motion, if any.
    pub motion: Option<Motion>,
}

impl Default for Sprite {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::ONE,
            size: Vec2::ZERO,
            col: 0.0,
            row: 0.0,
            cell_span: 1.0,
            alpha: 1.0,
            animation: None,
            motion: None,
        }
    }
}

impl Sprite {
    /// Create a sprite showing the given atlas cell at the given world size.
    pub fn new(col: f32, row: f32, size: Vec2) -> Self {
        Self {
            col,
            row,
            size,
            ..Default::default()
        }
    }

    // -- Builder pattern --

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_span(mut self, cell_span: f32) -> Self {
        self.cell_span = cell_span;
        self
    }

    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.animation = Some(animation);
        self
    }

    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.motion = Some(motion);
        self
    }

    /// Visual bounds in world space, centered on `pos`.
    pub fn rect(&self) -> Rect {
        let w = self.size.x * self.scale.x;
        let h = self.size.y * self.scale.y;
        Rect::new(self.pos.x - w * 0.5, self.pos.y - h * 0.5, w, h)
    }

    /// Advance animation and motion by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if let Some(anim) = self.animation.as_mut() {
            anim.tick(dt);
            if let Some((col, row)) = anim.current_frame() {
                self.col = col;
                self.row = row;
            }
        }
        if let Some(motion) = self.motion.as_mut() {
            motion.advance(dt, &mut self.pos, &mut self.rotation);
        }
    }

    /// Whether the sprite's scripted lifetime is over: its motion has run
    /// to completion, or, with no motion attached, its one-shot
    /// animation has. Sprites with neither never finish on their own.
    pub fn is_finished(&self) -> bool {
        match (&self.motion, &self.animation) {
            (Some(motion), _) => motion.is_finished(),
            (None, Some(anim)) => anim.is_finished(),
            (None, None) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extensions::easing::Easing;

    #[test]
    fn rect_is_centered() {
        let spr = Sprite::new(0.0, 0.0, Vec2::new(32.0, 16.0)).with_pos(Vec2::new(100.0, 50.0));
        let r = spr.rect();
        assert_eq!(r.x, 84.0);
        assert_eq!(r.y, 42.0);
        assert_eq!(r.w, 32.0);
        assert_eq!(r.h, 16.0);
    }

    #[test]
    fn rect_respects_scale() {
        let spr = Sprite::new(0.0, 0.0, Vec2::splat(32.0)).with_scale(Vec2::splat(2.0));
        let r = spr.rect();
        assert_eq!(r.w, 64.0);
        assert_eq!(r.h, 64.0);
    }

    #[test]
    fn update_advances_motion() {
        let mut spr = Sprite::new(0.0, 0.0, Vec2::splat(32.0))
            .with_motion(Motion::move_by_x(1200.0, 1.0, Easing::Linear));
        spr.update(0.5);
        assert!((spr.pos.x - 600.0).abs() < 1e-3);
        assert!(!spr.is_finished());
        spr.update(0.5);
        assert!(spr.is_finished());
    }

    #[test]
    fn update_applies_animation_frame_to_cell() {
        let mut spr = Sprite::new(15.0, 0.0, Vec2::splat(32.0)).with_animation(
            Animation::vertical_strip(15.0, 0.0, 4, 10.0, true),
        );
        spr.update(0.15);
        assert_eq!(spr.row, 1.0);
    }

    #[test]
    fn static_sprite_never_finishes() {
        let spr = Sprite::new(0.0, 0.0, Vec2::splat(32.0));
        assert!(!spr.is_finished());
    }
}
