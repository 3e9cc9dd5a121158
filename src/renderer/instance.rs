use bytemuck::{Pod, Zeroable};

use crate::components::sprite::Sprite;

/// Per-instance render data handed to the host renderer.
/// Fixed wire layout: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct RenderInstance {
    /// X position in world space.
    pub x: f32,
    /// Y position in world space.
    pub y: f32,
    /// Rotation in radians.
    pub rotation: f32,
    /// World-space rendered size in game units.
    pub scale: f32,
    /// Atlas column.
    pub sprite_col: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
    /// UV cell span (1.0 = single cell).
    pub cell_span: f32,
    /// Atlas row.
    pub atlas_row: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Render buffer filled after update each frame; the host draws it.
pub struct RenderBuffer {
    pub instances: Vec<RenderInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(512),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    /// Append one instance built from a sprite's current state.
    pub fn push_sprite(&mut self, sprite: &Sprite) {
        self.instances.push(RenderInstance {
            x: sprite.pos.x,
            y: sprite.pos.y,
            rotation: sprite.rotation,
            scale: sprite.size.x * sprite.scale.x,
            sprite_col: sprite.col,
            alpha: sprite.alpha,
            cell_span: sprite.cell_span,
            atlas_row: sprite.row,
        });
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for shared-memory reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn stride_matches_wire_protocol() {
        assert_eq!(std::mem::size_of::<RenderInstance>(), RenderInstance::STRIDE_BYTES);
    }

    #[test]
    fn push_sprite_copies_cell_and_position() {
        let mut buf = RenderBuffer::new();
        let spr = Sprite::new(15.0, 2.0, Vec2::splat(32.0)).with_pos(Vec2::new(40.0, -8.0));
        buf.push_sprite(&spr);
        assert_eq!(buf.instance_count(), 1);
        let inst = buf.instances[0];
        assert_eq!(inst.x, 40.0);
        assert_eq!(inst.y, -8.0);
        assert_eq!(inst.sprite_col, 15.0);
        assert_eq!(inst.atlas_row, 2.0);
        assert_eq!(inst.scale, 32.0);
    }

    #[test]
    fn scaled_sprite_renders_larger() {
        let mut buf = RenderBuffer::new();
        let spr = Sprite::new(13.0, 0.0, Vec2::splat(32.0)).with_scale(Vec2::splat(2.0));
        buf.push_sprite(&spr);
        assert_eq!(buf.instances[0].scale, 64.0);
    }
}
