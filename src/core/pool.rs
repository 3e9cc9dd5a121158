//! Fixed-capacity actor pool with slot reuse.
//!
//! Every slot is either dead (`health <= 0`, free for reuse) or alive.
//! Capacity is fixed at scene-creation time; when the pool is
//! saturated a spawn is silently dropped as backpressure, not an error.

use crate::core::actor::Actor;

/// A fixed array of reusable actor slots.
#[derive(Debug, Clone)]
pub struct ActorPool {
    slots: Vec<Actor>,
}

impl ActorPool {
    /// Create a pool with `capacity` dead slots. The capacity never
    /// changes afterwards.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![Actor::default(); capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Index of the lowest dead slot, or None when the pool is full.
    pub fn allocate(&mut self) -> Option<usize> {
        let index = self.slots.iter().position(|a| a.health <= 0);
        if index.is_none() {
            log::debug!("actor pool full ({} slots), spawn dropped", self.slots.len());
        }
        index
    }

    /// Place `actor` into the lowest free slot, returning its stable
    /// index, or None (actor discarded) when the pool is saturated.
    pub fn spawn(&mut self, actor: Actor) -> Option<usize> {
        let index = self.allocate()?;
        self.slots[index] = actor;
        Some(index)
    }

    pub fn get(&self, index: usize) -> Option<&Actor> {
        self.slots.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Actor> {
        self.slots.get_mut(index)
    }

    /// Advance every alive actor's sprite; an actor whose scripted
    /// motion (or one-shot animation) completes expires here.
    pub fn update(&mut self, dt: f32) {
        for actor in self.slots.iter_mut() {
            if actor.health <= 0 {
                continue;
            }
            actor.sprite.update(dt);
            if actor.sprite.is_finished() {
                actor.health = 0;
            }
        }
    }

    /// Iterate alive actors; dead slots are never visited.
    pub fn alive(&self) -> impl Iterator<Item = &Actor> {
        self.slots.iter().filter(|a| a.health > 0)
    }

    /// Iterate alive actors mutably.
    pub fn alive_mut(&mut self) -> impl Iterator<Item = &mut Actor> {
        self.slots.iter_mut().filter(|a| a.health > 0)
    }

    pub fn alive_count(&self) -> usize {
        self.slots.iter().filter(|a| a.health > 0).count()
    }

    /// Raw slot access for the collision engine.
    pub fn slots_mut(&mut self) -> &mut [Actor] {
        &mut self.slots
    }

    /// Kill every slot (scene init/teardown).
    pub fn reset(&mut self) {
        for actor in self.slots.iter_mut() {
            actor.health = 0;
        }
    }
}
