// extensions/motion.rs
//
// Scripted relative motion: the kinematic layer that moves bullets,
// enemies, items and effects. A Motion is a small program built from
// eased displacement steps plus sequence/parallel combinators; actors
// expire when their motion reports finished.
//
// Usage:
//   let m = Motion::parallel(vec![
//       Motion::sequence(4, vec![
//           Motion::move_by_y(100.0, 1.0, Easing::QuadInOut),
//           Motion::move_by_y(-100.0, 1.0, Easing::QuadInOut),
//       ]),
//       Motion::move_by_x(-1000.0, 8.0, Easing::Linear),
//   ]);

use glam::Vec2;

use super::easing::Easing;

#[derive(Debug, Clone, Copy)]
enum StepKind {
    MoveBy(Vec2),
    MoveByX(f32),
    MoveByY(f32),
    RotateBy(f32),
}

/// A single eased displacement over a duration.
#[derive(Debug, Clone)]
struct Step {
    kind: StepKind,
    duration: f32,
    easing: Easing,
    elapsed: f32,
    /// Eased fraction already applied, so deltas stay exact under
    /// variable frame times.
    applied: f32,
}

impl Step {
    fn new(kind: StepKind, duration: f32, easing: Easing) -> Self {
        Self {
            kind,
            duration,
            easing,
            elapsed: 0.0,
            applied: 0.0,
        }
    }

    /// Advance by `dt`, applying the displacement delta. Returns leftover
    /// time past the end of the step (0 while still running).
    fn advance(&mut self, dt: f32, pos: &mut Vec2, rotation: &mut f32) -> f32 {
        let total = self.elapsed + dt;
        self.elapsed = total.min(self.duration);
        let t = if self.duration > 0.0 {
            self.elapsed / self.duration
        } else {
            1.0
        };
        let eased = self.easing.apply(t);
        let d = eased - self.applied;
        self.applied = eased;
        match self.kind {
            StepKind::MoveBy(delta) => *pos += delta * d,
            StepKind::MoveByX(dx) => pos.x += dx * d,
            StepKind::MoveByY(dy) => pos.y += dy * d,
            StepKind::RotateBy(angle) => *rotation += angle * d,
        }
        (total - self.duration).max(0.0)
    }

    fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn rewind(&mut self) {
        self.elapsed = 0.0;
        self.applied = 0.0;
    }
}

#[derive(Debug, Clone)]
enum Node {
    Leaf(Step),
    Sequence {
        steps: Vec<Motion>,
        index: usize,
        times: u32,
        played: u32,
    },
    Parallel {
        tracks: Vec<Motion>,
    },
}

/// A scripted motion program applied to a sprite's position and rotation.
#[derive(Debug, Clone)]
pub struct Motion {
    node: Node,
}

impl Motion {
    /// Move by `delta` over `duration` seconds.
    pub fn move_by(delta: Vec2, duration: f32, easing: Easing) -> Self {
        Self {
            node: Node::Leaf(Step::new(StepKind::MoveBy(delta), duration, easing)),
        }
    }

    /// Move along X only.
    pub fn move_by_x(dx: f32, duration: f32, easing: Easing) -> Self {
        Self {
            node: Node::Leaf(Step::new(StepKind::MoveByX(dx), duration, easing)),
        }
    }

    /// Move along Y only.
    pub fn move_by_y(dy: f32, duration: f32, easing: Easing) -> Self {
        Self {
            node: Node::Leaf(Step::new(StepKind::MoveByY(dy), duration, easing)),
        }
    }

    /// Rotate by `angle` radians over `duration` seconds.
    pub fn rotate_by(angle: f32, duration: f32, easing: Easing) -> Self {
        Self {
            node: Node::Leaf(Step::new(StepKind::RotateBy(angle), duration, easing)),
        }
    }

    /// Run `steps` back to back, repeating the whole run `times` times.
    pub fn sequence(times: u32, steps: Vec<Motion>) -> Self {
        Self {
            node: Node::Sequence {
                steps,
                index: 0,
                times: times.max(1),
                played: 0,
            },
        }
    }

    /// Run all `tracks` simultaneously; finished when every track is.
    pub fn parallel(tracks: Vec<Motion>) -> Self {
        Self {
            node: Node::Parallel { tracks },
        }
    }

    /// Advance the program by `dt` seconds, mutating the target position
    /// and rotation. Returns leftover time once the program has completed.
    pub fn advance(&mut self, dt: f32, pos: &mut Vec2, rotation: &mut f32) -> f32 {
        match &mut self.node {
            Node::Leaf(step) => step.advance(dt, pos, rotation),
            Node::Sequence {
                steps,
                index,
                times,
                played,
            } => {
                if steps.is_empty() {
                    return dt;
                }
                let mut dt = dt;
                while *played < *times {
                    while *index < steps.len() {
                        dt = steps[*index].advance(dt, pos, rotation);
                        if !steps[*index].is_finished() {
                            return 0.0;
                        }
                        *index += 1;
                        if dt <= 0.0 && *index < steps.len() {
                            return 0.0;
                        }
                    }
                    *played += 1;
                    if *played < *times {
                        *index = 0;
                        for s in steps.iter_mut() {
                            s.rewind();
                        }
                        if dt <= 0.0 {
                            return 0.0;
                        }
                    }
                }
                dt
            }
            Node::Parallel { tracks } => {
                if tracks.is_empty() {
                    return dt;
                }
                let mut leftover = f32::INFINITY;
                for track in tracks.iter_mut() {
                    leftover = leftover.min(track.advance(dt, pos, rotation));
                }
                leftover
            }
        }
    }

    /// Whether the program has run to completion.
    pub fn is_finished(&self) -> bool {
        match &self.node {
            Node::Leaf(step) => step.is_finished(),
            Node::Sequence {
                steps,
                times,
                played,
                ..
            } => steps.is_empty() || *played >= *times,
            Node::Parallel { tracks } => tracks.iter().all(|t| t.is_finished()),
        }
    }

    fn rewind(&mut self) {
        match &mut self.node {
            Node::Leaf(step) => step.rewind(),
            Node::Sequence {
                steps,
                index,
                played,
                ..
            } => {
                *index = 0;
                *played = 0;
                for s in steps.iter_mut() {
                    s.rewind();
                }
            }
            Node::Parallel { tracks } => {
                for t in tracks.iter_mut() {
                    t.rewind();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(motion: &mut Motion, dt: f32) -> (Vec2, f32) {
        let mut pos = Vec2::ZERO;
        let mut rot = 0.0;
        motion.advance(dt, &mut pos, &mut rot);
        (pos, rot)
    }

    #[test]
    fn move_by_linear_full() {
        let mut m = Motion::move_by(Vec2::new(100.0, 0.0), 1.0, Easing::Linear);
        let (pos, _) = run(&mut m, 1.0);
        assert!((pos.x - 100.0).abs() < 1e-4);
        assert!(m.is_finished());
    }

    #[test]
    fn move_by_partial_steps_sum_exactly() {
        let mut m = Motion::move_by_x(100.0, 1.0, Easing::QuadInOut);
        let mut pos = Vec2::ZERO;
        let mut rot = 0.0;
        for _ in 0..10 {
            m.advance(0.1, &mut pos, &mut rot);
        }
        // Eased deltas must telescope to the exact total.
        assert!((pos.x - 100.0).abs() < 1e-3, "pos.x = {}", pos.x);
        assert!(m.is_finished());
    }

    #[test]
    fn rotate_by_applies_to_rotation_only() {
        let mut m = Motion::rotate_by(1.0, 0.5, Easing::Linear);
        let (pos, rot) = run(&mut m, 0.5);
        assert_eq!(pos, Vec2::ZERO);
        assert!((rot - 1.0).abs() < 1e-4);
    }

    #[test]
    fn sequence_chains_with_leftover_time() {
        let mut m = Motion::sequence(
            1,
            vec![
                Motion::move_by_x(10.0, 1.0, Easing::Linear),
                Motion::move_by_y(10.0, 1.0, Easing::Linear),
            ],
        );
        // 1.5s crosses the step boundary; half of the second step runs.
        let mut pos = Vec2::ZERO;
        let mut rot = 0.0;
        m.advance(1.5, &mut pos, &mut rot);
        assert!((pos.x - 10.0).abs() < 1e-4);
        assert!((pos.y - 5.0).abs() < 1e-4);
        assert!(!m.is_finished());
        m.advance(0.5, &mut pos, &mut rot);
        assert!(m.is_finished());
    }

    #[test]
    fn sequence_repeats() {
        let mut m = Motion::sequence(
            3,
            vec![Motion::move_by_x(10.0, 1.0, Easing::Linear)],
        );
        let mut pos = Vec2::ZERO;
        let mut rot = 0.0;
        for _ in 0..30 {
            m.advance(0.1, &mut pos, &mut rot);
        }
        assert!((pos.x - 30.0).abs() < 1e-3, "pos.x = {}", pos.x);
        assert!(m.is_finished());
    }

    #[test]
    fn parallel_finishes_with_longest_track() {
        let mut m = Motion::parallel(vec![
            Motion::move_by_x(10.0, 1.0, Easing::Linear),
            Motion::move_by_y(-80.0, 4.0, Easing::Linear),
        ]);
        let mut pos = Vec2::ZERO;
        let mut rot = 0.0;
        m.advance(2.0, &mut pos, &mut rot);
        assert!((pos.x - 10.0).abs() < 1e-4);
        assert!((pos.y + 40.0).abs() < 1e-4);
        assert!(!m.is_finished());
        m.advance(2.0, &mut pos, &mut rot);
        assert!(m.is_finished());
    }

    #[test]
    fn zero_duration_step_completes_immediately() {
        let mut m = Motion::move_by_x(10.0, 0.0, Easing::Linear);
        let (pos, _) = run(&mut m, 0.016);
        assert!((pos.x - 10.0).abs() < 1e-4);
        assert!(m.is_finished());
    }

    #[test]
    fn finished_motion_passes_time_through_unapplied() {
        let mut m = Motion::move_by_x(10.0, 1.0, Easing::Linear);
        let mut pos = Vec2::ZERO;
        let mut rot = 0.0;
        m.advance(1.0, &mut pos, &mut rot);
        let x = pos.x;
        let leftover = m.advance(0.5, &mut pos, &mut rot);
        assert_eq!(pos.x, x);
        assert!((leftover - 0.5).abs() < 1e-6);
    }
}
