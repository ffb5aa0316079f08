//! Arrow key hold tracking.
//!
//! Most terminals only report presses and auto-repeats, never releases. A
//! direction therefore counts as held until `hold` has passed since its last
//! press or repeat, or until an explicit release arrives.

use std::time::{Duration, Instant};

use adventure_core::MovementInput;

const DIRECTIONS: [MovementInput; 4] = [
    MovementInput::RIGHT,
    MovementInput::LEFT,
    MovementInput::DOWN,
    MovementInput::UP,
];

#[derive(Clone, Debug)]
pub struct HeldKeys {
    hold: Duration,
    last_seen: [Option<Instant>; 4],
}

impl HeldKeys {
    pub fn new(hold: Duration) -> Self {
        Self {
            hold,
            last_seen: [None; 4],
        }
    }

    pub fn press(&mut self, direction: MovementInput, now: Instant) {
        for (slot, dir) in self.last_seen.iter_mut().zip(DIRECTIONS) {
            if direction.contains(dir) {
                *slot = Some(now);
            }
        }
    }

    pub fn release(&mut self, direction: MovementInput) {
        for (slot, dir) in self.last_seen.iter_mut().zip(DIRECTIONS) {
            if direction.contains(dir) {
                *slot = None;
            }
        }
    }

    /// Directions still held at `now`. Expired entries are dropped.
    pub fn sample(&mut self, now: Instant) -> MovementInput {
        let mut input = MovementInput::empty();
        for (slot, dir) in self.last_seen.iter_mut().zip(DIRECTIONS) {
            match slot {
                Some(at) if now.saturating_duration_since(*at) <= self.hold => input |= dir,
                Some(_) => *slot = None,
                None => {}
            }
        }
        input
    }

    pub fn clear(&mut self) {
        self.last_seen = [None; 4];
    }
}
