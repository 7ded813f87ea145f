use crate::{ScrollPosition, SimpleScrollOptions};

/// The outcome of one [`ScrollStepper::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Apply this position and schedule another tick after `delay_ms`.
    Continue {
        position: ScrollPosition,
        delay_ms: u64,
    },
    /// Apply this position; the animation is over.
    Done(ScrollPosition),
}

impl Step {
    pub fn position(&self) -> ScrollPosition {
        match *self {
            Self::Continue { position, .. } | Self::Done(position) => position,
        }
    }
}

/// A decaying scroll animation.
///
/// Each tick moves every axis by `(target - current) / remaining_ms * tick_ms`, never past the
/// target, then divides both `remaining_ms` and the timer delay by `decay`. Neither drops below
/// 1 ms while the target is still ahead, and a tick with `remaining_ms <= tick_ms` covers the
/// whole remaining distance, so the last tick always lands on the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollStepper {
    target: ScrollPosition,
    remaining_ms: u64,
    tick_ms: u64,
    delay_ms: u64,
    decay: u64,
}

impl ScrollStepper {
    /// Returns `None` when `options.duration_ms` is zero: there is nothing to animate.
    pub fn new(options: &SimpleScrollOptions) -> Option<Self> {
        if options.duration_ms == 0 {
            return None;
        }
        let tick_ms = options.tick_ms.max(1);
        Some(Self {
            target: options.target,
            remaining_ms: options.duration_ms,
            tick_ms,
            delay_ms: tick_ms.min(options.duration_ms),
            decay: options.decay.max(2),
        })
    }

    pub fn target(&self) -> ScrollPosition {
        self.target
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    pub fn is_done(&self) -> bool {
        self.remaining_ms == 0
    }

    /// Delay before the next tick should run.
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Advances one tick from `current`.
    pub fn step(&mut self, current: ScrollPosition) -> Step {
        if self.remaining_ms == 0 {
            return Step::Done(current);
        }

        let position = ScrollPosition {
            x: self.advance_axis(current.x, self.target.x),
            y: self.advance_axis(current.y, self.target.y),
        };
        strace!(
            x = position.x,
            y = position.y,
            remaining_ms = self.remaining_ms,
            "ScrollStepper::step"
        );

        if position == self.target {
            self.remaining_ms = 0;
            return Step::Done(position);
        }

        // Flooring at 1 keeps the integer decay from ending the animation short of the target.
        self.remaining_ms = (self.remaining_ms / self.decay).max(1);
        self.delay_ms = (self.delay_ms / self.decay).max(1);
        Step::Continue {
            position,
            delay_ms: self.delay_ms,
        }
    }

    fn advance_axis(&self, current: u64, target: u64) -> u64 {
        let difference = target as f64 - current as f64;
        let per_tick = difference / self.remaining_ms as f64 * self.tick_ms as f64;
        // Round half up; the cast saturates negative overshoot at zero.
        let moved = (current as f64 + per_tick + 0.5) as u64;
        if target >= current {
            moved.clamp(current, target)
        } else {
            moved.clamp(target, current)
        }
    }
}
