//! Rotation Controller
//!
//! The carousel's only real state: which item is active and whether the
//! automatic rotation is paused.
//!
//! ```text
//!            pause_on                      select(i) / step
//!   ┌─────────┐ ──────▶ ┌────────┐       (either state, state kept)
//!   │ Running │         │ Paused │
//!   └─────────┘ ◀────── └────────┘
//!     tick ↺    pause_off   tick = no-op
//! ```
//!
//! Every index update is modular, so the active index can never leave
//! `0..len`. A zero-length controller accepts every call and does nothing.

use serde::Serialize;

/// Whether automatic rotation is currently advancing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum RotationState {
    /// Ticks advance the active index
    #[default]
    Running,
    /// Ticks are ignored (pointer is over the carousel)
    Paused,
}

impl RotationState {
    /// Short human-readable label
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Running => "rotating",
            Self::Paused => "paused",
        }
    }
}

/// Direction for keyboard stepping
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepDirection {
    /// Towards lower indices, wrapping to the end
    Previous,
    /// Towards higher indices, wrapping to the start
    Next,
}

/// Active index plus paused flag over a list of fixed length
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RotationController {
    len: usize,
    active: usize,
    state: RotationState,
}

impl RotationController {
    /// Create a controller for `len` items, starting at index 0 and running
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            len,
            active: 0,
            state: RotationState::Running,
        }
    }

    /// Number of items being rotated
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there is nothing to rotate
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The active index, or `None` when there are no items
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        (self.len > 0).then_some(self.active)
    }

    /// Current running/paused state
    #[must_use]
    pub fn state(&self) -> RotationState {
        self.state
    }

    /// Whether ticks are currently ignored
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.state == RotationState::Paused
    }

    /// Whether ticking can ever move the active index
    #[must_use]
    pub fn rotates(&self) -> bool {
        self.len > 1
    }

    /// Timer fired: advance one step unless paused
    ///
    /// Returns `true` if the active index moved.
    pub fn tick(&mut self) -> bool {
        if self.is_paused() || !self.rotates() {
            return false;
        }
        self.active = (self.active + 1) % self.len;
        true
    }

    /// Pointer entered the carousel
    pub fn pause_on(&mut self) {
        self.state = RotationState::Paused;
    }

    /// Pointer left the carousel; rotation continues from the current index
    pub fn pause_off(&mut self) {
        self.state = RotationState::Running;
    }

    /// Jump directly to `index`
    ///
    /// Out-of-range indices leave the state untouched. Returns `true` if the
    /// active index changed.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            tracing::warn!(index, len = self.len, "Ignoring out-of-range selection");
            return false;
        }
        let changed = self.active != index;
        self.active = index;
        changed
    }

    /// Select the circular neighbour of the active index
    pub fn step(&mut self, direction: StepDirection) -> bool {
        if self.is_empty() {
            return false;
        }
        let target = match direction {
            StepDirection::Next => (self.active + 1) % self.len,
            StepDirection::Previous => (self.active + self.len - 1) % self.len,
        };
        self.select(target)
    }
}
