//! Carousel Events
//!
//! Everything that can change carousel state. Surfaces translate their
//! native input (mouse, touch, keys) into these and hand them to
//! [`Carousel::handle`](crate::Carousel::handle); the tick task emits `Tick`.
//!
//! Surfaces don't interpret events. They report what happened and the
//! carousel decides what it means (a tick while paused is simply dropped).

use crate::rotation::StepDirection;

/// An input to the carousel state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselEvent {
    /// The rotation timer fired
    Tick,

    /// Pointer moved onto the carousel region
    PointerEnter,

    /// Pointer moved off the carousel region
    PointerLeave,

    /// An indicator (or, in the full-row layout, an item) was clicked
    Select(usize),

    /// Keyboard previous/next
    Step(StepDirection),
}

impl CarouselEvent {
    /// Short name for logging
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tick => "tick",
            Self::PointerEnter => "pointer_enter",
            Self::PointerLeave => "pointer_leave",
            Self::Select(_) => "select",
            Self::Step(_) => "step",
        }
    }

    /// Whether this event came from the user rather than the timer
    #[must_use]
    pub fn is_user_input(&self) -> bool {
        !matches!(self, Self::Tick)
    }
}
