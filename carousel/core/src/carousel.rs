//! Carousel Component
//!
//! Ties the pieces together: the item list, the rotation state machine, the
//! configured layout, and the slide transition. Surfaces own one `Carousel`,
//! feed it [`CarouselEvent`]s and render whatever [`Carousel::visible`] and
//! [`Carousel::indicators`] return after each event.

use std::time::Instant;

use serde::Serialize;
use tokio::sync::mpsc;

use crate::animation::SlideTransition;
use crate::buddies::{Buddy, BUDDIES};
use crate::config::{CarouselConfig, LayoutMode, MAX_WINDOW_RADIUS};
use crate::events::CarouselEvent;
use crate::rotation::{RotationController, RotationState};
use crate::ticker::{RotationTicker, TickerHandle};
use crate::weights::VisualWeight;
use crate::window::{project_window, signed_offset};

/// An item as it should be drawn right now
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct VisibleEntry {
    /// Index into the item list
    pub index: usize,
    /// The item itself
    pub buddy: Buddy,
    /// Signed distance from the active item
    pub offset: i32,
    /// How prominently to draw it
    pub weight: VisualWeight,
}

impl VisibleEntry {
    /// Whether this entry is the active (centred/highlighted) one
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.offset == 0
    }
}

/// One selector dot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Indicator {
    /// Index this dot selects
    pub index: usize,
    /// The item it selects
    pub buddy: Buddy,
    /// Whether it marks the current selection
    pub current: bool,
}

/// The carousel: fixed items, active index, paused flag
#[derive(Clone, Debug)]
pub struct Carousel {
    items: Vec<Buddy>,
    rotation: RotationController,
    config: CarouselConfig,
    transition: Option<SlideTransition>,
}

impl Carousel {
    /// Create a carousel over `items`
    ///
    /// A window radius above [`MAX_WINDOW_RADIUS`] is clamped to it.
    pub fn new(items: impl Into<Vec<Buddy>>, mut config: CarouselConfig) -> Self {
        if config.window_radius > MAX_WINDOW_RADIUS {
            tracing::warn!(
                requested = config.window_radius,
                max = MAX_WINDOW_RADIUS,
                "Window radius clamped"
            );
            config.window_radius = MAX_WINDOW_RADIUS;
        }
        let items = items.into();
        let rotation = RotationController::new(items.len());
        Self {
            items,
            rotation,
            config,
            transition: None,
        }
    }

    /// Create a carousel over the full buddy catalogue
    #[must_use]
    pub fn with_buddies(config: CarouselConfig) -> Self {
        Self::new(BUDDIES, config)
    }

    /// Configuration in effect
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// All items, in order
    #[must_use]
    pub fn items(&self) -> &[Buddy] {
        &self.items
    }

    /// Active index, or `None` when there are no items
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.rotation.active()
    }

    /// The active item
    #[must_use]
    pub fn active_buddy(&self) -> Option<Buddy> {
        self.active_index().map(|i| self.items[i])
    }

    /// Running or paused
    #[must_use]
    pub fn state(&self) -> RotationState {
        self.rotation.state()
    }

    /// Whether ticks are currently ignored
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.rotation.is_paused()
    }

    /// Start the rotation timer, sending ticks to `tx`
    ///
    /// Returns `None` when there are fewer than two items, since nothing
    /// could ever rotate. Dropping the returned handle unmounts the timer.
    #[must_use = "dropping the handle cancels the ticker"]
    pub fn mount(&self, tx: mpsc::Sender<CarouselEvent>) -> Option<TickerHandle> {
        if !self.rotation.rotates() {
            tracing::info!(items = self.items.len(), "Rotation disabled");
            return None;
        }
        Some(RotationTicker::new(self.config.tick_interval).spawn(tx))
    }

    /// Apply an event
    ///
    /// Returns `true` if the active index changed. A change starts a slide
    /// transition timed from `now`.
    pub fn handle(&mut self, event: CarouselEvent, now: Instant) -> bool {
        let before = self.rotation.active();

        let changed = match event {
            CarouselEvent::Tick => self.rotation.tick(),
            CarouselEvent::PointerEnter => {
                self.rotation.pause_on();
                false
            }
            CarouselEvent::PointerLeave => {
                self.rotation.pause_off();
                false
            }
            CarouselEvent::Select(index) => self.rotation.select(index),
            CarouselEvent::Step(direction) => self.rotation.step(direction),
        };

        if changed {
            if let (Some(old), Some(new)) = (before, self.rotation.active()) {
                let shift = signed_offset(new, old, self.items.len());
                self.transition = Some(
                    SlideTransition::new(shift, self.config.transition, now)
                        .with_easing(self.config.easing),
                );
            }
        }

        tracing::debug!(
            event = event.name(),
            user = event.is_user_input(),
            active = ?self.rotation.active(),
            state = self.rotation.state().description(),
            changed,
            "Carousel event"
        );

        changed
    }

    /// Items to draw, with their offsets and weights
    ///
    /// The windowed layout yields `2 * radius + 1` entries ordered by offset;
    /// the full-row layout yields every item in list order. Empty when there
    /// are no items.
    #[must_use]
    pub fn visible(&self) -> Vec<VisibleEntry> {
        let Some(active) = self.rotation.active() else {
            return Vec::new();
        };
        let len = self.items.len();

        match self.config.layout {
            LayoutMode::Windowed => project_window(active, len, self.config.window_radius)
                .into_iter()
                .map(|slot| VisibleEntry {
                    index: slot.index,
                    buddy: self.items[slot.index],
                    offset: slot.offset,
                    weight: VisualWeight::for_offset(slot.offset),
                })
                .collect(),
            LayoutMode::FullRow => self
                .items
                .iter()
                .enumerate()
                .map(|(index, buddy)| VisibleEntry {
                    index,
                    buddy: *buddy,
                    offset: signed_offset(index, active, len),
                    weight: VisualWeight::for_active(index == active),
                })
                .collect(),
        }
    }

    /// One selector per item, in list order
    #[must_use]
    pub fn indicators(&self) -> Vec<Indicator> {
        let active = self.rotation.active();
        self.items
            .iter()
            .enumerate()
            .map(|(index, buddy)| Indicator {
                index,
                buddy: *buddy,
                current: active == Some(index),
            })
            .collect()
    }

    /// Offset displacement of the current slide at `now` (0 when settled)
    #[must_use]
    pub fn slide_displacement(&self, now: Instant) -> f32 {
        self.transition.map_or(0.0, |t| t.displacement(now))
    }

    /// Whether a slide is still in progress at `now`
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.transition.is_some_and(|t| !t.is_finished(now))
    }
}
