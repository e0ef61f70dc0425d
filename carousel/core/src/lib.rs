//! Carousel Core - Headless Rotation and Selection for the Buddy Carousel
//!
//! This crate holds everything about the buddy carousel that isn't drawing:
//! which buddies exist, which one is active, whether rotation is paused,
//! which items are visible and how prominently each should be drawn. It can
//! drive a TUI, a web view, or run headless in tests.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       UI Surface                          │
//! │  pointer enter/leave, clicks, keys        draw entries    │
//! └───────────────┬──────────────────────────────▲───────────┘
//!                 │ CarouselEvent                │ VisibleEntry
//!                 ▼                              │ Indicator
//! ┌──────────────────────────────────────────────┴───────────┐
//! │                      CAROUSEL CORE                        │
//! │  ┌────────────┐   ┌──────────────┐   ┌────────────────┐   │
//! │  │  Rotation  │──▶│    Window    │──▶│ Visual Weights │   │
//! │  │ Controller │   │  Projection  │   │                │   │
//! │  └─────▲──────┘   └──────────────┘   └────────────────┘   │
//! │        │ Tick                                             │
//! │  ┌─────┴──────┐                                           │
//! │  │  Rotation  │  (tokio task, cancelled on drop)          │
//! │  │   Ticker   │                                           │
//! │  └────────────┘                                           │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Module Overview
//!
//! - [`buddies`]: The fixed item catalogue
//! - [`rotation`]: Active index + paused flag state machine
//! - [`window`]: Circular window projection and signed offsets
//! - [`weights`]: Offset to scale/opacity/stack order/emphasis
//! - [`carousel`]: The component tying it all together
//! - [`events`]: Inputs to the carousel
//! - [`ticker`]: Cancellable repeating tick task
//! - [`animation`]: Slide transition easing
//! - [`accessibility`]: Labels for assistive technology
//! - [`config`]: TOML + environment configuration
//!
//! # No TUI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, or any other
//! UI framework.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod accessibility;
pub mod animation;
pub mod buddies;
pub mod carousel;
pub mod config;
pub mod events;
pub mod rotation;
pub mod ticker;
pub mod weights;
pub mod window;

pub use accessibility::{aria_current, Accessible, REGION_LABEL};
pub use animation::{EasingFunction, SlideTransition};
pub use buddies::{Buddy, BUDDIES};
pub use carousel::{Carousel, Indicator, VisibleEntry};
pub use config::{
    default_config_path, load_config, load_config_from_path, load_config_with_env,
    CarouselConfig, ConfigError, ConfigSource, LayoutMode,
};
pub use events::CarouselEvent;
pub use rotation::{RotationController, RotationState, StepDirection};
pub use ticker::{RotationTicker, TickerHandle};
pub use weights::{VisualWeight, WeightTier};
pub use window::{project_window, signed_offset, WindowSlot, DEFAULT_WINDOW_RADIUS};
