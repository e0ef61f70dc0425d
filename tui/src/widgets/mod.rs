//! Widgets
//!
//! Terminal renderings of carousel state.

mod carousel;

pub use carousel::{CarouselView, HitMap, CAROUSEL_HEIGHT};
