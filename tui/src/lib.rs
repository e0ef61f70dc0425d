//! Buddy Carousel TUI - Terminal surface for the buddy carousel
//!
//! This crate mounts a [`carousel_core::Carousel`] full-screen and lets a
//! visitor meet the buddies from a terminal.
//!
//! # Architecture
//!
//! - **App**: Event loop joining terminal input and the rotation ticker
//! - **Widgets**: The carousel renderer and its mouse hit map
//! - **Icons**: Asset reference to terminal glyph resolution
//! - **Theme**: Page palette and opacity blending
//! - **Terminal**: Restoring the terminal on every exit path

pub mod app;
pub mod icons;
pub mod terminal;
pub mod theme;
pub mod widgets;

pub use app::App;
