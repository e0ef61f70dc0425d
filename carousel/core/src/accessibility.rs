//! Accessibility Support
//!
//! Labels for assistive technology. Surfaces that have a real accessibility
//! tree (a web view, a native toolkit) map these onto ARIA attributes; the
//! terminal surface uses them as visible captions and hover hints.
//!
//! - The carousel region is labelled [`REGION_LABEL`]
//! - Only the active item's image carries alternate text; the others are
//!   hidden from assistive tech so the reader isn't flooded on every tick
//! - Every indicator is a button labelled "View {name}" and the active one
//!   is marked current

use crate::carousel::{Indicator, VisibleEntry};

/// Label of the carousel region
pub const REGION_LABEL: &str = "Meet your potential buddies";

/// Accessibility metadata for a rendered carousel element
pub trait Accessible {
    /// Text a screen reader should announce, if any
    fn accessible_label(&self) -> Option<String>;

    /// ARIA role of the element
    ///
    /// See: <https://www.w3.org/TR/wai-aria-1.2/#role_definitions>
    fn aria_role(&self) -> &'static str;

    /// Whether the element should be hidden from assistive tech
    fn is_hidden(&self) -> bool {
        false
    }
}

impl Accessible for VisibleEntry {
    fn accessible_label(&self) -> Option<String> {
        self.is_active().then(|| self.buddy.name.to_string())
    }

    fn aria_role(&self) -> &'static str {
        "img"
    }

    fn is_hidden(&self) -> bool {
        !self.is_active()
    }
}

impl Accessible for Indicator {
    fn accessible_label(&self) -> Option<String> {
        Some(format!("View {}", self.buddy.name))
    }

    fn aria_role(&self) -> &'static str {
        "button"
    }
}

/// Value for `aria-current` on an indicator
#[must_use]
pub fn aria_current(indicator: &Indicator) -> Option<&'static str> {
    indicator.current.then_some("true")
}
