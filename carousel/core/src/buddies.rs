//! Buddy Catalogue
//!
//! The fixed, ordered list of buddies the carousel cycles through. Items are
//! defined once at compile time and never change at runtime; surfaces only
//! read them.

use serde::Serialize;

/// A single carousel item: a named buddy and the asset that illustrates it
///
/// `image_ref` is an opaque asset path. The core never opens it; surfaces
/// resolve it through whatever asset pipeline they have.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Buddy {
    /// Display name (also used for accessibility labels)
    pub name: &'static str,
    /// Asset path for the buddy illustration
    pub image_ref: &'static str,
}

impl Buddy {
    /// Create a buddy record
    #[must_use]
    pub const fn new(name: &'static str, image_ref: &'static str) -> Self {
        Self { name, image_ref }
    }

    /// File stem of the image reference (`"/a/red_panda.png"` -> `"red_panda"`)
    #[must_use]
    pub fn asset_stem(&self) -> &'static str {
        let file = self.image_ref.rsplit('/').next().unwrap_or(self.image_ref);
        file.split('.').next().unwrap_or(file)
    }
}

impl std::fmt::Display for Buddy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// Every buddy a visitor can meet, in display order
pub const BUDDIES: [Buddy; 9] = [
    Buddy::new("Red Panda", "/images_promise_buddy/red_panda.png"),
    Buddy::new("Quokka", "/images_promise_buddy/quokka.png"),
    Buddy::new("Koala", "/images_promise_buddy/koala.png"),
    Buddy::new("Cat", "/images_promise_buddy/cat.png"),
    Buddy::new("Dog", "/images_promise_buddy/dog.png"),
    Buddy::new("Bear", "/images_promise_buddy/bear.png"),
    Buddy::new("Axolotl", "/images_promise_buddy/axolotl.png"),
    // The shipped asset really is spelled this way
    Buddy::new("Narwhal", "/images_promise_buddy/narhwhal.png"),
    Buddy::new("Ghost", "/images_promise_buddy/ghost.png"),
];
