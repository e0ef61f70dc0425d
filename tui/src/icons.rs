//! Buddy Glyphs
//!
//! Terminals can't show the PNG illustrations, so the TUI resolves each
//! buddy's image reference to an emoji by asset file stem. Unknown assets
//! fall back to the first letter of the buddy's name.

use carousel_core::Buddy;
use unicode_width::UnicodeWidthStr;

/// Glyph for a buddy, keyed by its asset file stem
#[must_use]
pub fn glyph_for(buddy: &Buddy) -> String {
    let known = match buddy.asset_stem() {
        "red_panda" => Some("🦊"),
        "quokka" => Some("🐹"),
        "koala" => Some("🐨"),
        "cat" => Some("🐱"),
        "dog" => Some("🐶"),
        "bear" => Some("🐻"),
        "axolotl" => Some("🦎"),
        "narhwhal" | "narwhal" => Some("🐳"),
        "ghost" => Some("👻"),
        _ => None,
    };

    match known {
        Some(glyph) => glyph.to_string(),
        None => buddy
            .name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string()),
    }
}

/// Display width of a glyph in terminal columns
#[must_use]
pub fn glyph_width(glyph: &str) -> u16 {
    u16::try_from(glyph.width()).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use carousel_core::BUDDIES;

    #[test]
    fn test_every_catalogue_buddy_has_an_emoji() {
        for buddy in &BUDDIES {
            assert_eq!(glyph_width(&glyph_for(buddy)), 2, "{}", buddy.name);
        }
    }

    #[test]
    fn test_unknown_asset_uses_initial() {
        let buddy = Buddy::new("otter", "/img/otter.png");
        assert_eq!(glyph_for(&buddy), "O");
        assert_eq!(glyph_width("O"), 1);
    }
}
