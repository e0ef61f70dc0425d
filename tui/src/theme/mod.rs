//! Theme and Colors
//!
//! The soft marketing-page palette the carousel was designed in, plus a
//! helper to fake opacity on a terminal (which has no alpha channel).

use ratatui::style::Color;

// ============================================================================
// Page Palette
// ============================================================================

/// Section background - blush pink
pub const BLUSH: Color = Color::Rgb(250, 232, 228);

/// Highlight card behind the active buddy
pub const WARM_WHITE: Color = Color::Rgb(255, 250, 243);

/// Current indicator dot
pub const SAGE: Color = Color::Rgb(143, 170, 140);

/// Inactive indicator dot
pub const STONE: Color = Color::Rgb(200, 190, 182);

/// Hovered indicator dot
pub const SAND: Color = Color::Rgb(222, 203, 175);

// ============================================================================
// Text Colors
// ============================================================================

/// Buddy name caption
pub const TEXT_PRIMARY: Color = Color::Rgb(68, 56, 52);

/// Heading and status text
pub const TEXT_SECONDARY: Color = Color::Rgb(128, 112, 106);

/// Tile outline
pub const TILE_BORDER: Color = Color::Rgb(186, 150, 142);

/// Blend `color` towards `background` to approximate `opacity`
///
/// Non-RGB colors can't be blended and are returned unchanged.
#[must_use]
pub fn fade(color: Color, background: Color, opacity: f32) -> Color {
    match (color, background) {
        (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => {
            let a = opacity.clamp(0.0, 1.0);
            Color::Rgb(mix(r, br, a), mix(g, bg, a), mix(b, bb, a))
        }
        _ => color,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn mix(fg: u8, bg: u8, alpha: f32) -> u8 {
    (f32::from(fg) * alpha + f32::from(bg) * (1.0 - alpha)).round() as u8
}
