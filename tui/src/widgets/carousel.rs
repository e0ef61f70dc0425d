//! Carousel Widget
//!
//! Draws a [`Carousel`] into a ratatui buffer and records where everything
//! landed so the app can turn mouse coordinates back into carousel events.
//!
//! ```text
//!                 Meet your potential buddies
//!
//!     ╭────╮   ╭───────╮  ╭──────────╮  ╭───────╮   ╭────╮
//!     │ 🐳 │   │  👻   │  │          │  │  🐹   │   │ 🐨 │
//!     ╰────╯   ╰───────╯  │    🦊    │  ╰───────╯   ╰────╯
//!                         │          │
//!                         ╰──────────╯
//!                          Red Panda
//!
//!                     ● • • • • • • • •
//! ```

use std::time::Instant;

use carousel_core::{Accessible, Carousel, LayoutMode, VisibleEntry, REGION_LABEL};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, StatefulWidget, Widget};
use unicode_width::UnicodeWidthStr;

use crate::icons::{glyph_for, glyph_width};
use crate::theme::{fade, BLUSH, SAGE, SAND, STONE, TEXT_PRIMARY, TEXT_SECONDARY, TILE_BORDER, WARM_WHITE};

/// Width of the active tile
const TILE_WIDTH: u16 = 12;

/// Height of the active tile (also the height of the tile band)
const TILE_HEIGHT: u16 = 7;

/// Columns between neighbouring tile centres in the windowed layout
const TILE_SPACING: f32 = 14.0;

/// Rows the widget needs: heading, gap, tiles, caption, gap, dots, padding
pub const CAROUSEL_HEIGHT: u16 = 1 + 1 + 1 + TILE_HEIGHT + 1 + 1 + 1 + 1;

/// Indicator dot glyph
const DOT: &str = "●";

/// Where things were drawn on the last render
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HitMap {
    /// Area covered by the carousel region (pointer here pauses rotation)
    pub region: Rect,
    /// Tile rects with their item index, in draw order (last is topmost)
    tiles: Vec<(Rect, usize)>,
    /// Indicator rects with their item index
    dots: Vec<(Rect, usize)>,
}

impl HitMap {
    /// Whether a cell is inside the carousel region
    #[must_use]
    pub fn region_contains(&self, x: u16, y: u16) -> bool {
        self.region.contains(Position::new(x, y))
    }

    /// Item selected by the indicator at a cell
    #[must_use]
    pub fn indicator_at(&self, x: u16, y: u16) -> Option<usize> {
        self.dots
            .iter()
            .find(|(rect, _)| rect.contains(Position::new(x, y)))
            .map(|(_, index)| *index)
    }

    /// Item whose tile is topmost at a cell
    #[must_use]
    pub fn tile_at(&self, x: u16, y: u16) -> Option<usize> {
        self.tiles
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(Position::new(x, y)))
            .map(|(_, index)| *index)
    }

    /// Rect of the indicator for `index`, if drawn
    #[must_use]
    pub fn indicator_rect(&self, index: usize) -> Option<Rect> {
        self.dots.iter().find(|(_, i)| *i == index).map(|(r, _)| *r)
    }

    /// Rect of the topmost tile for `index`, if drawn
    #[must_use]
    pub fn tile_rect(&self, index: usize) -> Option<Rect> {
        self.tiles.iter().rev().find(|(_, i)| *i == index).map(|(r, _)| *r)
    }

    /// Number of indicators drawn
    #[must_use]
    pub fn indicator_count(&self) -> usize {
        self.dots.len()
    }

    fn clear(&mut self) {
        self.region = Rect::default();
        self.tiles.clear();
        self.dots.clear();
    }
}

/// Stateful widget rendering a carousel; state is the [`HitMap`]
pub struct CarouselView<'a> {
    carousel: &'a Carousel,
    now: Instant,
    hovered_indicator: Option<usize>,
}

impl<'a> CarouselView<'a> {
    /// Render `carousel` as of `now` (used for the slide transition)
    #[must_use]
    pub fn new(carousel: &'a Carousel, now: Instant) -> Self {
        Self {
            carousel,
            now,
            hovered_indicator: None,
        }
    }

    /// Highlight the indicator under the pointer
    #[must_use]
    pub fn hovered_indicator(mut self, index: Option<usize>) -> Self {
        self.hovered_indicator = index;
        self
    }

    /// Rect of a tile for `entry`, or `None` if it doesn't fit in `band`
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn tile_rect(&self, entry: &VisibleEntry, band: Rect) -> Option<Rect> {
        let scale = entry.weight.scale;
        let width = ((f32::from(TILE_WIDTH) * scale).round() as u16).max(4);
        let height = ((f32::from(TILE_HEIGHT) * scale).round() as u16).max(3);

        let centre_x = match self.carousel.config().layout {
            LayoutMode::Windowed => {
                let position = entry.offset as f32 + self.carousel.slide_displacement(self.now);
                f32::from(band.x) + f32::from(band.width) / 2.0 + position * TILE_SPACING
            }
            LayoutMode::FullRow => {
                let count = self.carousel.items().len().max(1) as f32;
                let slot = f32::from(band.width) / count;
                f32::from(band.x) + slot * (entry.index as f32 + 0.5)
            }
        };

        let mut left = (centre_x - f32::from(width) / 2.0).round();
        if self.carousel.config().layout == LayoutMode::FullRow {
            // Row slots are fixed, so pull edge tiles inside rather than drop them
            let max_left = f32::from(band.right().saturating_sub(width));
            left = left.clamp(f32::from(band.x), max_left.max(f32::from(band.x)));
        }
        if left < f32::from(band.x) {
            return None;
        }
        let rect = Rect::new(
            left as u16,
            band.y + (TILE_HEIGHT - height.min(TILE_HEIGHT)) / 2,
            width,
            height,
        );
        (band.intersection(rect) == rect).then_some(rect)
    }

    fn draw_tile(entry: &VisibleEntry, rect: Rect, buf: &mut Buffer) {
        let weight = entry.weight;
        let card = if weight.emphasized { WARM_WHITE } else { BLUSH };
        let border = fade(TILE_BORDER, BLUSH, weight.opacity);

        fill(buf, rect, Style::default().bg(card));
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border).bg(card))
            .render(rect, buf);

        let glyph = glyph_for(&entry.buddy);
        let glyph_w = glyph_width(&glyph);
        let x = rect.x + rect.width.saturating_sub(glyph_w) / 2;
        let y = rect.y + rect.height / 2;
        let mut style = Style::default().fg(fade(TEXT_PRIMARY, BLUSH, weight.opacity)).bg(card);
        if !weight.emphasized {
            style = style.add_modifier(Modifier::DIM);
        }
        buf.set_string(x, y, glyph, style);
    }

    fn draw_centred(buf: &mut Buffer, area: Rect, y: u16, centre_x: u16, text: &str, style: Style) {
        let text_w = u16::try_from(text.width()).unwrap_or(u16::MAX).min(area.width);
        let x = centre_x
            .saturating_sub(text_w / 2)
            .clamp(area.x, area.right().saturating_sub(text_w));
        buf.set_stringn(x, y, text, usize::from(area.width), style);
    }

    fn draw_indicators(&self, buf: &mut Buffer, area: Rect, y: u16, hits: &mut HitMap) {
        let indicators = self.carousel.indicators();
        let count = u16::try_from(indicators.len()).unwrap_or(u16::MAX);
        let span = count.saturating_mul(2).saturating_sub(1);
        if span > area.width {
            return;
        }
        let start = area.x + (area.width - span) / 2;

        for (i, indicator) in (0u16..).zip(indicators.iter()) {
            let x = start + i * 2;
            let color = if indicator.current {
                SAGE
            } else if self.hovered_indicator == Some(indicator.index) {
                SAND
            } else {
                STONE
            };
            buf.set_string(x, y, DOT, Style::default().fg(color).bg(BLUSH));

            // Include the gap so the dot is easier to hit
            let hit_w = if x + 1 < area.right() { 2 } else { 1 };
            hits.dots.push((Rect::new(x, y, hit_w, 1), indicator.index));
        }
    }
}

impl StatefulWidget for CarouselView<'_> {
    type State = HitMap;

    fn render(self, area: Rect, buf: &mut Buffer, hits: &mut HitMap) {
        hits.clear();
        fill(buf, area, Style::default().bg(BLUSH));
        if area.width < TILE_WIDTH || area.height < CAROUSEL_HEIGHT {
            return;
        }
        hits.region = area;

        let centre_x = area.x + area.width / 2;
        let heading_y = area.y + 1;
        let band = Rect::new(area.x, area.y + 3, area.width, TILE_HEIGHT);
        let caption_y = band.bottom();
        let dots_y = caption_y + 2;

        Self::draw_centred(
            buf,
            area,
            heading_y,
            centre_x,
            REGION_LABEL,
            Style::default().fg(TEXT_SECONDARY).bg(BLUSH),
        );

        let mut entries = self.carousel.visible();
        entries.sort_by_key(|e| e.weight.stack_order);

        let mut caption = None;
        for entry in &entries {
            let Some(rect) = self.tile_rect(entry, band) else {
                continue;
            };
            Self::draw_tile(entry, rect, buf);
            hits.tiles.push((rect, entry.index));

            if let Some(label) = entry.accessible_label() {
                caption = Some((label, rect.x + rect.width / 2));
            }
        }

        if let Some((label, x)) = caption {
            Self::draw_centred(
                buf,
                area,
                caption_y,
                x,
                &label,
                Style::default()
                    .fg(TEXT_PRIMARY)
                    .bg(BLUSH)
                    .add_modifier(Modifier::BOLD),
            );
        }

        self.draw_indicators(buf, area, dots_y, hits);
    }
}

/// Paint every cell of `rect` blank with `style`
fn fill(buf: &mut Buffer, rect: Rect, style: Style) {
    let rect = buf.area.intersection(rect);
    for y in rect.top()..rect.bottom() {
        for x in rect.left()..rect.right() {
            buf[(x, y)].set_symbol(" ").set_style(style);
        }
    }
}
