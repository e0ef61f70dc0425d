//! Window Projection
//!
//! Pure index arithmetic for the windowed layout: which list positions sit
//! around the active index, and how far each one is from it.

use serde::Serialize;

/// Radius of the classic five-item window
pub const DEFAULT_WINDOW_RADIUS: usize = 2;

/// One position in a projected window
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct WindowSlot {
    /// Index into the item list
    pub index: usize,
    /// Signed position relative to the active item (0 = centre)
    pub offset: i32,
}

/// Project a circular window of `2 * radius + 1` slots around `active`
///
/// Slots are ordered by offset, from `-radius` to `+radius`. When the list is
/// shorter than the window the same index appears more than once; an empty
/// list yields an empty window.
#[must_use]
pub fn project_window(active: usize, len: usize, radius: usize) -> Vec<WindowSlot> {
    if len == 0 {
        return Vec::new();
    }
    let radius = i64::try_from(radius).unwrap_or(i64::from(i32::MAX));
    let len_i = i64::try_from(len).unwrap_or(i64::MAX);
    let active_i = i64::try_from(active % len).unwrap_or(0);

    (-radius..=radius)
        .map(|offset| WindowSlot {
            index: usize::try_from((active_i + offset).rem_euclid(len_i)).unwrap_or(0),
            offset: i32::try_from(offset).unwrap_or(i32::MAX),
        })
        .collect()
}

/// Signed distance from `active` to `index`, taking the shorter way round
///
/// The result lies in `(-len/2, len/2]`; for even lengths the exact opposite
/// position counts as positive.
#[must_use]
pub fn signed_offset(index: usize, active: usize, len: usize) -> i32 {
    if len == 0 {
        return 0;
    }
    let forward = (index % len + len - active % len) % len;
    let signed = if forward > len / 2 {
        -i64::try_from(len - forward).unwrap_or(0)
    } else {
        i64::try_from(forward).unwrap_or(0)
    };
    i32::try_from(signed).unwrap_or(0)
}
