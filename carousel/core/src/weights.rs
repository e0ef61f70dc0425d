//! Visual Weights
//!
//! Maps an item's distance from the active index to how prominently a
//! surface should draw it. No state, no side effects.

use serde::Serialize;

/// Prominence bucket for a carousel item
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum WeightTier {
    /// Furthest visible items
    Far,
    /// Direct neighbours of the active item (or inactive items in a row)
    Near,
    /// The active item
    Focus,
}

impl WeightTier {
    /// Tier for a signed offset from the active index
    #[must_use]
    pub fn for_offset(offset: i32) -> Self {
        match offset.unsigned_abs() {
            0 => Self::Focus,
            1 => Self::Near,
            _ => Self::Far,
        }
    }

    /// Tier for the full-row layout, which only distinguishes active/inactive
    #[must_use]
    pub fn for_active(active: bool) -> Self {
        if active {
            Self::Focus
        } else {
            Self::Near
        }
    }

    /// Concrete drawing weights for this tier
    #[must_use]
    pub fn weight(self) -> VisualWeight {
        match self {
            Self::Focus => VisualWeight {
                scale: 1.0,
                opacity: 1.0,
                stack_order: 10,
                emphasized: true,
            },
            Self::Near => VisualWeight {
                scale: 0.75,
                opacity: 0.6,
                stack_order: 5,
                emphasized: false,
            },
            Self::Far => VisualWeight {
                scale: 0.5,
                opacity: 0.3,
                stack_order: 0,
                emphasized: false,
            },
        }
    }
}

/// How a surface should draw one item
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct VisualWeight {
    /// Size relative to the active item (0.0 - 1.0)
    pub scale: f32,
    /// Opacity (0.0 - 1.0)
    pub opacity: f32,
    /// Draw order; higher is drawn later (on top)
    pub stack_order: i32,
    /// Whether the item gets the highlighted treatment and caption
    pub emphasized: bool,
}

impl VisualWeight {
    /// Weight for a signed offset from the active index
    #[must_use]
    pub fn for_offset(offset: i32) -> Self {
        WeightTier::for_offset(offset).weight()
    }

    /// Weight for an item in the full-row layout
    #[must_use]
    pub fn for_active(active: bool) -> Self {
        WeightTier::for_active(active).weight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centre_is_emphasized() {
        let w = VisualWeight::for_offset(0);
        assert!(w.emphasized);
        assert!((w.scale - 1.0).abs() < f32::EPSILON);
        assert!((w.opacity - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_tiers_are_symmetric() {
        for offset in 1..4 {
            assert_eq!(VisualWeight::for_offset(offset), VisualWeight::for_offset(-offset));
        }
    }

    #[test]
    fn test_weights_decrease_with_distance() {
        let centre = VisualWeight::for_offset(0);
        let near = VisualWeight::for_offset(1);
        let far = VisualWeight::for_offset(-2);

        assert!(!near.emphasized && !far.emphasized);
        assert!(centre.scale > near.scale && near.scale > far.scale);
        assert!(centre.opacity > near.opacity && near.opacity > far.opacity);
        assert!(centre.stack_order > near.stack_order && near.stack_order > far.stack_order);
    }

    #[test]
    fn test_wide_offsets_stay_far() {
        assert_eq!(WeightTier::for_offset(7), WeightTier::Far);
        assert_eq!(WeightTier::for_offset(i32::MIN), WeightTier::Far);
    }

    #[test]
    fn test_full_row_weights() {
        assert!(VisualWeight::for_active(true).emphasized);
        assert_eq!(WeightTier::for_active(false), WeightTier::Near);
    }
}
