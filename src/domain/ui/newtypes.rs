// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges and in a single unit.

use std::fmt;

// =============================================================================
// Length
// =============================================================================

/// A CSS length in one of the two units the page works with.
///
/// Offsets are always resolved to pixels with [`Length::to_px`] before they
/// are combined, so arithmetic never mixes units.
///
/// # Example
///
/// ```
/// use pumpey_site::domain::ui::Length;
///
/// assert_eq!(Length::Rem(2.0).to_px(16.0), 32.0);
/// assert_eq!(Length::Px(12.0).to_px(16.0), 12.0);
/// assert_eq!(Length::Rem(2.0).to_string(), "2rem");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f64),
    Rem(f64),
}

impl Length {
    /// Resolves the length against the document's root font size.
    #[must_use]
    pub fn to_px(self, root_font_size_px: f64) -> f64 {
        match self {
            Length::Px(px) => px,
            Length::Rem(rem) => rem * root_font_size_px,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(px) => write!(f, "{px}px"),
            Length::Rem(rem) => write!(f, "{rem}rem"),
        }
    }
}

// =============================================================================
// Threshold
// =============================================================================

/// Visible fraction of an element required to count as intersecting (0.0–1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold(f64);

impl Threshold {
    /// Creates a threshold, clamping to the valid range. NaN becomes 0.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether an intersection ratio satisfies this threshold.
    ///
    /// A zero threshold still requires some overlap, as browsers do.
    #[must_use]
    pub fn is_met_by(self, ratio: f64) -> bool {
        if self.0 == 0.0 {
            ratio > 0.0
        } else {
            ratio >= self.0
        }
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(crate::config::DEFAULT_REVEAL_THRESHOLD)
    }
}

// =============================================================================
// ParallaxRate
// =============================================================================

/// Hero displacement per scrolled pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxRate(f64);

impl ParallaxRate {
    /// Creates a rate; non-finite values fall back to no movement.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value)
        } else {
            Self(0.0)
        }
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Vertical offset in pixels for the given scroll position.
    #[must_use]
    pub fn offset_for(self, scroll_y: f64) -> f64 {
        scroll_y * self.0
    }
}

impl Default for ParallaxRate {
    fn default() -> Self {
        Self(crate::config::DEFAULT_PARALLAX_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn rem_resolves_against_root_font_size() {
        assert_abs_diff_eq!(Length::Rem(2.0).to_px(16.0), 32.0);
        assert_abs_diff_eq!(Length::Rem(1.5).to_px(20.0), 30.0);
    }

    #[test]
    fn px_ignores_root_font_size() {
        assert_abs_diff_eq!(Length::Px(50.0).to_px(10.0), 50.0);
    }

    #[test]
    fn length_display_uses_css_units() {
        assert_eq!(Length::Px(-50.0).to_string(), "-50px");
        assert_eq!(Length::Rem(0.5).to_string(), "0.5rem");
    }

    #[test]
    fn threshold_clamps_to_unit_range() {
        assert_abs_diff_eq!(Threshold::new(-1.0).value(), 0.0);
        assert_abs_diff_eq!(Threshold::new(3.0).value(), 1.0);
        assert_abs_diff_eq!(Threshold::new(f64::NAN).value(), 0.0);
    }

    #[test]
    fn threshold_comparison_is_inclusive() {
        let threshold = Threshold::new(0.1);
        assert!(threshold.is_met_by(0.1));
        assert!(threshold.is_met_by(0.5));
        assert!(!threshold.is_met_by(0.09));
    }

    #[test]
    fn zero_threshold_requires_overlap() {
        let threshold = Threshold::new(0.0);
        assert!(!threshold.is_met_by(0.0));
        assert!(threshold.is_met_by(0.01));
    }

    #[test]
    fn parallax_rate_scales_scroll_offset() {
        let rate = ParallaxRate::default();
        assert_abs_diff_eq!(rate.offset_for(200.0), -100.0);
        assert_abs_diff_eq!(rate.offset_for(0.0), 0.0);
    }

    #[test]
    fn non_finite_rate_disables_movement() {
        assert_abs_diff_eq!(ParallaxRate::new(f64::INFINITY).offset_for(100.0), 0.0);
    }
}
