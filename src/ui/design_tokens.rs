// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Values the script writes into inline styles. Colors, radius and shadow are
CSS custom properties owned by the page stylesheet; the script only refers
to them, so a theme change never touches this crate.

## Organization

- **Palette**: Color custom properties
- **Spacing**: Offsets and paddings
- **Radius / Shadow**: Surface tokens
- **Motion**: Transition timing
- **Glyph**: Severity icons
- **Layer**: Stacking order

## Examples

```
use pumpey_site::ui::design_tokens::{palette, spacing};

assert_eq!(palette::GREEN_100, "var(--green-100)");
assert_eq!(spacing::TOAST_EDGE, "2rem");
```
"#]

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    pub const WHITE: &str = "var(--white)";

    // Grayscale
    pub const GRAY_100: &str = "var(--gray-100)";
    pub const GRAY_200: &str = "var(--gray-200)";
    pub const GRAY_800: &str = "var(--gray-800)";

    // Green
    pub const GREEN_100: &str = "var(--green-100)";
    pub const GREEN_200: &str = "var(--green-200)";
    pub const GREEN_800: &str = "var(--green-800)";

    pub const DESTRUCTIVE: &str = "var(--destructive)";
}

// ============================================================================
// Spacing
// ============================================================================

pub mod spacing {
    /// Distance between a toast and the top/right viewport edges.
    pub const TOAST_EDGE: &str = "2rem";
    pub const TOAST_PADDING: &str = "1rem 1.5rem";
    pub const TOAST_MAX_WIDTH: &str = "24rem";
    /// Gap between the icon and the message inside a toast.
    pub const TOAST_GAP: &str = "0.75rem";
}

// ============================================================================
// Radius / Shadow
// ============================================================================

pub mod radius {
    pub const DEFAULT: &str = "var(--radius)";
}

pub mod shadow {
    pub const LG: &str = "var(--shadow-lg)";
}

// ============================================================================
// Motion
// ============================================================================

pub mod motion {
    /// Material standard easing used by the toast slide.
    pub const STANDARD_EASING: &str = "cubic-bezier(0.4, 0, 0.2, 1)";
    pub const TOAST_SLIDE_SECS: f64 = 0.3;
    pub const SPIN_SECS: f64 = 1.0;
    /// Delay of the hero card entrance once the page has loaded.
    pub const HERO_CARD_DELAY_SECS: f64 = 0.5;
}

// ============================================================================
// Glyphs
// ============================================================================

pub mod glyph {
    pub const SUCCESS: &str = "\u{2713}";
    pub const ERROR: &str = "\u{2715}";
    pub const INFO: &str = "\u{2139}";
}

// ============================================================================
// Layers
// ============================================================================

pub mod layer {
    pub const NOTIFICATION: u32 = 1000;
}
