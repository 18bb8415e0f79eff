// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Selectors**: CSS selectors locating the page structure
//! - **Notifications**: Toast lifecycle timings
//! - **Signup**: Simulated submission delay
//! - **Reveal**: Intersection threshold, margins and transition
//! - **Parallax / Scroll**: Rates and spacing units

// ==========================================================================
// Selector Defaults
// ==========================================================================

pub const DEFAULT_NAV_TOGGLE_SELECTOR: &str = ".nav-toggle";
pub const DEFAULT_NAV_PANEL_SELECTOR: &str = "#nav";
pub const DEFAULT_YEAR_SELECTOR: &str = "#year";
pub const DEFAULT_FORM_SELECTOR: &str = ".cta-form";
pub const DEFAULT_EMAIL_SELECTOR: &str = "#email";
pub const DEFAULT_SUBMIT_SELECTOR: &str = "button[type=\"submit\"]";
pub const DEFAULT_HEADER_SELECTOR: &str = ".site-header";
pub const DEFAULT_HERO_SELECTOR: &str = ".hero";
pub const DEFAULT_ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Elements faded in the first time they scroll into view.
pub const DEFAULT_REVEAL_SELECTORS: [&str; 3] = [".feature-card", ".roadmap-item", ".about-grid > div"];

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Delay between insertion and the slide-in transition (milliseconds).
pub const DEFAULT_NOTIFICATION_ENTER_DELAY_MS: u64 = 100;

/// Time a toast stays on screen before sliding out (milliseconds).
pub const DEFAULT_NOTIFICATION_DISPLAY_MS: u64 = 4000;

/// Exit animation length; the node is removed once it elapses (milliseconds).
pub const DEFAULT_NOTIFICATION_EXIT_MS: u64 = 300;

// ==========================================================================
// Signup Defaults
// ==========================================================================

/// Delay of the simulated subscription request (milliseconds).
pub const DEFAULT_SIMULATED_SUBMIT_DELAY_MS: u64 = 1500;

// ==========================================================================
// Reveal Defaults
// ==========================================================================

/// Fraction of an element that must be visible before it is revealed.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

/// Minimum allowed threshold.
pub const MIN_REVEAL_THRESHOLD: f64 = 0.0;

/// Maximum allowed threshold.
pub const MAX_REVEAL_THRESHOLD: f64 = 1.0;

/// Amount the viewport's bottom edge is pulled in (pixels).
pub const DEFAULT_REVEAL_BOTTOM_MARGIN_PX: f64 = 50.0;

/// Initial downward offset of hidden elements (rem).
pub const DEFAULT_REVEAL_OFFSET_REM: f64 = 2.0;

/// Opacity and transform transition length (seconds).
pub const DEFAULT_REVEAL_TRANSITION_SECS: f64 = 0.6;

// ==========================================================================
// Parallax / Scroll Defaults
// ==========================================================================

/// Hero offset per scrolled pixel. Negative values move against the scroll.
pub const DEFAULT_PARALLAX_RATE: f64 = -0.5;

/// Extra gap kept between the fixed header and a scroll target (rem).
pub const DEFAULT_SCROLL_SPACING_REM: f64 = 2.0;

/// Font size assumed when the host cannot resolve the root font size (pixels).
pub const FALLBACK_ROOT_FONT_SIZE_PX: f64 = 16.0;
