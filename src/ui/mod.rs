// SPDX-License-Identifier: MPL-2.0
//! Page components.
//!
//! Each component owns its state and the page nodes it drives, and exposes a
//! `Message` type plus an `update`. Components that need the application to
//! act on their behalf report it through an `Event`.

pub mod design_tokens;
pub mod nav_toggle;
pub mod notifications;
pub mod page;
pub mod parallax;
pub mod reveal;
pub mod signup;
pub mod smooth_scroll;
pub mod styles;
