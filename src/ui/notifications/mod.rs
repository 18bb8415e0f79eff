// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily in the top-right corner to report the
//! outcome of an action without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Notifier` for insertion and lifecycle timing
//! - [`toast`] - Page nodes and inline styling of a single toast
//!
//! # Lifecycle
//!
//! Relative to insertion, with the default timings:
//!
//! | t (ms) | event |
//! |---|---|
//! | 0 | inserted off-screen |
//! | 100 | slides in |
//! | 4000 | slides out |
//! | 4300 | removed from the page |

pub mod manager;
pub mod notification;
pub mod toast;

pub use manager::{Message as NotificationMessage, Notifier};
pub use notification::{Notification, NotificationId, Phase, Severity};
pub use toast::Toast;
