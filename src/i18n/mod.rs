// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the page.
//!
//! Notification texts and the signup loading label are Fluent messages
//! embedded from `assets/i18n/*.ftl`.
//!
//! # Features
//!
//! - English (`en-US`) unless the site config names another locale
//! - Language-only fallback (`fr-CA` resolves to `fr`)
//! - Fallback to `en-US` when nothing matches

pub mod fluent;

pub use fluent::I18n;

/// Shown when the email field fails validation.
pub const KEY_INVALID_EMAIL: &str = "notification-invalid-email";
pub const KEY_SIGNUP_SUCCESS: &str = "notification-signup-success";
pub const KEY_SIGNUP_FAILED: &str = "notification-signup-failed";
/// Label next to the spinner while a submission is in flight.
pub const KEY_SUBMITTING: &str = "signup-submitting";
