// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Severity` enum
//! used throughout the notification system.

use crate::ui::design_tokens::{glyph, palette};
use std::fmt;

/// Unique identifier for a notification, scoped to one notifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    pub(super) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Background, text and border colors of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityStyle {
    pub background: &'static str,
    pub text: &'static str,
    pub border: &'static str,
    pub glyph: &'static str,
}

const SUCCESS_STYLE: SeverityStyle = SeverityStyle {
    background: palette::GREEN_100,
    text: palette::GREEN_800,
    border: palette::GREEN_200,
    glyph: glyph::SUCCESS,
};

const ERROR_STYLE: SeverityStyle = SeverityStyle {
    background: palette::DESTRUCTIVE,
    text: palette::WHITE,
    border: palette::DESTRUCTIVE,
    glyph: glyph::ERROR,
};

const INFO_STYLE: SeverityStyle = SeverityStyle {
    background: palette::GRAY_100,
    text: palette::GRAY_800,
    border: palette::GRAY_200,
    glyph: glyph::INFO,
};

/// Severity level determines the visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Neutral message (gray).
    #[default]
    Info,
    /// Operation completed successfully (green).
    Success,
    /// Something the user has to fix or retry (destructive red).
    Error,
}

impl Severity {
    /// Suffix of the `notification-{severity}` class.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    #[must_use]
    pub fn style(self) -> &'static SeverityStyle {
        match self {
            Severity::Info => &INFO_STYLE,
            Severity::Success => &SUCCESS_STYLE,
            Severity::Error => &ERROR_STYLE,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a notification is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Inserted off-screen, waiting for the slide-in.
    Entering,
    Shown,
    /// Sliding out; removed once the exit transition ends.
    Leaving,
}

/// A message displayed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    text: String,
}

impl Notification {
    pub(super) fn new(id: NotificationId, severity: Severity, text: impl Into<String>) -> Self {
        Self {
            id,
            severity,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}
