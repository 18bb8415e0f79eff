// SPDX-License-Identifier: MPL-2.0
//! Page nodes for individual notifications.
//!
//! A toast is a fixed card in the top-right corner:
//!
//! ```text
//! div.notification.notification-{severity}
//!   div.notification-content
//!     span.notification-icon      glyph
//!     span.notification-message   text
//! ```

use super::notification::{Notification, Phase, Severity};
use crate::dom::Dom;
use crate::ui::design_tokens::{layer, motion, radius, shadow, spacing};

/// Transform of a toast outside the viewport.
pub const OFFSCREEN_TRANSFORM: &str = "translateX(100%)";
pub const ONSCREEN_TRANSFORM: &str = "translateX(0)";

/// A notification attached to the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast<N> {
    notification: Notification,
    node: N,
    phase: Phase,
}

impl<N: Clone + PartialEq> Toast<N> {
    /// Builds the toast off-screen and appends it to `<body>`.
    ///
    /// Returns `None` when the document has no body or refuses to create
    /// elements; the notification is then dropped.
    pub fn render<D: Dom<Node = N>>(dom: &mut D, notification: Notification) -> Option<Self> {
        let body = dom.body()?;
        let node = build(dom, &notification)?;
        dom.append_child(&body, &node);
        Some(Self {
            notification,
            node,
            phase: Phase::Entering,
        })
    }

    #[must_use]
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    #[must_use]
    pub fn node(&self) -> &N {
        &self.node
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub(super) fn slide_in<D: Dom<Node = N>>(&mut self, dom: &mut D) {
        dom.set_style(&self.node, "transform", ONSCREEN_TRANSFORM);
        self.phase = Phase::Shown;
    }

    pub(super) fn slide_out<D: Dom<Node = N>>(&mut self, dom: &mut D) {
        dom.set_style(&self.node, "transform", OFFSCREEN_TRANSFORM);
        self.phase = Phase::Leaving;
    }

    pub(super) fn detach<D: Dom<Node = N>>(self, dom: &mut D) {
        dom.remove(&self.node);
    }
}

fn build<D: Dom>(dom: &mut D, notification: &Notification) -> Option<D::Node> {
    let severity = notification.severity();

    let container = dom.create_element("div")?;
    dom.set_attribute(&container, "class", &format!("notification notification-{severity}"));
    dom.set_css_text(&container, &css_text(severity));

    let content = dom.create_element("div")?;
    dom.set_attribute(&content, "class", "notification-content");

    let icon = dom.create_element("span")?;
    dom.set_attribute(&icon, "class", "notification-icon");
    dom.set_text(&icon, severity.style().glyph);

    let message = dom.create_element("span")?;
    dom.set_attribute(&message, "class", "notification-message");
    dom.set_text(&message, notification.text());

    dom.append_child(&content, &icon);
    dom.append_child(&content, &message);
    dom.append_child(&container, &content);
    Some(container)
}

/// Inline declaration block of a freshly inserted toast.
#[must_use]
pub fn css_text(severity: Severity) -> String {
    let style = severity.style();
    format!(
        "position: fixed; top: {edge}; right: {edge}; background: {background}; color: {text}; \
         border: 1px solid {border}; border-radius: {radius}; padding: {padding}; \
         box-shadow: {shadow}; z-index: {z}; transform: {transform}; \
         transition: transform {slide}s {easing}; max-width: {max_width};",
        edge = spacing::TOAST_EDGE,
        background = style.background,
        text = style.text,
        border = style.border,
        radius = radius::DEFAULT,
        padding = spacing::TOAST_PADDING,
        shadow = shadow::LG,
        z = layer::NOTIFICATION,
        transform = OFFSCREEN_TRANSFORM,
        slide = motion::TOAST_SLIDE_SECS,
        easing = motion::STANDARD_EASING,
        max_width = spacing::TOAST_MAX_WIDTH,
    )
}
