// SPDX-License-Identifier: MPL-2.0
//! Mobile navigation toggle.
//!
//! The panel's open state lives here and nowhere else. Anything that needs
//! the panel closed (an outside click, a smooth-scroll jump) goes through
//! [`NavToggle::close`], which keeps the panel class, `aria-expanded` and
//! the icon in agreement.

use crate::config::Selectors;
use crate::dom::Dom;

/// Class marking the panel as open.
pub const OPEN_CLASS: &str = "open";

/// Per icon bar: the property driven, its value closed, its value open.
const ICON_BARS: [(&str, &str, &str); 3] = [
    ("transform", "none", "rotate(45deg) translate(5px, 5px)"),
    ("opacity", "1", "0"),
    ("transform", "none", "rotate(-45deg) translate(7px, -6px)"),
];

#[derive(Debug, Clone, PartialEq)]
pub enum Message<N> {
    /// The toggle button was clicked.
    ToggleClicked,
    /// A click reached the document; `target` is where it started.
    DocumentClicked { target: N },
}

#[derive(Debug, Clone)]
pub struct NavToggle<N> {
    toggle: N,
    panel: N,
    bars: Vec<N>,
    open: bool,
}

impl<N: Clone + PartialEq> NavToggle<N> {
    /// Locates the toggle and the panel; `None` unless both exist.
    pub fn attach<D: Dom<Node = N>>(dom: &D, selectors: &Selectors) -> Option<Self> {
        let toggle = dom.query(&selectors.nav_toggle)?;
        let panel = dom.query(&selectors.nav_panel)?;
        let bars = dom.query_within(&toggle, "span");
        Some(Self {
            open: dom.has_class(&panel, OPEN_CLASS),
            toggle,
            panel,
            bars,
        })
    }

    pub fn update<D: Dom<Node = N>>(&mut self, dom: &mut D, message: Message<N>) {
        match message {
            Message::ToggleClicked => self.toggle(dom),
            Message::DocumentClicked { target } => {
                if !dom.contains(&self.toggle, &target) && !dom.contains(&self.panel, &target) {
                    self.close(dom);
                }
            }
        }
    }

    /// Flips the panel between open and closed.
    pub fn toggle<D: Dom<Node = N>>(&mut self, dom: &mut D) {
        self.set_open(dom, !self.open);
    }

    /// Closes the panel; closing a closed panel changes nothing visible.
    pub fn close<D: Dom<Node = N>>(&mut self, dom: &mut D) {
        self.set_open(dom, false);
    }

    fn set_open<D: Dom<Node = N>>(&mut self, dom: &mut D, open: bool) {
        if open {
            dom.add_class(&self.panel, OPEN_CLASS);
        } else {
            dom.remove_class(&self.panel, OPEN_CLASS);
        }
        dom.set_attribute(&self.toggle, "aria-expanded", if open { "true" } else { "false" });

        for (bar, (property, closed, opened)) in self.bars.iter().zip(ICON_BARS) {
            dom.set_style(bar, property, if open { opened } else { closed });
        }

        if open != self.open {
            tracing::debug!(open, "navigation toggled");
        }
        self.open = open;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The toggle button, for click wiring.
    #[must_use]
    pub fn toggle_node(&self) -> &N {
        &self.toggle
    }

    #[must_use]
    pub fn panel_node(&self) -> &N {
        &self.panel
    }
}
