// SPDX-License-Identifier: MPL-2.0
//! In-page anchor navigation.
//!
//! Clicking a `#fragment` link scrolls smoothly to the fragment's element,
//! leaving room for the fixed header plus one spacing unit.

use crate::config::{ScrollSettings, Selectors};
use crate::dom::{Dom, ScrollBehavior};
use crate::domain::ui::Length;

#[derive(Debug, Clone, PartialEq)]
pub enum Message<N> {
    /// An in-page anchor was clicked.
    AnchorClicked(N),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The viewport moved; the navigation panel should close.
    CloseNav,
}

#[derive(Debug, Clone)]
pub struct SmoothScroll<N> {
    anchors: Vec<N>,
    header: Option<N>,
    spacing: Length,
}

impl<N: Clone + PartialEq> SmoothScroll<N> {
    pub fn attach<D: Dom<Node = N>>(dom: &D, selectors: &Selectors, settings: &ScrollSettings) -> Self {
        Self {
            anchors: dom.query_all(&selectors.anchors),
            header: dom.query(&selectors.header),
            spacing: Length::Rem(settings.spacing_rem),
        }
    }

    pub fn update<D: Dom<Node = N>>(&mut self, dom: &mut D, message: Message<N>) -> Event {
        let Message::AnchorClicked(anchor) = message;

        let Some(href) = dom.attribute(&anchor, "href") else {
            return Event::None;
        };
        // A bare "#" names no element.
        if !href.starts_with('#') || href.len() == 1 {
            return Event::None;
        }
        let Some(target) = dom.query(&href) else {
            tracing::debug!(%href, "anchor target not found");
            return Event::None;
        };

        let header_height = self.header.as_ref().map_or(0.0, |header| dom.offset_height(header));
        let top = destination(
            dom.offset_top(&target),
            header_height,
            self.spacing.to_px(dom.root_font_size()),
        );
        tracing::debug!(%href, top, "smooth scrolling");
        dom.scroll_to(top, ScrollBehavior::Smooth);
        Event::CloseNav
    }

    /// Anchors found at boot, for click wiring.
    #[must_use]
    pub fn anchors(&self) -> &[N] {
        &self.anchors
    }
}

/// Scroll offset that puts a target at `target_top` just below the header.
#[must_use]
pub fn destination(target_top: f64, header_height: f64, spacing_px: f64) -> f64 {
    (target_top - header_height - spacing_px).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::memory::fixture::{landing_page, HEADER_HEIGHT};
    use crate::dom::memory::ScrollRequest;
    use crate::test_utils::{assert_abs_diff_eq, PX_EPSILON};

    #[test]
    fn destination_subtracts_header_and_spacing() {
        assert_abs_diff_eq!(destination(720.0, 80.0, 32.0), 608.0, epsilon = PX_EPSILON);
    }

    #[test]
    fn destination_is_clamped_at_zero() {
        assert_abs_diff_eq!(destination(50.0, 80.0, 32.0), 0.0);
    }

    #[test]
    fn click_scrolls_smoothly_below_header() {
        let (mut dom, page) = landing_page();
        let mut scroll = SmoothScroll::attach(&dom, &Selectors::default(), &ScrollSettings::default());

        let event = scroll.update(&mut dom, Message::AnchorClicked(page.nav_links[1]));

        assert_eq!(event, Event::CloseNav);
        assert_eq!(
            dom.scroll_requests(),
            &[ScrollRequest {
                top: 1620.0 - HEADER_HEIGHT - 32.0,
                behavior: ScrollBehavior::Smooth,
            }]
        );
    }

    #[test]
    fn spacing_follows_root_font_size() {
        let (mut dom, page) = landing_page();
        dom.set_root_font_size(20.0);
        let mut scroll = SmoothScroll::attach(&dom, &Selectors::default(), &ScrollSettings::default());

        let _ = scroll.update(&mut dom, Message::AnchorClicked(page.nav_links[0]));
        assert_abs_diff_eq!(dom.scroll_y(), 720.0 - HEADER_HEIGHT - 40.0);
    }

    #[test]
    fn missing_header_counts_as_zero_height() {
        let (mut dom, page) = landing_page();
        let mut selectors = Selectors::default();
        selectors.header = ".no-header".to_string();
        let mut scroll = SmoothScroll::attach(&dom, &selectors, &ScrollSettings::default());

        let _ = scroll.update(&mut dom, Message::AnchorClicked(page.nav_links[2]));
        assert_abs_diff_eq!(dom.scroll_y(), 2320.0 - 32.0);
    }

    #[test]
    fn bare_hash_and_dead_links_do_nothing() {
        let (mut dom, page) = landing_page();
        let mut scroll = SmoothScroll::attach(&dom, &Selectors::default(), &ScrollSettings::default());

        for anchor in [page.brand_link, page.dead_link] {
            assert_eq!(scroll.update(&mut dom, Message::AnchorClicked(anchor)), Event::None);
        }
        assert!(dom.scroll_requests().is_empty());
    }

    #[test]
    fn attach_collects_every_hash_anchor() {
        let (dom, _) = landing_page();
        let scroll = SmoothScroll::attach(&dom, &Selectors::default(), &ScrollSettings::default());
        assert_eq!(scroll.anchors().len(), 5);
    }
}
