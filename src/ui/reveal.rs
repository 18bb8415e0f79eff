// SPDX-License-Identifier: MPL-2.0
//! Scroll-triggered reveal animation.
//!
//! Matching elements start transparent and shifted down. The first time one
//! intersects the viewport it gets [`REVEALED_CLASS`], whose stylesheet rule
//! wins over the inline hidden state. The class is never removed.

use crate::config::{RevealSettings, Selectors};
use crate::dom::Dom;
use crate::domain::ui::{Length, Threshold};

/// Class applied once an element has been revealed.
pub const REVEALED_CLASS: &str = "animate-in";

/// One observation reported by the intersection watcher.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<N> {
    pub target: N,
    pub is_intersecting: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message<N> {
    Intersections(Vec<Entry<N>>),
}

#[derive(Debug, Clone)]
struct Observed<N> {
    node: N,
    revealed: bool,
}

#[derive(Debug, Clone)]
pub struct RevealOnScroll<N> {
    targets: Vec<Observed<N>>,
    threshold: Threshold,
    bottom_margin_px: f64,
}

impl<N: Clone + PartialEq> RevealOnScroll<N> {
    /// Puts every matching element into the hidden state.
    pub fn attach<D: Dom<Node = N>>(dom: &mut D, selectors: &Selectors, settings: &RevealSettings) -> Self {
        let offset = Length::Rem(settings.offset_rem);
        let transition = format!(
            "opacity {secs}s ease, transform {secs}s ease",
            secs = settings.transition_secs
        );

        let targets: Vec<Observed<N>> = dom
            .query_all(&selectors.reveal.join(", "))
            .into_iter()
            .map(|node| {
                dom.set_style(&node, "opacity", "0");
                dom.set_style(&node, "transform", &format!("translateY({offset})"));
                dom.set_style(&node, "transition", &transition);
                Observed { node, revealed: false }
            })
            .collect();
        tracing::debug!(count = targets.len(), "reveal targets hidden");

        Self {
            targets,
            threshold: Threshold::new(settings.threshold),
            bottom_margin_px: settings.bottom_margin_px,
        }
    }

    pub fn update<D: Dom<Node = N>>(&mut self, dom: &mut D, message: Message<N>) {
        let Message::Intersections(entries) = message;
        for entry in entries.into_iter().filter(|entry| entry.is_intersecting) {
            let Some(observed) = self.targets.iter_mut().find(|t| t.node == entry.target) else {
                continue;
            };
            if !observed.revealed {
                dom.add_class(&observed.node, REVEALED_CLASS);
                observed.revealed = true;
                tracing::debug!("element revealed");
            }
        }
    }

    /// Computes what a browser observer would report for the current scroll
    /// position, for hosts without a native observer.
    #[must_use]
    pub fn observe_viewport<D: Dom<Node = N>>(&self, dom: &D, viewport_height: f64) -> Vec<Entry<N>> {
        let scroll_y = dom.scroll_y();
        self.targets
            .iter()
            .map(|observed| {
                let ratio = visible_ratio(
                    dom.offset_top(&observed.node),
                    dom.offset_height(&observed.node),
                    scroll_y,
                    viewport_height,
                    self.bottom_margin_px,
                );
                Entry {
                    target: observed.node.clone(),
                    is_intersecting: self.threshold.is_met_by(ratio),
                }
            })
            .collect()
    }

    /// Observed elements, in document order.
    pub fn targets(&self) -> impl Iterator<Item = &N> {
        self.targets.iter().map(|t| &t.node)
    }

    #[must_use]
    pub fn is_revealed(&self, node: &N) -> bool {
        self.targets.iter().any(|t| t.node == *node && t.revealed)
    }

    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Observer root margin in CSS shorthand, e.g. `0px 0px -50px 0px`.
    #[must_use]
    pub fn root_margin(&self) -> String {
        format!("0px 0px {}px 0px", -self.bottom_margin_px)
    }
}

/// Fraction of an element box inside the viewport, after pulling the
/// viewport's bottom edge up by `bottom_margin_px`.
///
/// An empty box counts as fully visible while it sits inside the viewport.
#[must_use]
pub fn visible_ratio(top: f64, height: f64, scroll_y: f64, viewport_height: f64, bottom_margin_px: f64) -> f64 {
    let view_top = scroll_y;
    let view_bottom = scroll_y + (viewport_height - bottom_margin_px).max(0.0);
    let bottom = top + height.max(0.0);

    if height <= 0.0 {
        return if top >= view_top && top <= view_bottom { 1.0 } else { 0.0 };
    }
    let overlap = bottom.min(view_bottom) - top.max(view_top);
    (overlap / height).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::memory::fixture::landing_page;
    use crate::dom::memory::MemoryDom;
    use crate::test_utils::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn visible_ratio_applies_bottom_margin() {
        // Viewport 0..800, effective bottom edge at 750.
        assert_abs_diff_eq!(visible_ratio(700.0, 100.0, 0.0, 800.0, 50.0), 0.5);
        assert_abs_diff_eq!(visible_ratio(760.0, 100.0, 0.0, 800.0, 50.0), 0.0);
        assert_abs_diff_eq!(visible_ratio(100.0, 100.0, 0.0, 800.0, 50.0), 1.0);
    }

    #[test]
    fn visible_ratio_accounts_for_scroll() {
        assert_relative_eq!(visible_ratio(1000.0, 200.0, 400.0, 800.0, 50.0), 0.75);
        assert_abs_diff_eq!(visible_ratio(0.0, 100.0, 500.0, 800.0, 50.0), 0.0);
    }

    #[test]
    fn visible_ratio_of_empty_box() {
        assert_abs_diff_eq!(visible_ratio(10.0, 0.0, 0.0, 800.0, 50.0), 1.0);
        assert_abs_diff_eq!(visible_ratio(900.0, 0.0, 0.0, 800.0, 50.0), 0.0);
    }

    #[test]
    fn attach_hides_every_target() {
        let (mut dom, page) = landing_page();
        let reveal = RevealOnScroll::attach(&mut dom, &Selectors::default(), &RevealSettings::default());

        assert_eq!(reveal.targets().copied().collect::<Vec<_>>(), page.reveal_targets());
        for node in page.reveal_targets() {
            assert_eq!(dom.style(&node, "opacity").as_deref(), Some("0"));
            assert_eq!(dom.style(&node, "transform").as_deref(), Some("translateY(2rem)"));
            assert_eq!(
                dom.style(&node, "transition").as_deref(),
                Some("opacity 0.6s ease, transform 0.6s ease")
            );
        }
    }

    #[test]
    fn intersecting_entry_reveals_once() {
        let (mut dom, page) = landing_page();
        let mut reveal = RevealOnScroll::attach(&mut dom, &Selectors::default(), &RevealSettings::default());
        let card = page.feature_cards[0];

        let entry = |is_intersecting| Entry {
            target: card,
            is_intersecting,
        };
        reveal.update(&mut dom, Message::Intersections(vec![entry(true)]));
        reveal.update(&mut dom, Message::Intersections(vec![entry(false)]));
        reveal.update(&mut dom, Message::Intersections(vec![entry(true)]));

        assert!(reveal.is_revealed(&card));
        assert!(dom.has_class(&card, REVEALED_CLASS));
        assert_eq!(dom.elements_with_class(REVEALED_CLASS), vec![card]);
    }

    #[test]
    fn non_intersecting_and_unknown_entries_are_ignored() {
        let (mut dom, page) = landing_page();
        let mut reveal = RevealOnScroll::attach(&mut dom, &Selectors::default(), &RevealSettings::default());

        reveal.update(
            &mut dom,
            Message::Intersections(vec![
                Entry {
                    target: page.roadmap_items[0],
                    is_intersecting: false,
                },
                Entry {
                    target: page.hero,
                    is_intersecting: true,
                },
            ]),
        );
        assert!(dom.elements_with_class(REVEALED_CLASS).is_empty());
    }

    #[test]
    fn observe_viewport_uses_threshold_and_margin() {
        let (mut dom, page) = landing_page();
        let reveal = RevealOnScroll::attach(&mut dom, &Selectors::default(), &RevealSettings::default());

        // First card spans 800..1020; at scroll 100 the effective bottom is 850,
        // so 50 of 220 px are visible (~0.23).
        dom.set_scroll_y(100.0);
        let entries = reveal.observe_viewport(&dom, MemoryDom::DEFAULT_VIEWPORT_HEIGHT);
        let intersecting: Vec<_> = entries.iter().filter(|e| e.is_intersecting).map(|e| e.target).collect();
        assert_eq!(intersecting, vec![page.feature_cards[0]]);

        // At scroll 60 only 10 px show, below the 0.1 threshold.
        dom.set_scroll_y(60.0);
        let entries = reveal.observe_viewport(&dom, MemoryDom::DEFAULT_VIEWPORT_HEIGHT);
        assert!(entries.iter().all(|e| !e.is_intersecting));
    }

    #[test]
    fn root_margin_uses_css_shorthand() {
        let mut dom = MemoryDom::new();
        let reveal: RevealOnScroll<_> =
            RevealOnScroll::attach(&mut dom, &Selectors::default(), &RevealSettings::default());
        assert_eq!(reveal.root_margin(), "0px 0px -50px 0px");
        assert_abs_diff_eq!(reveal.threshold().value(), 0.1);
    }
}
