// SPDX-License-Identifier: MPL-2.0
//! Hero parallax.
//!
//! Scroll events only request a frame; the hero transform is recomputed at
//! most once per rendered frame, however many scroll events arrive in it.

use crate::config::{ParallaxSettings, Selectors};
use crate::dom::Dom;
use crate::domain::ui::{Length, ParallaxRate};
use crate::runtime::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Scrolled,
    /// The frame requested by a scroll is about to be painted.
    Frame,
}

#[derive(Debug, Clone)]
pub struct Parallax<N> {
    hero: N,
    rate: ParallaxRate,
    ticking: bool,
}

impl<N: Clone + PartialEq> Parallax<N> {
    /// Locates the hero; `None` when the page has none.
    pub fn attach<D: Dom<Node = N>>(dom: &D, selectors: &Selectors, settings: &ParallaxSettings) -> Option<Self> {
        Some(Self {
            hero: dom.query(&selectors.hero)?,
            rate: ParallaxRate::new(settings.rate),
            ticking: false,
        })
    }

    pub fn update<D: Dom<Node = N>>(&mut self, dom: &mut D, message: Message) -> Command<Message> {
        match message {
            Message::Scrolled => {
                if self.ticking {
                    return Command::none();
                }
                self.ticking = true;
                Command::next_frame(Message::Frame)
            }
            Message::Frame => {
                self.ticking = false;
                let offset = self.rate.offset_for(dom.scroll_y());
                // Adding 0.0 turns -0.0 into 0.0, which would print as "-0px".
                let transform = format!("translateY({})", Length::Px(offset + 0.0));
                dom.set_style(&self.hero, "transform", &transform);
                tracing::trace!(offset, "parallax frame");
                Command::none()
            }
        }
    }

    /// Whether a frame has been requested and not yet run.
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.ticking
    }
}
