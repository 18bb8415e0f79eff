// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` owns the page document and one instance of every component,
//! wired once at boot against the page structure. Hosts feed it messages and
//! run the commands it returns.

mod message;
mod update;

pub use message::Message;

use crate::config::SiteConfig;
use crate::dom::Dom;
use crate::i18n::I18n;
use crate::runtime::Command;
use crate::ui::nav_toggle::NavToggle;
use crate::ui::notifications::{Notifier, Severity};
use crate::ui::parallax::Parallax;
use crate::ui::reveal::RevealOnScroll;
use crate::ui::signup::{SignupForm, SubscriptionClient};
use crate::ui::smooth_scroll::SmoothScroll;
use crate::ui::{page, styles};
use std::fmt;

pub struct App<D: Dom> {
    dom: D,
    config: SiteConfig,
    i18n: I18n,
    client: Box<dyn SubscriptionClient>,
    nav: Option<NavToggle<D::Node>>,
    signup: Option<SignupForm<D::Node>>,
    notifier: Notifier<D::Node>,
    smooth_scroll: SmoothScroll<D::Node>,
    reveal: RevealOnScroll<D::Node>,
    parallax: Option<Parallax<D::Node>>,
}

impl<D: Dom> fmt::Debug for App<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.i18n.current_locale().to_string())
            .field("nav", &self.nav.is_some())
            .field("signup", &self.signup.is_some())
            .field("parallax", &self.parallax.is_some())
            .field("notifications", &self.notifier.len())
            .finish_non_exhaustive()
    }
}

impl<D: Dom> App<D> {
    /// Wires every component against the page.
    ///
    /// Components whose elements are missing are skipped; boot itself never
    /// fails.
    pub fn boot(mut dom: D, config: SiteConfig, i18n: I18n, client: Box<dyn SubscriptionClient>) -> Self {
        let selectors = &config.selectors;

        if styles::inject(&mut dom).is_none() {
            tracing::warn!("could not inject stylesheet");
        }
        page::stamp_year(&mut dom, selectors, page::current_year());

        let nav = NavToggle::attach(&dom, selectors);
        let signup = SignupForm::attach(&dom, selectors);
        let smooth_scroll = SmoothScroll::attach(&dom, selectors, &config.scroll);
        let reveal = RevealOnScroll::attach(&mut dom, selectors, &config.reveal);
        let parallax = Parallax::attach(&dom, selectors, &config.parallax);

        tracing::info!(
            nav = nav.is_some(),
            signup = signup.is_some(),
            anchors = smooth_scroll.anchors().len(),
            reveal_targets = reveal.targets().count(),
            parallax = parallax.is_some(),
            locale = %i18n.current_locale(),
            "page interactivity ready"
        );

        Self {
            notifier: Notifier::new(config.notifications),
            dom,
            config,
            i18n,
            client,
            nav,
            signup,
            smooth_scroll,
            reveal,
            parallax,
        }
    }

    /// Shows a notification with already translated text.
    pub fn notify(&mut self, text: impl Into<String>, severity: Severity) -> Command<Message<D::Node>> {
        self.notifier
            .notify(&mut self.dom, text, severity)
            .map(Message::Notification)
    }

    #[must_use]
    pub fn dom(&self) -> &D {
        &self.dom
    }

    /// Direct page access for hosts that simulate user input.
    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    #[must_use]
    pub fn nav(&self) -> Option<&NavToggle<D::Node>> {
        self.nav.as_ref()
    }

    #[must_use]
    pub fn signup(&self) -> Option<&SignupForm<D::Node>> {
        self.signup.as_ref()
    }

    #[must_use]
    pub fn notifier(&self) -> &Notifier<D::Node> {
        &self.notifier
    }

    #[must_use]
    pub fn smooth_scroll(&self) -> &SmoothScroll<D::Node> {
        &self.smooth_scroll
    }

    #[must_use]
    pub fn reveal(&self) -> &RevealOnScroll<D::Node> {
        &self.reveal
    }

    #[must_use]
    pub fn parallax(&self) -> Option<&Parallax<D::Node>> {
        self.parallax.as_ref()
    }
}
