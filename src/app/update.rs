// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Routes each message to its component and turns component events into
//! cross-component effects: signup outcomes become notifications and a
//! smooth-scroll jump closes the navigation panel.

use super::{App, Message};
use crate::dom::Dom;
use crate::runtime::Command;
use crate::ui::page;
use crate::ui::signup::Event as SignupEvent;
use crate::ui::smooth_scroll::Event as SmoothScrollEvent;

impl<D: Dom> App<D> {
    pub fn update(&mut self, message: Message<D::Node>) -> Command<Message<D::Node>> {
        match message {
            Message::Nav(msg) => {
                if let Some(nav) = &mut self.nav {
                    nav.update(&mut self.dom, msg);
                }
                Command::none()
            }
            Message::Signup(msg) => self.handle_signup(msg),
            Message::Notification(msg) => {
                self.notifier.update(&mut self.dom, msg);
                Command::none()
            }
            Message::SmoothScroll(msg) => {
                match self.smooth_scroll.update(&mut self.dom, msg) {
                    SmoothScrollEvent::None => {}
                    SmoothScrollEvent::CloseNav => {
                        if let Some(nav) = self.nav.as_mut().filter(|nav| nav.is_open()) {
                            nav.close(&mut self.dom);
                        }
                    }
                }
                Command::none()
            }
            Message::Reveal(msg) => {
                self.reveal.update(&mut self.dom, msg);
                Command::none()
            }
            Message::Parallax(msg) => match &mut self.parallax {
                Some(parallax) => parallax.update(&mut self.dom, msg).map(Message::Parallax),
                None => Command::none(),
            },
            Message::PageLoaded => {
                page::mark_loaded(&mut self.dom);
                Command::none()
            }
        }
    }

    fn handle_signup(&mut self, msg: crate::ui::signup::Message) -> Command<Message<D::Node>> {
        let Some(form) = &mut self.signup else {
            return Command::none();
        };
        let (event, task) = form.update(&mut self.dom, msg, self.client.as_ref(), &self.i18n);
        let task = task.map(Message::Signup);

        match event {
            SignupEvent::None => task,
            SignupEvent::Notify { severity, key } => {
                let text = self.i18n.tr(key);
                Command::batch([task, self.notify(text, severity)])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::dom::memory::fixture::{landing_page, LandingPage};
    use crate::dom::memory::MemoryDom;
    use crate::i18n::I18n;
    use crate::ui::nav_toggle;
    use crate::ui::notifications::Severity;
    use crate::ui::signup::{self, SimulatedClient};
    use crate::ui::smooth_scroll;

    fn app() -> (App<MemoryDom>, LandingPage) {
        let (dom, page) = landing_page();
        let mut config = SiteConfig::default();
        config.language = Some("en-US".to_string());
        let i18n = I18n::new(&config);
        (App::boot(dom, config, i18n, Box::new(SimulatedClient::default())), page)
    }

    #[test]
    fn invalid_signup_shows_translated_error() {
        let (mut app, _) = app();
        let command = app.update(Message::Signup(signup::Message::Submitted));

        assert_eq!(command.len(), 3);
        let toast = app.notifier().toasts().next().expect("one notification");
        assert_eq!(toast.notification().severity(), Severity::Error);
        assert_eq!(toast.notification().text(), "Please enter a valid email address");
    }

    #[test]
    fn smooth_scroll_closes_open_nav() {
        let (mut app, page) = app();
        let _ = app.update(Message::Nav(nav_toggle::Message::ToggleClicked));
        assert!(app.nav().is_some_and(|nav| nav.is_open()));

        let _ = app.update(Message::SmoothScroll(smooth_scroll::Message::AnchorClicked(page.nav_links[0])));

        assert!(app.nav().is_some_and(|nav| !nav.is_open()));
        assert_eq!(app.dom().attribute(&page.nav_toggle, "aria-expanded").as_deref(), Some("false"));
    }

    #[test]
    fn dead_anchor_leaves_nav_open() {
        let (mut app, page) = app();
        let _ = app.update(Message::Nav(nav_toggle::Message::ToggleClicked));
        let _ = app.update(Message::SmoothScroll(smooth_scroll::Message::AnchorClicked(page.dead_link)));

        assert!(app.nav().is_some_and(|nav| nav.is_open()));
        assert!(app.dom().scroll_requests().is_empty());
    }

    #[test]
    fn page_loaded_marks_body() {
        let (mut app, _) = app();
        let _ = app.update(Message::PageLoaded);
        let body = app.dom().body().expect("body");
        assert!(app.dom().has_class(&body, page::LOADED_CLASS));
    }
}
