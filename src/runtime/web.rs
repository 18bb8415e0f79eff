// SPDX-License-Identifier: MPL-2.0
//! Browser host.
//!
//! Owns the app behind `Rc<RefCell<_>>` so event listeners and timer
//! callbacks can reach it. The borrow is released before returned commands
//! run, and a message arriving while the app is busy is re-queued as a
//! microtask instead of panicking.
//!
//! Listeners live as long as the page; their closures are leaked with
//! `forget`.

use super::command::{Action, Command};
use crate::app::{App, Message};
use crate::config::{SiteConfig, INLINE_CONFIG_ELEMENT_ID};
use crate::dom::web::WebDom;
use crate::error::{Error, Result};
use crate::i18n::I18n;
use crate::logging;
use crate::ui::signup::SimulatedClient;
use crate::ui::{nav_toggle, parallax, reveal, signup, smooth_scroll};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

type WebMessage = Message<Element>;

impl From<Error> for JsValue {
    fn from(err: Error) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

fn host_error(context: &str, err: &JsValue) -> Error {
    Error::Host(format!("{context}: {err:?}"))
}

#[derive(Clone)]
pub struct WebHost {
    app: Rc<RefCell<App<WebDom>>>,
    window: Window,
}

impl WebHost {
    #[must_use]
    pub fn new(window: Window, app: App<WebDom>) -> Self {
        Self {
            app: Rc::new(RefCell::new(app)),
            window,
        }
    }

    pub fn dispatch(&self, message: WebMessage) {
        let command = match self.app.try_borrow_mut() {
            Ok(mut app) => app.update(message),
            Err(_) => {
                tracing::debug!("app busy, deferring message");
                Command::done(message)
            }
        };
        self.run(command);
    }

    pub fn run(&self, command: Command<WebMessage>) {
        for action in command.into_actions() {
            match action {
                Action::Timeout { after, message } => {
                    let host = self.clone();
                    let callback = Closure::once_into_js(move || host.dispatch(message));
                    let millis = i32::try_from(after.as_millis()).unwrap_or(i32::MAX);
                    if let Err(err) = self
                        .window
                        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis)
                    {
                        tracing::warn!(error = ?err, "setTimeout failed");
                    }
                }
                Action::NextFrame(message) => {
                    let host = self.clone();
                    let callback = Closure::once_into_js(move |_timestamp: f64| host.dispatch(message));
                    if let Err(err) = self.window.request_animation_frame(callback.unchecked_ref()) {
                        tracing::warn!(error = ?err, "requestAnimationFrame failed");
                    }
                }
                Action::Future(future) => {
                    let host = self.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let message = future.await;
                        host.dispatch(message);
                    });
                }
            }
        }
    }

    /// Registers every page listener the booted components need.
    pub fn wire(&self, document: &Document) -> Result<()> {
        let app = self.app.borrow();

        if let Some(nav) = app.nav() {
            let host = self.clone();
            listen(nav.toggle_node(), "click", move |_| {
                host.dispatch(Message::Nav(nav_toggle::Message::ToggleClicked));
            })?;

            let host = self.clone();
            listen(document, "click", move |event| {
                let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                    return;
                };
                host.dispatch(Message::Nav(nav_toggle::Message::DocumentClicked { target }));
            })?;
        }

        if let Some(form) = app.signup() {
            let host = self.clone();
            listen(form.form_node(), "submit", move |event| {
                event.prevent_default();
                host.dispatch(Message::Signup(signup::Message::Submitted));
            })?;
        }

        for anchor in app.smooth_scroll().anchors() {
            let host = self.clone();
            let clicked = anchor.clone();
            listen(anchor, "click", move |event| {
                event.prevent_default();
                host.dispatch(Message::SmoothScroll(smooth_scroll::Message::AnchorClicked(
                    clicked.clone(),
                )));
            })?;
        }

        if app.parallax().is_some() {
            let host = self.clone();
            listen(&self.window, "scroll", move |_| {
                host.dispatch(Message::Parallax(parallax::Message::Scrolled));
            })?;
        }

        let host = self.clone();
        listen(&self.window, "load", move |_| host.dispatch(Message::PageLoaded))?;

        self.observe_reveal_targets(&app)?;
        drop(app);

        // The module may start after `load` already fired.
        if document.ready_state() == "complete" {
            self.dispatch(Message::PageLoaded);
        }
        Ok(())
    }

    fn observe_reveal_targets(&self, app: &App<WebDom>) -> Result<()> {
        let reveal = app.reveal();
        if reveal.targets().next().is_none() {
            return Ok(());
        }

        let host = self.clone();
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let entries = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| reveal::Entry {
                        target: entry.target(),
                        is_intersecting: entry.is_intersecting(),
                    })
                    .collect();
                host.dispatch(Message::Reveal(reveal::Message::Intersections(entries)));
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(reveal.threshold().value()));
        options.set_root_margin(&reveal.root_margin());
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|err| host_error("IntersectionObserver", &err))?;
        callback.forget();

        for target in reveal.targets() {
            observer.observe(target);
        }
        Ok(())
    }
}

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<()> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|err| host_error(event, &err))?;
    closure.forget();
    Ok(())
}

/// Reads the optional inline TOML configuration; defaults when absent or
/// invalid.
fn inline_config(document: &Document) -> SiteConfig {
    let Some(source) = document
        .get_element_by_id(INLINE_CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return SiteConfig::default();
    };
    SiteConfig::from_toml_str(&source).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring invalid inline site config");
        SiteConfig::default()
    })
}

/// Boots the page once the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    logging::init(logging::DEFAULT_FILTER);

    let window = web_sys::window().ok_or_else(|| Error::Host("no global window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| Error::Host("window has no document".into()))?;

    let config = inline_config(&document);
    let i18n = I18n::new(&config);
    let client = SimulatedClient::new(config.signup.simulated_delay());
    let app = App::boot(WebDom::new(window.clone(), document.clone()), config, i18n, Box::new(client));

    WebHost::new(window, app).wire(&document)?;
    Ok(())
}
