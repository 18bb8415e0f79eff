// SPDX-License-Identifier: MPL-2.0
//! Newsletter signup form.
//!
//! Submission is intercepted, the address validated, and the subscription
//! handed to a [`SubscriptionClient`]. While it runs, the submit button is
//! disabled and shows a spinner. Outcomes are reported as [`Event::Notify`]
//! for the application to turn into notifications.

pub mod client;

pub use client::{SimulatedClient, SubmitResult, SubscriptionClient};

use crate::config::Selectors;
use crate::dom::Dom;
use crate::domain::signup::EmailAddress;
use crate::i18n::{I18n, KEY_INVALID_EMAIL, KEY_SIGNUP_FAILED, KEY_SIGNUP_SUCCESS, KEY_SUBMITTING};
use crate::runtime::Command;
use crate::ui::notifications::Severity;

/// Markup of the spinner shown in the submit button; the label follows it.
pub const SPINNER_SVG: &str = concat!(
    r#"<svg class="animate-spin" width="16" height="16" viewBox="0 0 16 16" fill="none">"#,
    r#"<circle cx="8" cy="8" r="7" stroke="currentColor" stroke-width="2" "#,
    r#"stroke-dasharray="44" stroke-dashoffset="44" stroke-linecap="round"/></svg>"#,
);

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The form's submit event fired.
    Submitted,
    /// The subscription client finished.
    Completed(SubmitResult),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// Show the translated `key` with `severity`.
    Notify { severity: Severity, key: &'static str },
}

/// Submit control state saved while a submission is in flight.
#[derive(Debug, Clone)]
struct Pending<N> {
    button: Option<N>,
    label: String,
}

#[derive(Debug, Clone)]
pub struct SignupForm<N> {
    form: N,
    email: Option<N>,
    submit_selector: String,
    pending: Option<Pending<N>>,
}

impl<N: Clone + PartialEq> SignupForm<N> {
    /// Locates the form; `None` when the page has none.
    ///
    /// A missing email field is tolerated: every submission is then rejected
    /// as invalid.
    pub fn attach<D: Dom<Node = N>>(dom: &D, selectors: &Selectors) -> Option<Self> {
        let form = dom.query(&selectors.form)?;
        Some(Self {
            email: dom.query(&selectors.email),
            form,
            submit_selector: selectors.submit.clone(),
            pending: None,
        })
    }

    pub fn update<D: Dom<Node = N>>(
        &mut self,
        dom: &mut D,
        message: Message,
        client: &dyn SubscriptionClient,
        i18n: &I18n,
    ) -> (Event, Command<Message>) {
        match message {
            Message::Submitted => self.submit(dom, client, i18n),
            Message::Completed(result) => (self.complete(dom, result), Command::none()),
        }
    }

    fn submit<D: Dom<Node = N>>(
        &mut self,
        dom: &mut D,
        client: &dyn SubscriptionClient,
        i18n: &I18n,
    ) -> (Event, Command<Message>) {
        if self.pending.is_some() {
            tracing::debug!("submission already in flight, ignoring submit");
            return (Event::None, Command::none());
        }

        let input = self.email.as_ref().map(|node| dom.value(node)).unwrap_or_default();
        let email = match EmailAddress::parse(&input) {
            Ok(email) => email,
            Err(err) => {
                tracing::debug!(error = %err, "signup rejected");
                return (
                    Event::Notify {
                        severity: Severity::Error,
                        key: KEY_INVALID_EMAIL,
                    },
                    Command::none(),
                );
            }
        };

        let button = dom.query_within(&self.form, &self.submit_selector).into_iter().next();
        let label = match &button {
            Some(button) => {
                let label = dom.inner_html(button);
                let loading = format!("{SPINNER_SVG}<span>{}</span>", i18n.tr(KEY_SUBMITTING));
                dom.set_inner_html(button, &loading);
                dom.set_disabled(button, true);
                label
            }
            None => {
                tracing::warn!(selector = %self.submit_selector, "signup form has no submit button");
                String::new()
            }
        };
        self.pending = Some(Pending { button, label });

        tracing::info!(domain = email.domain(), "signup submitted");
        (Event::None, client.subscribe(&email).map(Message::Completed))
    }

    fn complete<D: Dom<Node = N>>(&mut self, dom: &mut D, result: SubmitResult) -> Event {
        let Some(pending) = self.pending.take() else {
            return Event::None;
        };
        if let Some(button) = &pending.button {
            dom.set_inner_html(button, &pending.label);
            dom.set_disabled(button, false);
        }

        match result {
            Ok(()) => {
                if let Some(email) = &self.email {
                    dom.set_value(email, "");
                }
                tracing::info!("signup succeeded");
                Event::Notify {
                    severity: Severity::Success,
                    key: KEY_SIGNUP_SUCCESS,
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "signup failed");
                Event::Notify {
                    severity: Severity::Error,
                    key: KEY_SIGNUP_FAILED,
                }
            }
        }
    }

    /// Whether a submission is waiting on the client.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn form_node(&self) -> &N {
        &self.form
    }
}
