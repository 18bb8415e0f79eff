// SPDX-License-Identifier: MPL-2.0
//! Deterministic host over an in-memory page.
//!
//! Time only moves when [`HeadlessHost::advance`] is called. Timers fire in
//! (due time, scheduling order). Frame callbacks run at 16 ms boundaries,
//! or immediately through [`HeadlessHost::render_frame`]. Futures are
//! polled with a no-op waker after every step, so anything that is not ready
//! without outside help stays pending.
//!
//! User input is emulated the way a browser dispatches it: a click runs the
//! target's own listeners first and then bubbles to the document, and every
//! scroll is followed by an intersection check of the reveal targets.

use super::command::{Action, Command};
use super::FRAME_INTERVAL_MS;
use crate::app::{App, Message};
use crate::config::SiteConfig;
use crate::dom::memory::{MemoryDom, NodeId};
use crate::dom::Dom;
use crate::i18n::I18n;
use crate::ui::signup::SubscriptionClient;
use crate::ui::{nav_toggle, parallax, reveal, signup, smooth_scroll};
use futures_util::future::LocalBoxFuture;
use futures_util::task::noop_waker_ref;
use futures_util::FutureExt;
use std::collections::BTreeMap;
use std::task::{Context, Poll};
use std::time::Duration;

type HostMessage = Message<NodeId>;

pub struct HeadlessHost {
    app: App<MemoryDom>,
    now: Duration,
    next_seq: u64,
    timers: BTreeMap<(Duration, u64), HostMessage>,
    frame_queue: Vec<HostMessage>,
    futures: Vec<LocalBoxFuture<'static, HostMessage>>,
    frames_rendered: u64,
}

impl std::fmt::Debug for HeadlessHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeadlessHost")
            .field("now", &self.now)
            .field("timers", &self.timers.len())
            .field("frame_queue", &self.frame_queue.len())
            .field("futures", &self.futures.len())
            .finish()
    }
}

impl HeadlessHost {
    /// Boots an app on `dom` and reports the initial intersections, as a
    /// browser observer does right after `observe`.
    pub fn boot(dom: MemoryDom, config: SiteConfig, i18n: I18n, client: Box<dyn SubscriptionClient>) -> Self {
        let mut host = Self {
            app: App::boot(dom, config, i18n, client),
            now: Duration::ZERO,
            next_seq: 0,
            timers: BTreeMap::new(),
            frame_queue: Vec::new(),
            futures: Vec::new(),
            frames_rendered: 0,
        };
        host.observe_intersections();
        host
    }

    // ---------------------------------------------------------------------
    // Command execution
    // ---------------------------------------------------------------------

    /// Processes `message` and runs whatever it schedules.
    pub fn dispatch(&mut self, message: HostMessage) {
        let command = self.app.update(message);
        self.run(command);
    }

    /// Schedules every action of `command`, then polls futures.
    pub fn run(&mut self, command: Command<HostMessage>) {
        self.schedule(command);
        self.poll_futures();
    }

    fn schedule(&mut self, command: Command<HostMessage>) {
        for action in command.into_actions() {
            match action {
                Action::Timeout { after, message } => {
                    self.timers.insert((self.now + after, self.next_seq), message);
                    self.next_seq += 1;
                }
                Action::NextFrame(message) => self.frame_queue.push(message),
                Action::Future(future) => self.futures.push(future),
            }
        }
    }

    fn poll_futures(&mut self) {
        loop {
            let mut cx = Context::from_waker(noop_waker_ref());
            let mut ready = Vec::new();
            self.futures.retain_mut(|future| match future.poll_unpin(&mut cx) {
                Poll::Ready(message) => {
                    ready.push(message);
                    false
                }
                Poll::Pending => true,
            });
            if ready.is_empty() {
                return;
            }
            for message in ready {
                let command = self.app.update(message);
                self.schedule(command);
            }
        }
    }

    /// Moves the clock forward by `duration`, firing timers and frames due
    /// on the way.
    pub fn advance(&mut self, duration: Duration) {
        let target = self.now + duration;
        loop {
            let next_timer = self.timers.keys().next().map(|(due, _)| *due);
            let next_frame = (!self.frame_queue.is_empty()).then(|| self.next_frame_boundary());

            let (due, is_frame) = match (next_timer, next_frame) {
                (Some(timer), Some(frame)) if frame < timer => (frame, true),
                (Some(timer), _) => (timer, false),
                (None, Some(frame)) => (frame, true),
                (None, None) => break,
            };
            if due > target {
                break;
            }

            self.now = due;
            if is_frame {
                self.render_frame();
            } else if let Some((_, message)) = self.timers.pop_first() {
                self.dispatch(message);
            }
        }
        self.now = target;
    }

    /// Runs the frame callbacks queued so far. Callbacks queued while the
    /// frame runs wait for the next one.
    pub fn render_frame(&mut self) {
        let queued = std::mem::take(&mut self.frame_queue);
        self.frames_rendered += 1;
        for message in queued {
            self.dispatch(message);
        }
    }

    fn next_frame_boundary(&self) -> Duration {
        let now_ms = self.now.as_millis() as u64;
        Duration::from_millis((now_ms / FRAME_INTERVAL_MS + 1) * FRAME_INTERVAL_MS)
    }

    // ---------------------------------------------------------------------
    // User input
    // ---------------------------------------------------------------------

    /// Clicks `target`; returns whether a listener prevented the default
    /// action.
    pub fn click(&mut self, target: NodeId) -> bool {
        let scroll_before = self.app.dom().scroll_y();
        let mut default_prevented = false;

        let on_toggle = self
            .app
            .nav()
            .is_some_and(|nav| self.app.dom().contains(nav.toggle_node(), &target));
        if on_toggle {
            self.dispatch(Message::Nav(nav_toggle::Message::ToggleClicked));
        }

        let anchor = self
            .app
            .smooth_scroll()
            .anchors()
            .iter()
            .find(|anchor| self.app.dom().contains(anchor, &target))
            .copied();
        if let Some(anchor) = anchor {
            default_prevented = true;
            self.dispatch(Message::SmoothScroll(smooth_scroll::Message::AnchorClicked(anchor)));
        }

        if self.app.nav().is_some() {
            self.dispatch(Message::Nav(nav_toggle::Message::DocumentClicked { target }));
        }

        if self.app.dom().scroll_y() != scroll_before {
            self.scrolled();
        }
        default_prevented
    }

    /// Submits the signup form; returns whether submission was intercepted.
    pub fn submit(&mut self) -> bool {
        if self.app.signup().is_none() {
            return false;
        }
        self.dispatch(Message::Signup(signup::Message::Submitted));
        true
    }

    /// Replaces the email field's value, as typing would.
    pub fn type_email(&mut self, text: &str) {
        let selector = self.app.config().selectors.email.clone();
        let dom = self.app.dom_mut();
        if let Some(input) = dom.query(&selector) {
            dom.set_value(&input, text);
        }
    }

    /// Scrolls the viewport to `y` and fires the scroll event.
    pub fn scroll_to(&mut self, y: f64) {
        self.app.dom_mut().set_scroll_y(y);
        self.scrolled();
    }

    /// Fires the window `load` event.
    pub fn load(&mut self) {
        self.dispatch(Message::PageLoaded);
    }

    fn scrolled(&mut self) {
        if self.app.parallax().is_some() {
            self.dispatch(Message::Parallax(parallax::Message::Scrolled));
        }
        self.observe_intersections();
    }

    fn observe_intersections(&mut self) {
        let dom = self.app.dom();
        let entries = self.app.reveal().observe_viewport(dom, dom.viewport_height());
        if entries.iter().any(|entry| entry.is_intersecting) {
            self.dispatch(Message::Reveal(reveal::Message::Intersections(entries)));
        }
    }

    // ---------------------------------------------------------------------
    // Inspection
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn app(&self) -> &App<MemoryDom> {
        &self.app
    }

    /// Handy for app calls that have no user-input counterpart, e.g.
    /// [`App::notify`]; run the returned command with [`HeadlessHost::run`].
    pub fn app_mut(&mut self) -> &mut App<MemoryDom> {
        &mut self.app
    }

    #[must_use]
    pub fn dom(&self) -> &MemoryDom {
        self.app.dom()
    }

    pub fn dom_mut(&mut self) -> &mut MemoryDom {
        self.app.dom_mut()
    }

    /// Virtual time since boot.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    #[must_use]
    pub fn pending_frames(&self) -> usize {
        self.frame_queue.len()
    }

    #[must_use]
    pub fn pending_futures(&self) -> usize {
        self.futures.len()
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}
