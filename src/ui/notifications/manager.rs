// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Notifier` inserts toasts and schedules their transitions. Every toast
//! gets its own three timers, all measured from its insertion, so toasts
//! never wait on each other.

use super::notification::{Notification, NotificationId, Phase, Severity};
use super::toast::Toast;
use crate::config::NotificationTimings;
use crate::dom::Dom;
use crate::runtime::Command;

/// Messages for notification state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Move the toast into view.
    SlideIn(NotificationId),
    /// Start the exit transition.
    SlideOut(NotificationId),
    /// Exit transition finished; drop the node.
    Remove(NotificationId),
}

/// Owns every toast currently attached to the page.
#[derive(Debug, Clone)]
pub struct Notifier<N> {
    timings: NotificationTimings,
    next_id: u64,
    toasts: Vec<Toast<N>>,
}

impl<N: Clone + PartialEq> Notifier<N> {
    #[must_use]
    pub fn new(timings: NotificationTimings) -> Self {
        Self {
            timings,
            next_id: 0,
            toasts: Vec::new(),
        }
    }

    /// Shows `text` with the given severity.
    ///
    /// The returned command drives the toast through its lifecycle and must
    /// be run by the host.
    pub fn notify<D: Dom<Node = N>>(
        &mut self,
        dom: &mut D,
        text: impl Into<String>,
        severity: Severity,
    ) -> Command<Message> {
        let id = NotificationId::from_raw(self.next_id);
        self.next_id += 1;

        let notification = Notification::new(id, severity, text);
        let Some(toast) = Toast::render(dom, notification) else {
            tracing::warn!(%id, "notification could not be attached to the page");
            return Command::none();
        };
        tracing::debug!(%id, %severity, "notification shown");
        self.toasts.push(toast);

        Command::batch([
            Command::timeout(self.timings.enter_delay(), Message::SlideIn(id)),
            Command::timeout(self.timings.display(), Message::SlideOut(id)),
            Command::timeout(self.timings.lifetime(), Message::Remove(id)),
        ])
    }

    pub fn update<D: Dom<Node = N>>(&mut self, dom: &mut D, message: Message) {
        match message {
            Message::SlideIn(id) => {
                if let Some(toast) = self.find_mut(id) {
                    // A toast already leaving must not come back.
                    if toast.phase() == Phase::Entering {
                        toast.slide_in(dom);
                        tracing::debug!(%id, "notification slid in");
                    }
                }
            }
            Message::SlideOut(id) => {
                if let Some(toast) = self.find_mut(id) {
                    toast.slide_out(dom);
                    tracing::debug!(%id, "notification sliding out");
                }
            }
            Message::Remove(id) => {
                if let Some(pos) = self.toasts.iter().position(|t| t.notification().id() == id) {
                    self.toasts.remove(pos).detach(dom);
                    tracing::debug!(%id, "notification removed");
                }
            }
        }
    }

    fn find_mut(&mut self, id: NotificationId) -> Option<&mut Toast<N>> {
        self.toasts.iter_mut().find(|t| t.notification().id() == id)
    }

    /// Toasts currently attached, oldest first.
    pub fn toasts(&self) -> impl Iterator<Item = &Toast<N>> {
        self.toasts.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::memory::{MemoryDom, NodeId};
    use crate::runtime::command::Action;
    use crate::ui::notifications::toast::{OFFSCREEN_TRANSFORM, ONSCREEN_TRANSFORM};
    use std::time::Duration;

    fn timers(command: Command<Message>) -> Vec<(Duration, Message)> {
        command
            .into_actions()
            .into_iter()
            .filter_map(|action| match action {
                Action::Timeout { after, message } => Some((after, message)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn notify_schedules_lifecycle_relative_to_insertion() {
        let mut dom = MemoryDom::new();
        let mut notifier: Notifier<NodeId> = Notifier::new(NotificationTimings::default());

        let command = notifier.notify(&mut dom, "hello", Severity::Info);
        let id = notifier.toasts().next().map(|t| t.notification().id()).expect("one toast");

        assert_eq!(
            timers(command),
            vec![
                (Duration::from_millis(100), Message::SlideIn(id)),
                (Duration::from_millis(4000), Message::SlideOut(id)),
                (Duration::from_millis(4300), Message::Remove(id)),
            ]
        );
    }

    #[test]
    fn ids_are_unique_per_notifier() {
        let mut dom = MemoryDom::new();
        let mut notifier = Notifier::new(NotificationTimings::default());
        let _ = notifier.notify(&mut dom, "a", Severity::Info);
        let _ = notifier.notify(&mut dom, "b", Severity::Info);

        let ids: Vec<_> = notifier.toasts().map(|t| t.notification().id()).collect();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn phases_follow_messages() {
        let mut dom = MemoryDom::new();
        let mut notifier = Notifier::new(NotificationTimings::default());
        let _ = notifier.notify(&mut dom, "hi", Severity::Success);
        let (id, node) = notifier
            .toasts()
            .next()
            .map(|t| (t.notification().id(), *t.node()))
            .expect("one toast");

        notifier.update(&mut dom, Message::SlideIn(id));
        assert_eq!(dom.style(&node, "transform").as_deref(), Some(ONSCREEN_TRANSFORM));

        notifier.update(&mut dom, Message::SlideOut(id));
        assert_eq!(dom.style(&node, "transform").as_deref(), Some(OFFSCREEN_TRANSFORM));
        assert_eq!(notifier.toasts().next().map(Toast::phase), Some(Phase::Leaving));

        notifier.update(&mut dom, Message::Remove(id));
        assert!(notifier.is_empty());
        assert!(!dom.is_connected(&node));
    }

    #[test]
    fn late_slide_in_does_not_resurrect_leaving_toast() {
        let mut dom = MemoryDom::new();
        let mut notifier = Notifier::new(NotificationTimings {
            enter_delay_ms: 500,
            display_ms: 200,
            exit_ms: 100,
        });
        let _ = notifier.notify(&mut dom, "hi", Severity::Info);
        let (id, node) = notifier
            .toasts()
            .next()
            .map(|t| (t.notification().id(), *t.node()))
            .expect("one toast");

        notifier.update(&mut dom, Message::SlideOut(id));
        notifier.update(&mut dom, Message::SlideIn(id));
        assert_eq!(dom.style(&node, "transform").as_deref(), Some(OFFSCREEN_TRANSFORM));
    }

    #[test]
    fn removing_one_toast_leaves_others_alone() {
        let mut dom = MemoryDom::new();
        let mut notifier = Notifier::new(NotificationTimings::default());
        let _ = notifier.notify(&mut dom, "first", Severity::Info);
        let _ = notifier.notify(&mut dom, "second", Severity::Error);
        let first = notifier.toasts().next().map(|t| t.notification().id()).expect("toast");

        notifier.update(&mut dom, Message::Remove(first));
        notifier.update(&mut dom, Message::Remove(first));

        assert_eq!(notifier.len(), 1);
        assert_eq!(dom.query_all(".notification").len(), 1);
        assert_eq!(dom.query_all(".notification-error").len(), 1);
    }
}
