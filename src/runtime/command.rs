// SPDX-License-Identifier: MPL-2.0
//! Deferred work returned from `update` functions.
//!
//! Components never touch timers or executors themselves. They describe what
//! should happen later as a [`Command`], and the host that owns the app runs
//! it: browser timers and `requestAnimationFrame` on the web, a virtual clock
//! in the headless host.

use futures_util::future::{self, FutureExt, LocalBoxFuture};
use std::fmt;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

/// A single unit of deferred work.
pub enum Action<M> {
    /// Deliver `message` once `after` has elapsed.
    Timeout { after: Duration, message: M },
    /// Deliver `message` right before the next frame is painted.
    NextFrame(M),
    /// Drive the future to completion and deliver its output.
    Future(LocalBoxFuture<'static, M>),
}

impl<M> fmt::Debug for Action<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Timeout { after, .. } => f.debug_struct("Timeout").field("after", after).finish(),
            Action::NextFrame(_) => f.write_str("NextFrame"),
            Action::Future(_) => f.write_str("Future"),
        }
    }
}

/// A batch of actions producing messages of type `M`.
#[must_use = "commands do nothing unless a host runs them"]
pub struct Command<M> {
    actions: Vec<Action<M>>,
}

impl<M: 'static> Command<M> {
    /// A command that does nothing.
    pub fn none() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn timeout(after: Duration, message: M) -> Self {
        Self::single(Action::Timeout { after, message })
    }

    pub fn next_frame(message: M) -> Self {
        Self::single(Action::NextFrame(message))
    }

    /// Runs `future` and maps its output into a message.
    pub fn perform<T: 'static>(
        future: impl Future<Output = T> + 'static,
        f: impl FnOnce(T) -> M + 'static,
    ) -> Self {
        Self::single(Action::Future(future.map(f).boxed_local()))
    }

    /// Delivers `message` as soon as the host gets to it.
    pub fn done(message: M) -> Self {
        Self::single(Action::Future(future::ready(message).boxed_local()))
    }

    pub fn batch(commands: impl IntoIterator<Item = Command<M>>) -> Self {
        Self {
            actions: commands.into_iter().flat_map(|c| c.actions).collect(),
        }
    }

    /// Transforms every message this command will produce.
    pub fn map<N: 'static>(self, f: impl Fn(M) -> N + 'static) -> Command<N> {
        let f = Rc::new(f);
        let actions = self
            .actions
            .into_iter()
            .map(|action| match action {
                Action::Timeout { after, message } => Action::Timeout {
                    after,
                    message: (*f)(message),
                },
                Action::NextFrame(message) => Action::NextFrame((*f)(message)),
                Action::Future(fut) => {
                    let f = Rc::clone(&f);
                    Action::Future(fut.map(move |message| (*f)(message)).boxed_local())
                }
            })
            .collect();
        Command { actions }
    }

    fn single(action: Action<M>) -> Self {
        Self {
            actions: vec![action],
        }
    }
}

impl<M> Command<M> {
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.actions.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn actions(&self) -> &[Action<M>] {
        &self.actions
    }

    pub fn into_actions(self) -> Vec<Action<M>> {
        self.actions
    }
}

impl<M: 'static> Default for Command<M> {
    fn default() -> Self {
        Self::none()
    }
}

impl<M> fmt::Debug for Command<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.actions).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_has_no_actions() {
        let command: Command<u8> = Command::none();
        assert!(command.is_none());
        assert_eq!(command.len(), 0);
    }

    #[test]
    fn batch_flattens_in_order() {
        let command = Command::batch([
            Command::timeout(Duration::from_millis(100), 1u8),
            Command::none(),
            Command::batch([Command::next_frame(2u8), Command::timeout(Duration::from_millis(5), 3u8)]),
        ]);

        let delivered: Vec<Option<u8>> = command
            .into_actions()
            .into_iter()
            .map(|action| match action {
                Action::Timeout { message, .. } | Action::NextFrame(message) => Some(message),
                Action::Future(_) => None,
            })
            .collect();
        assert_eq!(delivered, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn map_rewrites_timer_messages_eagerly() {
        let command = Command::timeout(Duration::from_millis(4000), 21u32).map(|n| n * 2);
        match command.into_actions().as_slice() {
            [Action::Timeout { after, message }] => {
                assert_eq!(*after, Duration::from_millis(4000));
                assert_eq!(*message, 42);
            }
            other => panic!("unexpected actions: {other:?}"),
        }
    }

    #[tokio::test]
    async fn map_applies_to_future_output() {
        let command = Command::perform(async { "a@b.c".len() }, |len| len as u32).map(|n| n + 1);
        let mut actions = command.into_actions();
        let Some(Action::Future(fut)) = actions.pop() else {
            panic!("expected a future action");
        };
        assert_eq!(fut.await, 6);
    }

    #[tokio::test]
    async fn done_resolves_immediately() {
        let mut actions = Command::done("ready").into_actions();
        let Some(Action::Future(fut)) = actions.pop() else {
            panic!("expected a future action");
        };
        assert_eq!(fut.now_or_never(), Some("ready"));
    }

    #[test]
    fn debug_lists_action_kinds() {
        let command = Command::batch([Command::next_frame(()), Command::done(())]);
        assert_eq!(format!("{command:?}"), "[NextFrame, Future]");
    }
}
