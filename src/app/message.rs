// SPDX-License-Identifier: MPL-2.0
//! Top-level messages for the application.

use crate::ui::nav_toggle;
use crate::ui::notifications;
use crate::ui::parallax;
use crate::ui::reveal;
use crate::ui::signup;
use crate::ui::smooth_scroll;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
///
/// `N` is the host's node handle type.
#[derive(Debug, Clone, PartialEq)]
pub enum Message<N> {
    Nav(nav_toggle::Message<N>),
    Signup(signup::Message),
    Notification(notifications::NotificationMessage),
    SmoothScroll(smooth_scroll::Message<N>),
    Reveal(reveal::Message<N>),
    Parallax(parallax::Message),
    /// The window `load` event fired.
    PageLoaded,
}
