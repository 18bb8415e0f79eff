// SPDX-License-Identifier: MPL-2.0
//! Subscription backends.

use crate::domain::error::SubmitError;
use crate::domain::signup::EmailAddress;
use crate::runtime::Command;
use std::time::Duration;

/// Outcome of one subscription attempt.
pub type SubmitResult = Result<(), SubmitError>;

/// Something that can register an address for the newsletter.
///
/// The returned command resolves exactly once. The form stays disabled until
/// it does, so a client that never resolves leaves the button disabled.
pub trait SubscriptionClient {
    fn subscribe(&self, email: &EmailAddress) -> Command<SubmitResult>;
}

/// Accepts every address after a fixed delay, without any network traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedClient {
    delay: Duration,
}

impl SimulatedClient {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedClient {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::config::DEFAULT_SIMULATED_SUBMIT_DELAY_MS))
    }
}

impl SubscriptionClient for SimulatedClient {
    fn subscribe(&self, email: &EmailAddress) -> Command<SubmitResult> {
        tracing::debug!(delay_ms = self.delay.as_millis() as u64, domain = email.domain(), "simulating subscription");
        Command::timeout(self.delay, Ok(()))
    }
}
