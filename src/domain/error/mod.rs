// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! Both errors end up as error notifications; neither is ever fatal.

use thiserror::Error;

/// Rejection of user input before anything is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid email")]
    InvalidEmail,
}

/// Failure reported by a subscription client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The request never reached the service or got no answer.
    #[error("network error: {0}")]
    Network(String),
    /// The service answered and refused the address.
    #[error("subscription rejected: {0}")]
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_message_is_fixed() {
        assert_eq!(ValidationError::InvalidEmail.to_string(), "invalid email");
    }

    #[test]
    fn submit_error_carries_reason() {
        let err = SubmitError::Rejected("already subscribed".into());
        assert_eq!(err.to_string(), "subscription rejected: already subscribed");
    }
}
