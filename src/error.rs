// SPDX-License-Identifier: MPL-2.0
//! Crate-level error type.
//!
//! User-facing failures (invalid email, failed submission) never surface as
//! [`Error`]; they are reported through notifications. This type covers the
//! plumbing around the page: configuration, translations and host bootstrap.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("I18n Error: {0}")]
    I18n(String),
    /// A browser API the host depends on is unavailable or threw.
    #[error("Host Error: {0}")]
    Host(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
