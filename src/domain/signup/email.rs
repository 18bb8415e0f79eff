// SPDX-License-Identifier: MPL-2.0
//! Validated email address.

use crate::domain::error::ValidationError;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// `local@domain.tld` shape: three runs without whitespace or `@`.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex"));

/// An email address that passed the signup form's shape check.
///
/// The check is deliberately loose: it only rejects input that cannot
/// possibly be an address. Deliverability is the subscription service's job.
///
/// # Example
///
/// ```
/// use pumpey_site::domain::signup::EmailAddress;
///
/// let email = EmailAddress::parse("  ada@example.org ").unwrap();
/// assert_eq!(email.as_str(), "ada@example.org");
///
/// assert!(EmailAddress::parse("   ").is_err());
/// assert!(EmailAddress::parse("ada@example").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Trims surrounding whitespace and validates the remainder.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() || !EMAIL_PATTERN.is_match(trimmed) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part after `@`, safe to log.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.0.rsplit_once('@').map_or("", |(_, domain)| domain)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_minimal_address() {
        assert_eq!(EmailAddress::parse("a@b.c").unwrap().as_str(), "a@b.c");
    }

    #[test]
    fn accepts_common_shapes() {
        for input in [
            "ada@example.org",
            "first.last+tag@sub.domain.co.uk",
            "x@y.z.w",
            "weird!#$%@host.tld",
        ] {
            assert!(EmailAddress::parse(input).is_ok(), "{input} should be accepted");
        }
    }

    #[test]
    fn rejects_empty_and_whitespace_only() {
        for input in ["", " ", "\t\n", "   "] {
            assert_eq!(
                EmailAddress::parse(input),
                Err(ValidationError::InvalidEmail),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_malformed_shapes() {
        for input in [
            "plainaddress",
            "@b.c",
            "a@.c",
            "a@b.",
            "a@b",
            "a@@b.c",
            "a b@c.d",
            "a@b c.d",
            "a@b.c@d.e",
        ] {
            assert!(EmailAddress::parse(input).is_err(), "{input:?} should be rejected");
        }
    }

    #[test]
    fn trims_before_validating() {
        let email = EmailAddress::parse("\t a@b.c \n").unwrap();
        assert_eq!(email.to_string(), "a@b.c");
    }

    #[test]
    fn domain_is_everything_after_at() {
        let email = EmailAddress::parse("first.last@sub.example.org").unwrap();
        assert_eq!(email.domain(), "sub.example.org");
    }
}
