// SPDX-License-Identifier: MPL-2.0
//! Domain layer - page-independent value objects and rules.
//!
//! Nothing in here touches the document. Types are validated on construction
//! so components never re-check them.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`ValidationError`](error::ValidationError),
//!   [`SubmitError`](error::SubmitError))
//! - [`signup`]: Newsletter signup types ([`EmailAddress`](signup::EmailAddress))
//! - [`ui`]: UI value objects ([`Length`](ui::newtypes::Length),
//!   [`Threshold`](ui::newtypes::Threshold), [`ParallaxRate`](ui::newtypes::ParallaxRate))

pub mod error;
pub mod signup;
pub mod ui;
