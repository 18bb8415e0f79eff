// SPDX-License-Identifier: MPL-2.0
//! Newsletter signup domain types.

mod email;

pub use email::EmailAddress;
