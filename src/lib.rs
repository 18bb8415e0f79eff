// SPDX-License-Identifier: MPL-2.0
//! `pumpey_site` adds the interactivity of the PUMPEY marketing site: a
//! mobile navigation toggle, a newsletter signup form with toast
//! notifications, smooth anchor scrolling, reveal-on-scroll animations and a
//! hero parallax.
//!
//! The crate compiles to WebAssembly for the browser. Every component is
//! written against the [`dom::Dom`] trait, so the same logic also runs
//! natively against [`dom::memory::MemoryDom`] under the deterministic
//! [`runtime::headless::HeadlessHost`].

#![doc(html_root_url = "https://docs.rs/pumpey_site/0.1.0")]

pub mod app;
pub mod config;
pub mod dom;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod runtime;
pub mod ui;

#[cfg(test)]
mod test_utils;
