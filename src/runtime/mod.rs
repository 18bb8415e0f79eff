// SPDX-License-Identifier: MPL-2.0
//! Hosts that own an [`App`](crate::app::App) and execute its commands.
//!
//! - [`headless`]: deterministic virtual clock over a `MemoryDom`, used by
//!   tests and benchmarks
//! - `web` (wasm32 only): browser timers, `requestAnimationFrame` and
//!   `spawn_local`

pub mod command;
pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use command::{Action, Command};

/// Frame interval the headless host assumes (60 Hz, rounded down).
pub const FRAME_INTERVAL_MS: u64 = 16;
