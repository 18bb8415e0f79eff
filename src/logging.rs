// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.
//!
//! Natively events go to stderr. In the browser they go to the developer
//! console, without timestamps (`SystemTime` is unavailable on
//! `wasm32-unknown-unknown`) and without ANSI colors.

use tracing_subscriber::EnvFilter;

/// Filter used when the caller passes nothing usable.
pub const DEFAULT_FILTER: &str = "pumpey_site=info";

/// Installs the global subscriber.
///
/// Returns `false` when a subscriber was already installed, which makes the
/// call safe to repeat from tests and from the wasm entry point.
pub fn init(directives: &str) -> bool {
    let (filter, rejected) = match EnvFilter::try_new(directives) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(DEFAULT_FILTER), Some(err)),
    };

    let installed = install(filter);
    if let Some(err) = rejected {
        tracing::warn!(%directives, error = %err, "invalid log filter, using default");
    }
    installed
}

#[cfg(not(target_arch = "wasm32"))]
fn install(filter: EnvFilter) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

#[cfg(target_arch = "wasm32")]
fn install(filter: EnvFilter) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(console::ConsoleWriter::default)
        .without_time()
        .with_ansi(false)
        .try_init()
        .is_ok()
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;

    /// Buffers one formatted event and prints it as a single console line.
    #[derive(Default)]
    pub(super) struct ConsoleWriter {
        buffer: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            if !self.buffer.is_empty() {
                let line = String::from_utf8_lossy(&self.buffer);
                web_sys::console::log_1(&line.trim_end().into());
                self.buffer.clear();
            }
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let _ = io::Write::flush(self);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_a_no_op() {
        init("debug");
        assert!(!init("debug"));
    }

    #[test]
    fn invalid_directives_do_not_panic() {
        init("pumpey_site=notalevel[");
    }
}
