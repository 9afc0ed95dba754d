//! Debugging front end for the hello lexer.
//!
//! The binary in `main.rs` only parses arguments; the commands live here so
//! they can be tested without spawning a process.

pub mod commands;
mod error;

use std::sync::Once;

pub use error::LexCommandError;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=hello_lexer_core=trace`
/// or `RUST_LOG=helloc=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .init();
        }
    });
}
