//! MathLang - command-line host.
//!
//! Thin layer over `mathlang_eval::evaluate`. A [`Session`] owns one
//! operation registry and one persistent environment; the commands in
//! [`commands`] drive a session from a script, a single source string, or
//! a line-oriented REPL.

pub mod commands;
mod session;

use std::sync::Once;

pub use session::{format_result, parse_seed_value, parse_var_arg, Session};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for diagnostic output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=mathlang_eval=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}
