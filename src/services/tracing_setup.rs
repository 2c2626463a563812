//! Tracing subscriber setup
//!
//! Diagnostics go to stderr by default so the rendered tree on stdout
//! stays clean; `--log-file` redirects them to a file instead.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// Filtering comes from `RUST_LOG` with a WARN default. Initialization
/// failures (unwritable log file, subscriber already installed) are
/// reported on stderr and otherwise ignored: diagnostics are never worth
/// failing the run for.
pub fn init_global(log_file_path: Option<&Path>) {
    match log_file_path {
        Some(path) => {
            let log_file = match File::create(path) {
                Ok(file) => file,
                Err(err) => {
                    eprintln!("warning: could not open log file {}: {}", path.display(), err);
                    return;
                }
            };
            install(Arc::new(log_file), false);
        }
        None => install(io::stderr, true),
    }
}

/// Build and install the subscriber for the given writer.
fn install<W>(writer: W, ansi: bool)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into());
    let fmt_layer = fmt::layer().with_writer(writer).with_ansi(ansi);

    let _ = tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init();
}
