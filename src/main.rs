use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use lstree::primitives::path_utils::expand_tilde;
use lstree::services::fs::LocalFs;
use lstree::services::tracing_setup;
use lstree::view::TreeRenderer;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// A small directory tree printer
#[derive(Parser, Debug)]
#[command(name = "lstree")]
#[command(about = "Print a directory hierarchy as an ASCII tree", long_about = None)]
#[command(version)]
struct Args {
    /// Directory to print. Defaults to the current working directory.
    #[arg(value_name = "PATH")]
    path: Option<String>,

    /// Path to log file for diagnostics (default: stderr)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();

    tracing_setup::init_global(args.log_file.as_deref());

    let root = match &args.path {
        Some(path) => expand_tilde(path),
        None => std::env::current_dir().context("Failed to determine current working directory")?,
    };

    let renderer = TreeRenderer::new(Arc::new(LocalFs::new()));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    renderer
        .render(&root, &mut out)
        .with_context(|| format!("Failed to render tree for {}", root.display()))?;
    out.flush().context("Failed to flush output")?;

    Ok(())
}
