mod renderer;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::Level;

const USAGE: &str = "Usage: gantt-plot <gantt_data.csv>";

/// The input path: the first argument after the program name.
fn input_path(args: impl IntoIterator<Item = String>) -> Option<PathBuf> {
    args.into_iter().nth(1).map(PathBuf::from)
}

fn main() -> Result<()> {
    let Some(path) = input_path(std::env::args()) else {
        eprintln!("{USAGE}");
        std::process::exit(1);
    };

    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let chart = gantt_plot_core::load_chart(&path)
        .with_context(|| format!("cannot plot {}", path.display()))?;

    renderer::render_tui(&chart)?;
    Ok(())
}
