#![warn(clippy::all, rust_2018_idioms)]

use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::Parser;
use dotthz_hdf5::path_has_dotthz_extension;
use dotthz_preview::{PreviewConfig, preview_file};

/// Render the preview of a DotTHz file as a self-contained HTML page
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// DotTHz (HDF5) file to preview
    file: PathBuf,
    /// Config file, defaults to `dotthz-preview/config.toml` in the user config directory
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Write the HTML here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Log to stderr (if run with `RUST_LOG=debug`).
    env_logger::init();
    let cli = Cli::parse();

    if !path_has_dotthz_extension(&cli.file) {
        log::warn!(
            "{} does not look like a DotTHz file, trying anyway",
            cli.file.display()
        );
    }

    let config = PreviewConfig::load_or_default(cli.config.as_deref());
    let html = preview_file(&cli.file, config).to_html();
    write_html(&html, cli.output.as_deref())
}

fn write_html(html: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => std::fs::write(path, html)
            .with_context(|| format!("Failed writing preview to {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(html.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed writing preview to stdout")
        }
    }
}
