//! Command-line arguments and entry point

use std::path::PathBuf;

use clap::Parser as ClapParser;
use color_eyre::eyre::{Result, WrapErr};
use tracing_subscriber::EnvFilter;

use super::output::{Output, OutputFormat};
use crate::model::{Chunk, News};
use crate::news::constants::DEFAULT_NEWS_FILE;
use crate::news::parse_news_file;

#[derive(ClapParser, Debug)]
#[command(name = "news-parser")]
#[command(version, about = "Parse a NEWS file into versioned release chunks")]
pub struct Cli {
    /// NEWS file to parse
    #[arg(env = "NEWS_FILE", default_value = DEFAULT_NEWS_FILE)]
    pub file: PathBuf,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Only show chunks for this version
    #[arg(long, value_name = "VERSION")]
    pub release: Option<String>,

    /// Only show the first (newest) chunk
    #[arg(long)]
    pub latest: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Apply `--release` and `--latest` to the parsed chunks
    pub fn select<'a>(&self, news: &'a News) -> Vec<&'a Chunk> {
        let mut chunks: Vec<&Chunk> = news
            .iter()
            .filter(|chunk| {
                self.release
                    .as_deref()
                    .is_none_or(|release| chunk.version() == release)
            })
            .collect();

        if self.latest {
            chunks.truncate(1);
        }

        chunks
    }
}

/// Parse arguments, load the NEWS file and print it
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    tracing::debug!(file = %cli.file.display(), format = ?cli.format, "starting");

    let news = parse_news_file(&cli.file)
        .wrap_err_with(|| format!("Could not load NEWS from {}", cli.file.display()))?;

    let chunks = cli.select(&news);
    if chunks.is_empty() {
        tracing::warn!(release = ?cli.release, "no matching releases");
    }

    let output = Output::new(cli.format);
    print!("{}", output.render(&chunks)?);

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins unless `--verbose` is given
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
