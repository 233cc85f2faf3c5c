//! news-parser
//!
//! Binary entry point for the command-line tool.

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    news_parser::cli::run()
}
