use clap::{Parser, ValueEnum};
use review_harvest::{CrawlMode, WriteMode};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "review-harvest")]
#[command(about = "Extracts hotel reviews from live or saved review pages into a JSON-lines file")]
#[command(version)]
pub struct Args {
    /// Output file name, written under the output directory
    #[arg(short, long)]
    pub file: String,

    /// Index of the first list item to process
    #[arg(short, long, default_value_t = 0)]
    pub begin: usize,

    /// Index one past the last list item to process
    #[arg(short, long)]
    pub end: Option<usize>,

    /// Pass "a" to append or "w" to overwrite an existing output file
    #[arg(short, long, value_enum)]
    pub overwrite: Option<OverwriteArg>,

    /// What to do with the input list
    #[arg(short, long, value_enum, default_value_t = ModeArg::Live)]
    pub mode: ModeArg,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// WebDriver URL, overriding the configuration and WEBDRIVER_URL
    #[arg(long)]
    pub webdriver_url: Option<String>,

    /// Directory holding saved first pages, overriding the configuration
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Browse the review pages list
    Live,
    /// Read saved first pages
    Cached,
    /// Build the review pages list from saved first pages
    Paginate,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OverwriteArg {
    #[value(name = "a")]
    Append,
    #[value(name = "w")]
    Write,
}

/// Convert from CLI argument mode to internal crawl mode
pub fn convert_mode(arg: ModeArg) -> CrawlMode {
    match arg {
        ModeArg::Live => CrawlMode::Live,
        ModeArg::Cached => CrawlMode::Cached,
        ModeArg::Paginate => CrawlMode::Paginate,
    }
}

pub fn convert_write_mode(arg: Option<OverwriteArg>) -> Option<WriteMode> {
    arg.map(|a| match a {
        OverwriteArg::Append => WriteMode::Append,
        OverwriteArg::Write => WriteMode::Truncate,
    })
}
