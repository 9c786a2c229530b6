pub mod config;
pub mod crawlers;
pub mod error;
pub mod parsers;
pub mod results;
pub mod store;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::HarvestConfig;
pub use error::{HarvestError, Result};
pub use results::{Numeric, ResponseDetails, ReviewRecord, RunSummary};
pub use store::WriteMode;

use crawlers::{CachedSource, LiveSource, PageSource, pipeline};
use std::path::Path;
use store::LineStore;

/// What a run does with its input list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlMode {
    /// Fetch review pages through a browser and extract their reviews
    Live,
    /// Extract reviews from saved first pages
    Cached,
    /// Expand saved first pages into the full list of review page URLs
    Paginate,
}

/// Main builder for a harvest run
pub struct Harvest {
    mode: CrawlMode,
    config: HarvestConfig,
    begin: usize,
    end: Option<usize>,
    write_mode: Option<WriteMode>,
}

impl Harvest {
    /// Create a new Harvest builder with default configuration
    pub fn new(mode: CrawlMode) -> Self {
        Self {
            mode,
            config: HarvestConfig::default(),
            begin: 0,
            end: None,
            write_mode: None,
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: HarvestConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let config = HarvestConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Process only items `[begin, end)` of the sorted input list.
    /// Without an end, `default_span` items are taken.
    pub fn with_range(mut self, begin: usize, end: Option<usize>) -> Self {
        self.begin = begin;
        self.end = end;
        self
    }

    /// Choose how an existing output file is treated
    pub fn with_write_mode(mut self, write_mode: Option<WriteMode>) -> Self {
        self.write_mode = write_mode;
        self
    }

    pub fn config(&self) -> &HarvestConfig {
        &self.config
    }

    /// The sorted, sliced list of items this run will process
    pub fn items(&self) -> Result<Vec<String>> {
        let all = match self.mode {
            CrawlMode::Live => utils::read_plain_list(&self.config.review_pages_path())?,
            CrawlMode::Cached | CrawlMode::Paginate => {
                utils::read_column(&self.config.first_pages_path(), "link")?
            }
        };
        let end = self
            .end
            .unwrap_or_else(|| self.begin.saturating_add(self.config.default_span));
        utils::select_range(all, self.begin, end)
    }

    /// Run the pass and write its output to `<output_dir>/<output_name>`
    pub async fn run(self, output_name: &str) -> Result<RunSummary> {
        let output = self.config.output_path(output_name);
        let write_mode = store::resolve_write_mode(&output, self.write_mode)?;
        let items = self.items()?;
        ::log::info!(
            "Starting {:?} run over {} items into {}",
            self.mode,
            items.len(),
            output.display()
        );

        let started = std::time::Instant::now();
        let summary = match self.mode {
            CrawlMode::Live => {
                let source = LiveSource::connect(&self.config).await?;
                drive(source, &items, &output, write_mode, None).await?
            }
            CrawlMode::Cached => {
                let source = CachedSource::new(&self.config.data_dir);
                drive(source, &items, &output, write_mode, None).await?
            }
            CrawlMode::Paginate => {
                let source = CachedSource::new(&self.config.data_dir);
                let base = Some(self.config.site_base_url.as_str());
                drive(source, &items, &output, write_mode, base).await?
            }
        };

        ::log::info!(
            "Run complete - {} items, {} skipped, {} lines written in {:.2} seconds",
            summary.items,
            summary.skipped,
            summary.emitted,
            started.elapsed().as_secs_f64()
        );
        Ok(summary)
    }
}

/// Opens the store, runs one pass and always shuts the source down.
///
/// With a `page_base` the pass expands pagination instead of extracting reviews.
async fn drive<S: PageSource>(
    mut source: S,
    items: &[String],
    output: &Path,
    write_mode: WriteMode,
    page_base: Option<&str>,
) -> Result<RunSummary> {
    let outcome = match LineStore::open(output, write_mode) {
        Ok(mut store) => match page_base {
            Some(base) => pipeline::expand_pages(&mut source, items, base, &mut store).await,
            None => pipeline::extract_reviews(&mut source, items, &mut store).await,
        },
        Err(e) => Err(e),
    };
    source.shutdown().await;
    outcome
}
