use crate::error::{HarvestError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Run configuration shared by every crawl mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Run the browser without a window
    #[serde(default = "default_headless")]
    pub headless: bool,

    /// Directory holding the saved first-page HTML files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Directory holding the input lists and the output stores
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// List of review page URLs for live mode, one per line, no header
    #[serde(default = "default_review_pages_list")]
    pub review_pages_list: String,

    /// List of saved first pages, with a `link` header column
    #[serde(default = "default_first_pages_list")]
    pub first_pages_list: String,

    /// How long to wait for the "read more" control before giving up
    #[serde(default = "default_expand_timeout_secs")]
    pub expand_timeout_secs: u64,

    /// Base for resolving relative pagination links
    #[serde(default = "default_site_base_url")]
    pub site_base_url: String,

    /// Number of items taken when no end index is given
    #[serde(default = "default_span")]
    pub default_span: usize,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            webdriver_url: default_webdriver_url(),
            headless: default_headless(),
            data_dir: default_data_dir(),
            output_dir: default_output_dir(),
            review_pages_list: default_review_pages_list(),
            first_pages_list: default_first_pages_list(),
            expand_timeout_secs: default_expand_timeout_secs(),
            site_base_url: default_site_base_url(),
            default_span: default_span(),
        }
    }
}

impl HarvestConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|e| HarvestError::io(path, e))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| HarvestError::io(path, e))?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Override the WebDriver URL with the `WEBDRIVER_URL` environment variable if set
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                self.webdriver_url = webdriver_url;
            }
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if url::Url::parse(&self.site_base_url).is_err() {
            return Err(HarvestError::Config(format!(
                "site_base_url is not a valid URL: {}",
                self.site_base_url
            )));
        }
        if self.default_span == 0 {
            return Err(HarvestError::Config("default_span must be positive".into()));
        }
        Ok(())
    }

    pub fn review_pages_path(&self) -> PathBuf {
        self.output_dir.join(&self.review_pages_list)
    }

    pub fn first_pages_path(&self) -> PathBuf {
        self.output_dir.join(&self.first_pages_list)
    }

    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_headless() -> bool {
    true
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("Outputs")
}

fn default_review_pages_list() -> String {
    "Additional_Review_Pages.csv".to_string()
}

fn default_first_pages_list() -> String {
    "hotels_with_reviews.csv".to_string()
}

fn default_expand_timeout_secs() -> u64 {
    10
}

fn default_site_base_url() -> String {
    "https://www.tripadvisor.com".to_string()
}

fn default_span() -> usize {
    50_000
}
