use crate::config::HarvestConfig;
use crate::crawlers::crawler::PageSource;
use crate::error::{HarvestError, Result};
use fantoccini::error::CmdError;
use fantoccini::wd::Capabilities;
use fantoccini::{Client, ClientBuilder, Locator};
use std::error::Error;
use std::time::Duration;

/// The "read more" control that expands truncated review text
pub const READ_MORE_XPATH: &str =
    "//div[@class='XUVJZtom'][@data-test-target='expand-review']";

/// Alternative WebDriver endpoints tried when the configured one refuses
const FALLBACK_WEBDRIVER_URLS: [&str; 2] = [
    "http://localhost:9515", // ChromeDriver default
    "http://127.0.0.1:4444", // Try with IP instead of localhost
];

/// Delay between checks while waiting for the control to become clickable
const CLICKABLE_POLL: Duration = Duration::from_millis(250);

/// Drives a WebDriver browser session through review pages.
///
/// The session is opened once per run and must be released with
/// [`PageSource::shutdown`]; the run loop does this on every exit path.
pub struct LiveSource {
    client: Option<Client>,
    expand_timeout: Duration,
}

impl LiveSource {
    /// Opens a browser session using the configured WebDriver
    pub async fn connect(config: &HarvestConfig) -> Result<Self> {
        let client = connect_to_webdriver(&config.webdriver_url, config.headless).await?;
        Ok(Self {
            client: Some(client),
            expand_timeout: Duration::from_secs(config.expand_timeout_secs),
        })
    }
}

impl PageSource for LiveSource {
    fn name(&self) -> &'static str {
        "live"
    }

    async fn fetch(&mut self, url: &str) -> Result<Option<String>> {
        let client = self.client.as_ref().ok_or_else(|| {
            HarvestError::Config("browser session already shut down".to_string())
        })?;
        let started = std::time::Instant::now();

        if let Err(e) = client.goto(url).await {
            return navigation_failure(e, "accessing", url);
        }

        // Best effort: without it the review text is cut short, but still usable
        if let Err(e) = expand_reviews(client, self.expand_timeout).await {
            ::log::debug!("Did not expand reviews on {}: {}", url, e);
        }

        let html = match client.source().await {
            Ok(html) => html,
            Err(e) => return navigation_failure(e, "getting source for", url),
        };

        ::log::debug!(
            "Fetched {} in {:.2} seconds",
            url,
            started.elapsed().as_secs_f64()
        );
        Ok(Some(html))
    }

    async fn shutdown(&mut self) {
        if let Some(client) = self.client.take() {
            match client.close().await {
                Ok(()) => ::log::debug!("Closed browser session"),
                Err(e) => ::log::warn!("Failed to close browser session: {}", e),
            }
        }
    }
}

/// Browser capabilities for a quiet Chrome session
fn capabilities(headless: bool) -> Capabilities {
    let mut args = vec!["--disable-infobars"];
    if headless {
        args.push("--headless");
    }

    let mut caps = Capabilities::new();
    caps.insert(
        "goog:chromeOptions".to_string(),
        serde_json::json!({ "args": args }),
    );
    caps
}

/// Connects to the WebDriver instance, trying common local endpoints on failure
async fn connect_to_webdriver(webdriver_url: &str, headless: bool) -> Result<Client> {
    let connect = |url: &str| {
        let mut builder = ClientBuilder::native();
        builder.capabilities(capabilities(headless));
        let url = url.to_string();
        async move { builder.connect(&url).await }
    };

    let first_error = match connect(webdriver_url).await {
        Ok(client) => {
            ::log::info!("Connected to WebDriver at {}", webdriver_url);
            return Ok(client);
        }
        Err(e) => {
            ::log::error!("Failed to connect to WebDriver at {}: {}", webdriver_url, e);
            e
        }
    };

    for url in FALLBACK_WEBDRIVER_URLS {
        if url == webdriver_url {
            continue;
        }
        ::log::info!("Trying fallback WebDriver URL: {}", url);
        if let Ok(client) = connect(url).await {
            ::log::info!("Connected to fallback WebDriver at {}", url);
            return Ok(client);
        }
    }

    ::log::error!(
        "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
    );
    Err(HarvestError::Session {
        url: webdriver_url.to_string(),
        source: first_error,
    })
}

/// Scrolls to the "read more" control, waits for it and clicks it
async fn expand_reviews(
    client: &Client,
    wait_at_most: Duration,
) -> std::result::Result<(), Box<dyn Error>> {
    let control = client.find(Locator::XPath(READ_MORE_XPATH)).await?;
    client
        .execute(
            "arguments[0].scrollIntoView(false);",
            vec![serde_json::to_value(&control)?],
        )
        .await?;

    let control = client
        .wait()
        .at_most(wait_at_most)
        .for_element(Locator::XPath(READ_MORE_XPATH))
        .await?;

    tokio::time::timeout(wait_at_most, async {
        loop {
            if control.is_displayed().await? && control.is_enabled().await? {
                return Ok::<(), CmdError>(());
            }
            tokio::time::sleep(CLICKABLE_POLL).await;
        }
    })
    .await??;

    control.click().await?;
    Ok(())
}

/// Navigation errors skip the page; a lost session stops the run
fn navigation_failure(
    error: CmdError,
    context: &'static str,
    url: &str,
) -> Result<Option<String>> {
    if error.to_string().contains("Unable to find session") {
        ::log::error!("Lost browser session while {} {}", context, url);
        return Err(HarvestError::Command {
            context,
            url: url.to_string(),
            source: error,
        });
    }
    ::log::error!("Failed {} {}: {}", context, url, error);
    Ok(None)
}
