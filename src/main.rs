use clap::Parser;
use review_harvest::{CrawlMode, Harvest, HarvestConfig};

mod args;
use args::{Args, convert_mode, convert_write_mode};

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match HarvestConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                ::log::error!("Failed to load configuration: {}", e);
                std::process::exit(2);
            }
        },
        None => HarvestConfig::default(),
    };
    let mut config = config.with_env_overrides();
    if let Some(url) = args.webdriver_url {
        config.webdriver_url = url;
    }
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }

    let mode = convert_mode(args.mode);
    if mode == CrawlMode::Live {
        println!("Note: live mode requires a WebDriver server (e.g., ChromeDriver).");
        println!("Using WebDriver at {}", config.webdriver_url);
    }

    let harvest = Harvest::new(mode)
        .with_config(config)
        .with_range(args.begin, args.end)
        .with_write_mode(convert_write_mode(args.overwrite));

    match harvest.run(&args.file).await {
        Ok(summary) => ::log::info!(
            "Processed {} items ({} skipped), wrote {} lines to {}",
            summary.items,
            summary.skipped,
            summary.emitted,
            args.file
        ),
        Err(e) => {
            ::log::error!("Run failed: {}", e);
            std::process::exit(1);
        }
    }
}
