use std::path::PathBuf;
use std::time::Duration;

use chrono::Local;
use clap::{Parser, ValueEnum};
use review_harvest::{
    info_time,
    navigate::{ChromeNavigator, HttpNavigator},
    process::collect_reviews,
    store::create_directories,
    CrawlConfig, Result, DEFAULT_ORIGIN, DEFAULT_OUTPUT_ROOT, DEFAULT_TARGET_COUNT,
    DETAIL_SETTLE_MS, LISTING_SETTLE_MS,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Backend {
    /// Headless Chrome, sees client-rendered content
    Chrome,
    /// Plain HTTP requests
    Http,
}

#[derive(Parser, Debug)]
#[command(version, about = "Collect book reviews into per-rating folders", long_about = None)]
struct Args {
    /// Reviews to collect for each rating 1-5
    #[arg(short = 'c', long, default_value_t = DEFAULT_TARGET_COUNT)]
    count: usize,
    /// Output directory
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT_ROOT)]
    output: PathBuf,
    /// Site origin the listing and review links are resolved against
    #[arg(long, default_value = DEFAULT_ORIGIN)]
    origin: String,
    /// Milliseconds to wait after loading a listing page
    #[arg(long, default_value_t = LISTING_SETTLE_MS)]
    listing_settle_ms: u64,
    /// Milliseconds to wait after loading a review page
    #[arg(long, default_value_t = DETAIL_SETTLE_MS)]
    detail_settle_ms: u64,
    /// Stop with an error after this many listing pages
    #[arg(long)]
    max_pages: Option<usize>,
    #[arg(short = 'b', long, value_enum, default_value_t = Backend::Chrome)]
    backend: Backend,
}

impl From<&Args> for CrawlConfig {
    fn from(args: &Args) -> Self {
        CrawlConfig {
            target_count: args.count,
            output_root: args.output.clone(),
            origin: args.origin.trim_end_matches('/').to_string(),
            listing_settle: Duration::from_millis(args.listing_settle_ms),
            detail_settle: Duration::from_millis(args.detail_settle_ms),
            max_pages: args.max_pages,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let start_time = Local::now();
    let args = Args::parse();
    let config = CrawlConfig::from(&args);

    create_directories(&config.output_root).await?;

    let summary = match args.backend {
        Backend::Chrome => {
            let mut navigator = ChromeNavigator::launch()?;
            collect_reviews(&config, &mut navigator).await?
        }
        Backend::Http => collect_reviews(&config, &mut HttpNavigator::new()).await?,
    };
    info_time!(
        start_time,
        "Full program time: {} pages, {} skipped",
        summary.pages_visited,
        summary.skipped
    );

    Ok(())
}
