use std::path::PathBuf;
use std::time::Duration;

use crate::{
    DEFAULT_ORIGIN, DEFAULT_OUTPUT_ROOT, DEFAULT_TARGET_COUNT, DETAIL_SETTLE_MS, LISTING_SETTLE_MS,
};

/// Everything a crawl needs to know up front.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Reviews to collect per rating tier.
    pub target_count: usize,
    /// Directory holding the `1`..`5` tier folders.
    pub output_root: PathBuf,
    /// Scheme and host the listing and review links are resolved against.
    pub origin: String,
    pub listing_settle: Duration,
    pub detail_settle: Duration,
    /// Give up after this many listing pages. `None` crawls until every tier is full.
    pub max_pages: Option<usize>,
}

impl CrawlConfig {
    pub fn new(target_count: usize, output_root: impl Into<PathBuf>) -> Self {
        Self {
            target_count,
            output_root: output_root.into(),
            ..Self::default()
        }
    }
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            target_count: DEFAULT_TARGET_COUNT,
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            origin: DEFAULT_ORIGIN.to_string(),
            listing_settle: Duration::from_millis(LISTING_SETTLE_MS),
            detail_settle: Duration::from_millis(DETAIL_SETTLE_MS),
            max_pages: None,
        }
    }
}
