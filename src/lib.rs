//! Review harvester.
//! Walks the numbered review listing pages of a book-review site and files the full
//! text of each accepted review under `{root}/{rating}/NNNN.txt` until every rating
//! tier holds the requested number of reviews.

mod error;
mod macros;
pub mod config;
pub mod navigate;
pub mod parse;
pub mod process;
pub mod quota;
pub mod store;

pub use config::CrawlConfig;
pub use error::{Error, Result};

pub const DEFAULT_ORIGIN: &str = "https://www.livelib.ru";
pub const DEFAULT_OUTPUT_ROOT: &str = "data";
pub const DEFAULT_TARGET_COUNT: usize = 100;
/// Milliseconds to wait after a listing page load before reading it.
pub const LISTING_SETTLE_MS: u64 = 2000;
/// Milliseconds to wait after a review page load before reading it.
pub const DETAIL_SETTLE_MS: u64 = 2500;

pub const RATING_SELECTOR: &str = "span.lenta-card__mymark";
pub const TITLE_SELECTOR: &str = "a.lenta-card__book-title";
pub const LINK_SELECTOR: &str = "a.footer-card__link";
pub const REVIEW_BODY_SELECTOR: &str = "div#lenta-card__text-review-full";

/// Number of rating tiers, `1..=TIER_COUNT`.
pub const TIER_COUNT: usize = 5;
const SEQUENCE_WIDTH: usize = 4;

/// Listing page URL for `page_num` (1-based).
pub fn listing_url(origin: &str, page_num: usize) -> String {
    format!("{origin}/reviews/~{page_num}#reviews")
}
