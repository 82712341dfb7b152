use chrono::Local;
use tokio::task::spawn_blocking;

use crate::navigate::Navigator;
use crate::parse::{parse_listing, parse_review_body, ListingPage};
use crate::quota::{Acceptance, RatingBuckets};
use crate::store::write_review;
use crate::{info_time, listing_url, CrawlConfig, Error, Result, TIER_COUNT};

/// What a finished crawl did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlSummary {
    pub pages_visited: usize,
    pub accepted: [usize; TIER_COUNT],
    /// Cards passed over because of a rating below 1 or a full tier.
    pub skipped: usize,
}

/// Walks listing pages `1, 2, 3, ...` until every tier holds `config.target_count` reviews.
///
/// Expects the tier directories to exist already (see [`crate::store::create_directories`]).
/// Any navigation, parsing or write failure ends the crawl.
pub async fn collect_reviews<N: Navigator>(
    config: &CrawlConfig,
    navigator: &mut N,
) -> Result<CrawlSummary> {
    let start_time = Local::now();
    let mut buckets = RatingBuckets::new(config.target_count);
    let mut page_num = 1;
    let mut skipped = 0;

    info_time!(
        "Started collecting {} reviews per rating into {}",
        config.target_count,
        config.output_root.display()
    );

    while !buckets.is_satisfied() {
        if config.max_pages.is_some_and(|max| page_num > max) {
            return Err(Error::PageLimitReached(page_num - 1));
        }

        let url = listing_url(&config.origin, page_num);
        let html = navigator.load(&url, config.listing_settle).await?;
        let page = spawn_blocking(move || parse_listing(&html)).await??;

        let (accepted, page_skipped) =
            process_listing(config, navigator, &mut buckets, &page, page_num).await?;
        skipped += page_skipped;
        info_time!(
            "Page {page_num}: {} cards, {accepted} saved, {page_skipped} skipped. Counts: {:?}",
            page.ratings.len(),
            buckets.counts()
        );

        page_num += 1;
    }

    let summary = CrawlSummary {
        pages_visited: page_num - 1,
        accepted: buckets.counts(),
        skipped,
    };
    info_time!(
        start_time,
        "DONE: {:?} reviews from {} pages",
        summary.accepted,
        summary.pages_visited
    );
    Ok(summary)
}

/// Runs the cards of one listing page through the quota, saving the ones that fit.
/// Returns `(accepted, skipped)`.
///
/// The last rating on the page is never looked at.
async fn process_listing<N: Navigator>(
    config: &CrawlConfig,
    navigator: &mut N,
    buckets: &mut RatingBuckets,
    page: &ListingPage,
    page_num: usize,
) -> Result<(usize, usize)> {
    let mut accepted = 0;
    let mut skipped = 0;

    for index in 0..page.ratings.len().saturating_sub(1) {
        let value = RatingBuckets::parse_rating(&page.ratings[index])?;
        let Some(acceptance) = buckets.try_accept(value)? else {
            skipped += 1;
            continue;
        };

        let (Some(title), Some(link)) = (page.titles.get(index), page.links.get(index)) else {
            return Err(Error::MisalignedListing {
                page: page_num,
                index,
            });
        };
        let link = link.as_deref().ok_or(Error::MissingAttribute {
            page: page_num,
            index,
        })?;
        save_review(config, navigator, acceptance, title, link).await?;
        accepted += 1;
    }

    Ok((accepted, skipped))
}

/// Fetches the full text behind `link` and writes it with `title` to the tier's file.
pub async fn save_review<N: Navigator>(
    config: &CrawlConfig,
    navigator: &mut N,
    acceptance: Acceptance,
    title: &str,
    link: &str,
) -> Result<()> {
    let url = format!("{}{}", config.origin, link);
    let html = navigator.load(&url, config.detail_settle).await?;
    let body = spawn_blocking({
        let url = url.clone();
        move || parse_review_body(&html, &url)
    })
    .await??;

    let path = write_review(
        &config.output_root,
        acceptance.tier,
        acceptance.sequence,
        title,
        &body,
    )
    .await?;
    info_time!("Saved {url} to {}", path.display());
    Ok(())
}
