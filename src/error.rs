use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Couldn't build a selector from: {0}")]
    InvalidSelector(String),
    #[error("The element you are trying to scrape for is missing. Selector: {selector}, url: {url}")]
    MissingElement { selector: String, url: String },
    #[error("Listing page {page} has no review link href for card number {index}.")]
    MissingAttribute { page: usize, index: usize },
    #[error("Rating marker {0:?} is not a number.")]
    RatingParse(String),
    #[error("Rating {0} doesn't belong to any tier.")]
    RatingOutOfRange(f64),
    #[error("Listing page {page} has no title/link for rating number {index}.")]
    MisalignedListing { page: usize, index: usize },
    #[error("Visited {0} listing pages without filling every tier.")]
    PageLimitReached(usize),

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tokio Join Error, couldn't await a task! {0}")]
    RuntimeJoin(#[from] tokio::task::JoinError),

    #[error("Reqwest Error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("Browser Error: {0}")]
    Browser(String),
}
