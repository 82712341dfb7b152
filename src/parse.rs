use scraper::{ElementRef, Html, Selector};

use crate::{
    Error, Result, LINK_SELECTOR, RATING_SELECTOR, REVIEW_BODY_SELECTOR, TITLE_SELECTOR,
};

/// One listing page broken into its three index-aligned columns.
/// Nothing checks that the columns have the same length.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ListingPage {
    /// Raw text of each rating marker, e.g. `"4.5"`.
    pub ratings: Vec<String>,
    /// Trimmed book title of each card.
    pub titles: Vec<String>,
    /// `href` of each card's review link, relative to the site origin.
    /// Only checked for cards that are actually saved.
    pub links: Vec<Option<String>>,
}

/// Pulls the rating markers, titles and review links out of a listing page.
pub fn parse_listing(html: &str) -> Result<ListingPage> {
    let doc = Html::parse_document(html);

    let rating_selector = create_selector(RATING_SELECTOR)?;
    let title_selector = create_selector(TITLE_SELECTOR)?;
    let link_selector = create_selector(LINK_SELECTOR)?;

    let ratings = doc.select(&rating_selector).map(trimmed_text).collect();
    let titles = doc.select(&title_selector).map(trimmed_text).collect();
    let links = doc
        .select(&link_selector)
        .map(|link| link.value().attr("href").map(str::to_string))
        .collect();

    Ok(ListingPage {
        ratings,
        titles,
        links,
    })
}

/// Returns the trimmed full text of a review page.
/// `url` is only used for the error message.
pub fn parse_review_body(html: &str, url: &str) -> Result<String> {
    let doc = Html::parse_document(html);
    let body_selector = create_selector(REVIEW_BODY_SELECTOR)?;

    doc.select(&body_selector)
        .next()
        .map(trimmed_text)
        .ok_or_else(|| Error::MissingElement {
            selector: REVIEW_BODY_SELECTOR.into(),
            url: url.into(),
        })
}

#[inline]
fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| Error::InvalidSelector(sel_str.into()))
}

#[inline]
fn trimmed_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"
        <html><body><div id="reviews">
          <article>
            <a class="lenta-card__book-title" href="/book/1">  Master and Margarita </a>
            <span class="lenta-card__mymark"> 5 </span>
            <a class="footer-card__link" href="/review/11">read</a>
          </article>
          <article>
            <a class="lenta-card__book-title extra" href="/book/2">Dead Souls</a>
            <span class="lenta-card__mymark">3.5</span>
            <a class="footer-card__link" href="/review/12">read</a>
          </article>
          <span class="lenta-card__mymark-other">9</span>
        </div></body></html>
    "#;

    #[test]
    fn listing_columns_are_aligned() {
        let page = parse_listing(LISTING).unwrap();
        assert_eq!(page.ratings, vec!["5", "3.5"]);
        assert_eq!(page.titles, vec!["Master and Margarita", "Dead Souls"]);
        assert_eq!(
            page.links,
            vec![Some("/review/11".to_string()), Some("/review/12".to_string())]
        );
    }

    #[test]
    fn empty_listing_yields_empty_columns() {
        let page = parse_listing("<html><body></body></html>").unwrap();
        assert_eq!(page, ListingPage::default());
    }

    #[test]
    fn link_without_href_keeps_its_slot() {
        let html = r#"<a class="footer-card__link">x</a><a class="footer-card__link" href="/b">y</a>"#;
        let page = parse_listing(html).unwrap();
        assert_eq!(page.links, vec![None, Some("/b".to_string())]);
    }

    #[test]
    fn review_body_is_trimmed() {
        let html = r#"<div id="lenta-card__text-review-full">
            <p>First paragraph.</p>
            <p>Second.</p>
        </div>"#;
        let body = parse_review_body(html, "u").unwrap();
        assert!(body.starts_with("First paragraph."));
        assert!(body.ends_with("Second."));
    }

    #[test]
    fn missing_review_body_reports_url() {
        let err = parse_review_body("<div>captcha</div>", "https://x/review/1").unwrap_err();
        match err {
            Error::MissingElement { url, .. } => assert_eq!(url, "https://x/review/1"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
