use std::time::Duration;

use thirtyfour::{error::WebDriverError, By, Key, WebDriver};
use url::Url;

use crate::{
    configuration::CollectorSettings,
    domain::Listing,
    services::{parse_listing_cards, CardOutcome, CardSkip},
};

const SEARCH_INPUT_ID: &str = "header-search";
const SCROLL_TO_BOTTOM: &str = "window.scrollTo(0, document.body.scrollHeight);";
const SCROLL_BACK_UP: &str = "window.scrollBy(0, -200);";

pub struct MarketCollector {
    base_url: Url,
    scroll_cycles: u32,
    settle: Duration,
}

#[derive(Debug, Default)]
pub struct CollectReport {
    pub appended: usize,
    pub skipped: Vec<CardSkip>,
}

impl MarketCollector {
    pub fn new(settings: &CollectorSettings) -> Result<Self, url::ParseError> {
        Ok(MarketCollector {
            base_url: Url::parse(&settings.market_url)?,
            scroll_cycles: settings.scroll_cycles,
            settle: Duration::from_millis(settings.settle_millis),
        })
    }

    /// One-shot collection for a single search query: submit the query,
    /// scroll-and-settle to force lazy loading, snapshot the page, append
    /// every parseable card to `table`.
    ///
    /// WebDriver failures propagate; per-card extraction failures never do.
    /// A page with zero parseable cards leaves `table` unchanged.
    pub async fn collect_search(
        &self,
        driver: &WebDriver,
        query: &str,
        table: &mut Vec<Listing>,
    ) -> Result<CollectReport, WebDriverError> {
        let search_input = driver.find(By::Id(SEARCH_INPUT_ID)).await?;
        search_input.click().await?;
        search_input.clear().await?;
        search_input.send_keys(query).await?;
        search_input.send_keys(Key::Enter + "").await?;

        for _ in 0..self.scroll_cycles {
            driver.execute(SCROLL_TO_BOTTOM, Vec::new()).await?;
            driver.execute(SCROLL_BACK_UP, Vec::new()).await?;
            tokio::time::sleep(self.settle).await;
        }

        let page_source = driver.source().await?;

        let mut report = CollectReport::default();
        for outcome in parse_listing_cards(&page_source, query, &self.base_url) {
            match outcome {
                CardOutcome::Parsed(listing) => {
                    table.push(listing);
                    report.appended += 1;
                }
                CardOutcome::Skipped(reason) => {
                    log::debug!("Skipping card on query {}: {}", query, reason);
                    report.skipped.push(reason);
                }
            }
        }

        log::info!(
            "Appended {} listings for query {} ({} cards skipped)",
            report.appended,
            query,
            report.skipped.len()
        );

        Ok(report)
    }
}
