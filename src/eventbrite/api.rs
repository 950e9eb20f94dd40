use super::dto::{parse_listing, DetailPage};
use super::model::{CrawlSummary, EventRecord, RawEventStub};
use crate::config::model::CrawlConfig;
use crate::error::ScraperError;
use crate::output::RecordWriter;
use crate::storage::{blob_name, BlobStore};
use futures::{stream, StreamExt};
use lazy_static::lazy_static;
use reqwest::{Client, StatusCode, Url};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::policies::ExponentialBackoff;
use reqwest_retry::RetryTransientMiddleware;
use tracing::{error, info, instrument, warn};

const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0 Safari/537.36";
const PAGE_PLACEHOLDER: &str = "{page}";
const MAX_RETRIES: u32 = 5;

lazy_static! {
    static ref REST_CLIENT: ClientWithMiddleware = ClientBuilder::new(
        Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .build()
            .expect("Failed to create HTTP client")
    )
    .with(RetryTransientMiddleware::new_with_policy(
        ExponentialBackoff::builder().build_with_max_retries(MAX_RETRIES)
    ))
    .build();
}

pub struct EventbriteAPI {
    config: CrawlConfig,
    store: Option<Box<dyn BlobStore>>,
}

impl EventbriteAPI {
    pub fn new(config: CrawlConfig, store: Option<Box<dyn BlobStore>>) -> Self {
        Self { config, store }
    }

    pub fn listing_url(&self, page: u32) -> Result<Url, ScraperError> {
        let url = self
            .config
            .listing_url
            .replace(PAGE_PLACEHOLDER, &page.to_string());

        Url::parse(&url).map_err(|err| ScraperError::InvalidUrl {
            url,
            reason: err.to_string(),
        })
    }

    #[instrument(skip(self))]
    pub async fn get_listing_page(&self, page: u32) -> Result<Vec<RawEventStub>, ScraperError> {
        let url = self.listing_url(page)?;
        let html = get_html(url.as_str()).await?;
        let stubs = parse_listing(&html, &url);

        info!("Found {} events", stubs.len());

        Ok(stubs)
    }

    #[instrument(skip(self, stub), fields(link = %stub.detail_link))]
    pub async fn get_event(&self, stub: &RawEventStub) -> Result<EventRecord, ScraperError> {
        let html = get_html(&stub.detail_link).await?;
        let page = DetailPage::parse(&html);

        let image_url = match &page.image_url {
            Some(image_url) => self.upload_image(image_url).await,
            None => String::new(),
        };

        Ok(page.to_model(stub.name.clone(), image_url))
    }

    /**
    Copies the image into the configured store.
    Returns its public URL, or an empty string if there is no store or the copy failed.
    */
    #[instrument(skip(self))]
    pub async fn upload_image(&self, image_url: &str) -> String {
        let Some(store) = &self.store else {
            return String::new();
        };

        match copy_image(store.as_ref(), image_url).await {
            Ok(public_url) => public_url,
            Err(err) => {
                warn!("Failed to upload image: {err}");
                String::new()
            }
        }
    }

    /// Walks every configured listing page, writing records as their detail pages come in
    pub async fn crawl(&self, writer: &mut RecordWriter) -> CrawlSummary {
        let mut summary = CrawlSummary::default();

        for page in self.config.start_page..=self.config.end_page {
            if self.limit_reached(&summary) {
                info!("Reached event limit of {:?}", self.config.event_limit);
                break;
            }

            let stubs = match self.get_listing_page(page).await {
                Ok(stubs) => stubs,
                Err(err) => {
                    error!("Failed to get listing page {page}: {err}");
                    continue;
                }
            };
            summary.pages_visited += 1;

            // Events past the limit are never fetched, so their images aren't uploaded
            let mut events = stream::iter(stubs.iter())
                .take(self.remaining_events(&summary))
                .map(|stub| self.get_event(stub))
                .buffered(self.config.concurrency.max(1));

            while let Some(result) = events.next().await {
                match result.and_then(|record| writer.write(&record)) {
                    Ok(()) => summary.events_written += 1,
                    Err(err) => {
                        error!("Error processing event: {err}");
                        summary.events_failed += 1;
                    }
                }
            }
        }

        info!(
            "Crawled {} pages: {} events written, {} failed",
            summary.pages_visited, summary.events_written, summary.events_failed
        );

        summary
    }

    fn remaining_events(&self, summary: &CrawlSummary) -> usize {
        self.config
            .event_limit
            .map_or(usize::MAX, |limit| limit.saturating_sub(summary.events_written))
    }

    fn limit_reached(&self, summary: &CrawlSummary) -> bool {
        self.config
            .event_limit
            .is_some_and(|limit| summary.events_written >= limit)
    }
}

async fn get_html(url: &str) -> Result<String, ScraperError> {
    let html = REST_CLIENT
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    Ok(html)
}

async fn copy_image(store: &dyn BlobStore, image_url: &str) -> Result<String, ScraperError> {
    let response = REST_CLIENT.get(image_url).send().await?;

    if response.status() != StatusCode::OK {
        warn!("Image download answered {}", response.status());
        return Ok(String::new());
    }

    let bytes = response.bytes().await?;

    Ok(store.put(bytes.to_vec(), &blob_name(image_url)).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crawl_config(listing_url: &str) -> CrawlConfig {
        CrawlConfig {
            listing_url: listing_url.to_string(),
            start_page: 3,
            end_page: 4,
            concurrency: 4,
            event_limit: None,
        }
    }

    #[test_log::test]
    fn should_fill_the_page_number_into_the_listing_url() {
        let api = EventbriteAPI::new(
            crawl_config("https://www.eventbrite.com/d/united-states/music/?page={page}"),
            None,
        );

        assert_eq!(
            api.listing_url(61).unwrap().as_str(),
            "https://www.eventbrite.com/d/united-states/music/?page=61"
        );
    }

    #[test_log::test]
    fn when_the_listing_url_is_invalid_should_fail() {
        let api = EventbriteAPI::new(crawl_config("not a url {page}"), None);

        assert!(matches!(
            api.listing_url(1),
            Err(ScraperError::InvalidUrl { .. })
        ));
    }

    #[test_log::test(tokio::test)]
    async fn without_a_store_should_not_upload_images() {
        let api = EventbriteAPI::new(crawl_config("https://example.com/?page={page}"), None);

        assert_eq!(api.upload_image("https://img.evbuc.com/hero.jpg").await, "");
    }

    #[test_log::test(tokio::test)]
    async fn when_listing_pages_fail_should_keep_going_and_write_nothing() {
        let api = EventbriteAPI::new(crawl_config("not a url {page}"), None);
        let mut writer = RecordWriter::new(Box::new(Vec::new()));

        let summary = api.crawl(&mut writer).await;

        assert_eq!(summary, CrawlSummary::default());
    }

    #[test_log::test]
    fn should_stop_at_the_event_limit() {
        let mut config = crawl_config("https://example.com/?page={page}");
        config.event_limit = Some(2);
        let api = EventbriteAPI::new(config, None);

        let summary = CrawlSummary {
            pages_visited: 1,
            events_written: 2,
            events_failed: 0,
        };

        assert!(api.limit_reached(&summary));
        assert!(!api.limit_reached(&CrawlSummary::default()));
    }

    #[test_log::test]
    fn should_only_fetch_events_left_under_the_limit() {
        let mut config = crawl_config("https://example.com/?page={page}");
        config.event_limit = Some(5);
        let api = EventbriteAPI::new(config, None);

        let summary = CrawlSummary {
            pages_visited: 1,
            events_written: 3,
            events_failed: 1,
        };

        assert_eq!(api.remaining_events(&summary), 2);
        assert_eq!(api.remaining_events(&CrawlSummary::default()), 5);

        let over_limit = CrawlSummary {
            pages_visited: 2,
            events_written: 7,
            events_failed: 0,
        };

        assert_eq!(api.remaining_events(&over_limit), 0);
    }

    #[test_log::test]
    fn without_a_limit_should_fetch_every_event() {
        let api = EventbriteAPI::new(crawl_config("https://example.com/?page={page}"), None);

        assert_eq!(api.remaining_events(&CrawlSummary::default()), usize::MAX);
    }
}
