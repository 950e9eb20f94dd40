use eventbrite_scraper::config::model::CrawlConfig;
use eventbrite_scraper::eventbrite::api::EventbriteAPI;

fn build_api() -> EventbriteAPI {
    EventbriteAPI::new(
        CrawlConfig {
            listing_url: "https://www.eventbrite.com/d/united-states/african-american/?page={page}"
                .to_string(),
            start_page: 1,
            end_page: 1,
            concurrency: 2,
            event_limit: Some(2),
        },
        None,
    )
}

#[test_log::test(tokio::test)]
#[ignore = "hits eventbrite.com"]
async fn should_scrape_listing_page() {
    let stubs = build_api().get_listing_page(1).await.unwrap();

    assert!(!stubs.is_empty());
    assert!(stubs
        .iter()
        .all(|stub| stub.detail_link.starts_with("https://")));
}

#[test_log::test(tokio::test)]
#[ignore = "hits eventbrite.com"]
async fn should_scrape_event_details() {
    let api = build_api();
    let stubs = api.get_listing_page(1).await.unwrap();

    let record = api.get_event(&stubs[0]).await.unwrap();

    assert!(record.start.is_some(), "{:?}", record);
}
