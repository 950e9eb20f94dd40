use super::model::{EventRecord, RawEventStub};
use crate::parser::{extract_email_addresses, extract_phone_numbers, parse_event_date};
use crate::scraper::{join_fragments, select_all_own_text, select_attr, select_own_text};
use lazy_static::lazy_static;
use reqwest::Url;
use scraper::{Html, Selector};
use tracing::{debug, warn};

lazy_static! {
    static ref EVENT_CARD: Selector =
        Selector::parse("section.DiscoverHorizontalEventCard-module__cardWrapper___veJo5")
            .expect("Failed to create event card selector");
    static ref CARD_NAME: Selector =
        Selector::parse("section.event-card-details > div.Stack_root__1ksk7 > a > h2")
            .expect("Failed to create card name selector");
    static ref CARD_LINK: Selector = Selector::parse("section.event-card-details a")
        .expect("Failed to create card link selector");
    static ref DATE_AND_TIME: Selector =
        Selector::parse(r#"div[data-testid="dateAndTime"] span.date-info__full-datetime"#)
            .expect("Failed to create date selector");
    static ref ADDRESS: Selector =
        Selector::parse(r#"div[data-testid="location"] div.location-info__address *"#)
            .expect("Failed to create address selector");
    static ref DESCRIPTION: Selector = Selector::parse(r#"div[id="event-description"] p"#)
        .expect("Failed to create description selector");
    static ref HERO_IMAGE: Selector = Selector::parse("div.event-hero-wrapper picture > img")
        .expect("Failed to create hero image selector");
}

/// Event cards of a listing page, with links resolved against `page_url`
pub fn parse_listing(html: &str, page_url: &Url) -> Vec<RawEventStub> {
    let document = Html::parse_document(html);

    document
        .select(&EVENT_CARD)
        .filter_map(|card| {
            let name = select_own_text(card, &CARD_NAME);
            let link = select_attr(card, &CARD_LINK, "href")?;

            match page_url.join(&link) {
                Ok(detail_link) => Some(RawEventStub {
                    name,
                    detail_link: detail_link.to_string(),
                }),
                Err(err) => {
                    warn!("Skipping event with invalid link '{link}': {err}");
                    None
                }
            }
        })
        .collect()
}

/// Fields scraped from an event's detail page
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DetailPage {
    pub date_text: Option<String>,
    pub address_fragments: Vec<String>,
    pub description_fragments: Vec<String>,
    pub image_url: Option<String>,
}

impl DetailPage {
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);
        let root = document.root_element();

        Self {
            date_text: select_own_text(root, &DATE_AND_TIME),
            address_fragments: select_all_own_text(root, &ADDRESS),
            description_fragments: select_all_own_text(root, &DESCRIPTION),
            image_url: select_attr(root, &HERO_IMAGE, "src"),
        }
    }

    pub fn address(&self) -> String {
        join_fragments(&self.address_fragments)
    }

    pub fn description(&self) -> String {
        join_fragments(&self.description_fragments)
    }

    pub fn to_model(&self, name: Option<String>, image_url: String) -> EventRecord {
        let (start, end) = parse_event_date(self.date_text.as_deref());

        if start.is_none() {
            debug!("No schedule found in {:?}", self.date_text);
        }

        let description = self.description();

        EventRecord {
            name,
            start,
            end,
            address: self.address(),
            phone: extract_phone_numbers(&description)
                .into_iter()
                .next()
                .unwrap_or_default(),
            email: extract_email_addresses(&description)
                .into_iter()
                .next()
                .unwrap_or_default(),
            image_url,
        }
    }
}
