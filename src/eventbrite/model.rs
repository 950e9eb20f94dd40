use serde::Serialize;

/// An event card seen on a listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEventStub {
    pub name: Option<String>,
    /// Absolute URL of the event's detail page
    pub detail_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    #[serde(rename = "Event Name")]
    pub name: Option<String>,
    #[serde(rename = "Start Date & Time")]
    pub start: Option<String>,
    #[serde(rename = "End Date & Time")]
    pub end: Option<String>,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Image")]
    pub image_url: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CrawlSummary {
    pub pages_visited: u32,
    pub events_written: usize,
    pub events_failed: usize,
}
