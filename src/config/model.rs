use std::path::PathBuf;

#[derive(Debug)]
pub struct Config {
    pub crawl_config: CrawlConfig,
    pub storage_config: StorageConfig,
    pub output_path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Listing URL with a `{page}` placeholder
    pub listing_url: String,
    pub start_page: u32,
    pub end_page: u32,
    pub concurrency: usize,
    pub event_limit: Option<usize>,
}

#[derive(Debug)]
pub enum StorageConfig {
    None,
    Local {
        root: PathBuf,
        public_base_url: Option<String>,
    },
    Firebase {
        bucket: String,
        access_token: String,
    },
}

#[derive(strum::EnumString, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum StorageBackend {
    None,
    Local,
    Firebase,
}
