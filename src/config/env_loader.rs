use crate::config::model::{Config, CrawlConfig, StorageBackend, StorageConfig};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_LISTING_URL: &str =
    "https://www.eventbrite.com/d/united-states/african-american/?page={page}";
const DEFAULT_CONCURRENCY: usize = 8;
const DEFAULT_LOCAL_STORAGE_DIR: &str = "images";

pub fn load_config() -> Config {
    let start_page = load_number_config("START_PAGE").unwrap_or(1);
    let end_page = load_number_config("END_PAGE").unwrap_or(start_page);

    Config {
        crawl_config: CrawlConfig {
            listing_url: load_listing_url_config("EVENTBRITE_LISTING_URL"),
            start_page,
            end_page,
            concurrency: load_number_config("CONCURRENCY").unwrap_or(DEFAULT_CONCURRENCY),
            event_limit: load_number_config("DEBUG_EVENT_LIMIT"),
        },
        storage_config: load_storage_config(),
        output_path: env::var("OUTPUT_PATH").ok().map(PathBuf::from),
    }
}

fn load_storage_config() -> StorageConfig {
    let backend = env::var("STORAGE_BACKEND").unwrap_or_else(|_| "none".to_string());
    let backend = StorageBackend::from_str(&backend.to_lowercase()).unwrap_or_else(|_| {
        panic!(
            "Invalid config 'STORAGE_BACKEND'. Expected one of 'none', 'local' or 'firebase'"
        )
    });

    match backend {
        StorageBackend::None => StorageConfig::None,
        StorageBackend::Local => StorageConfig::Local {
            root: env::var("LOCAL_STORAGE_DIR")
                .unwrap_or_else(|_| DEFAULT_LOCAL_STORAGE_DIR.to_string())
                .into(),
            public_base_url: env::var("LOCAL_STORAGE_PUBLIC_URL").ok(),
        },
        StorageBackend::Firebase => StorageConfig::Firebase {
            bucket: load_required_config("FIREBASE_BUCKET"),
            access_token: load_required_config("FIREBASE_ACCESS_TOKEN"),
        },
    }
}

fn load_listing_url_config(name: &str) -> String {
    let url = env::var(name).unwrap_or_else(|_| DEFAULT_LISTING_URL.to_string());

    if !url.contains("{page}") {
        panic!("Invalid config '{}'. Expected a '{{page}}' placeholder.", name);
    }

    url
}

fn load_required_config(name: &str) -> String {
    env::var(name).unwrap_or_else(|_| panic!("{} must be set.", name))
}

fn load_number_config<T: FromStr>(name: &str) -> Option<T> {
    match env::var(name) {
        Ok(value) => Some(value.parse().unwrap_or_else(|_| {
            panic!("Invalid config '{}'. Expected a positive integer number.", name)
        })),
        Err(_) => None,
    }
}
