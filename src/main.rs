use eventbrite_scraper::config::env_loader::load_config;
use eventbrite_scraper::eventbrite::api::EventbriteAPI;
use eventbrite_scraper::output::RecordWriter;
use eventbrite_scraper::storage;
use eventbrite_scraper::tracing::setup_tracing;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let loki = setup_tracing().await;
    let config = load_config();

    info!("Loaded config: {:?}", config.crawl_config);

    let mut writer = match RecordWriter::open(config.output_path.as_deref()) {
        Ok(writer) => writer,
        Err(err) => {
            error!("Couldn't open output: {err}");
            return ExitCode::FAILURE;
        }
    };

    let store = storage::from_config(&config.storage_config);
    let api = EventbriteAPI::new(config.crawl_config, store);

    api.crawl(&mut writer).await;

    if let Some(loki) = loki {
        loki.shutdown().await;
    }

    ExitCode::SUCCESS
}
