use anyhow::Result;
use reqwest::Client as HTTPClient;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use unkou_storage::{StatusRecord, write_status_record};

mod config;
mod logging;
mod scrape;

const CONFIG_FILE: &str = "data/config.json";
const STATUS_FILE: &str = "data/train_status.json";
const FETCH_TIMEOUT_SECS: u64 = 10;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env()) // Enable log level filtering via `RUST_LOG` env var
        .json()
        .with_current_span(false) // Optional: Exclude span information
        .with_span_list(false) // Optional: Exclude span list
        .with_target(false) // Optional: Exclude target (module path)
        .without_time()
        .init();

    let config_path = path_from_env("UNKOU_CONFIG_FILE", CONFIG_FILE);
    let status_path = path_from_env("UNKOU_STATUS_FILE", STATUS_FILE);

    let config = match config::load_config(&config_path) {
        Ok(config) => config,
        Err(err) => {
            logging::Logger::new().error("config.load_failed", &err, "Failed to load config file");
            std::process::exit(1);
        }
    };

    let url = config.station_info.fetch_url;
    let logger = logging::Logger::new().url(&url);
    logger.info("check.started", "Checking operation status");

    let status = match build_http_client() {
        Ok(client) => scrape::fetch_operation_status(&client, &url).await,
        Err(err) => {
            logger.error("http.client_failed", &err, "Failed to build HTTP client");
            scrape::fetch_error_status()
        }
    };

    let record = StatusRecord::now(status);
    if let Err(err) = write_status_record(&status_path, &record) {
        logger.error("status.write_failed", &err, "Failed to update status file");
    }

    logger.info(
        "check.completed",
        &format!("Operation normal: {}", record.status.is_normal),
    );
}

fn build_http_client() -> Result<HTTPClient> {
    Ok(HTTPClient::builder()
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .build()?)
}

fn path_from_env(var: &str, default: &str) -> PathBuf {
    std::env::var(var)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map_or_else(|| PathBuf::from(default), PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_from_env_falls_back_to_default() {
        let path = path_from_env("UNKOU_TEST_UNSET_VAR", "data/config.json");
        assert_eq!(path, PathBuf::from("data/config.json"));
    }
}
