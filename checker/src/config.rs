use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub station_info: StationInfo,
}

#[derive(Debug, Deserialize)]
pub struct StationInfo {
    pub fetch_url: String,
}

pub fn load_config(path: &Path) -> Result<Config> {
    let payload = fs::read_to_string(path)
        .with_context(|| format!("read config file {}", path.display()))?;
    serde_json::from_str(&payload)
        .with_context(|| format!("parse config file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_reads_fetch_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"station_info": {"fetch_url": "https://transit.yahoo.co.jp/diainfo/150/0"}}"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(
            config.station_info.fetch_url,
            "https://transit.yahoo.co.jp/diainfo/150/0"
        );
    }

    #[test]
    fn load_config_tolerates_extra_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"station_info": {"fetch_url": "https://example.invalid/", "line_name": "山手線"}, "refresh_secs": 300}"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.station_info.fetch_url, "https://example.invalid/");
    }

    #[test]
    fn load_config_fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn load_config_fails_on_missing_fetch_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"station_info": {}}"#).unwrap();
        assert!(load_config(&path).is_err());
    }
}
