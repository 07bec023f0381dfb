use crate::logging;
use anyhow::{Result, anyhow};
use reqwest::Client as HTTPClient;
use scraper::{Html, Selector};
use unkou_storage::StatusResult;

const STATUS_SELECTOR: &str = "p.subText_01";
const NORMAL_TEXT: &str = "平常運転";
const NO_INFO_TEXT: &str = "情報なし";
const ALERT_KEYWORDS: [&str; 4] = ["遅延", "運転見合わせ", "運休", "一部列車"];
const FETCH_ERROR_TEXT: &str = "スクレイピングエラー: 最新の運行情報を取得できませんでした。";

/// Fetches the operation-information page and classifies the reported status.
///
/// Fetch and parse failures do not bubble up; they are folded into an
/// abnormal result with a fixed diagnostic message so the run still
/// persists a snapshot.
pub async fn fetch_operation_status(client: &HTTPClient, url: &str) -> StatusResult {
    match fetch_status_text(client, url).await {
        Ok(text) => classify_status_text(&text),
        Err(err) => {
            let logger = logging::Logger::new().url(url).error_text(err.to_string());
            logger.error(
                "scrape.fetch_failed",
                &err,
                "Failed to fetch operation status",
            );
            fetch_error_status()
        }
    }
}

/// The abnormal result recorded when the page could not be fetched.
pub fn fetch_error_status() -> StatusResult {
    StatusResult::abnormal(FETCH_ERROR_TEXT)
}

async fn fetch_status_text(client: &HTTPClient, url: &str) -> Result<String> {
    let response = client.get(url).send().await?;
    response.error_for_status_ref()?;
    let body = response.text().await?;
    extract_status_text(&body)
}

/// Pulls the trimmed text of the first status element out of the page.
/// A missing element, or one with no text, yields the sentinel.
fn extract_status_text(html: &str) -> Result<String> {
    let selector = Selector::parse(STATUS_SELECTOR)
        .map_err(|err| anyhow!("invalid status selector: {err}"))?;
    let document = Html::parse_document(html);
    let text = document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NO_INFO_TEXT.to_string());
    Ok(text)
}

/// Normal operation requires the normal marker, no alert keyword anywhere
/// in the text, and text other than the sentinel. Everything else is
/// abnormal and keeps the full page text as the message.
fn classify_status_text(text: &str) -> StatusResult {
    let has_alert = ALERT_KEYWORDS.iter().any(|keyword| text.contains(keyword));
    if text.contains(NORMAL_TEXT) && !has_alert && text != NO_INFO_TEXT {
        StatusResult::normal()
    } else {
        StatusResult::abnormal(text)
    }
}
