//! Parsing of the loader endpoint's transfer response.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ClientError;

/// One result entry in the transfer response, field-for-field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferPart {
    #[serde(rename = "GeneratedId", default)]
    pub generated_id: Option<String>,
    #[serde(rename = "Status", default)]
    pub status: String,
    #[serde(rename = "Message", default)]
    pub message: String,
    #[serde(rename = "Exception", default)]
    pub exception: Option<String>,
    #[serde(rename = "ValidationInfoItems", default)]
    pub validation_info_items: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferResult {
    #[serde(rename = "TotalResult")]
    pub total_result: TransferPart,
    #[serde(rename = "ItemResults", default)]
    pub item_results: Vec<TransferPart>,
}

/// What a statistician wants back from a transfer: the work-order number
/// to follow up on, and when the data will publish.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferReceipt {
    pub work_order: Option<String>,
    pub publish_date: Option<String>,
    pub publish_time: Option<String>,
    pub message: String,
}

pub fn parse_transfer_response(raw: &str) -> Result<TransferReceipt, ClientError> {
    let result: TransferResult = serde_json::from_str(raw)?;
    let message = result.total_result.message;

    let work_order = capture(r"lasteoppdragsnummer:(\d+)", &message);
    if work_order.is_none() {
        warn!("transfer response carries no work-order number: {message}");
    }
    let publish_date = capture(
        r"Publiseringsdato '(\d{2}\.\d{2}\.\d{4} \d{2}:\d{2}:\d{2})'",
        &message,
    );
    let publish_time = capture(r"Publiseringstid '(\d{2}:\d{2})'", &message)
        .or_else(|| capture(r"Publiseringstid '(\d{2}):(\d{2})'", &message));

    Ok(TransferReceipt {
        work_order,
        publish_date,
        publish_time,
        message,
    })
}

fn capture(pattern: &str, text: &str) -> Option<String> {
    Regex::new(pattern)
        .ok()?
        .captures(text)
        .map(|captures| match captures.len() {
            // A two-group pattern is an hour/minute pair.
            3 => format!("{}:{}", &captures[1], &captures[2]),
            _ => captures[1].to_string(),
        })
}
