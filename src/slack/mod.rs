pub mod payload;
mod template;

use self::payload::NotificationPayload;
use crate::http::{self, HttpClient, ResponseHandler};
use reqwest::header::CONTENT_TYPE;
use std::fmt;
use url::Url;

#[derive(Debug)]
pub struct DeliveryFailure {
    pub url: String,
    pub error: http::Error,
}

impl fmt::Display for DeliveryFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", redact(&self.url), self.error)
    }
}

/// Outcome of sending one payload to every webhook.
#[derive(Debug, Default)]
pub struct DeliveryReport {
    pub delivered: Vec<String>,
    pub failed: Vec<DeliveryFailure>,
}

impl DeliveryReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn attempted(&self) -> usize {
        self.delivered.len() + self.failed.len()
    }
}

/// Posts the same serialized payload to each webhook in turn. A failing webhook is recorded in
/// the report and does not stop delivery to the others.
pub async fn dispatch(
    client: &HttpClient,
    webhook_urls: &[String],
    payload: &NotificationPayload,
) -> Result<DeliveryReport, serde_json::Error> {
    let body = payload.to_json()?;
    log::debug!("Notification payload: {}", body);

    let mut report = DeliveryReport::default();

    for url in webhook_urls {
        log::info!("Sending Slack notification to {}", redact(url));

        match post(client, url, &body).await {
            Ok(_) => {
                log::info!("Successfully sent Slack notification to {}", redact(url));
                report.delivered.push(url.to_owned());
            }
            Err(error) => {
                log::error!("Cannot send Slack notification to {}: {}", redact(url), error);
                report.failed.push(DeliveryFailure {
                    url: url.to_owned(),
                    error,
                });
            }
        }
    }

    Ok(report)
}

async fn post(client: &HttpClient, url: &str, body: &str) -> Result<String, http::Error> {
    client
        .post(url)
        .header(CONTENT_TYPE, "application/json")
        .body(body.to_owned())
        .send()
        .await
        .handle()
        .await
}

// Webhook paths are credentials; only the origin is safe to print.
pub fn redact(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) if parsed.path() != "/" => format!("{}/***", parsed.origin().ascii_serialization()),
        Ok(parsed) => parsed.origin().ascii_serialization(),
        Err(_) => "***".to_owned(),
    }
}
