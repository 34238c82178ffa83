//! NASA APOD API client

use reqwest::Client;

use crate::config::ApodSettings;
use crate::error::ApodError;
use crate::types::{ApiErrorBody, ApodRecord};

const USER_AGENT: &str = concat!("apod-panel/", env!("CARGO_PKG_VERSION"));

/// Thin wrapper around one `reqwest::Client` bound to an endpoint and key.
///
/// No timeout and no retry: a request runs until the transport reports
/// success or failure.
#[derive(Debug, Clone)]
pub struct ApodClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl ApodClient {
    pub fn new(settings: &ApodSettings) -> Result<Self, ApodError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
            api_key: settings.api_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Full request URL for `date` (`YYYY-MM-DD`)
    pub fn request_url(&self, date: &str) -> String {
        format!(
            "{}?api_key={}&date={}",
            self.endpoint,
            urlencoding::encode(&self.api_key),
            urlencoding::encode(date)
        )
    }

    /// Fetch the entry for `date`.
    ///
    /// Non-2xx responses become [`ApodError::Api`] when the body carries an
    /// `error.message`, [`ApodError::Status`] otherwise.
    pub async fn fetch(&self, date: &str) -> Result<ApodRecord, ApodError> {
        tracing::info!("Fetching APOD for {} from {}", date, self.endpoint);

        let response = self.client.get(self.request_url(date)).send().await?;
        let status = response.status();
        let body = response.text().await;

        if !status.is_success() {
            let message = body
                .ok()
                .and_then(|text| serde_json::from_str::<ApiErrorBody>(&text).ok())
                .and_then(|parsed| parsed.message().map(str::to_string));

            tracing::debug!("APOD request for {} failed with HTTP {}", date, status);

            return Err(match message {
                Some(message) => ApodError::Api { status, message },
                None => ApodError::Status { status },
            });
        }

        let record: ApodRecord = serde_json::from_str(&body?)?;

        tracing::debug!(
            "Fetched APOD {} ({:?}): {}",
            record.date,
            record.media_type,
            record.title
        );

        Ok(record)
    }
}
