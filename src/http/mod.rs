use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::{
    ops::{Deref, DerefMut},
    time::Duration,
};
use thiserror::Error;

pub const USER_AGENT: &str = concat!("release-notifier/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, Error> {
        HttpClient::with_timeout(REQUEST_TIMEOUT)
    }

    /// Every request sent through the client fails once `timeout` has elapsed.
    pub fn with_timeout(timeout: Duration) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|cause| Error::BuildClientError { cause })?;

        Ok(HttpClient { client })
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

impl DerefMut for HttpClient {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.client
    }
}

/// Turns a sent request into its response text, treating any non-2xx status as an error.
pub trait ResponseHandler {
    async fn handle(self) -> Result<String, Error>;
}

impl ResponseHandler for reqwest::Result<Response> {
    async fn handle(self) -> Result<String, Error> {
        let response = self.map_err(|cause| Error::SendRequestError { cause })?;
        let status = response.status();

        let text = response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })?;

        if !status.is_success() {
            return Err(Error::UnexpectedStatusError {
                status,
                message: text,
            });
        }

        Ok(text)
    }
}

pub fn parse<T>(text: &str) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    serde_json::from_str::<T>(text).map_err(|cause| Error::ParseResponseError { cause })
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to build the HTTP client")]
    BuildClientError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to send request")]
    SendRequestError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatusError { status: StatusCode, message: String },
    #[error("Failed to read response text")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to parse response")]
    ParseResponseError {
        #[source]
        cause: serde_json::Error,
    },
}

impl Error {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::UnexpectedStatusError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
