use std::time::Duration;

use thiserror::Error;

use crate::types::{PageQuery, WalletPage};

/// Explorer service failure. Every variant is recoverable at the
/// controller boundary and surfaces as an advisory notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExplorerError {
    #[error("invalid explorer url: {0}")]
    InvalidUrl(String),
    #[error("explorer returned http status {0}")]
    HttpStatus(u16),
    #[error("explorer request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed listing payload: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone)]
pub struct ExplorerSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ExplorerSettings {
    fn default() -> Self {
        Self {
            base_url: "https://explorer-api.walletconnect.com".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Paginated wallet directory source.
#[async_trait::async_trait]
pub trait ExplorerApi: Send + Sync {
    async fn get_paginated_wallets(&self, query: &PageQuery) -> Result<WalletPage, ExplorerError>;
}

#[derive(Debug, Clone)]
pub struct HttpExplorerApi {
    settings: ExplorerSettings,
}

impl HttpExplorerApi {
    pub fn new(settings: ExplorerSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ExplorerError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| ExplorerError::Network(err.to_string()))
    }

    fn build_url(&self, query: &PageQuery) -> Result<reqwest::Url, ExplorerError> {
        let endpoint = format!("{}/wallets", self.settings.base_url.trim_end_matches('/'));
        let mut url = reqwest::Url::parse(&endpoint)
            .map_err(|err| ExplorerError::InvalidUrl(err.to_string()))?;
        {
            let mut params = url.query_pairs_mut();
            params.append_pair("page", &query.page.to_string());
            params.append_pair("entries", &query.entries.to_string());
            params.append_pair("device", &query.device);
            params.append_pair("version", &query.version.to_string());
            if !query.search.is_empty() {
                params.append_pair("search", &query.search);
            }
            if !query.chains.is_empty() {
                params.append_pair("chains", &query.chains);
            }
        }
        Ok(url)
    }
}

#[async_trait::async_trait]
impl ExplorerApi for HttpExplorerApi {
    async fn get_paginated_wallets(&self, query: &PageQuery) -> Result<WalletPage, ExplorerError> {
        let url = self.build_url(query)?;
        let client = self.build_client()?;

        let response = client.get(url).send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ExplorerError::HttpStatus(status.as_u16()));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        let mut page: WalletPage = serde_json::from_slice(&body)
            .map_err(|err| ExplorerError::Malformed(err.to_string()))?;
        // Not every deployment echoes the page number back; fall back to
        // the one we asked for.
        if page.page == 0 {
            page.page = query.page;
        }
        Ok(page)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ExplorerError {
    if err.is_timeout() {
        return ExplorerError::Timeout;
    }
    ExplorerError::Network(err.to_string())
}
