//! Thumbnail preloading with a minimum-wait floor.

use std::time::Duration;

use futures_util::future::{join, join_all};

/// Floor applied to every preload batch so a fast page does not flash in.
pub const PRELOAD_FLOOR: Duration = Duration::from_millis(300);

/// Fetch-and-discard image warmer. Failures are logged, never propagated;
/// a missing thumbnail is cosmetic.
#[async_trait::async_trait]
pub trait ImagePreloader: Send + Sync {
    /// Warms one image; returns whether the load succeeded.
    async fn preload(&self, url: &str) -> bool;
}

pub struct HttpImagePreloader {
    client: reqwest::Client,
}

impl HttpImagePreloader {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpImagePreloader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ImagePreloader for HttpImagePreloader {
    async fn preload(&self, url: &str) -> bool {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(err) => {
                log::debug!("image preload failed for {url}: {err}");
                return false;
            }
        };
        match response.bytes().await {
            Ok(_) => true,
            Err(err) => {
                log::debug!("image preload failed for {url}: {err}");
                false
            }
        }
    }
}

/// Warms all given urls concurrently, holding for at least `floor`
/// regardless of how fast the batch finishes.
pub async fn preload_all(preloader: &dyn ImagePreloader, urls: &[String], floor: Duration) {
    let loads = join_all(urls.iter().map(|url| preloader.preload(url)));
    join(loads, tokio::time::sleep(floor)).await;
}
