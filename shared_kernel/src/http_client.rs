use anyhow::Context;
use bytes::Bytes;
use lazy_static::lazy_static;
use reqwest::Response;
use reqwest_tracing::TracingMiddleware;

use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use url::Url;

lazy_static! {
    static ref CLIENT: ClientWithMiddleware =   {
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(3);
    ClientBuilder::new(reqwest::Client::new())
        // Retry failed requests.
        .with(RetryTransientMiddleware::new_with_policy(retry_policy))
        .with(TracingMiddleware::default())
        .build()
    };
}

pub struct HttpClient;

impl HttpClient {
    async fn get(url: Url) -> anyhow::Result<Response> {
        CLIENT
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Failed to fetch request from {url}"))?
            .error_for_status()
            .with_context(|| format!("Unsuccessful response from {url}"))
    }

    pub async fn get_bytes(url: Url) -> anyhow::Result<Bytes> {
        Self::get(url)
            .await?
            .bytes()
            .await
            .context("Failed to get bytes response")
    }

    pub async fn get_text(url: Url) -> anyhow::Result<String> {
        Self::get(url)
            .await?
            .text()
            .await
            .context("Failed to get text response")
    }
}
