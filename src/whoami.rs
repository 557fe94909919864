//! Client side of the `/auth/whoami` call.
//!
//! The same `reqwest` client is used on wasm32 (backed by `fetch`) and on
//! native targets. Browsers need an absolute URL, so the client is built
//! with the page origin as its base.

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::types::WhoAmI;

/// Path of the whoami endpoint, relative to the page origin.
pub const WHOAMI_PATH: &str = "/auth/whoami";

/// `/auth/whoami?tokens=<urlencoded>`
pub fn whoami_path(tokens: &str) -> String {
    format!("{WHOAMI_PATH}?tokens={}", urlencoding::encode(tokens))
}

/// Resolves a token blob to the identity of its owner.
///
/// `?Send` because the browser implementation holds JS futures.
#[async_trait(?Send)]
pub trait WhoAmIClient {
    async fn whoami(&self, tokens: &str) -> Result<WhoAmI>;
}

/// HTTP implementation talking to `<base_url>/auth/whoami`.
#[derive(Clone, Debug)]
pub struct HttpWhoAmIClient {
    base_url: String,
    client: reqwest::Client,
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    timeout_ms: Option<u64>,
}

impl HttpWhoAmIClient {
    /// `base_url` is an origin such as `http://127.0.0.1:8000`; a trailing
    /// slash is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
            timeout_ms: None,
        }
    }

    /// Per-request timeout. Ignored on wasm32, where the browser owns it.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    pub fn url_for(&self, tokens: &str) -> String {
        format!("{}{}", self.base_url, whoami_path(tokens))
    }
}

#[async_trait(?Send)]
impl WhoAmIClient for HttpWhoAmIClient {
    async fn whoami(&self, tokens: &str) -> Result<WhoAmI> {
        let url = self.url_for(tokens);
        log::debug!("[whoami] GET {}{}", self.base_url, WHOAMI_PATH);

        let req = self.client.get(&url);
        #[cfg(not(target_arch = "wasm32"))]
        let req = match self.timeout_ms {
            Some(ms) => req.timeout(std::time::Duration::from_millis(ms)),
            None => req,
        };

        // Strip the URL from transport errors: it carries the token blob
        let resp = req
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context("whoami request failed")?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .context("failed to read whoami response")?;

        // The body is decoded whatever the status; error responses may still
        // carry an `error` field the renderer knows how to report.
        serde_json::from_str::<WhoAmI>(&body)
            .with_context(|| format!("whoami response is not valid JSON (status {status})"))
    }
}
