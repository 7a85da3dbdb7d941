/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! HTTP transport layer for Pexels API requests

use crate::rate_limit::RateLimitStatus;
use px_core::{Api, Config, Endpoint, Error, Result};
use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::RwLock;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

/// Query parameters in the order they are appended to the URL
pub type Params = Vec<(&'static str, String)>;

/// HTTP transport layer for making requests to the Pexels API
pub struct Transport {
  client: Client,
  photo_base_url: String,
  video_base_url: String,
  api_key: String,
  timeout: Duration,
  rate_limit: RwLock<Option<RateLimitStatus>>,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: &Config) -> Result<Self> {
    let timeout = Duration::from_secs(config.timeout_secs);
    let client = Client::builder()
      .timeout(timeout)
      .user_agent(concat!("px-client/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self {
      client,
      photo_base_url: config.photo_base_url.clone(),
      video_base_url: config.video_base_url.clone(),
      api_key: config.api_key.clone(),
      timeout,
      rate_limit: RwLock::new(None),
    })
  }

  /// Create a mock transport for testing
  #[cfg(test)]
  pub fn new_mock() -> Self {
    Self {
      client: Client::new(),
      photo_base_url: "https://mock.pexels.com/v1".to_string(),
      video_base_url: "https://mock.pexels.com/videos".to_string(),
      api_key: "test_key".to_string(),
      timeout: Duration::from_secs(30),
      rate_limit: RwLock::new(None),
    }
  }

  /// Make an authenticated GET request and decode the JSON body
  ///
  /// The quota headers are recorded before the status is checked, so a
  /// rejected request still updates the counter.
  #[instrument(skip(self, params), fields(endpoint = %endpoint))]
  pub async fn get<T>(&self, endpoint: Endpoint, params: Params) -> Result<T>
  where
    T: DeserializeOwned,
  {
    let url = self.build_url(endpoint, &params)?;
    debug!("Making request to: {}", url);

    let response = self
      .client
      .get(url)
      .header(AUTHORIZATION, &self.api_key)
      .send()
      .await
      .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

    let status = response.status();
    self.record_rate_limit(response.headers());

    let text = response
      .text()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))?;

    debug!("Response body length: {} bytes", text.len());
    #[cfg(feature = "debug-logging")]
    debug!("Response body: {}", text.chars().take(2000).collect::<String>());

    if !status.is_success() {
      error!("Request failed with status: {}", status);
      return Err(Error::from_status(status.as_u16(), &text));
    }

    match serde_json::from_str::<T>(&text) {
      Ok(data) => {
        info!("Successfully parsed response for endpoint: {}", endpoint);
        Ok(data)
      }
      Err(e) => {
        error!("Failed to parse JSON response: {}", e);
        let preview: String = text.chars().take(200).collect();
        Err(Error::Parse(format!("Failed to parse response: {}. Response: {}", e, preview)))
      }
    }
  }

  /// Build the full URL for an API request
  fn build_url(&self, endpoint: Endpoint, params: &[(&'static str, String)]) -> Result<Url> {
    let base = self.base_url(endpoint.api()).trim_end_matches('/');
    let mut url = Url::parse(&format!("{}/{}", base, endpoint.path()))?;

    if !params.is_empty() {
      let mut query_pairs = url.query_pairs_mut();
      for (key, value) in params {
        query_pairs.append_pair(key, value);
      }
    }

    Ok(url)
  }

  fn record_rate_limit(&self, headers: &HeaderMap) {
    let Some(status) = RateLimitStatus::from_headers(headers) else {
      warn!("Response carried no readable X-Ratelimit-Remaining header, keeping previous value");
      return;
    };

    if status.is_low() {
      warn!("Pexels quota low: {} requests remaining", status.remaining);
    } else {
      debug!("Pexels quota: {} requests remaining", status.remaining);
    }

    if let Ok(mut guard) = self.rate_limit.write() {
      *guard = Some(status);
    }
  }

  /// Quota reported by the most recent response that carried one
  pub fn rate_limit_status(&self) -> Option<RateLimitStatus> {
    self.rate_limit.read().ok().and_then(|guard| *guard)
  }

  /// Get the base URL for an API family
  pub fn base_url(&self, api: Api) -> &str {
    match api {
      Api::Photos => &self.photo_base_url,
      Api::Videos => &self.video_base_url,
    }
  }

  /// Get request timeout duration
  pub fn timeout(&self) -> Duration {
    self.timeout
  }
}

impl std::fmt::Debug for Transport {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Transport")
      .field("photo_base_url", &self.photo_base_url)
      .field("video_base_url", &self.video_base_url)
      .field("timeout", &self.timeout)
      .field("rate_limit", &self.rate_limit_status())
      .finish()
  }
}
