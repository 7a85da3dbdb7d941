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

//! The top-level client handing out endpoint groups

use crate::endpoints::{photos::PhotoEndpoints, videos::VideoEndpoints, DirectRateLimiter};
use crate::rate_limit::RateLimitStatus;
use crate::transport::Transport;
use governor::{Quota, RateLimiter};
use px_core::{Config, Result};
use std::num::NonZeroU32;
use std::sync::Arc;

/// Main Pexels API client
///
/// Holds the API token and a single reusable HTTP transport. Every call
/// issues exactly one GET request; the quota the server reports on each
/// response is kept for [`PexelsClient::remaining_requests`].
///
/// # Examples
///
/// ```rust,no_run
/// use px_client::PexelsClient;
/// use px_core::Config;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = PexelsClient::new(Config::from_env()?)?;
///
///     let photo = client.photos().get(2014422).await?;
///     println!("{} by {}", photo.src.large, photo.photographer);
///
///     let popular = client.videos().popular(1, 10).await?;
///     println!("{} popular videos", popular.videos.len());
///
///     println!("Requests left this month: {:?}", client.remaining_requests());
///     Ok(())
/// }
/// ```
pub struct PexelsClient {
  rate_limiter: Arc<DirectRateLimiter>,
  transport: Arc<Transport>,
}

impl PexelsClient {
  /// Create a new Pexels API client
  ///
  /// The client-side quota is `config.rate_limit` requests per hour; a zero
  /// value falls back to [`px_core::DEFAULT_RATE_LIMIT`].
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    let rate_limit = NonZeroU32::new(config.rate_limit)
      .or(NonZeroU32::new(px_core::DEFAULT_RATE_LIMIT))
      .unwrap_or(NonZeroU32::MIN);
    let rate_limiter = Arc::new(RateLimiter::direct(Quota::per_hour(rate_limit)));

    Self::with_rate_limiter(config, rate_limiter)
  }

  /// Create a new client with custom rate limiting
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created.
  pub fn with_rate_limiter(config: Config, rate_limiter: Arc<DirectRateLimiter>) -> Result<Self> {
    Ok(Self { transport: Arc::new(Transport::new(&config)?), rate_limiter })
  }

  /// Access the photo endpoints
  pub fn photos(&self) -> PhotoEndpoints {
    PhotoEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// Access the video endpoints
  pub fn videos(&self) -> VideoEndpoints {
    VideoEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// Requests left in the current period as last reported by the server
  ///
  /// `None` until a response carried a readable `X-Ratelimit-Remaining` header.
  pub fn remaining_requests(&self) -> Option<u32> {
    self.transport.rate_limit_status().map(|status| status.remaining)
  }

  /// Full quota snapshot from the most recent response that carried one
  pub fn rate_limit_status(&self) -> Option<RateLimitStatus> {
    self.transport.rate_limit_status()
  }

  /// Wait until the client-side rate limiter allows the next request
  ///
  /// Endpoint methods do this themselves.
  pub async fn wait_for_rate_limit(&self) -> Result<()> {
    self.rate_limiter.until_ready().await;
    Ok(())
  }
}

impl std::fmt::Debug for PexelsClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("PexelsClient")
      .field("transport", &self.transport)
      .field("rate_limiter", &"RateLimiter")
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use px_core::Api;

  #[test]
  fn test_client_creation() {
    let config = Config::default_with_key("test_key".to_string());

    let client = PexelsClient::new(config).expect("Failed to create client");
    assert_eq!(client.remaining_requests(), None);
    assert_eq!(client.rate_limit_status(), None);
  }

  #[test]
  fn test_zero_rate_limit_falls_back() {
    let mut config = Config::default_with_key("test_key".to_string());
    config.rate_limit = 0;

    assert!(PexelsClient::new(config).is_ok());
  }

  #[test]
  fn test_custom_hosts() {
    let config = Config::default_with_key("test_key".to_string()).with_host("http://localhost:9999");

    let client = PexelsClient::new(config).unwrap();
    assert_eq!(client.transport.base_url(Api::Photos), "http://localhost:9999/v1");
    assert_eq!(client.transport.base_url(Api::Videos), "http://localhost:9999/videos");
  }

  #[test]
  fn test_debug_hides_token() {
    let client = PexelsClient::new(Config::default_with_key("secret-token".to_string())).unwrap();
    assert!(!format!("{:?}", client).contains("secret-token"));
  }

  #[tokio::test]
  async fn test_wait_for_rate_limit() {
    let client = PexelsClient::new(Config::default_with_key("test_key".to_string())).unwrap();
    assert!(client.wait_for_rate_limit().await.is_ok());
  }
}
