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

//! Video endpoints

use super::{impl_endpoint_base, random_page, DirectRateLimiter, EndpointBase};
use crate::transport::{Params, Transport};
use px_core::{Endpoint, Orientation, Result, Size};
use px_models::videos::{PopularVideos, Video, VideoSearchResult};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Filters for a video search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSearchOptions {
  /// Search term
  pub query: String,
  /// Restrict to one orientation
  pub orientation: Option<Orientation>,
  /// Minimum video size
  pub size: Option<Size>,
  /// Search locale, e.g. `en-US`
  pub locale: Option<String>,
  /// Page number
  pub page: Option<u32>,
  /// Results per page
  pub per_page: Option<u32>,
}

impl VideoSearchOptions {
  /// Options with only the search term set
  pub fn new(query: impl Into<String>) -> Self {
    Self { query: query.into(), orientation: None, size: None, locale: None, page: None, per_page: None }
  }

  /// Set the orientation filter
  pub fn orientation(mut self, orientation: Orientation) -> Self {
    self.orientation = Some(orientation);
    self
  }

  /// Set the minimum size
  pub fn size(mut self, size: Size) -> Self {
    self.size = Some(size);
    self
  }

  /// Set the locale
  pub fn locale(mut self, locale: impl Into<String>) -> Self {
    self.locale = Some(locale.into());
    self
  }

  /// Set the page number
  pub fn page(mut self, page: u32) -> Self {
    self.page = Some(page);
    self
  }

  /// Set the page size
  pub fn per_page(mut self, per_page: u32) -> Self {
    self.per_page = Some(per_page);
    self
  }

  fn params(&self) -> Params {
    let mut params = vec![("query", self.query.clone())];

    if let Some(per_page) = self.per_page {
      params.push(("per_page", per_page.to_string()));
    }
    if let Some(page) = self.page {
      params.push(("page", page.to_string()));
    }
    if let Some(orientation) = self.orientation {
      params.push(("orientation", orientation.to_string()));
    }
    if let Some(size) = self.size {
      params.push(("size", size.to_string()));
    }
    if let Some(locale) = &self.locale {
      params.push(("locale", locale.clone()));
    }

    params
  }
}

/// Filters for the popular videos feed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopularVideoOptions {
  /// Minimum width in pixels
  pub min_width: Option<u32>,
  /// Minimum height in pixels
  pub min_height: Option<u32>,
  /// Minimum duration in seconds
  pub min_duration: Option<u32>,
  /// Maximum duration in seconds
  pub max_duration: Option<u32>,
  /// Page number
  pub page: Option<u32>,
  /// Results per page
  pub per_page: Option<u32>,
}

impl PopularVideoOptions {
  fn params(&self) -> Params {
    [
      ("per_page", self.per_page),
      ("page", self.page),
      ("min_width", self.min_width),
      ("min_height", self.min_height),
      ("min_duration", self.min_duration),
      ("max_duration", self.max_duration),
    ]
    .into_iter()
    .filter_map(|(key, value)| value.map(|v| (key, v.to_string())))
    .collect()
  }
}

/// Video endpoints
pub struct VideoEndpoints {
  transport: Arc<Transport>,
  rate_limiter: Arc<DirectRateLimiter>,
}

impl VideoEndpoints {
  /// Create a new video endpoints instance
  pub fn new(transport: Arc<Transport>, rate_limiter: Arc<DirectRateLimiter>) -> Self {
    Self { transport, rate_limiter }
  }

  /// Search videos by keyword
  #[instrument(skip(self))]
  pub async fn search(&self, query: &str, page: u32, per_page: u32) -> Result<VideoSearchResult> {
    self.search_with_options(&VideoSearchOptions::new(query).page(page).per_page(per_page)).await
  }

  /// Search videos with the full set of filters
  #[instrument(skip(self), fields(query = %options.query))]
  pub async fn search_with_options(&self, options: &VideoSearchOptions) -> Result<VideoSearchResult> {
    self.wait_for_rate_limit().await?;
    self.transport.get(Endpoint::SearchVideos, options.params()).await
  }

  /// Get the current popular videos
  #[instrument(skip(self))]
  pub async fn popular(&self, page: u32, per_page: u32) -> Result<PopularVideos> {
    let options = PopularVideoOptions { page: Some(page), per_page: Some(per_page), ..Default::default() };
    self.popular_with_options(&options).await
  }

  /// Get popular videos filtered by dimensions and duration
  #[instrument(skip(self))]
  pub async fn popular_with_options(&self, options: &PopularVideoOptions) -> Result<PopularVideos> {
    self.wait_for_rate_limit().await?;
    self.transport.get(Endpoint::PopularVideos, options.params()).await
  }

  /// Get a single video by id
  #[instrument(skip(self))]
  pub async fn get(&self, id: u64) -> Result<Video> {
    self.wait_for_rate_limit().await?;
    self.transport.get(Endpoint::Video(id), Vec::new()).await
  }

  /// Get a pseudo-random video from a random single-item page of the
  /// popular feed. `None` when the page is past the end of the feed.
  #[instrument(skip(self))]
  pub async fn random(&self) -> Result<Option<Video>> {
    let page = random_page();
    debug!("Drawing random video from popular page {}", page);

    let popular = self.popular(page, 1).await?;
    Ok(popular.videos.into_iter().next())
  }
}

impl_endpoint_base!(VideoEndpoints);

#[cfg(test)]
mod tests {
  use super::*;
  use crate::endpoints::test_rate_limiter;
  use px_core::Api;

  fn create_test_endpoints() -> VideoEndpoints {
    VideoEndpoints::new(Arc::new(Transport::new_mock()), test_rate_limiter())
  }

  #[test]
  fn test_endpoints_creation() {
    let endpoints = create_test_endpoints();
    assert_eq!(endpoints.transport.base_url(Api::Videos), "https://mock.pexels.com/videos");
  }

  #[tokio::test]
  async fn test_rate_limit_wait() {
    let endpoints = create_test_endpoints();
    assert!(endpoints.wait_for_rate_limit().await.is_ok());
  }

  #[test]
  fn test_search_params() {
    let params = VideoSearchOptions::new("waves").page(2).per_page(5).size(Size::Medium).params();

    assert_eq!(
      params,
      vec![
        ("query", "waves".to_string()),
        ("per_page", "5".to_string()),
        ("page", "2".to_string()),
        ("size", "medium".to_string()),
      ]
    );
  }

  #[test]
  fn test_popular_params_skip_unset() {
    let options = PopularVideoOptions { min_duration: Some(10), per_page: Some(1), ..Default::default() };

    assert_eq!(options.params(), vec![("per_page", "1".to_string()), ("min_duration", "10".to_string())]);
    assert!(PopularVideoOptions::default().params().is_empty());
  }
}
