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

//! Photo endpoints
//!
//! - Keyword search with optional orientation, size, color and locale filters
//! - The curated feed maintained by the Pexels team
//! - Single photo lookup by id
//! - A random photo, drawn from a random page of the curated feed

use super::{impl_endpoint_base, random_page, DirectRateLimiter, EndpointBase};
use crate::transport::{Params, Transport};
use px_core::{Endpoint, Orientation, Result, Size};
use px_models::photos::{CuratedPhotos, Photo, PhotoSearchResult};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Filters for a photo search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoSearchOptions {
  /// Search term, e.g. `ocean` or `people`
  pub query: String,
  /// Restrict to one orientation
  pub orientation: Option<Orientation>,
  /// Minimum photo size
  pub size: Option<Size>,
  /// Named color (`red`, `turquoise`, ...) or hex code without `#`
  pub color: Option<String>,
  /// Search locale, e.g. `en-US`
  pub locale: Option<String>,
  /// Page number
  pub page: Option<u32>,
  /// Results per page
  pub per_page: Option<u32>,
}

impl PhotoSearchOptions {
  /// Options with only the search term set
  pub fn new(query: impl Into<String>) -> Self {
    Self {
      query: query.into(),
      orientation: None,
      size: None,
      color: None,
      locale: None,
      page: None,
      per_page: None,
    }
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

  /// Set the color filter
  pub fn color(mut self, color: impl Into<String>) -> Self {
    self.color = Some(color.into());
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
    if let Some(color) = &self.color {
      params.push(("color", color.clone()));
    }
    if let Some(locale) = &self.locale {
      params.push(("locale", locale.clone()));
    }

    params
  }
}

/// Photo endpoints
pub struct PhotoEndpoints {
  transport: Arc<Transport>,
  rate_limiter: Arc<DirectRateLimiter>,
}

impl PhotoEndpoints {
  /// Create a new photo endpoints instance
  pub fn new(transport: Arc<Transport>, rate_limiter: Arc<DirectRateLimiter>) -> Self {
    Self { transport, rate_limiter }
  }

  /// Search photos by keyword
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use px_client::PexelsClient;
  /// # use px_core::Config;
  /// # async fn run() -> px_core::Result<()> {
  /// let client = PexelsClient::new(Config::from_env()?)?;
  /// let result = client.photos().search("waves", 1, 15).await?;
  /// for photo in &result.photos {
  ///     println!("{} by {}", photo.src.medium, photo.photographer);
  /// }
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self))]
  pub async fn search(&self, query: &str, page: u32, per_page: u32) -> Result<PhotoSearchResult> {
    self.search_with_options(&PhotoSearchOptions::new(query).page(page).per_page(per_page)).await
  }

  /// Search photos with the full set of filters
  #[instrument(skip(self), fields(query = %options.query))]
  pub async fn search_with_options(&self, options: &PhotoSearchOptions) -> Result<PhotoSearchResult> {
    self.wait_for_rate_limit().await?;
    self.transport.get(Endpoint::SearchPhotos, options.params()).await
  }

  /// Get the curated feed, refreshed hourly by the Pexels team
  #[instrument(skip(self))]
  pub async fn curated(&self, page: u32, per_page: u32) -> Result<CuratedPhotos> {
    self.wait_for_rate_limit().await?;

    let params = vec![("per_page", per_page.to_string()), ("page", page.to_string())];
    self.transport.get(Endpoint::CuratedPhotos, params).await
  }

  /// Get a single photo by id
  #[instrument(skip(self))]
  pub async fn get(&self, id: u64) -> Result<Photo> {
    self.wait_for_rate_limit().await?;
    self.transport.get(Endpoint::Photo(id), Vec::new()).await
  }

  /// Get a pseudo-random photo
  ///
  /// Requests a single-item page of the curated feed at a random page
  /// number. Returns `None` when that page is past the end of the feed.
  #[instrument(skip(self))]
  pub async fn random(&self) -> Result<Option<Photo>> {
    let page = random_page();
    debug!("Drawing random photo from curated page {}", page);

    let curated = self.curated(page, 1).await?;
    Ok(curated.photos.into_iter().next())
  }
}

impl_endpoint_base!(PhotoEndpoints);

#[cfg(test)]
mod tests {
  use super::*;
  use crate::endpoints::test_rate_limiter;
  use px_core::Api;

  fn create_test_endpoints() -> PhotoEndpoints {
    PhotoEndpoints::new(Arc::new(Transport::new_mock()), test_rate_limiter())
  }

  #[test]
  fn test_endpoints_creation() {
    let endpoints = create_test_endpoints();
    assert_eq!(endpoints.transport.base_url(Api::Photos), "https://mock.pexels.com/v1");
  }

  #[tokio::test]
  async fn test_rate_limit_wait() {
    let endpoints = create_test_endpoints();
    let result = endpoints.wait_for_rate_limit().await;
    assert!(result.is_ok());
  }

  #[test]
  fn test_search_params_minimal() {
    let params = PhotoSearchOptions::new("nature").params();
    assert_eq!(params, vec![("query", "nature".to_string())]);
  }

  #[test]
  fn test_search_params_full() {
    let params = PhotoSearchOptions::new("tigers")
      .page(3)
      .per_page(40)
      .orientation(Orientation::Portrait)
      .size(Size::Large)
      .color("red")
      .locale("de-DE")
      .params();

    assert_eq!(
      params,
      vec![
        ("query", "tigers".to_string()),
        ("per_page", "40".to_string()),
        ("page", "3".to_string()),
        ("orientation", "portrait".to_string()),
        ("size", "large".to_string()),
        ("color", "red".to_string()),
        ("locale", "de-DE".to_string()),
      ]
    );
  }
}
