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

pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use types::{Orientation, PhotoSize, Size};

/// The API family an endpoint belongs to. Photos and videos live under
/// different base URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Api {
  Photos,
  Videos,
}

/// The currently supported Pexels endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
  // Photo endpoints
  SearchPhotos,
  CuratedPhotos,
  Photo(u64),

  // Video endpoints
  SearchVideos,
  PopularVideos,
  Video(u64),
}

impl Endpoint {
  /// Which base URL the endpoint is resolved against
  pub fn api(&self) -> Api {
    match self {
      Endpoint::SearchPhotos | Endpoint::CuratedPhotos | Endpoint::Photo(_) => Api::Photos,
      Endpoint::SearchVideos | Endpoint::PopularVideos | Endpoint::Video(_) => Api::Videos,
    }
  }

  /// Path relative to the API base URL, without a leading slash
  pub fn path(&self) -> String {
    match self {
      Endpoint::SearchPhotos | Endpoint::SearchVideos => "search".to_string(),
      Endpoint::CuratedPhotos => "curated".to_string(),
      Endpoint::PopularVideos => "popular".to_string(),
      Endpoint::Photo(id) => format!("photos/{}", id),
      Endpoint::Video(id) => format!("videos/{}", id),
    }
  }
}

impl std::fmt::Display for Endpoint {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      // Photo endpoints
      Endpoint::SearchPhotos => write!(f, "SEARCH_PHOTOS"),
      Endpoint::CuratedPhotos => write!(f, "CURATED_PHOTOS"),
      Endpoint::Photo(id) => write!(f, "PHOTO({})", id),

      // Video endpoints
      Endpoint::SearchVideos => write!(f, "SEARCH_VIDEOS"),
      Endpoint::PopularVideos => write!(f, "POPULAR_VIDEOS"),
      Endpoint::Video(id) => write!(f, "VIDEO({})", id),
    }
  }
}

/// Base URL for the Pexels photo API
pub const PHOTO_API_BASE_URL: &str = "https://api.pexels.com/v1";

/// Base URL for the Pexels video API
pub const VIDEO_API_BASE_URL: &str = "https://api.pexels.com/videos";

/// Default client-side quota, requests per hour
pub const DEFAULT_RATE_LIMIT: u32 = 200;

/// Largest page size the API honours
pub const MAX_PER_PAGE: u32 = 80;

/// Upper bound for the page drawn by the random photo/video helpers
pub const RANDOM_PAGE_CEILING: u32 = 1000;

/// Response header carrying the remaining monthly quota
pub const RATE_LIMIT_REMAINING_HEADER: &str = "X-Ratelimit-Remaining";
/// Response header carrying the total monthly quota
pub const RATE_LIMIT_LIMIT_HEADER: &str = "X-Ratelimit-Limit";
/// Response header carrying the UNIX timestamp at which the quota resets
pub const RATE_LIMIT_RESET_HEADER: &str = "X-Ratelimit-Reset";

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_endpoint_paths() {
    assert_eq!(Endpoint::SearchPhotos.path(), "search");
    assert_eq!(Endpoint::CuratedPhotos.path(), "curated");
    assert_eq!(Endpoint::Photo(2014422).path(), "photos/2014422");
    assert_eq!(Endpoint::SearchVideos.path(), "search");
    assert_eq!(Endpoint::PopularVideos.path(), "popular");
    assert_eq!(Endpoint::Video(857251).path(), "videos/857251");
  }

  #[test]
  fn test_endpoint_api_family() {
    assert_eq!(Endpoint::SearchPhotos.api(), Api::Photos);
    assert_eq!(Endpoint::Photo(1).api(), Api::Photos);
    assert_eq!(Endpoint::PopularVideos.api(), Api::Videos);
    assert_eq!(Endpoint::Video(1).api(), Api::Videos);
  }

  #[test]
  fn test_endpoint_display() {
    assert_eq!(Endpoint::CuratedPhotos.to_string(), "CURATED_PHOTOS");
    assert_eq!(Endpoint::Video(42).to_string(), "VIDEO(42)");
  }
}
