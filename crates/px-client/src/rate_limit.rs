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

//! Server-reported quota tracking
//!
//! Pexels reports the monthly quota on every response through the
//! `X-Ratelimit-Limit`, `X-Ratelimit-Remaining` and `X-Ratelimit-Reset`
//! headers. Only the remaining count is required for a snapshot.

use chrono::{DateTime, Utc};
use px_core::{RATE_LIMIT_LIMIT_HEADER, RATE_LIMIT_REMAINING_HEADER, RATE_LIMIT_RESET_HEADER};
use reqwest::header::HeaderMap;
use serde::Serialize;

/// Remaining requests below which a warning is logged
pub const LOW_QUOTA_THRESHOLD: u32 = 10;

/// Snapshot of the quota headers of one response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateLimitStatus {
  /// Total requests allowed in the current period
  pub limit: Option<u32>,
  /// Requests left in the current period
  pub remaining: u32,
  /// When the current period ends
  pub reset: Option<DateTime<Utc>>,
}

impl RateLimitStatus {
  /// Read the quota headers. Returns `None` when the remaining count is
  /// missing or not an integer.
  pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
    let remaining = header_u64(headers, RATE_LIMIT_REMAINING_HEADER)?;
    let remaining = u32::try_from(remaining).ok()?;

    let limit = header_u64(headers, RATE_LIMIT_LIMIT_HEADER).and_then(|v| u32::try_from(v).ok());
    let reset = header_u64(headers, RATE_LIMIT_RESET_HEADER)
      .and_then(|secs| i64::try_from(secs).ok())
      .and_then(|secs| DateTime::from_timestamp(secs, 0));

    Some(Self { limit, remaining, reset })
  }

  /// No requests left until the reset
  pub fn is_exhausted(&self) -> bool {
    self.remaining == 0
  }

  /// Fewer than [`LOW_QUOTA_THRESHOLD`] requests left
  pub fn is_low(&self) -> bool {
    self.remaining < LOW_QUOTA_THRESHOLD
  }
}

fn header_u64(headers: &HeaderMap, name: &str) -> Option<u64> {
  headers.get(name)?.to_str().ok()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
  use super::*;
  use reqwest::header::HeaderValue;

  fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
      map.insert(*name, HeaderValue::from_static(value));
    }
    map
  }

  #[test]
  fn test_parse_full_headers() {
    let map = headers(&[
      ("x-ratelimit-limit", "20000"),
      ("x-ratelimit-remaining", "19684"),
      ("x-ratelimit-reset", "1590529646"),
    ]);

    let status = RateLimitStatus::from_headers(&map).unwrap();
    assert_eq!(status.limit, Some(20000));
    assert_eq!(status.remaining, 19684);
    assert_eq!(status.reset.map(|r| r.timestamp()), Some(1590529646));
    assert!(!status.is_exhausted());
    assert!(!status.is_low());
  }

  #[test]
  fn test_parse_remaining_only() {
    let map = headers(&[("x-ratelimit-remaining", " 3 ")]);

    let status = RateLimitStatus::from_headers(&map).unwrap();
    assert_eq!(status.remaining, 3);
    assert_eq!(status.limit, None);
    assert_eq!(status.reset, None);
    assert!(status.is_low());
  }

  #[test]
  fn test_missing_or_garbage_remaining() {
    assert!(RateLimitStatus::from_headers(&HeaderMap::new()).is_none());
    assert!(RateLimitStatus::from_headers(&headers(&[("x-ratelimit-remaining", "lots")])).is_none());
    assert!(RateLimitStatus::from_headers(&headers(&[("x-ratelimit-remaining", "-1")])).is_none());
  }

  #[test]
  fn test_exhausted() {
    let status = RateLimitStatus::from_headers(&headers(&[("x-ratelimit-remaining", "0")])).unwrap();
    assert!(status.is_exhausted());
  }
}
