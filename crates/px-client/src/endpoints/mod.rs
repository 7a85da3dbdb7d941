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

//! Endpoint groups
//!
//! Each group shares the client's transport and rate limiter.

pub mod photos;
pub mod videos;

use governor::{
  clock::DefaultClock,
  middleware::NoOpMiddleware,
  state::{InMemoryState, NotKeyed},
  RateLimiter,
};
use px_core::{Result, RANDOM_PAGE_CEILING};
use rand::Rng;

/// The client-side rate limiter shared by all endpoint groups
pub type DirectRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>;

/// Common functionality needed by all endpoint groups
pub(crate) trait EndpointBase {
  /// Wait for rate limit before making a request
  async fn wait_for_rate_limit(&self) -> Result<()>;
}

/// Macro to implement the EndpointBase trait for endpoint structs
macro_rules! impl_endpoint_base {
  ($struct_name:ident) => {
    impl EndpointBase for $struct_name {
      async fn wait_for_rate_limit(&self) -> Result<()> {
        self.rate_limiter.until_ready().await;
        Ok(())
      }
    }
  };
}

pub(crate) use impl_endpoint_base;

/// Page number used by the random photo/video helpers
pub(crate) fn random_page() -> u32 {
  rand::rng().random_range(1..=RANDOM_PAGE_CEILING)
}

#[cfg(test)]
pub(crate) fn test_rate_limiter() -> std::sync::Arc<DirectRateLimiter> {
  use governor::Quota;
  use std::num::NonZeroU32;
  use std::sync::Arc;

  let quota = Quota::per_hour(NonZeroU32::new(200).unwrap());
  Arc::new(RateLimiter::direct(quota))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_random_page_within_bounds() {
    for _ in 0..1000 {
      let page = random_page();
      assert!((1..=RANDOM_PAGE_CEILING).contains(&page));
    }
  }
}
