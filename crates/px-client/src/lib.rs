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

//! # px-client
//!
//! A Pexels API client for Rust.
//!
//! ## Features
//!
//! - **Photos**: keyword search, the curated feed, lookup by id, a random pick
//! - **Videos**: keyword search, the popular feed, lookup by id, a random pick
//! - **Quota tracking**: the `X-Ratelimit-*` headers of every response are
//!   recorded and exposed through [`PexelsClient::remaining_requests`]
//! - **Rate Limiting**: a client-side hourly quota via `governor`
//! - **Type Safe**: responses decode into the structs of `px-models`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use px_client::PexelsClient;
//! use px_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = PexelsClient::new(config)?;
//!
//!     let result = client.photos().search("waves", 1, 15).await?;
//!     println!("{} photos match", result.total_results);
//!
//!     if let Some(video) = client.videos().random().await? {
//!         println!("Random video: {}", video.url);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, px_core::Error>`. Non-success statuses map to
//! `Unauthorized`, `NotFound`, `RateLimit` or `Api`; bodies that do not match
//! the schema map to `Parse`.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod rate_limit;
pub mod transport;

// Re-export the main client and common types
pub use client::PexelsClient;
pub use px_core::{Config, Error, Result};
pub use px_models::*;
pub use rate_limit::RateLimitStatus;

// Re-export endpoint groups for direct access if needed
pub use endpoints::{
  photos::{PhotoEndpoints, PhotoSearchOptions},
  videos::{PopularVideoOptions, VideoEndpoints, VideoSearchOptions},
};
