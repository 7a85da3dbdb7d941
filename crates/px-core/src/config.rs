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

//! Configuration management for the Pexels client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Main configuration struct for the Pexels client
#[derive(Clone, Deserialize, Serialize)]
pub struct Config {
  /// Pexels API key, sent verbatim in the `Authorization` header
  pub api_key: String,

  /// Client-side rate limit (requests per hour)
  pub rate_limit: u32,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Base URL for photo endpoints
  pub photo_base_url: String,

  /// Base URL for video endpoints
  pub video_base_url: String,
}

impl Config {
  /// Load configuration from environment variables
  ///
  /// `PEXELS_API_KEY` is preferred; `PexelsToken` is accepted as a fallback.
  pub fn from_env() -> Result<Self> {
    Self::from_env_with_key(None)
  }

  /// Load configuration from environment variables, with an explicit API key
  /// taking precedence over the environment
  pub fn from_env_with_key(api_key: Option<String>) -> Result<Self> {
    dotenv().ok();

    let api_key = match api_key {
      Some(key) => key,
      None => env::var("PEXELS_API_KEY")
        .or_else(|_| env::var("PexelsToken"))
        .map_err(|_| Error::ApiKey("PEXELS_API_KEY not set".to_string()))?,
    };

    let rate_limit = env::var("PX_RATE_LIMIT")
      .unwrap_or_else(|_| crate::DEFAULT_RATE_LIMIT.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid PX_RATE_LIMIT".to_string()))?;

    let timeout_secs = env::var("PX_TIMEOUT_SECS")
      .unwrap_or_else(|_| "30".to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid PX_TIMEOUT_SECS".to_string()))?;

    let photo_base_url =
      env::var("PX_PHOTO_BASE_URL").unwrap_or_else(|_| crate::PHOTO_API_BASE_URL.to_string());

    let video_base_url =
      env::var("PX_VIDEO_BASE_URL").unwrap_or_else(|_| crate::VIDEO_API_BASE_URL.to_string());

    Ok(Config { api_key, rate_limit, timeout_secs, photo_base_url, video_base_url })
  }

  /// Create a config with default values
  pub fn default_with_key(api_key: String) -> Self {
    Config {
      api_key,
      rate_limit: crate::DEFAULT_RATE_LIMIT,
      timeout_secs: 30,
      photo_base_url: crate::PHOTO_API_BASE_URL.to_string(),
      video_base_url: crate::VIDEO_API_BASE_URL.to_string(),
    }
  }

  /// Point both API families at a single host, e.g. a mock server.
  /// Photo paths land under `/v1`, video paths under `/videos`.
  pub fn with_host(mut self, host: &str) -> Self {
    let host = host.trim_end_matches('/');
    self.photo_base_url = format!("{}/v1", host);
    self.video_base_url = format!("{}/videos", host);
    self
  }
}

// The key stays out of logs.
impl std::fmt::Debug for Config {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Config")
      .field("api_key", &"***")
      .field("rate_limit", &self.rate_limit)
      .field("timeout_secs", &self.timeout_secs)
      .field("photo_base_url", &self.photo_base_url)
      .field("video_base_url", &self.video_base_url)
      .finish()
  }
}
