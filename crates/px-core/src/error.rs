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

use thiserror::Error;

/// The main error type for px-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// API key error
  #[error("Failed to retrieve API key: {0}")]
  ApiKey(String),

  /// Serialization/Deserialization error
  #[error("Serialization error")]
  Serde(#[from] serde_json::Error),

  /// Malformed request URL
  #[error("Invalid URL: {0}")]
  Url(#[from] url::ParseError),

  /// HTTP transport error
  #[error("HTTP error: {0}")]
  Http(String),

  /// The API rejected the token (401/403)
  #[error("Unauthorized: {0}")]
  Unauthorized(String),

  /// Requested resource does not exist (404)
  #[error("Not found: {0}")]
  NotFound(String),

  /// Server-side rate limit exceeded (429)
  #[error("Rate limit exceeded: {0}")]
  RateLimit(String),

  /// Any other non-success status from the API
  #[error("API error ({status}): {message}")]
  Api { status: u16, message: String },

  /// Response body did not match the expected schema
  #[error("Parse error: {0}")]
  Parse(String),
}

impl Error {
  /// Map a non-success HTTP status and its body to an error
  pub fn from_status(status: u16, body: &str) -> Self {
    let message = if body.trim().is_empty() {
      format!("HTTP {}", status)
    } else {
      body.chars().take(200).collect()
    };

    match status {
      401 | 403 => Error::Unauthorized(message),
      404 => Error::NotFound(message),
      429 => Error::RateLimit(message),
      _ => Error::Api { status, message },
    }
  }
}

/// Result type alias for px-* crates
pub type Result<T> = std::result::Result<T, Error>;
