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

//! Random Media Example
//!
//! Fetches one random photo and one random video, then prints what is left
//! of the monthly quota.
//!
//! Requires `PEXELS_API_KEY` in the environment or a `.env` file.

use px_client::PexelsClient;
use px_core::{Config, PhotoSize};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt::init();

  let config = Config::from_env()?;
  let client = PexelsClient::new(config)?;

  match client.photos().random().await? {
    Some(photo) => {
      println!("📷 {} by {}", photo.title(), photo.photographer);
      for size in [PhotoSize::Original, PhotoSize::Large, PhotoSize::Tiny] {
        println!("   {:<9} {}", size.to_string(), photo.src.url(size));
      }
    }
    None => println!("📷 Drew an empty curated page, try again"),
  }

  match client.videos().random().await? {
    Some(video) => {
      println!("🎬 {} ({}s)", video.url, video.duration);
      if let Some(file) = video.best_file() {
        println!("   best file: {}x{} {}", file.width.unwrap_or(0), file.height.unwrap_or(0), file.link);
      }
    }
    None => println!("🎬 Drew an empty popular page, try again"),
  }

  match client.rate_limit_status() {
    Some(status) => println!("\nRequests remaining: {} / {:?}", status.remaining, status.limit),
    None => println!("\nServer did not report a quota"),
  }

  Ok(())
}
