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

//! Rendering of API results, either pretty JSON or one line per item

use anyhow::Result;
use px_client::PexelsClient;
use px_models::{CuratedPhotos, Photo, PhotoSearchResult, PopularVideos, Video, VideoSearchResult};
use serde::Serialize;

/// Compact, human readable rendering
pub trait Summary {
  fn summary_lines(&self) -> Vec<String>;
}

impl Summary for Photo {
  fn summary_lines(&self) -> Vec<String> {
    vec![format!(
      "{:>10}  {}x{}  {} by {}  {}",
      self.id,
      self.width,
      self.height,
      self.title(),
      self.photographer,
      self.src.original
    )]
  }
}

impl Summary for Video {
  fn summary_lines(&self) -> Vec<String> {
    let link = self.best_file().map(|file| file.link.as_str()).unwrap_or(self.url.as_str());
    vec![format!("{:>10}  {}x{}  {:>5.0}s  {}", self.id, self.width, self.height, self.duration, link)]
  }
}

fn page_header(page: u32, per_page: u32, total: u64) -> String {
  format!("page {} ({} per page, {} total)", page, per_page, total)
}

impl Summary for PhotoSearchResult {
  fn summary_lines(&self) -> Vec<String> {
    let mut lines = vec![page_header(self.page, self.per_page, self.total_results)];
    lines.extend(self.photos.iter().flat_map(Summary::summary_lines));
    lines
  }
}

impl Summary for CuratedPhotos {
  fn summary_lines(&self) -> Vec<String> {
    let mut lines = vec![page_header(self.page, self.per_page, self.total_results)];
    lines.extend(self.photos.iter().flat_map(Summary::summary_lines));
    lines
  }
}

impl Summary for VideoSearchResult {
  fn summary_lines(&self) -> Vec<String> {
    let mut lines = vec![page_header(self.page, self.per_page, self.total_results)];
    lines.extend(self.videos.iter().flat_map(Summary::summary_lines));
    lines
  }
}

impl Summary for PopularVideos {
  fn summary_lines(&self) -> Vec<String> {
    let mut lines = vec![page_header(self.page, self.per_page, self.total_results)];
    lines.extend(self.videos.iter().flat_map(Summary::summary_lines));
    lines
  }
}

/// Print a result to stdout
pub fn emit<T: Serialize + Summary>(value: &T, summary: bool) -> Result<()> {
  if summary {
    for line in value.summary_lines() {
      println!("{}", line);
    }
  } else {
    println!("{}", serde_json::to_string_pretty(value)?);
  }
  Ok(())
}

/// Print the quota the server reported on the last response
pub fn emit_quota(client: &PexelsClient) -> Result<()> {
  match client.rate_limit_status() {
    Some(status) => println!("{}", serde_json::to_string_pretty(&status)?),
    None => println!("Server did not report a quota"),
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_photo() -> Photo {
    serde_json::from_value(serde_json::json!({
      "id": 42,
      "width": 640,
      "height": 480,
      "url": "https://www.pexels.com/photo/42/",
      "photographer": "Ada",
      "photographer_url": "https://www.pexels.com/@ada",
      "alt": "Quiet lake",
      "src": {
        "original": "https://images.pexels.com/photos/42/original.jpeg",
        "large": "l", "large2x": "l2", "medium": "m", "small": "s",
        "portrait": "p", "square": "sq", "landscape": "ls", "tiny": "t"
      }
    }))
    .unwrap()
  }

  #[test]
  fn test_photo_summary() {
    let lines = sample_photo().summary_lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("640x480"));
    assert!(lines[0].contains("Quiet lake by Ada"));
    assert!(lines[0].ends_with("original.jpeg"));
  }

  #[test]
  fn test_search_summary_has_header_and_items() {
    let result = PhotoSearchResult {
      page: 2,
      per_page: 2,
      total_results: 99,
      next_page: None,
      prev_page: None,
      photos: vec![sample_photo(), sample_photo()],
    };

    let lines = result.summary_lines();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "page 2 (2 per page, 99 total)");
  }

  #[test]
  fn test_video_summary_falls_back_to_page_url() {
    let video: Video = serde_json::from_value(serde_json::json!({
      "id": 7, "width": 1920, "height": 1080, "url": "https://www.pexels.com/video/7/",
      "image": "i", "duration": 12
    }))
    .unwrap();

    let lines = video.summary_lines();
    assert!(lines[0].ends_with("https://www.pexels.com/video/7/"));
    assert!(lines[0].contains("12s"));
  }
}
