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

//! Photo data models

use px_core::PhotoSize;
use serde::{Deserialize, Serialize};

/// Response of the photo search endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoSearchResult {
  /// Current page number
  pub page: u32,

  /// Number of results per page
  pub per_page: u32,

  /// Total number of matching photos
  pub total_results: u64,

  /// URL of the next page, absent on the last page
  pub next_page: Option<String>,

  /// URL of the previous page, absent on the first page
  pub prev_page: Option<String>,

  /// Photos on this page
  pub photos: Vec<Photo>,
}

/// Response of the curated photos endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuratedPhotos {
  pub page: u32,

  pub per_page: u32,

  #[serde(default)]
  pub total_results: u64,

  pub next_page: Option<String>,

  pub prev_page: Option<String>,

  pub photos: Vec<Photo>,
}

/// A single photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
  /// Photo id
  pub id: u64,

  /// Width of the original in pixels
  pub width: u32,

  /// Height of the original in pixels
  pub height: u32,

  /// Pexels page for the photo
  pub url: String,

  /// Photographer name
  pub photographer: String,

  /// Photographer's Pexels profile
  pub photographer_url: String,

  /// Photographer id
  pub photographer_id: Option<u64>,

  /// Average color as a hex code, e.g. `#978E82`
  pub avg_color: Option<String>,

  /// Image URLs in different sizes
  pub src: PhotoSource,

  /// Whether the authenticated user liked the photo
  #[serde(default)]
  pub liked: bool,

  /// Alt text
  pub alt: Option<String>,
}

impl Photo {
  /// Width over height of the original, `None` for a zero height
  pub fn aspect_ratio(&self) -> Option<f64> {
    if self.height == 0 {
      return None;
    }
    Some(self.width as f64 / self.height as f64)
  }

  /// Human readable title, falling back to the id when there is no alt text
  pub fn title(&self) -> String {
    self
      .alt
      .as_deref()
      .filter(|alt| !alt.trim().is_empty())
      .map(str::to_string)
      .unwrap_or_else(|| format!("Pexels Photo {}", self.id))
  }
}

/// Size variants of a photo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoSource {
  /// Original size as uploaded
  pub original: String,

  /// Resized to 940px height
  pub large: String,

  /// Resized to 940px height at double density
  pub large2x: String,

  /// Resized to 350px height
  pub medium: String,

  /// Resized to 130px height
  pub small: String,

  /// Cropped to 800x1200
  pub portrait: String,

  /// Cropped to 1200x627
  pub landscape: String,

  /// Cropped to 280x200
  pub tiny: String,

  /// Cropped to 1:1
  #[serde(default)]
  pub square: String,
}

impl PhotoSource {
  /// URL for the given size variant
  pub fn url(&self, size: PhotoSize) -> &str {
    match size {
      PhotoSize::Original => &self.original,
      PhotoSize::Large2x => &self.large2x,
      PhotoSize::Large => &self.large,
      PhotoSize::Medium => &self.medium,
      PhotoSize::Small => &self.small,
      PhotoSize::Portrait => &self.portrait,
      PhotoSize::Landscape => &self.landscape,
      PhotoSize::Square => &self.square,
      PhotoSize::Tiny => &self.tiny,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_photo_json() -> &'static str {
    r##"{
      "id": 2014422,
      "width": 3024,
      "height": 3024,
      "url": "https://www.pexels.com/photo/brown-rocks-during-golden-hour-2014422/",
      "photographer": "Joey Farina",
      "photographer_url": "https://www.pexels.com/@joey",
      "photographer_id": 680589,
      "avg_color": "#978E82",
      "src": {
        "original": "https://images.pexels.com/photos/2014422/pexels-photo-2014422.jpeg",
        "large2x": "https://images.pexels.com/photos/2014422/pexels-photo-2014422.jpeg?auto=compress&cs=tinysrgb&dpr=2&h=650&w=940",
        "large": "https://images.pexels.com/photos/2014422/pexels-photo-2014422.jpeg?auto=compress&cs=tinysrgb&h=650&w=940",
        "medium": "https://images.pexels.com/photos/2014422/pexels-photo-2014422.jpeg?auto=compress&cs=tinysrgb&h=350",
        "small": "https://images.pexels.com/photos/2014422/pexels-photo-2014422.jpeg?auto=compress&cs=tinysrgb&h=130",
        "portrait": "https://images.pexels.com/photos/2014422/pexels-photo-2014422.jpeg?auto=compress&cs=tinysrgb&fit=crop&h=1200&w=800",
        "landscape": "https://images.pexels.com/photos/2014422/pexels-photo-2014422.jpeg?auto=compress&cs=tinysrgb&fit=crop&h=627&w=1200",
        "tiny": "https://images.pexels.com/photos/2014422/pexels-photo-2014422.jpeg?auto=compress&cs=tinysrgb&dpr=1&fit=crop&h=200&w=280"
      },
      "liked": false,
      "alt": "Brown Rocks During Golden Hour"
    }"##
  }

  #[test]
  fn test_photo_deserialize() {
    let photo: Photo = serde_json::from_str(sample_photo_json()).unwrap();

    assert_eq!(photo.id, 2014422);
    assert_eq!(photo.width, 3024);
    assert_eq!(photo.photographer, "Joey Farina");
    assert_eq!(photo.photographer_id, Some(680589));
    assert_eq!(photo.avg_color.as_deref(), Some("#978E82"));
    assert!(!photo.liked);
    assert_eq!(photo.title(), "Brown Rocks During Golden Hour");
    assert!(photo.src.original.ends_with("pexels-photo-2014422.jpeg"));
    // no square variant in this payload
    assert_eq!(photo.src.square, "");
  }

  #[test]
  fn test_photo_source_lookup() {
    let photo: Photo = serde_json::from_str(sample_photo_json()).unwrap();

    assert_eq!(photo.src.url(PhotoSize::Original), photo.src.original);
    assert_eq!(photo.src.url(PhotoSize::Tiny), photo.src.tiny);
    assert!(photo.src.url(PhotoSize::Medium).contains("h=350"));
  }

  #[test]
  fn test_photo_optional_fields_null_or_missing() {
    let json = r#"{
      "id": 1,
      "width": 400,
      "height": 200,
      "url": "https://www.pexels.com/photo/1/",
      "photographer": "Someone",
      "photographer_url": "https://www.pexels.com/@someone",
      "avg_color": null,
      "alt": "",
      "src": {
        "original": "o", "large": "l", "large2x": "l2", "medium": "m",
        "small": "s", "portrait": "p", "square": "sq", "landscape": "ls", "tiny": "t"
      }
    }"#;

    let photo: Photo = serde_json::from_str(json).unwrap();
    assert_eq!(photo.photographer_id, None);
    assert_eq!(photo.avg_color, None);
    assert_eq!(photo.aspect_ratio(), Some(2.0));
    assert_eq!(photo.title(), "Pexels Photo 1");
    assert_eq!(photo.src.url(PhotoSize::Square), "sq");
  }

  #[test]
  fn test_search_result_deserialize() {
    let json = format!(
      r#"{{
        "total_results": 10000,
        "page": 1,
        "per_page": 1,
        "photos": [{}],
        "next_page": "https://api.pexels.com/v1/search/?page=2&per_page=1&query=nature"
      }}"#,
      sample_photo_json()
    );

    let result: PhotoSearchResult = serde_json::from_str(&json).unwrap();
    assert_eq!(result.total_results, 10000);
    assert_eq!(result.page, 1);
    assert_eq!(result.photos.len(), 1);
    assert!(result.next_page.is_some());
    assert!(result.prev_page.is_none());
  }

  #[test]
  fn test_curated_without_total_results() {
    let json = r#"{ "page": 1000, "per_page": 1, "photos": [] }"#;

    let curated: CuratedPhotos = serde_json::from_str(json).unwrap();
    assert_eq!(curated.total_results, 0);
    assert!(curated.photos.is_empty());
  }
}
