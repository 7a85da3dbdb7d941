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

//! Video data models

use serde::{Deserialize, Serialize};

/// Response of the video search endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoSearchResult {
  /// Current page number
  pub page: u32,

  /// Number of results per page
  pub per_page: u32,

  /// Total number of matching videos
  pub total_results: u64,

  /// URL of the search on pexels.com
  pub url: Option<String>,

  /// URL of the next page, absent on the last page
  pub next_page: Option<String>,

  /// URL of the previous page, absent on the first page
  pub prev_page: Option<String>,

  /// Videos on this page
  pub videos: Vec<Video>,
}

/// Response of the popular videos endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularVideos {
  pub page: u32,

  pub per_page: u32,

  #[serde(default)]
  pub total_results: u64,

  pub url: Option<String>,

  pub next_page: Option<String>,

  pub prev_page: Option<String>,

  pub videos: Vec<Video>,
}

/// A single video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
  /// Video id
  pub id: u64,

  /// Width in pixels
  pub width: u32,

  /// Height in pixels
  pub height: u32,

  /// Pexels page for the video
  pub url: String,

  /// Screenshot of the video
  pub image: String,

  /// Undocumented by the API, kept opaque
  pub full_res: Option<serde_json::Value>,

  /// Tags, usually empty
  #[serde(default)]
  pub tags: Vec<String>,

  /// Duration in seconds
  pub duration: f64,

  /// Uploader
  pub user: Option<VideoUser>,

  /// Encoded variants of the video
  #[serde(default)]
  pub video_files: Vec<VideoFile>,

  /// Preview pictures
  #[serde(default)]
  pub video_pictures: Vec<VideoPicture>,
}

impl Video {
  /// The widest file on offer, ties broken by list order
  pub fn best_file(&self) -> Option<&VideoFile> {
    self
      .video_files
      .iter()
      .rev()
      .max_by_key(|file| file.width.unwrap_or(0))
  }

  /// Files of the given quality label (`hd`, `sd`, `uhd`, `hls`)
  pub fn files_with_quality<'a>(&'a self, quality: &'a str) -> impl Iterator<Item = &'a VideoFile> {
    self.video_files.iter().filter(move |file| file.quality.as_deref() == Some(quality))
  }
}

/// The uploader of a video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoUser {
  pub id: u64,
  pub name: String,
  pub url: String,
}

/// One encoded variant of a video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoFile {
  /// File id
  pub id: u64,

  /// Quality label, `null` for HLS playlists
  pub quality: Option<String>,

  /// MIME type, e.g. `video/mp4`
  pub file_type: String,

  /// Width in pixels, `null` for HLS playlists
  pub width: Option<u32>,

  /// Height in pixels, `null` for HLS playlists
  pub height: Option<u32>,

  /// Frames per second
  pub fps: Option<f64>,

  /// Download link
  pub link: String,
}

/// A preview picture taken from a video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoPicture {
  pub id: u64,
  pub picture: String,
  /// Position of the picture within the video
  pub nr: u32,
}
