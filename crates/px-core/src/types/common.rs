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

//! Query option enums shared by the photo and video endpoints

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Desired media orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
  Landscape,
  Portrait,
  Square,
}

impl std::fmt::Display for Orientation {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Orientation::Landscape => write!(f, "landscape"),
      Orientation::Portrait => write!(f, "portrait"),
      Orientation::Square => write!(f, "square"),
    }
  }
}

impl FromStr for Orientation {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "landscape" => Ok(Orientation::Landscape),
      "portrait" => Ok(Orientation::Portrait),
      "square" => Ok(Orientation::Square),
      other => Err(format!("unknown orientation `{}`", other)),
    }
  }
}

/// Minimum media size filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
  /// 24MP photos, 4K videos
  Large,
  /// 12MP photos, Full HD videos
  Medium,
  /// 4MP photos, HD videos
  Small,
}

impl std::fmt::Display for Size {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Size::Large => write!(f, "large"),
      Size::Medium => write!(f, "medium"),
      Size::Small => write!(f, "small"),
    }
  }
}

impl FromStr for Size {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "large" => Ok(Size::Large),
      "medium" => Ok(Size::Medium),
      "small" => Ok(Size::Small),
      other => Err(format!("unknown size `{}`", other)),
    }
  }
}

/// Named size variants of a photo's `src` block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoSize {
  Original,
  Large2x,
  Large,
  Medium,
  Small,
  Portrait,
  Landscape,
  Square,
  Tiny,
}

impl PhotoSize {
  /// All variants, largest first
  pub const ALL: [PhotoSize; 9] = [
    PhotoSize::Original,
    PhotoSize::Large2x,
    PhotoSize::Large,
    PhotoSize::Medium,
    PhotoSize::Small,
    PhotoSize::Portrait,
    PhotoSize::Landscape,
    PhotoSize::Square,
    PhotoSize::Tiny,
  ];
}

impl std::fmt::Display for PhotoSize {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      PhotoSize::Original => write!(f, "original"),
      PhotoSize::Large2x => write!(f, "large2x"),
      PhotoSize::Large => write!(f, "large"),
      PhotoSize::Medium => write!(f, "medium"),
      PhotoSize::Small => write!(f, "small"),
      PhotoSize::Portrait => write!(f, "portrait"),
      PhotoSize::Landscape => write!(f, "landscape"),
      PhotoSize::Square => write!(f, "square"),
      PhotoSize::Tiny => write!(f, "tiny"),
    }
  }
}

impl FromStr for PhotoSize {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    PhotoSize::ALL
      .iter()
      .copied()
      .find(|size| size.to_string() == s.to_lowercase())
      .ok_or_else(|| format!("unknown photo size `{}`", s))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_orientation_round_trip() {
    for o in [Orientation::Landscape, Orientation::Portrait, Orientation::Square] {
      assert_eq!(o.to_string().parse::<Orientation>().unwrap(), o);
    }
    assert!("diagonal".parse::<Orientation>().is_err());
  }

  #[test]
  fn test_size_parse_is_case_insensitive() {
    assert_eq!("LARGE".parse::<Size>().unwrap(), Size::Large);
    assert_eq!("Small".parse::<Size>().unwrap(), Size::Small);
  }

  #[test]
  fn test_photo_size_parse() {
    assert_eq!("large2x".parse::<PhotoSize>().unwrap(), PhotoSize::Large2x);
    assert_eq!("Tiny".parse::<PhotoSize>().unwrap(), PhotoSize::Tiny);
    assert!("huge".parse::<PhotoSize>().is_err());
  }
}
