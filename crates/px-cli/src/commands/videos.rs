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

use anyhow::Result;
use clap::Subcommand;
use px_client::{PexelsClient, PopularVideoOptions, VideoSearchOptions};
use px_core::{Orientation, Size, MAX_PER_PAGE};

use crate::output;

#[derive(Subcommand, Debug)]
pub enum VideoCommands {
  /// Search videos by keyword
  SearchVideos {
    /// Search term
    query: String,

    #[arg(short, long, default_value_t = 1)]
    page: u32,

    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u32).range(1..=MAX_PER_PAGE as i64))]
    per_page: u32,

    /// landscape, portrait or square
    #[arg(short, long)]
    orientation: Option<Orientation>,

    /// large (4K), medium (Full HD) or small (HD)
    #[arg(long)]
    size: Option<Size>,

    #[arg(long)]
    locale: Option<String>,
  },

  /// List popular videos
  Popular {
    #[arg(short, long, default_value_t = 1)]
    page: u32,

    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u32).range(1..=MAX_PER_PAGE as i64))]
    per_page: u32,

    /// Minimum width in pixels
    #[arg(long)]
    min_width: Option<u32>,

    /// Minimum height in pixels
    #[arg(long)]
    min_height: Option<u32>,

    /// Minimum duration in seconds
    #[arg(long)]
    min_duration: Option<u32>,

    /// Maximum duration in seconds
    #[arg(long)]
    max_duration: Option<u32>,
  },

  /// Show a single video
  Video {
    /// Video id
    id: u64,
  },

  /// Show a random popular video
  RandomVideo,
}

pub async fn handle_videos(client: &PexelsClient, cmd: VideoCommands, summary: bool) -> Result<()> {
  match cmd {
    VideoCommands::SearchVideos { query, page, per_page, orientation, size, locale } => {
      let mut options = VideoSearchOptions::new(query).page(page).per_page(per_page);
      options.orientation = orientation;
      options.size = size;
      options.locale = locale;

      let result = client.videos().search_with_options(&options).await?;
      output::emit(&result, summary)
    }
    VideoCommands::Popular { page, per_page, min_width, min_height, min_duration, max_duration } => {
      let options = PopularVideoOptions {
        min_width,
        min_height,
        min_duration,
        max_duration,
        page: Some(page),
        per_page: Some(per_page),
      };

      let result = client.videos().popular_with_options(&options).await?;
      output::emit(&result, summary)
    }
    VideoCommands::Video { id } => {
      let video = client.videos().get(id).await?;
      output::emit(&video, summary)
    }
    VideoCommands::RandomVideo => match client.videos().random().await? {
      Some(video) => output::emit(&video, summary),
      None => {
        println!("Drew an empty popular page, try again");
        Ok(())
      }
    },
  }
}
