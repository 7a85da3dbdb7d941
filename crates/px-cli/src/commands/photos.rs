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
use px_client::{PexelsClient, PhotoSearchOptions};
use px_core::{Orientation, Size, MAX_PER_PAGE};

use crate::output;

#[derive(Subcommand, Debug)]
pub enum PhotoCommands {
  /// Search photos by keyword
  SearchPhotos {
    /// Search term
    query: String,

    /// Page number
    #[arg(short, long, default_value_t = 1)]
    page: u32,

    /// Results per page
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u32).range(1..=MAX_PER_PAGE as i64))]
    per_page: u32,

    /// landscape, portrait or square
    #[arg(short, long)]
    orientation: Option<Orientation>,

    /// large, medium or small
    #[arg(long)]
    size: Option<Size>,

    /// Color name or hex code without `#`
    #[arg(long)]
    color: Option<String>,

    /// Search locale, e.g. en-US
    #[arg(long)]
    locale: Option<String>,
  },

  /// List curated photos
  Curated {
    #[arg(short, long, default_value_t = 1)]
    page: u32,

    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u32).range(1..=MAX_PER_PAGE as i64))]
    per_page: u32,
  },

  /// Show a single photo
  Photo {
    /// Photo id
    id: u64,
  },

  /// Show a random curated photo
  RandomPhoto,
}

pub async fn handle_photos(client: &PexelsClient, cmd: PhotoCommands, summary: bool) -> Result<()> {
  match cmd {
    PhotoCommands::SearchPhotos { query, page, per_page, orientation, size, color, locale } => {
      let mut options = PhotoSearchOptions::new(query).page(page).per_page(per_page);
      options.orientation = orientation;
      options.size = size;
      options.color = color;
      options.locale = locale;

      let result = client.photos().search_with_options(&options).await?;
      output::emit(&result, summary)
    }
    PhotoCommands::Curated { page, per_page } => {
      let result = client.photos().curated(page, per_page).await?;
      output::emit(&result, summary)
    }
    PhotoCommands::Photo { id } => {
      let photo = client.photos().get(id).await?;
      output::emit(&photo, summary)
    }
    PhotoCommands::RandomPhoto => match client.photos().random().await? {
      Some(photo) => output::emit(&photo, summary),
      None => {
        println!("Drew an empty curated page, try again");
        Ok(())
      }
    },
  }
}
