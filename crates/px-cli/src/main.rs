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
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use px_client::PexelsClient;
use px_core::Config;
use tracing::info;

mod commands;
mod output;

use commands::{
  photos::{PhotoCommands, handle_photos},
  videos::{VideoCommands, handle_videos},
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "px")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Pexels API key, overrides PEXELS_API_KEY
  #[arg(long, global = true, env = "PEXELS_API_KEY", hide_env_values = true)]
  api_key: Option<String>,

  /// Print one line per item instead of JSON
  #[arg(short, long, global = true)]
  summary: bool,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
  #[command(flatten)]
  Photos(PhotoCommands),

  #[command(flatten)]
  Videos(VideoCommands),

  /// Make one minimal request and print the quota the server reports
  Quota,
}

#[tokio::main]
async fn main() -> Result<()> {
  // Load environment variables
  dotenv().ok();

  // Parse CLI arguments
  let cli = Cli::parse();

  // Initialize logging
  let log_level = if cli.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt().with_env_filter(log_level).with_writer(std::io::stderr).init();

  let config = Config::from_env_with_key(cli.api_key)?;
  let client = PexelsClient::new(config)?;

  match cli.command {
    Commands::Photos(cmd) => handle_photos(&client, cmd, cli.summary).await?,
    Commands::Videos(cmd) => handle_videos(&client, cmd, cli.summary).await?,
    Commands::Quota => {
      client.photos().curated(1, 1).await?;
      output::emit_quota(&client)?;
      return Ok(());
    }
  }

  match client.remaining_requests() {
    Some(remaining) => info!("Requests remaining: {}", remaining),
    None => info!("Server did not report a remaining quota"),
  }

  Ok(())
}
