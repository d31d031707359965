use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use crate::domain::models::NowPlaying;

#[derive(Parser)]
#[command(name = "addic7ed-subs")]
#[command(about = "Search and download TV episode subtitles from addic7ed.com")]
pub struct Cli {
    /// URL-encoded invocation, e.g. "action=search&languages=English"
    pub params: String,

    /// Path or URL of the video being played
    #[arg(long, default_value = "")]
    pub file: String,

    /// Library show title
    #[arg(long, default_value = "")]
    pub showtitle: String,

    /// Library season number
    #[arg(long)]
    pub season: Option<u32>,

    /// Library episode number
    #[arg(long)]
    pub episode: Option<u32>,

    /// Display label of the playing item
    #[arg(long, default_value = "")]
    pub label: String,

    /// JSON file holding the playing item (file, showtitle, season, episode, label)
    #[arg(long, conflicts_with_all = ["file", "showtitle", "season", "episode", "label"])]
    pub now_playing: Option<PathBuf>,

    /// Parse the filename even when library metadata is given
    #[arg(long)]
    pub use_filename: bool,
}

impl Cli {
    pub fn now_playing(&self) -> Result<NowPlaying> {
        if let Some(path) = &self.now_playing {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            return parse_now_playing(&content);
        }

        Ok(NowPlaying {
            file: self.file.clone(),
            showtitle: self.showtitle.clone(),
            season: self.season,
            episode: self.episode,
            label: self.label.clone(),
        })
    }
}

/// The host reports missing library numbers as -1.
fn parse_now_playing(content: &str) -> Result<NowPlaying> {
    let mut value: serde_json::Value =
        serde_json::from_str(content).context("Invalid now-playing JSON")?;
    if let Some(item) = value.as_object_mut() {
        for key in ["season", "episode"] {
            if item.get(key).and_then(|v| v.as_i64()).is_some_and(|n| n < 0) {
                item.remove(key);
            }
        }
    }
    Ok(serde_json::from_value(value)?)
}
