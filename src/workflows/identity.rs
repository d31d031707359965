use std::path::Path;
use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use regex::Regex;
use thiserror::Error;
use tracing::{debug, error};

use crate::domain::models::{EpisodeData, NowPlaying};

const VIDEO_EXTENSIONS: &[&str] = &["avi", "mkv", "mp4", "ts", "m2ts", "mov"];

/// Extension of the name made up for library items without a video file.
pub const PLACEHOLDER_EXTENSION: &str = "foo";

// Tried in order; the first match wins.
static EPISODE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)^(.*?)[ ._-]+s(\d{1,2})[ ._-]?e(\d{1,3})",
        r"(?i)^(.*?)[ ._-]+(\d{1,2})x(\d{1,3})",
        r"(?i)^(.*?)[ ._-]+(\d{1,2})(\d{2})[ ._\-\[]",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("episode pattern is valid"))
    .collect()
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex is valid"));

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unable to determine episode data for '{0}'")]
pub struct IdentityError(pub String);

/// Pulls `(showname, season, episode)` out of a scene-style name such as
/// `Show.Name.S01E02.720p.HDTV.x264-GRP.mkv`.
pub fn parse_filename(filename: &str) -> Option<(String, String, String)> {
    EPISODE_PATTERNS.iter().find_map(|pattern| {
        let caps = pattern.captures(filename)?;
        let showname = caps[1]
            .replace(['.', '_'], " ")
            .trim_matches(|c: char| c.is_whitespace() || c == '-')
            .to_string();
        if showname.is_empty() {
            return None;
        }
        let season: u32 = caps[2].parse().ok()?;
        let episode: u32 = caps[3].parse().ok()?;
        Some((showname, format!("{season:02}"), format!("{episode:02}")))
    })
}

/// Cleans a show title for the site's search box.
pub fn normalize_showname(showname: &str) -> String {
    let showname = showname.replace([':', '\''], "").replace('&', "and");
    WHITESPACE.replace_all(showname.trim(), " ").into_owned()
}

/// Last path component of a (possibly URL-encoded) host file path.
pub fn base_filename(file: &str) -> String {
    let decoded = percent_decode_str(file).decode_utf8_lossy();
    decoded
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .to_string()
}

pub fn is_video_extension(ext: &str) -> bool {
    VIDEO_EXTENSIONS
        .iter()
        .any(|video| video.eq_ignore_ascii_case(ext))
}

fn has_video_extension(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(is_video_extension)
}

pub fn extract_episode_data(
    now_playing: &NowPlaying,
    use_filename: bool,
) -> Result<EpisodeData, IdentityError> {
    let filename = base_filename(&now_playing.file);

    let library = match (now_playing.season, now_playing.episode) {
        (Some(season), Some(episode)) if !now_playing.showtitle.is_empty() && !use_filename => {
            Some((season, episode))
        }
        _ => None,
    };

    let Some((season, episode)) = library else {
        let sources = [("filename", filename.as_str()), ("label", now_playing.label.as_str())];
        for (source, text) in sources {
            debug!("Using {source}: {text}");
            if let Some((showname, season, episode)) = parse_filename(text) {
                return Ok(EpisodeData {
                    showname,
                    season,
                    episode,
                    filename: text.to_string(),
                });
            }
            debug!("Unable to parse episode data from {source} '{text}'");
        }
        error!("Unable to determine episode data for {filename}");
        return Err(IdentityError(filename));
    };

    let showname = now_playing.showtitle.clone();
    let season = format!("{season:02}");
    let episode = format!("{episode:02}");
    let filename = if has_video_extension(&filename) {
        filename
    } else {
        format!("{showname}.{season}x{episode}.{PLACEHOLDER_EXTENSION}")
    };
    debug!("Using library metadata: {showname} - {season}x{episode}");

    Ok(EpisodeData {
        showname,
        season,
        episode,
        filename,
    })
}
