use serde::Deserialize;

/// Show identity used to build a search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeData {
    pub showname: String,
    pub season: String,
    pub episode: String,
    pub filename: String,
}

/// The host's descriptor of the item being played.
///
/// Field names follow the host's JSON-RPC `Player.GetItem` response so a
/// dumped item can be fed in directly.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NowPlaying {
    pub file: String,
    #[serde(default)]
    pub showtitle: String,
    #[serde(default)]
    pub season: Option<u32>,
    #[serde(default)]
    pub episode: Option<u32>,
    #[serde(default)]
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleItem {
    /// Host language name, e.g. "English".
    pub language: String,
    pub version: String,
    pub hearing_impaired: bool,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeCandidate {
    pub title: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodePage {
    pub subtitles: Vec<SubtitleItem>,
    pub episode_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    Episode(EpisodePage),
    Candidates(Vec<EpisodeCandidate>),
}

/// A single row handed to the host's directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListEntry {
    pub label: String,
    pub label2: String,
    /// Two-letter language code the host turns into a country flag.
    pub thumbnail: Option<String>,
    pub hearing_impaired: bool,
    pub sync: bool,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub heading: String,
    pub message: String,
    pub level: NotificationLevel,
    pub duration_ms: u32,
}

impl Notification {
    pub const DEFAULT_DURATION_MS: u32 = 3000;
    pub const LONG_DURATION_MS: u32 = 8000;

    pub fn info(heading: &str, message: &str) -> Self {
        Self {
            heading: heading.to_string(),
            message: message.to_string(),
            level: NotificationLevel::Info,
            duration_ms: Self::DEFAULT_DURATION_MS,
        }
    }

    pub fn error(heading: &str, message: &str) -> Self {
        Self {
            heading: heading.to_string(),
            message: message.to_string(),
            level: NotificationLevel::Error,
            duration_ms: Self::DEFAULT_DURATION_MS,
        }
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}
