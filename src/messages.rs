//! User-facing notification texts.

pub const ADDON_NAME: &str = "Addic7ed.com";
pub const SUBS_DOWNLOADED: &str = "Subtitles downloaded";
pub const ERROR: &str = "Addic7ed.com error";
pub const DAILY_LIMIT: &str = "Exceeded daily limit for subtitle downloads";
pub const CONNECTION_FAILED: &str = "Unable to connect to addic7ed.com";
pub const EPISODE_DATA_UNKNOWN: &str = "Unable to determine episode data";
pub const SELECT_EPISODE: &str = "Select episode";
pub const UNEXPECTED_RESPONSE: &str = "Unexpected response from addic7ed.com";
pub const STAGING_FAILED: &str = "Unable to prepare the download folder";
