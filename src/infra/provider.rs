use std::path::Path;

use thiserror::Error;

use crate::domain::language::Language;
use crate::domain::models::{EpisodePage, SearchResult};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("unable to connect to the subtitle site: {0}")]
    Connection(String),
    #[error("no subtitles found")]
    NoResults,
    #[error("daily download limit exceeded")]
    DailyLimitExceeded,
    #[error("unexpected page layout: {0}")]
    Parse(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for ProviderError {
    fn from(value: reqwest::Error) -> Self {
        Self::Connection(value.to_string())
    }
}

impl From<url::ParseError> for ProviderError {
    fn from(value: url::ParseError) -> Self {
        Self::Parse(format!("invalid link: {value}"))
    }
}

pub trait SubtitleProvider {
    /// Runs a site search. A query that lands on exactly one episode yields
    /// its page, otherwise the matching episode titles.
    fn search_episode(
        &self,
        query: &str,
        languages: &[&Language],
    ) -> Result<SearchResult, ProviderError>;

    fn get_episode(&self, link: &str, languages: &[&Language])
        -> Result<EpisodePage, ProviderError>;

    /// Writes the subtitle file to `destination`. Nothing is written when the
    /// download is refused.
    fn download_subs(
        &self,
        link: &str,
        referrer: &str,
        destination: &Path,
    ) -> Result<(), ProviderError>;
}
