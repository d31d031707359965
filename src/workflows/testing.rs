//! In-memory host and provider used by the flow tests.

use std::cell::RefCell;
use std::fs;
use std::path::Path;

use crate::config::Settings;
use crate::domain::language::Language;
use crate::domain::models::{
    EpisodePage, ListEntry, Notification, NowPlaying, SearchResult,
};
use crate::infra::host::Host;
use crate::infra::provider::{ProviderError, SubtitleProvider};

pub fn test_settings(profile_dir: &Path) -> Settings {
    Settings {
        use_filename: false,
        plugin_url: "plugin://service.subtitles.addic7ed/".to_string(),
        site_url: "https://www.addic7ed.com".to_string(),
        profile_dir: profile_dir.to_path_buf(),
    }
}

#[derive(Default)]
pub struct FakeHost {
    pub now_playing: NowPlaying,
    pub entries: Vec<ListEntry>,
    pub notifications: Vec<Notification>,
    pub selections: Vec<Vec<String>>,
    /// Answer given to every selection dialog.
    pub choice: Option<usize>,
    pub end_count: usize,
}

impl FakeHost {
    pub fn playing(file: &str) -> Self {
        Self {
            now_playing: NowPlaying {
                file: file.to_string(),
                ..NowPlaying::default()
            },
            ..Self::default()
        }
    }
}

impl Host for FakeHost {
    fn now_playing(&self) -> NowPlaying {
        self.now_playing.clone()
    }

    fn add_directory_item(&mut self, entry: ListEntry) {
        self.entries.push(entry);
    }

    fn end_of_directory(&mut self) {
        self.end_count += 1;
    }

    fn select(&mut self, _heading: &str, items: &[String]) -> Option<usize> {
        self.selections.push(items.to_vec());
        self.choice
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Failure {
    Connection,
    NoResults,
    DailyLimit,
}

impl Failure {
    fn error(self) -> ProviderError {
        match self {
            Failure::Connection => ProviderError::Connection("connection refused".to_string()),
            Failure::NoResults => ProviderError::NoResults,
            Failure::DailyLimit => ProviderError::DailyLimitExceeded,
        }
    }
}

pub struct FakeProvider {
    pub search: Result<SearchResult, Failure>,
    pub episode: Result<EpisodePage, Failure>,
    /// Subtitle text written on a successful download.
    pub download: Result<String, Failure>,
    pub calls: RefCell<Vec<String>>,
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self {
            search: Err(Failure::NoResults),
            episode: Err(Failure::NoResults),
            download: Ok("1\n00:00:01,000 --> 00:00:02,000\nHello\n".to_string()),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl SubtitleProvider for FakeProvider {
    fn search_episode(
        &self,
        query: &str,
        _languages: &[&Language],
    ) -> Result<SearchResult, ProviderError> {
        self.calls.borrow_mut().push(format!("search_episode {query}"));
        self.search.clone().map_err(Failure::error)
    }

    fn get_episode(
        &self,
        link: &str,
        _languages: &[&Language],
    ) -> Result<EpisodePage, ProviderError> {
        self.calls.borrow_mut().push(format!("get_episode {link}"));
        self.episode.clone().map_err(Failure::error)
    }

    fn download_subs(
        &self,
        link: &str,
        referrer: &str,
        destination: &Path,
    ) -> Result<(), ProviderError> {
        self.calls
            .borrow_mut()
            .push(format!("download_subs {link} {referrer}"));
        let contents = self.download.clone().map_err(Failure::error)?;
        fs::write(destination, contents)?;
        Ok(())
    }
}
