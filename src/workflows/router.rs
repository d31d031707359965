use tracing::{debug, error};

use super::{download, search};
use crate::config::Settings;
use crate::domain::action::Action;
use crate::infra::host::Host;
use crate::infra::provider::SubtitleProvider;

/// Everything one invocation needs. Built once per call and passed down to
/// the search and download flows.
pub struct Context<'a> {
    pub host: &'a mut dyn Host,
    pub provider: &'a dyn SubtitleProvider,
    pub settings: &'a Settings,
}

impl<'a> Context<'a> {
    pub fn new(
        host: &'a mut dyn Host,
        provider: &'a dyn SubtitleProvider,
        settings: &'a Settings,
    ) -> Self {
        Self {
            host,
            provider,
            settings,
        }
    }
}

/// Dispatches one invocation. Never fails: whatever happens, the listing is
/// closed exactly once.
pub fn route(ctx: &mut Context, paramstring: &str) {
    debug!("Invoked with '{paramstring}'");
    match Action::parse(paramstring) {
        Ok(Action::Search { languages }) => search::search_subs(ctx, &languages, None),
        Ok(Action::ManualSearch {
            languages,
            searchstring,
        }) => search::search_subs(ctx, &languages, Some(&searchstring)),
        Ok(Action::Download {
            link,
            referrer,
            filename,
        }) => download::download_subs(ctx, &link, &referrer, &filename),
        Err(e) => error!("Invalid invocation '{paramstring}': {e}"),
    }
    ctx.host.end_of_directory();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{EpisodePage, NotificationLevel, SearchResult, SubtitleItem};
    use crate::messages;
    use crate::workflows::testing::{test_settings, Failure, FakeHost, FakeProvider};
    use tempfile::TempDir;

    fn page() -> EpisodePage {
        EpisodePage {
            subtitles: vec![SubtitleItem {
                language: "English".to_string(),
                version: "KILLERS".to_string(),
                hearing_impaired: false,
                link: "/original/1/0".to_string(),
            }],
            episode_url: "https://www.addic7ed.com/serie/Show/1/2/Title".to_string(),
        }
    }

    #[test]
    fn test_search_closes_listing_once() {
        let temp_dir = TempDir::new().unwrap();
        let settings = test_settings(temp_dir.path());
        let mut host = FakeHost::playing("/tv/Show.S01E02.720p-KILLERS.mkv");
        let provider = FakeProvider {
            search: Ok(SearchResult::Episode(page())),
            ..FakeProvider::default()
        };

        let mut ctx = Context::new(&mut host, &provider, &settings);
        route(&mut ctx, "?action=search&languages=English");

        assert_eq!(host.end_count, 1);
        assert_eq!(host.entries.len(), 1);
        assert!(host.entries[0].sync);
        assert_eq!(
            *provider.calls.borrow(),
            vec!["search_episode Show 01x02".to_string()]
        );
    }

    #[test]
    fn test_invalid_invocation_still_closes_listing() {
        let temp_dir = TempDir::new().unwrap();
        let settings = test_settings(temp_dir.path());
        let mut host = FakeHost::playing("/tv/Show.S01E02.mkv");
        let provider = FakeProvider::default();

        let mut ctx = Context::new(&mut host, &provider, &settings);
        route(&mut ctx, "action=explode");
        route(&mut ctx, "");

        assert_eq!(host.end_count, 2);
        assert!(host.entries.is_empty());
        assert!(host.notifications.is_empty());
        assert!(provider.calls.borrow().is_empty());
    }

    #[test]
    fn test_connection_failures_notify_once() {
        let temp_dir = TempDir::new().unwrap();
        let settings = test_settings(temp_dir.path());

        for paramstring in [
            "action=search&languages=English",
            "action=download&link=%2Foriginal%2F1%2F0&ref=https%3A%2F%2Fexample&filename=Show.S01E02.mkv",
        ] {
            let mut host = FakeHost::playing("/tv/Show.S01E02.mkv");
            let provider = FakeProvider {
                search: Err(Failure::Connection),
                download: Err(Failure::Connection),
                ..FakeProvider::default()
            };

            let mut ctx = Context::new(&mut host, &provider, &settings);
            route(&mut ctx, paramstring);

            assert_eq!(host.end_count, 1);
            assert_eq!(host.notifications.len(), 1);
            assert_eq!(host.notifications[0].level, NotificationLevel::Error);
            assert_eq!(host.notifications[0].message, messages::CONNECTION_FAILED);
            assert!(host.entries.is_empty());
        }
    }
}
