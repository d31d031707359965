use thiserror::Error;
use tracing::{debug, error, info};

use super::identity::{extract_episode_data, normalize_showname, IdentityError};
use super::presenter;
use super::router::Context;
use crate::domain::language;
use crate::domain::models::{EpisodeData, Notification, SearchResult};
use crate::infra::provider::ProviderError;
use crate::messages;

#[derive(Debug, Error)]
enum SearchError {
    #[error(transparent)]
    Identity(#[from] IdentityError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("episode selection cancelled")]
    Cancelled,
}

pub fn build_query(episode_data: &EpisodeData) -> String {
    format!(
        "{} {}x{}",
        normalize_showname(&episode_data.showname),
        episode_data.season,
        episode_data.episode
    )
}

/// Searches for subtitles of the playing episode, or for `searchstring`
/// when the user typed one, and lists what was found.
pub fn search_subs(ctx: &mut Context, languages: &str, searchstring: Option<&str>) {
    info!("Searching for subs...");
    match find_subs(ctx, languages, searchstring) {
        Ok(()) => {}
        Err(SearchError::Identity(e)) => {
            error!("{e}");
            ctx.host.notify(Notification::error(
                messages::ERROR,
                messages::EPISODE_DATA_UNKNOWN,
            ));
        }
        Err(SearchError::Provider(ProviderError::Connection(e))) => {
            error!("Unable to connect to addic7ed.com: {e}");
            ctx.host.notify(Notification::error(
                messages::ERROR,
                messages::CONNECTION_FAILED,
            ));
        }
        Err(SearchError::Provider(ProviderError::NoResults)) => info!("No subs found."),
        Err(SearchError::Cancelled) => info!("Episode selection cancelled."),
        Err(SearchError::Provider(e)) => {
            error!("Subtitle search failed: {e}");
            ctx.host.notify(Notification::error(
                messages::ERROR,
                messages::UNEXPECTED_RESPONSE,
            ));
        }
    }
}

fn find_subs(
    ctx: &mut Context,
    languages: &str,
    searchstring: Option<&str>,
) -> Result<(), SearchError> {
    let languages = language::parse_language_list(languages);
    let episode_data = extract_episode_data(&ctx.host.now_playing(), ctx.settings.use_filename)?;

    let query = match searchstring {
        Some(typed) => typed.trim().to_string(),
        None => build_query(&episode_data),
    };
    if query.is_empty() {
        debug!("Empty search query, nothing to search for.");
        return Ok(());
    }
    debug!("Search query: {query}");

    let page = match ctx.provider.search_episode(&query, &languages)? {
        SearchResult::Episode(page) => page,
        SearchResult::Candidates(candidates) => {
            info!("Multiple episodes found for \"{query}\": {}", candidates.len());
            let titles: Vec<String> = candidates
                .iter()
                .map(|candidate| candidate.title.clone())
                .collect();
            let candidate = ctx
                .host
                .select(messages::SELECT_EPISODE, &titles)
                .and_then(|index| candidates.get(index))
                .ok_or(SearchError::Cancelled)?;
            ctx.provider.get_episode(&candidate.link, &languages)?
        }
    };

    info!("Found subs for \"{query}\"");
    presenter::display_subs(ctx, &page.subtitles, &page.episode_url, &episode_data.filename);
    Ok(())
}
