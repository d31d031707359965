use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;
use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, REFERER};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};
use url::Url;

use super::provider::{ProviderError, SubtitleProvider};
use crate::domain::language::Language;
use crate::domain::models::{EpisodeCandidate, EpisodePage, SearchResult, SubtitleItem};

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Version\s+(.+?),").expect("version regex is valid"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("selector literal is valid")
}

static VERSION_TITLE: LazyLock<Selector> = LazyLock::new(|| selector("td.NewsTitle"));
static ROW: LazyLock<Selector> = LazyLock::new(|| selector("tr"));
static LANGUAGE_CELL: LazyLock<Selector> = LazyLock::new(|| selector("td.language"));
static STATUS: LazyLock<Selector> = LazyLock::new(|| selector("b"));
static DOWNLOAD_BUTTON: LazyLock<Selector> = LazyLock::new(|| selector("a.buttonDownload"));
static HEARING_IMPAIRED: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"img[title="Hearing Impaired"]"#));
static EPISODE_LINK: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"table.tabel a[href*="serie/"]"#));

#[derive(Debug, Clone)]
pub struct Addic7edClient {
    http_client: Client,
    site: Url,
}

impl Addic7edClient {
    pub fn new(site_url: &str) -> Result<Self> {
        let site = if site_url.ends_with('/') {
            Url::parse(site_url)?
        } else {
            Url::parse(&format!("{site_url}/"))?
        };
        let http_client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http_client, site })
    }

    fn fetch_page(&self, url: Url) -> Result<(Url, String), ProviderError> {
        debug!("GET {url}");
        let response = self.http_client.get(url).send()?.error_for_status()?;
        let final_url = response.url().clone();
        let body = response.text()?;
        Ok((final_url, body))
    }
}

impl SubtitleProvider for Addic7edClient {
    fn search_episode(
        &self,
        query: &str,
        languages: &[&Language],
    ) -> Result<SearchResult, ProviderError> {
        let mut url = self.site.join("srch.php")?;
        url.query_pairs_mut()
            .append_pair("search", query)
            .append_pair("Submit", "Search");

        let (page_url, body) = self.fetch_page(url)?;
        parse_search_page(&self.site, &page_url, &body, languages)
    }

    fn get_episode(
        &self,
        link: &str,
        languages: &[&Language],
    ) -> Result<EpisodePage, ProviderError> {
        let (page_url, body) = self.fetch_page(self.site.join(link)?)?;
        parse_episode_page(page_url.as_str(), &body, languages)
    }

    fn download_subs(
        &self,
        link: &str,
        referrer: &str,
        destination: &Path,
    ) -> Result<(), ProviderError> {
        let url = self.site.join(link)?;
        debug!("Downloading {url} (referrer {referrer})");
        let response = self
            .http_client
            .get(url)
            .header(REFERER, referrer)
            .send()?
            .error_for_status()?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        check_download_response(response.url(), content_type.as_deref())?;

        let bytes = response.bytes()?;
        fs::write(destination, &bytes)?;
        info!(
            "Saved {} bytes of subtitles to {}",
            bytes.len(),
            destination.display()
        );
        Ok(())
    }
}

/// The site answers an over-quota download with a redirect to an HTML
/// notice instead of the subtitle file.
fn check_download_response(
    final_url: &Url,
    content_type: Option<&str>,
) -> Result<(), ProviderError> {
    if final_url.path().contains("downloadexceeded") {
        return Err(ProviderError::DailyLimitExceeded);
    }
    if content_type.is_some_and(|value| value.trim_start().starts_with("text/html")) {
        return Err(ProviderError::DailyLimitExceeded);
    }
    Ok(())
}

fn parse_search_page(
    site: &Url,
    page_url: &Url,
    body: &str,
    languages: &[&Language],
) -> Result<SearchResult, ProviderError> {
    let document = Html::parse_document(body);

    // A query matching a single episode is redirected straight to its page.
    if page_url.path().starts_with("/serie/")
        || document.select(&VERSION_TITLE).next().is_some()
    {
        return parse_episode_document(&document, page_url.as_str(), languages)
            .map(SearchResult::Episode);
    }

    let mut candidates: Vec<EpisodeCandidate> = Vec::new();
    for anchor in document.select(&EPISODE_LINK) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let title = anchor.text().collect::<String>().trim().to_string();
        if title.is_empty() {
            continue;
        }
        let link = site.join(href)?.to_string();
        if candidates.iter().all(|candidate| candidate.link != link) {
            candidates.push(EpisodeCandidate { title, link });
        }
    }

    if candidates.is_empty() {
        return Err(ProviderError::NoResults);
    }
    Ok(SearchResult::Candidates(candidates))
}

fn parse_episode_page(
    episode_url: &str,
    body: &str,
    languages: &[&Language],
) -> Result<EpisodePage, ProviderError> {
    let document = Html::parse_document(body);
    parse_episode_document(&document, episode_url, languages)
}

fn parse_episode_document(
    document: &Html,
    episode_url: &str,
    languages: &[&Language],
) -> Result<EpisodePage, ProviderError> {
    let mut subtitles = Vec::new();

    for title in document.select(&VERSION_TITLE) {
        let title_text: String = title.text().collect();
        let version = VERSION_RE
            .captures(&title_text)
            .map(|caps| caps[1].trim().to_string())
            .ok_or_else(|| {
                ProviderError::Parse(format!("no version in '{}'", title_text.trim()))
            })?;

        let Some(table) = title
            .ancestors()
            .filter_map(ElementRef::wrap)
            .find(|element| element.value().name() == "table")
        else {
            continue;
        };

        let rows: Vec<ElementRef> = table.select(&ROW).collect();
        for (index, row) in rows.iter().enumerate() {
            let Some(language_cell) = row.select(&LANGUAGE_CELL).next() else {
                continue;
            };
            let site_name: String = language_cell.text().collect();
            let Some(language) = languages
                .iter()
                .find(|language| language.matches_site_name(&site_name))
            else {
                continue;
            };

            let completed = row
                .select(&STATUS)
                .any(|status| status.text().collect::<String>().trim() == "Completed");
            if !completed {
                continue;
            }

            // The second button, when present, is the most updated revision.
            let Some(link) = row
                .select(&DOWNLOAD_BUTTON)
                .filter_map(|button| button.value().attr("href"))
                .last()
            else {
                continue;
            };

            let hearing_impaired = rows
                .get(index + 1)
                .is_some_and(|next| next.select(&HEARING_IMPAIRED).next().is_some());

            subtitles.push(SubtitleItem {
                language: language.name.to_string(),
                version: version.clone(),
                hearing_impaired,
                link: link.to_string(),
            });
        }
    }

    if subtitles.is_empty() {
        return Err(ProviderError::NoResults);
    }
    Ok(EpisodePage {
        subtitles,
        episode_url: episode_url.to_string(),
    })
}
