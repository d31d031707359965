use super::router::Context;
use crate::domain::action::download_url;
use crate::domain::language;
use crate::domain::models::{ListEntry, SubtitleItem};

/// Release group of a scene filename, e.g. `KILLERS` in
/// `Show.S01E02.720p.HDTV.x264-KILLERS.mkv`: the text after the last '-' up
/// to the next '.' or '['.
pub fn release_tag(filename: &str) -> Option<&str> {
    let (_, tail) = filename.rsplit_once('-')?;
    let end = tail.find(['.', '['])?;
    Some(tail[..end].trim()).filter(|tag| !tag.is_empty())
}

fn is_sync(release: Option<&str>, version: &str) -> bool {
    release.is_some_and(|tag| version.to_lowercase().contains(&tag.to_lowercase()))
}

pub fn build_entries(
    subtitles: &[SubtitleItem],
    episode_url: &str,
    filename: &str,
    plugin_url: &str,
) -> Vec<ListEntry> {
    let release = release_tag(filename);
    subtitles
        .iter()
        .map(|item| ListEntry {
            label: item.language.clone(),
            label2: item.version.clone(),
            thumbnail: language::iso639_1(&item.language).map(str::to_string),
            hearing_impaired: item.hearing_impaired,
            sync: is_sync(release, &item.version),
            url: download_url(plugin_url, &item.link, episode_url, filename),
        })
        .collect()
}

pub fn display_subs(
    ctx: &mut Context,
    subtitles: &[SubtitleItem],
    episode_url: &str,
    filename: &str,
) {
    for entry in build_entries(subtitles, episode_url, filename, &ctx.settings.plugin_url) {
        ctx.host.add_directory_item(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::action::Action;

    fn item(language: &str, version: &str, hearing_impaired: bool) -> SubtitleItem {
        SubtitleItem {
            language: language.to_string(),
            version: version.to_string(),
            hearing_impaired,
            link: "/original/100/0".to_string(),
        }
    }

    #[test]
    fn test_release_tag() {
        assert_eq!(
            release_tag("Show.S01E02.720p.HDTV.x264-KILLERS.mkv"),
            Some("KILLERS")
        );
        assert_eq!(
            release_tag("Show.S01E02.WEB-DL.x264-GRP[rarbg].mkv"),
            Some("GRP")
        );
        assert_eq!(release_tag("Show.S01E02.mkv"), None);
        assert_eq!(release_tag("Some Show S04E11 - Title"), None);
        assert_eq!(release_tag("Some Show.04x11.foo"), None);
        assert_eq!(release_tag("Show.S01E02-.mkv"), None);
    }

    #[test]
    fn test_release_tag_uses_last_dash_only() {
        assert_eq!(release_tag("Show.S01E02.WEB-DL.x264-GRP"), None);
        assert_eq!(release_tag("Marvel-Show.S01E02-KILLERS"), None);
        assert_eq!(
            release_tag("Marvel-Show.S01E02.WEB-DL.x264-KILLERS.mkv"),
            Some("KILLERS")
        );
    }

    #[test]
    fn test_label_without_extension_is_not_synced() {
        let entries = build_entries(
            &[item("English", "WEB-DL", false)],
            "https://www.addic7ed.com/serie/Show/1/2/Title",
            "Show.S01E02.WEB-DL.x264-GRP",
            "plugin://service.subtitles.addic7ed/",
        );
        assert!(!entries[0].sync);
    }

    #[test]
    fn test_sync_marker_is_case_insensitive() {
        let entries = build_entries(
            &[item("English", "killers, 720p", false), item("English", "LOL", true)],
            "https://www.addic7ed.com/serie/Show/1/2/Title",
            "Show.S01E02.720p.HDTV.x264-KILLERS.mkv",
            "plugin://service.subtitles.addic7ed/",
        );
        assert!(entries[0].sync);
        assert!(!entries[0].hearing_impaired);
        assert!(!entries[1].sync);
        assert!(entries[1].hearing_impaired);
    }

    #[test]
    fn test_no_sync_without_release_tag() {
        let entries = build_entries(
            &[item("French", "Show", false)],
            "https://www.addic7ed.com/serie/Show/1/2/Title",
            "Show.01x02.foo",
            "plugin://service.subtitles.addic7ed/",
        );
        assert!(!entries[0].sync);
    }

    #[test]
    fn test_entry_labels_and_callback() {
        let entries = build_entries(
            &[item("French", "KILLERS", false)],
            "https://www.addic7ed.com/serie/Show/1/2/Title",
            "Show.S01E02-KILLERS.mkv",
            "plugin://service.subtitles.addic7ed/",
        );
        let entry = &entries[0];
        assert_eq!(entry.label, "French");
        assert_eq!(entry.label2, "KILLERS");
        assert_eq!(entry.thumbnail.as_deref(), Some("fr"));
        assert_eq!(
            Action::parse(&entry.url).unwrap(),
            Action::Download {
                link: "/original/100/0".to_string(),
                referrer: "https://www.addic7ed.com/serie/Show/1/2/Title".to_string(),
                filename: "Show.S01E02-KILLERS.mkv".to_string(),
            }
        );
    }
}
