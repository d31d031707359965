use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use super::identity::{is_video_extension, PLACEHOLDER_EXTENSION};
use super::router::Context;
use crate::domain::models::{ListEntry, Notification};
use crate::infra::host::Host;
use crate::infra::provider::ProviderError;
use crate::messages;

/// Where the subtitles for `filename` are staged inside `temp`. A video (or
/// placeholder) extension is replaced by `.srt`; anything else, such as a
/// display label, keeps its full name and gets `.srt` appended.
pub fn staging_path(temp: &Path, filename: &str) -> PathBuf {
    let basename = Path::new(filename)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "subtitles".to_string());

    let stem = match basename.rsplit_once('.') {
        Some((stem, ext))
            if !stem.is_empty()
                && (is_video_extension(ext) || ext.eq_ignore_ascii_case(PLACEHOLDER_EXTENSION)) =>
        {
            stem
        }
        _ => basename.as_str(),
    };
    temp.join(format!("{stem}.srt"))
}

fn reset_staging_dir(host: &dyn Host, temp: &Path) -> io::Result<()> {
    if host.exists(temp) {
        host.remove_dir_all(temp)?;
    }
    host.create_dir_all(temp)
}

/// Downloads the chosen subtitles into a fresh staging directory and hands
/// the file to the host, which moves it to the user's subtitle location.
pub fn download_subs(ctx: &mut Context, link: &str, referrer: &str, filename: &str) {
    let temp = ctx.settings.temp_dir();
    if let Err(e) = reset_staging_dir(&*ctx.host, &temp) {
        error!("Unable to prepare {}: {e}", temp.display());
        ctx.host.notify(Notification::error(
            messages::ERROR,
            messages::STAGING_FAILED,
        ));
        return;
    }

    let subspath = staging_path(&temp, filename);
    debug!("Staging subtitles at {}", subspath.display());

    match ctx.provider.download_subs(link, referrer, &subspath) {
        Ok(()) => {
            let location = subspath.to_string_lossy().into_owned();
            ctx.host.add_directory_item(ListEntry {
                label: location.clone(),
                url: location,
                ..ListEntry::default()
            });
            ctx.host.notify(Notification::info(
                messages::ADDON_NAME,
                messages::SUBS_DOWNLOADED,
            ));
            info!("Subs downloaded.");
        }
        Err(ProviderError::Connection(e)) => {
            error!("Unable to connect to addic7ed.com: {e}");
            ctx.host.notify(Notification::error(
                messages::ERROR,
                messages::CONNECTION_FAILED,
            ));
        }
        Err(ProviderError::DailyLimitExceeded) => {
            error!("Exceeded daily limit for subs downloads.");
            ctx.host.notify(
                Notification::error(messages::ERROR, messages::DAILY_LIMIT)
                    .with_duration(Notification::LONG_DURATION_MS),
            );
        }
        Err(e) => {
            error!("Subtitle download failed: {e}");
            ctx.host.notify(Notification::error(
                messages::ERROR,
                messages::UNEXPECTED_RESPONSE,
            ));
        }
    }
}
