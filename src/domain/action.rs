use std::collections::HashMap;

use percent_encoding::percent_decode_str;
use thiserror::Error;

/// One invocation of the add-on, decoded from its URL parameter string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Search {
        languages: String,
    },
    ManualSearch {
        languages: String,
        searchstring: String,
    },
    Download {
        link: String,
        referrer: String,
        filename: String,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("missing 'action' parameter")]
    MissingAction,
    #[error("unknown action '{0}'")]
    UnknownAction(String),
    #[error("action '{action}' requires the '{key}' parameter")]
    MissingParam { action: String, key: &'static str },
}

impl Action {
    /// Accepts a bare query (`action=search&...`), one prefixed with `?`, or a
    /// full plugin URL.
    pub fn parse(paramstring: &str) -> Result<Self, ActionError> {
        let query = paramstring
            .split_once('?')
            .map_or(paramstring, |(_, query)| query);
        let params: HashMap<String, String> = url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();

        let action = params.get("action").ok_or(ActionError::MissingAction)?;
        let optional = |key: &str| params.get(key).cloned().unwrap_or_default();
        let required = |key: &'static str| {
            params
                .get(key)
                .cloned()
                .ok_or_else(|| ActionError::MissingParam {
                    action: action.clone(),
                    key,
                })
        };

        match action.as_str() {
            "search" => Ok(Action::Search {
                languages: unquote_plus(&optional("languages")),
            }),
            "manualsearch" => Ok(Action::ManualSearch {
                languages: unquote_plus(&optional("languages")),
                searchstring: optional("searchstring"),
            }),
            "download" => Ok(Action::Download {
                link: required("link")?,
                referrer: required("ref")?,
                filename: unquote_plus(&required("filename")?),
            }),
            other => Err(ActionError::UnknownAction(other.to_string())),
        }
    }
}

/// The host double-encodes some values; decode the inner layer.
pub fn unquote_plus(value: &str) -> String {
    let value = value.replace('+', " ");
    percent_decode_str(&value).decode_utf8_lossy().into_owned()
}

/// Builds the callback URL the host invokes when a listed entry is chosen.
pub fn download_url(
    plugin_url: &str,
    link: &str,
    referrer: &str,
    filename: &str,
) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("action", "download")
        .append_pair("link", link)
        .append_pair("ref", referrer)
        .append_pair("filename", filename)
        .finish();
    format!("{plugin_url}?{query}")
}
