//! MIME and file-name helpers for downloaded media.

use reqwest::Url;

const FALLBACK_MIME: &str = "application/octet-stream";
const FALLBACK_FILE_NAME: &str = "file";

/// Guesses a MIME type from the extension of the URL's last path segment.
pub fn guess_mime_type(url: &str) -> String {
    mime_guess::from_path(file_name_from_url(url))
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// Last non-empty path segment of the URL, or `file` when there is none or the URL does not parse.
pub fn file_name_from_url(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|url| {
            url.path_segments()?
                .filter(|segment| !segment.is_empty())
                .last()
                .map(str::to_string)
        })
        .unwrap_or_else(|| FALLBACK_FILE_NAME.to_string())
}

/// Strips parameters such as `; charset=utf-8` from a Content-Type value.
pub(crate) fn essence(content_type: &str) -> Option<String> {
    let essence = content_type.split(';').next()?.trim().to_ascii_lowercase();
    if essence.is_empty() || essence == FALLBACK_MIME {
        None
    } else {
        Some(essence)
    }
}
