//! Utility functions for path manipulation

use url::Url;

/// Fallback name when a URL yields no usable path segment. CircleCI always
/// returns absolute artifact URLs, so this is defensive only.
const FALLBACK_FILE_NAME: &str = "artifact";

/// Extract the local file name for a downloaded artifact from its URL
///
/// Uses the final segment of the URL path, extension included: the
/// artifact at `.../artifacts/0/dist/app.tar.gz` is written as
/// `app.tar.gz`. Falls back to splitting the raw string on `/` if the URL
/// does not parse, and to a fixed name as a last resort.
///
/// # Examples
///
/// ```
/// use circle_dl::utils::file_name_from_url;
///
/// let name = file_name_from_url("https://example.com/artifacts/0/dist/app.tar.gz");
/// assert_eq!(name, "app.tar.gz");
/// ```
pub fn file_name_from_url(url: &str) -> String {
    if let Ok(parsed) = Url::parse(url)
        && let Some(mut segments) = parsed.path_segments()
        && let Some(last_segment) = segments.next_back()
        && !last_segment.is_empty()
    {
        return last_segment.to_string();
    }

    // Not a parseable absolute URL; take whatever follows the last slash
    let tail = url.rsplit('/').next().unwrap_or(url);
    if tail.is_empty() {
        FALLBACK_FILE_NAME.to_string()
    } else {
        tail.to_string()
    }
}
