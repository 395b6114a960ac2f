//! Video link recognition.

use url::Url;

/// Canonical form of a recognised video link:
/// `https://www.youtube.com/watch?v={id}`.
///
/// Accepts `youtube.com/watch?v=ID` (with or without `www.` / `m.`) and
/// `youtu.be/ID`. Returns `None` for anything else.
#[must_use]
pub fn normalize_video_url(raw: &str) -> Option<String> {
    let url = Url::parse(raw.trim()).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    let host = url.host_str()?.to_ascii_lowercase();
    let host = host
        .strip_prefix("www.")
        .or_else(|| host.strip_prefix("m."))
        .unwrap_or(&host);

    let id = match host {
        "youtube.com" if url.path() == "/watch" => url
            .query_pairs()
            .find(|(k, _)| k == "v")
            .map(|(_, v)| v.into_owned())?,
        "youtu.be" => url.path_segments()?.next()?.to_string(),
        _ => return None,
    };

    is_video_id(&id).then(|| format!("https://www.youtube.com/watch?v={id}"))
}

#[must_use]
pub fn is_video_url(raw: &str) -> bool {
    normalize_video_url(raw).is_some()
}

fn is_video_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
