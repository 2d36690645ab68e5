//! Avatar helpers for the surrounding fetch layer.

use base64::Engine as _;
use url::Url;

/// Inline stub avatar used when a profile has none or the fetch failed.
pub const FALLBACK_AVATAR: &str = "data:image/svg+xml;base64,PHN2ZyB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciIHdpZHRoPSIxMDAiIGhlaWdodD0iMTAwIj48cmVjdCB3aWR0aD0iMTAwIiBoZWlnaHQ9IjEwMCIgcng9IjE0IiBmaWxsPSIjMTQxMzIxIi8+PHBhdGggZmlsbD0iIzhiZTlmZCIgZD0iTTUwIDI4YzMuMyAwIDYgMi43IDYgNnMtMi43IDYtNiA2LTYtMi43LTYtNiAyLjctNiA2LTZ6bTAgMjFjLTkuMSAwLTE3IDUuMi0yMCAxMi43LS4zLjcuMiAxLjMgMSAxLjNoMzguYy44IDAgMS4zLS42IDEuLTEuM0M2NyA1NC4yIDU5LjEgNDkgNTAgNDl6Ii8+PC9zdmc+";

/// Embeds fetched avatar bytes as a `data:` URI so the badge stays a single
/// self-contained document (remote `<image href>` targets are blocked by most
/// README proxies).
pub fn jpeg_data_uri(bytes: &[u8]) -> String {
    let b64 = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:image/jpeg;base64,{b64}")
}

/// True for `http`/`https` URLs, the only avatar sources worth fetching.
pub fn is_remote_url(raw: &str) -> bool {
    Url::parse(raw)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}
