//! Network-free Steam id recognition.
//!
//! The surrounding service accepts a raw `steamid` query value that may be a
//! SteamID64, a steamcommunity.com profile URL, or a vanity name. Everything
//! that can be decided locally is decided here; an unrecognized value is
//! handed back as a vanity candidate for the service to resolve remotely.

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::Serialize;
use url::Url;

use crate::error::{Error, Result};

/// A validated 17-digit SteamID64.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SteamId64(String);

impl SteamId64 {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SteamId64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SteamId64 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.len() == 17 && s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(s.to_string()))
        } else {
            Err(Error::InvalidId64 {
                input: s.to_string(),
            })
        }
    }
}

/// What a raw `steamid` input turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SteamIdKind {
    /// Fully resolved locally.
    Id64(SteamId64),
    /// Needs a remote vanity-URL lookup.
    Vanity(String),
}

/// Classifies a raw id input without touching the network.
pub fn classify(raw: &str) -> Result<SteamIdKind> {
    let input = raw.trim();
    if input.is_empty() {
        return Err(Error::EmptyId);
    }

    if let Ok(id) = SteamId64::from_str(input) {
        return Ok(SteamIdKind::Id64(id));
    }

    if input.to_ascii_lowercase().contains("steamcommunity.com") {
        if let Some(kind) = extract_from_community_url(input) {
            return Ok(kind);
        }
    }

    tracing::debug!(input, "treating Steam id input as a vanity candidate");
    Ok(SteamIdKind::Vanity(input.to_string()))
}

/// Pulls `/profiles/<id64>` or `/id/<vanity>` out of a steamcommunity URL.
/// Scheme-less inputs (`steamcommunity.com/id/gabe`) fall back to path
/// regexes, since they will not parse as absolute URLs.
fn extract_from_community_url(input: &str) -> Option<SteamIdKind> {
    if let Ok(parsed) = Url::parse(input) {
        let segments: Vec<&str> = parsed.path_segments()?.filter(|s| !s.is_empty()).collect();
        return match segments.as_slice() {
            ["profiles", id, ..] => SteamId64::from_str(id).ok().map(SteamIdKind::Id64),
            ["id", vanity, ..] => Some(SteamIdKind::Vanity((*vanity).to_string())),
            _ => None,
        };
    }

    let profiles_re = Regex::new(r"/profiles/(\d{17})").unwrap();
    if let Some(caps) = profiles_re.captures(input) {
        return SteamId64::from_str(&caps[1]).ok().map(SteamIdKind::Id64);
    }
    let vanity_re = Regex::new(r"/id/([^/?#]+)").unwrap();
    if let Some(caps) = vanity_re.captures(input) {
        return Some(SteamIdKind::Vanity(caps[1].to_string()));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_id64_resolves_locally() {
        let kind = classify("76561197960287930").expect("classify");
        assert_eq!(
            kind,
            SteamIdKind::Id64("76561197960287930".parse().expect("id64"))
        );
    }

    #[test]
    fn profile_urls_yield_the_embedded_id64() {
        let kind =
            classify("https://steamcommunity.com/profiles/76561197960287930/").expect("classify");
        let SteamIdKind::Id64(id) = kind else {
            panic!("expected id64");
        };
        assert_eq!(id.as_str(), "76561197960287930");
    }

    #[test]
    fn vanity_urls_yield_the_vanity_segment() {
        let kind = classify("https://steamcommunity.com/id/gabelogannewell?tab=all")
            .expect("classify");
        assert_eq!(kind, SteamIdKind::Vanity("gabelogannewell".to_string()));
    }

    #[test]
    fn scheme_less_community_urls_still_parse() {
        let kind = classify("steamcommunity.com/id/gabelogannewell").expect("classify");
        assert_eq!(kind, SteamIdKind::Vanity("gabelogannewell".to_string()));
    }

    #[test]
    fn plain_names_pass_through_as_vanity_candidates() {
        let kind = classify("  gabe  ").expect("classify");
        assert_eq!(kind, SteamIdKind::Vanity("gabe".to_string()));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(classify("   "), Err(Error::EmptyId)));
    }

    #[test]
    fn sixteen_digits_is_not_an_id64() {
        assert!("7656119796028793".parse::<SteamId64>().is_err());
    }
}
