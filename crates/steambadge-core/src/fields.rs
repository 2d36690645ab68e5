use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::avatar::FALLBACK_AVATAR;
use crate::status::StatusKind;

/// Placeholder glyph shown when an upstream stat is unavailable.
pub const MISSING_STAT: &str = "\u{2014}";

/// A stat value as the badge displays it: a real count, or whatever
/// placeholder text the surrounding service substituted for missing data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Stat {
    Count(i64),
    Text(String),
}

impl Default for Stat {
    fn default() -> Self {
        Stat::Text(MISSING_STAT.to_string())
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stat::Count(n) => write!(f, "{n}"),
            Stat::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Stat {
    fn from(value: i64) -> Self {
        Stat::Count(value)
    }
}

impl From<&str> for Stat {
    fn from(value: &str) -> Self {
        Stat::Text(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(()),
        }
    }
}

/// The complete input record consumed by the rendering core.
///
/// No field is ever null for rendering: [`DisplayFields::default`] is the
/// record the surrounding service falls back to when a profile cannot be
/// fetched, and every field of a partial JSON record fills in from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayFields {
    /// Data URI or remote URL; may be empty.
    pub avatar_url: String,
    pub player_name: String,
    pub steam_level: Stat,
    pub games_count: Stat,
    pub friends_count: Stat,
    /// Unconstrained length and content; the layout engine wraps it.
    pub last_played_game: String,
    /// Hex color for the presence indicator.
    pub status_color: String,
    pub status_kind: StatusKind,
    /// Requested canvas width; clamped into the renderer's bounds.
    pub width: Option<u32>,
    pub theme: Theme,
    /// Locale code; unrecognized values fall back to `en`.
    pub lang: String,
}

impl Default for DisplayFields {
    fn default() -> Self {
        Self {
            avatar_url: FALLBACK_AVATAR.to_string(),
            player_name: "Steam User".to_string(),
            steam_level: Stat::default(),
            games_count: Stat::default(),
            friends_count: Stat::default(),
            last_played_game: "No recent games".to_string(),
            status_color: StatusKind::Offline.color().to_string(),
            status_kind: StatusKind::Offline,
            width: None,
            theme: Theme::Dark,
            lang: "en".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_record_fills_in_defaults() {
        let fields: DisplayFields =
            serde_json::from_str(r#"{"playerName":"gabe","steamLevel":42}"#).expect("parse");
        assert_eq!(fields.player_name, "gabe");
        assert_eq!(fields.steam_level, Stat::Count(42));
        assert_eq!(fields.games_count, Stat::Text(MISSING_STAT.to_string()));
        assert_eq!(fields.theme, Theme::Dark);
        assert_eq!(fields.lang, "en");
    }

    #[test]
    fn stat_accepts_both_number_and_placeholder_text() {
        let n: Stat = serde_json::from_str("123").expect("number");
        assert_eq!(n.to_string(), "123");
        let t: Stat = serde_json::from_str(r#""—""#).expect("text");
        assert_eq!(t.to_string(), MISSING_STAT);
    }

    #[test]
    fn theme_parses_case_insensitively() {
        assert_eq!(Theme::from_str(" Light "), Ok(Theme::Light));
        assert_eq!(Theme::from_str("DARK"), Ok(Theme::Dark));
        assert!(Theme::from_str("solarized").is_err());
    }
}
