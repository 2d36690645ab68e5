use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const ONLINE_COLOR: &str = "#00ff66";
pub const OFFLINE_COLOR: &str = "#6272a4";
pub const AWAY_COLOR: &str = "#f1fa8c";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Online,
    #[default]
    Offline,
    Away,
}

impl StatusKind {
    /// Maps the Steam `personastate` field. Anything past "online" (busy,
    /// away, snooze, looking-to-trade, ...) collapses to [`StatusKind::Away`].
    pub fn from_persona_state(state: i64) -> Self {
        match state {
            0 => Self::Offline,
            1 => Self::Online,
            _ => Self::Away,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Online => ONLINE_COLOR,
            Self::Offline => OFFLINE_COLOR,
            Self::Away => AWAY_COLOR,
        }
    }
}

impl FromStr for StatusKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "online" => Ok(Self::Online),
            "offline" => Ok(Self::Offline),
            "away" => Ok(Self::Away),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persona_state_mapping_collapses_unknown_states_to_away() {
        assert_eq!(StatusKind::from_persona_state(0), StatusKind::Offline);
        assert_eq!(StatusKind::from_persona_state(1), StatusKind::Online);
        assert_eq!(StatusKind::from_persona_state(3), StatusKind::Away);
        assert_eq!(StatusKind::from_persona_state(6), StatusKind::Away);
    }

    #[test]
    fn colors_follow_kind() {
        assert_eq!(StatusKind::Online.color(), ONLINE_COLOR);
        assert_eq!(StatusKind::Offline.color(), OFFLINE_COLOR);
        assert_eq!(StatusKind::Away.color(), AWAY_COLOR);
    }
}
