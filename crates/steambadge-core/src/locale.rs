//! Label strings for the badge, per locale.

pub struct Labels {
    pub steam_level: &'static str,
    pub games: &'static str,
    pub friends: &'static str,
    pub last_played: &'static str,
}

pub const EN: Labels = Labels {
    steam_level: "Steam Level:",
    games: "Games:",
    friends: "Friends:",
    last_played: "Last Played Game:",
};

pub const RU: Labels = Labels {
    steam_level: "Уровень Steam:",
    games: "Игры:",
    friends: "Друзья:",
    last_played: "Последняя игра:",
};

/// Case-insensitive lookup; unrecognized codes fall back to English.
pub fn labels_for(lang: &str) -> &'static Labels {
    match lang.trim().to_ascii_lowercase().as_str() {
        "ru" => &RU,
        _ => &EN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn russian_labels_resolve_case_insensitively() {
        assert_eq!(labels_for("ru").games, "Игры:");
        assert_eq!(labels_for("RU").friends, "Друзья:");
    }

    #[test]
    fn unknown_locales_fall_back_to_english() {
        assert_eq!(labels_for("xx").steam_level, "Steam Level:");
        assert_eq!(labels_for("").last_played, "Last Played Game:");
    }
}
