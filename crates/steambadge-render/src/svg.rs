//! Badge SVG assembly: template validation and placeholder substitution.

use std::fmt::Write as _;

use regex::Regex;
use steambadge_core::{DisplayFields, Theme, labels_for};

use crate::layout::{TEXT_X, lay_out};
use crate::{Error, Result};

const BUILTIN_TEMPLATE: &str = include_str!("../assets/badge_template.svg");

/// Marker the multi-line "last played" text run is spliced into.
const LAST_GAME_MARKER: &str = "<!--LAST_GAME_BLOCK-->";

/// Dark palette constants swapped for their light equivalents on theme=light.
/// Exact string replacement of these two values only, not a color transform.
const DARK_BG_HEX: &str = "#141321";
const LIGHT_BG_HEX: &str = "#ffffff";
const DARK_BORDER_HEX: &str = "#e4e2e2";
const LIGHT_BORDER_HEX: &str = "#d0d0d0";

/// Cache-busting marker appended after the root element.
const RENDER_TAG: &str = "render:v701";

const PLACEHOLDERS: [&str; 6] = [
    "{avatarUrl}",
    "{playerName}",
    "{steamLevel}",
    "{gamesCount}",
    "{friendsCount}",
    "{statusColor}",
];

/// A badge template: a static SVG document with a fixed dimensions header,
/// one `{placeholder}` token per display field, literal English label text,
/// and the structural marker for the wrapped game title.
#[derive(Debug, Clone)]
pub struct Template {
    source: String,
}

impl Template {
    /// The embedded default template. Always valid.
    pub fn builtin() -> Self {
        Self {
            source: BUILTIN_TEMPLATE.to_string(),
        }
    }

    /// Validates a custom template against the wire format. A missing header
    /// attribute, placeholder token, label, or splice marker is fatal here —
    /// at startup — so that rendering itself can stay infallible.
    pub fn from_source(source: impl Into<String>) -> Result<Self> {
        let source = source.into();

        for pattern in [
            r#"width="[^"]*""#,
            r#"height="[^"]*""#,
            r#"viewBox="0 0 \d+ \d+""#,
        ] {
            let re = Regex::new(pattern).unwrap();
            if !re.is_match(&source) {
                return Err(Error::TemplateMissingToken {
                    token: pattern.to_string(),
                });
            }
        }

        let labels = steambadge_core::locale::EN;
        let required = PLACEHOLDERS
            .iter()
            .copied()
            .chain([labels.steam_level, labels.games, labels.friends])
            .chain([LAST_GAME_MARKER]);
        for token in required {
            if !source.contains(token) {
                return Err(Error::TemplateMissingToken {
                    token: token.to_string(),
                });
            }
        }

        Ok(Self { source })
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Escapes the three XML metacharacters. Applied uniformly to every
/// interpolated value, user-controlled or not.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_xml_into(&mut out, text);
    out
}

pub(crate) fn escape_xml_into(out: &mut String, text: &str) {
    let bytes = text.as_bytes();
    let mut start = 0usize;
    for (i, &b) in bytes.iter().enumerate() {
        let esc = match b {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            _ => continue,
        };
        if start < i {
            out.push_str(&text[start..i]);
        }
        out.push_str(esc);
        start = i + 1;
    }
    if start < text.len() {
        out.push_str(&text[start..]);
    }
}

/// Builds the label-prefixed inline text run. The label and line 0 share one
/// run; each continuation line is a new run at the left margin, one
/// line-height below the previous. An empty line 0 leaves the label alone.
fn last_game_block(lines: &[String], label: &str) -> String {
    let mut out = String::new();
    let _ = write!(out, r#"<tspan class="key">{}</tspan>"#, escape_xml(label));
    if let Some(first) = lines.first() {
        if !first.is_empty() {
            let _ = write!(
                out,
                r#" <tspan class="value">{}</tspan>"#,
                escape_xml(first)
            );
        }
    }
    for line in lines.iter().skip(1) {
        let _ = write!(
            out,
            r#"<tspan x="{TEXT_X}" dy="1.4em" class="value">{}</tspan>"#,
            escape_xml(line)
        );
    }
    out
}

/// Renders the finished badge document. Never fails: every input is already a
/// safe string or number, and the template was validated at construction.
///
/// Two calls with identical fields produce byte-different output because of
/// the trailing timestamp comment; that comment is diagnostics only and is
/// not part of the visual layout.
pub fn compose(fields: &DisplayFields, template: &Template) -> String {
    let labels = labels_for(&fields.lang);
    let layout = lay_out(fields);

    let mut svg = template.source().to_string();

    let width_re = Regex::new(r#"width="[^"]*""#).unwrap();
    svg = width_re
        .replace(&svg, format!(r#"width="{}""#, layout.plan.final_width))
        .into_owned();
    let height_re = Regex::new(r#"height="[^"]*""#).unwrap();
    svg = height_re
        .replace(&svg, format!(r#"height="{}""#, layout.plan.final_height))
        .into_owned();
    let viewbox_re = Regex::new(r#"viewBox="0 0 \d+ \d+""#).unwrap();
    svg = viewbox_re
        .replace(
            &svg,
            format!(
                r#"viewBox="0 0 {} {}""#,
                layout.plan.final_width, layout.plan.final_height
            ),
        )
        .into_owned();

    if fields.theme == Theme::Light {
        svg = svg.replace(DARK_BG_HEX, LIGHT_BG_HEX);
        svg = svg.replace(DARK_BORDER_HEX, LIGHT_BORDER_HEX);
    }

    // Labels before field values: a player name containing label text must
    // not capture these replacements.
    let en = steambadge_core::locale::EN;
    svg = svg.replacen(en.steam_level, &escape_xml(labels.steam_level), 1);
    svg = svg.replacen(en.games, &escape_xml(labels.games), 1);
    svg = svg.replacen(en.friends, &escape_xml(labels.friends), 1);

    svg = svg.replace("{avatarUrl}", &escape_xml(&fields.avatar_url));
    svg = svg.replace("{playerName}", &escape_xml(&fields.player_name));
    svg = svg.replace("{steamLevel}", &escape_xml(&fields.steam_level.to_string()));
    svg = svg.replace("{gamesCount}", &escape_xml(&fields.games_count.to_string()));
    svg = svg.replace(
        "{friendsCount}",
        &escape_xml(&fields.friends_count.to_string()),
    );
    svg = svg.replace("{statusColor}", &escape_xml(&fields.status_color));

    // The game title is spliced last so placeholder-shaped user text survives
    // as literal text.
    let block = last_game_block(&layout.lines, labels.last_played);
    svg = svg.replacen(LAST_GAME_MARKER, &block, 1);

    let stamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
    let _ = write!(svg, "\n<!-- {RENDER_TAG} {stamp} -->\n");

    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drops the trailing render comment so outputs can be compared.
    fn visual(svg: &str) -> &str {
        svg.split(&format!("<!-- {RENDER_TAG}")).next().unwrap()
    }

    #[test]
    fn builtin_template_passes_its_own_validation() {
        Template::from_source(BUILTIN_TEMPLATE).expect("builtin template is valid");
    }

    #[test]
    fn template_without_marker_is_rejected() {
        let broken = BUILTIN_TEMPLATE.replace(LAST_GAME_MARKER, "");
        let err = Template::from_source(broken).expect_err("marker is required");
        assert!(matches!(err, Error::TemplateMissingToken { token } if token == LAST_GAME_MARKER));
    }

    #[test]
    fn template_without_placeholder_is_rejected() {
        let broken = BUILTIN_TEMPLATE.replace("{steamLevel}", "{level}");
        assert!(Template::from_source(broken).is_err());
    }

    #[test]
    fn escape_handles_all_three_metacharacters() {
        assert_eq!(
            escape_xml("<script>&</script>"),
            "&lt;script&gt;&amp;&lt;/script&gt;"
        );
        assert_eq!(escape_xml("plain"), "plain");
        assert_eq!(escape_xml(""), "");
    }

    #[test]
    fn hostile_player_name_never_appears_as_markup() {
        let fields = DisplayFields {
            player_name: "<script>&</script>".to_string(),
            ..DisplayFields::default()
        };
        let svg = compose(&fields, &Template::builtin());
        assert!(!svg.contains("<script>"));
        assert!(svg.contains("&lt;script&gt;&amp;&lt;/script&gt;"));
    }

    #[test]
    fn dimensions_header_reflects_the_layout() {
        let fields = DisplayFields {
            last_played_game: "Remnant: From the Ashes".to_string(),
            ..DisplayFields::default()
        };
        let svg = compose(&fields, &Template::builtin());
        assert!(svg.contains(r#"width="400""#));
        assert!(svg.contains(r#"height="242""#));
        assert!(svg.contains(r#"viewBox="0 0 400 242""#));
    }

    #[test]
    fn light_theme_swaps_both_palette_constants() {
        let fields = DisplayFields {
            theme: Theme::Light,
            ..DisplayFields::default()
        };
        let svg = compose(&fields, &Template::builtin());
        assert!(!visual(&svg).contains(DARK_BG_HEX));
        assert!(!visual(&svg).contains(DARK_BORDER_HEX));
        assert!(svg.contains(LIGHT_BG_HEX));
        assert!(svg.contains(LIGHT_BORDER_HEX));
    }

    #[test]
    fn dark_theme_keeps_the_dark_palette() {
        let svg = compose(&DisplayFields::default(), &Template::builtin());
        assert!(svg.contains(DARK_BG_HEX));
        assert!(svg.contains(DARK_BORDER_HEX));
    }

    #[test]
    fn russian_locale_replaces_all_three_labels_and_the_block_label() {
        let fields = DisplayFields {
            lang: "ru".to_string(),
            ..DisplayFields::default()
        };
        let svg = compose(&fields, &Template::builtin());
        assert!(svg.contains("Уровень Steam:"));
        assert!(svg.contains("Игры:"));
        assert!(svg.contains("Друзья:"));
        assert!(svg.contains("Последняя игра:"));
        assert!(!svg.contains("Steam Level:"));
    }

    #[test]
    fn unsupported_locale_falls_back_to_english() {
        let fields = DisplayFields {
            lang: "xx".to_string(),
            ..DisplayFields::default()
        };
        let svg = compose(&fields, &Template::builtin());
        assert!(svg.contains("Steam Level:"));
        assert!(svg.contains("Last Played Game:"));
    }

    #[test]
    fn continuation_lines_are_anchored_at_the_left_margin() {
        let fields = DisplayFields {
            last_played_game: "The Witcher 3: Wild Hunt - Game of the Year Edition".to_string(),
            ..DisplayFields::default()
        };
        let svg = compose(&fields, &Template::builtin());
        assert!(svg.contains(r#"<tspan x="140" dy="1.4em" class="value">"#));
    }

    #[test]
    fn output_differs_only_in_the_render_comment() {
        let fields = DisplayFields::default();
        let template = Template::builtin();
        let a = compose(&fields, &template);
        let b = compose(&fields, &template);
        assert_eq!(visual(&a), visual(&b));
        assert!(a.contains(RENDER_TAG));
    }

    #[test]
    fn empty_game_title_renders_the_label_alone() {
        let fields = DisplayFields {
            last_played_game: String::new(),
            ..DisplayFields::default()
        };
        let svg = compose(&fields, &Template::builtin());
        assert!(svg.contains(r#"<tspan class="key">Last Played Game:</tspan></text>"#));
    }
}
