//! HTML fragment variant of the badge.
//!
//! Embeds the same display fields as the SVG badge but leaves line breaking
//! to the browser, so none of the canvas math applies here.

use std::fmt::Write as _;

use steambadge_core::{DisplayFields, labels_for};

use crate::svg::escape_xml;

pub fn render_html(fields: &DisplayFields) -> String {
    let labels = labels_for(&fields.lang);
    let theme_class = match fields.theme {
        steambadge_core::Theme::Dark => "steam-badge--dark",
        steambadge_core::Theme::Light => "steam-badge--light",
    };

    let mut out = String::new();
    let _ = writeln!(out, r#"<div class="steam-badge {theme_class}">"#);
    let _ = writeln!(
        out,
        r#"  <img class="steam-badge__avatar" src="{}" alt="">"#,
        escape_xml(&fields.avatar_url)
    );
    let _ = writeln!(out, r#"  <div class="steam-badge__body">"#);
    let _ = writeln!(
        out,
        r#"    <p class="steam-badge__name">{}<span class="steam-badge__status" style="color: {}">&#9679;</span></p>"#,
        escape_xml(&fields.player_name),
        escape_xml(&fields.status_color)
    );
    for (label, value) in [
        (labels.steam_level, fields.steam_level.to_string()),
        (labels.games, fields.games_count.to_string()),
        (labels.friends, fields.friends_count.to_string()),
        (labels.last_played, fields.last_played_game.clone()),
    ] {
        let _ = writeln!(
            out,
            r#"    <p><span class="key">{}</span> <span class="value">{}</span></p>"#,
            escape_xml(label),
            escape_xml(&value)
        );
    }
    let _ = writeln!(out, "  </div>");
    out.push_str("</div>\n");
    out
}
