//! Canvas sizing and the two-stage wrap of the "last played" line.

use serde::Serialize;
use steambadge_core::DisplayFields;

use crate::text::{estimate_width, wrap};

pub(crate) const BASE_WIDTH: u32 = 400;
pub(crate) const BASE_HEIGHT: u32 = 220;
/// Left edge of the text column, shared by every continuation line.
pub(crate) const TEXT_X: u32 = 140;
pub(crate) const FONT_SIZE_PX: f64 = 16.0;
pub(crate) const LINE_HEIGHT: u32 = 22;
const RIGHT_PAD: u32 = 20;
const MIN_WIDTH: u32 = 320;
const MAX_WIDTH: u32 = 700;
/// The first line shares its row with the label, so its budget is smaller.
const FIRST_LINE_PAD: u32 = 110;
const OTHER_LINES_PAD: u32 = 20;
const NAME_CHAR_PX: u32 = 14;
/// Names longer than this clip instead of widening the canvas further.
const NAME_WIDEN_CAP: u32 = 32;
const MIN_LINE_BUDGET_PX: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutPlan {
    pub final_width: u32,
    pub final_height: u32,
    pub first_line_budget_px: f64,
    pub other_line_budget_px: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextLayout {
    pub plan: LayoutPlan,
    /// Line 0 sits after the label; an empty line 0 means the label stands
    /// alone and every line starts at the left margin.
    pub lines: Vec<String>,
}

fn line_budgets(final_width: u32) -> (f64, f64) {
    let first = (f64::from(final_width) - f64::from(TEXT_X + RIGHT_PAD + FIRST_LINE_PAD))
        .max(MIN_LINE_BUDGET_PX);
    let other = (f64::from(final_width) - f64::from(TEXT_X + RIGHT_PAD + OTHER_LINES_PAD))
        .max(MIN_LINE_BUDGET_PX);
    (first, other)
}

fn widen_for_name(name: &str, final_width: u32) -> u32 {
    let name_len = name.chars().count() as u64;
    if name_len == 0 {
        return final_width;
    }

    let mut width = final_width;
    let need = u64::from(TEXT_X) + name_len * u64::from(NAME_CHAR_PX) + u64::from(RIGHT_PAD);
    if need > u64::from(width) {
        width = need.min(u64::from(MAX_WIDTH)) as u32;
    }
    if name_len > u64::from(NAME_WIDEN_CAP) {
        width = (TEXT_X + NAME_WIDEN_CAP * NAME_CHAR_PX + RIGHT_PAD).min(MAX_WIDTH);
    }
    width
}

/// Computes the finished canvas dimensions and display lines for a record.
///
/// The game title is wrapped twice: once against the narrow first-line budget,
/// then — when that produced a head plus leftovers — the leftovers are
/// re-wrapped against the wider continuation budget. A head of one to four
/// characters is a degenerate split: it is merged back and suppressed so the
/// label never carries a stray fragment. If a continuation line still
/// overflows its budget, the canvas grows by exactly the overflow (up to the
/// maximum width) and the two-stage wrap runs once more. That correction is
/// deliberately not iterated to a fixed point.
pub fn lay_out(fields: &DisplayFields) -> TextLayout {
    let mut final_width = fields
        .width
        .unwrap_or(BASE_WIDTH)
        .clamp(MIN_WIDTH, MAX_WIDTH);
    final_width = widen_for_name(&fields.player_name, final_width);

    let (mut first_budget, mut other_budget) = line_budgets(final_width);

    let game = fields.last_played_game.as_str();
    let first_pass = wrap(game, first_budget, FONT_SIZE_PX);
    let has_spaces = game.chars().any(char::is_whitespace);

    let mut lines;
    if has_spaces && first_pass.len() > 1 {
        let head = first_pass[0].clone();
        let tail_text = first_pass[1..].join(" ");
        let mut tail = wrap(&tail_text, other_budget, FONT_SIZE_PX);

        let head_len = head.trim().chars().count();
        if (1..=4).contains(&head_len) && !tail.is_empty() {
            let full = format!("{head} {}", tail.join(" "));
            tail = wrap(&full, other_budget, FONT_SIZE_PX);
            lines = Vec::with_capacity(tail.len() + 1);
            lines.push(String::new());
            lines.extend(tail.iter().cloned());
        } else {
            lines = Vec::with_capacity(tail.len() + 1);
            lines.push(head);
            lines.extend(tail.iter().cloned());
        }

        let max_tail_px = tail
            .iter()
            .map(|line| estimate_width(line, FONT_SIZE_PX))
            .fold(0.0, f64::max);
        if max_tail_px > other_budget && final_width < MAX_WIDTH {
            let extra = (max_tail_px - other_budget).ceil() as u32;
            final_width = final_width.saturating_add(extra).min(MAX_WIDTH);
            (first_budget, other_budget) = line_budgets(final_width);
            tracing::debug!(final_width, "grew canvas to absorb tail overflow");

            let retry = wrap(game, first_budget, FONT_SIZE_PX);
            let head = retry.first().cloned().unwrap_or_default();
            let tail_text = retry.get(1..).unwrap_or_default().join(" ");
            let tail = wrap(&tail_text, other_budget, FONT_SIZE_PX);
            lines = Vec::with_capacity(tail.len() + 1);
            lines.push(head);
            lines.extend(tail);
        }
    } else {
        lines = first_pass;
    }

    let extra_lines = lines.len().saturating_sub(1) as u32;
    let final_height = BASE_HEIGHT + extra_lines * LINE_HEIGHT;

    TextLayout {
        plan: LayoutPlan {
            final_width,
            final_height,
            first_line_budget_px: first_budget,
            other_line_budget_px: other_budget,
        },
        lines,
    }
}
