//! Pixel estimation and greedy wrapping for badge text.
//!
//! There are no real font metrics here: a string's rendered width is
//! approximated as `chars * font_px * AVG_CHAR_RATIO`, the mean
//! glyph-width-to-font-size ratio of the badge font. The error accumulates
//! with string length, which is why every packing decision keeps a soft
//! margin in reserve.

/// Mean glyph width as a fraction of the font size.
pub(crate) const AVG_CHAR_RATIO: f64 = 0.56;

/// Safety buffer against estimation drift, in pixels.
pub(crate) const SOFT_MARGIN_PX: f64 = 30.0;

/// Estimated rendered width of `text` at `font_px`, in whole pixels.
/// Characters are Unicode scalar values, never bytes.
pub fn estimate_width(text: &str, font_px: f64) -> f64 {
    (text.chars().count() as f64 * font_px * AVG_CHAR_RATIO).ceil()
}

/// Splits a token that cannot fit on any line into fixed-length chunks.
/// The chunk length is floored at one character, so this terminates even
/// when the budget is smaller than a single glyph.
fn chunk_long_word(word: &str, max_px: f64, font_px: f64) -> Vec<String> {
    let budget = ((max_px - SOFT_MARGIN_PX) / (font_px * AVG_CHAR_RATIO)).floor();
    let max_chars = if budget < 1.0 { 1 } else { budget as usize };

    let chars: Vec<char> = word.chars().collect();
    chars
        .chunks(max_chars)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Greedily wraps `text` into lines whose estimated width stays inside
/// `max_px`. Whitespace runs are collapsed; a token too wide for a full line
/// is force-split by character count first. Empty or whitespace-only input
/// yields no lines.
pub fn wrap(text: &str, max_px: f64, font_px: f64) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();

    for raw_word in text.split_whitespace() {
        let word_px = estimate_width(raw_word, font_px);
        let parts = if word_px >= max_px - SOFT_MARGIN_PX {
            chunk_long_word(raw_word, max_px, font_px)
        } else {
            vec![raw_word.to_string()]
        };

        for part in parts {
            if line.is_empty() {
                if estimate_width(&part, font_px) <= max_px {
                    line = part;
                } else {
                    // A single forced chunk can still overflow a budget
                    // narrower than one glyph; emit it as its own line.
                    lines.push(part);
                }
                continue;
            }

            let candidate = format!("{line} {part}");
            if estimate_width(&candidate, font_px) < max_px - SOFT_MARGIN_PX {
                line = candidate;
            } else {
                lines.push(std::mem::take(&mut line));
                line = part;
            }
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
