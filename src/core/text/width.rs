//! Terminal cell width helpers for laying out payload text.

use emojis::get as emoji_get;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

const TAB_WIDTH: usize = 3;

pub fn grapheme_width(grapheme: &str) -> usize {
    if grapheme.is_empty() {
        return 0;
    }
    if grapheme == "\t" {
        return TAB_WIDTH;
    }

    if emoji_get(grapheme).is_some() {
        return 2;
    }

    grapheme
        .chars()
        .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(0))
        .sum()
}

/// Number of terminal cells `text` occupies.
pub fn visible_width(text: &str) -> usize {
    text.graphemes(true).map(grapheme_width).sum()
}

/// Right-pads `text` with spaces to `width` cells. Wider text is returned as is.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let current = visible_width(text);
    let mut padded = String::with_capacity(text.len() + width.saturating_sub(current));
    padded.push_str(text);
    padded.extend(std::iter::repeat(' ').take(width.saturating_sub(current)));
    padded
}

/// Cuts `text` at a grapheme boundary so it fits in `max_width` cells,
/// ending with `ellipsis` when anything was dropped.
pub fn truncate_to_width(text: &str, max_width: usize, ellipsis: &str) -> String {
    if visible_width(text) <= max_width {
        return text.to_string();
    }

    let ellipsis_width = visible_width(ellipsis);
    if ellipsis_width >= max_width {
        return String::new();
    }

    let budget = max_width - ellipsis_width;
    let mut used = 0;
    let mut out = String::new();
    for grapheme in text.graphemes(true) {
        let width = grapheme_width(grapheme);
        if used + width > budget {
            break;
        }
        used += width;
        out.push_str(grapheme);
    }
    out.push_str(ellipsis);
    out
}
