//! Shared rendering utilities and helpers.
//!
//! Low-level pieces used across components: cursor positioning, search hit
//! highlighting and width-aware truncation. Everything operates on character
//! indices, never byte indices, so Urdu and other multi-byte text is safe.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column (both 1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Shortens `text` to at most `max` characters, ending in `...` when cut.
///
/// # Examples
///
/// ```
/// use rozgarhub::ui::helpers::truncate;
///
/// assert_eq!(truncate("Software Developer", 20), "Software Developer");
/// assert_eq!(truncate("Software Developer", 10), "Softwar...");
/// assert_eq!(truncate("Developer", 2), "De");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    let len = text.chars().count();
    if len <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let kept: String = text.chars().take(max - 3).collect();
    format!("{kept}...")
}

/// Number of characters `text` occupies on screen.
#[must_use]
pub fn visual_len(text: &str) -> usize {
    text.chars().count()
}

/// Renders text with highlighted character ranges for search hits.
///
/// Highlighting is skipped on the selected row so it does not fight with the
/// selection background. Ranges past the end of `text` are clipped.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        let normal_section: String = chars[current_pos..start].iter().collect();
        print!("{normal_section}");

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

/// Prints `text` left-aligned in a column of `width` characters.
pub fn print_padded(text: &str, width: usize) {
    let shown = truncate(text, width);
    print!("{shown}");
    print!("{}", " ".repeat(width.saturating_sub(visual_len(&shown))));
}

/// Column widths of the listing table for a given pane width.
#[derive(Debug, Clone, Copy)]
pub struct ColumnWidths {
    pub title: usize,
    pub subtitle: usize,
    pub meta: usize,
}

impl ColumnWidths {
    /// Room reserved in front of the title for the type badge.
    pub const BADGE: usize = 13;

    #[must_use]
    pub fn for_cols(cols: usize) -> Self {
        let rest = cols.saturating_sub(Self::BADGE + 2);
        let title = (rest * 2 / 5).max(8);
        let subtitle = (rest * 3 / 10).max(6);
        let meta = rest.saturating_sub(title + subtitle).max(6);
        Self { title, subtitle, meta }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_characters() {
        let urdu = "لاہور";
        assert_eq!(truncate(urdu, 5), urdu);
        assert_eq!(visual_len(&truncate(urdu, 4)), 4);
    }
}
