//! Jobs filter bar: the active type filter next to a bordered search box.

use crate::ui::helpers::{position_cursor, truncate, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterBarInfo;

/// Horizontal margin for the bar (spaces on left and right).
const BAR_MARGIN: usize = 2;

/// Renders the 3-line filter bar at `row`. Returns row + 3.
///
/// ```text
///   ┌──────────────────────────────────────────────┐
///   │ Type: All ▸  Search: remote_                 │
///   └──────────────────────────────────────────────┘
/// ```
///
/// The border uses `focus_border` while the search box has focus, and the
/// query gets a trailing cursor.
pub fn render_filter_bar(row: usize, bar: &FilterBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(BAR_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border_color = if bar.is_focused {
        &theme.colors.focus_border
    } else {
        &theme.colors.border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(BAR_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let type_text = format!(" Type: {} ▸ ", bar.filter_label);
    let cursor = if bar.is_focused { "_" } else { "" };
    let query_room = inner_width.saturating_sub(visual_len(&type_text) + 9);
    let search_text = format!(" Search: {}{cursor}", truncate(&bar.query, query_room));
    let padding =
        inner_width.saturating_sub(visual_len(&type_text) + visual_len(&search_text));

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(BAR_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.badge_fg));
    print!("{type_text}");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{search_text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(BAR_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
