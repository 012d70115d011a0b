//! Header component renderer: centred title bar plus the screen tabs.

use crate::ui::helpers::{position_cursor, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar at `row` and the tab strip below it.
///
/// Returns the next free row (row + 2).
///
/// ```text
/// [padding] RozgarHub Pakistan [padding]
///  1 Home   2 Jobs (2)   3 Admissions (1)   4 Post
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = visual_len(&header.title);
    let padding = (cols.saturating_sub(title_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{}", header.title);
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    let mut used = 0;
    for tab in &header.tabs {
        let text = format!(" {} ", tab.label);
        let len = visual_len(&text) + 1;
        if used + len > cols {
            break;
        }
        print!(" ");
        if tab.is_active {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.tab_active_fg));
            print!("{}", Theme::bg(&theme.colors.tab_active_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!("{text}");
        print!("{}", Theme::reset());
        used += len;
    }
    print!("{}", " ".repeat(cols.saturating_sub(used)));

    row + 2
}
