//! Footer component renderer.
//!
//! The footer row shows centred keybinding hints, or the delete confirmation
//! prompt while one is pending.

use crate::ui::helpers::{position_cursor, truncate, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ConfirmPrompt, FooterInfo};

fn render_centered(row: usize, text: &str, color: &str, bold: bool, cols: usize) -> usize {
    let shown = truncate(text, cols);
    let text_len = visual_len(&shown);
    let padding = (cols.saturating_sub(text_len)) / 2;

    position_cursor(row, 1);
    if bold {
        print!("{}", Theme::bold());
    }
    print!("{}", Theme::fg(color));
    print!("{}", " ".repeat(padding));
    print!("{shown}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the keybinding hints at `row`. Returns the next row.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    render_centered(row, &footer.keybindings, &theme.colors.text_dim, false, cols)
}

/// Renders the blocking delete prompt in place of the footer.
pub fn render_confirm(row: usize, prompt: &ConfirmPrompt, theme: &Theme, cols: usize) -> usize {
    render_centered(row, &prompt.message, &theme.colors.danger_fg, true, cols)
}
