//! Post form renderer.

use crate::ui::helpers::{position_cursor, print_padded, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FormView;

const LABEL_WIDTH: usize = 14;

/// Renders the form title and one line per field from `row`.
///
/// The focused field gets a marker and, for text fields, a trailing cursor.
/// Option fields show `◂ value ▸` to hint at left/right.
pub fn render_form(row: usize, form: &FormView, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.section_title_fg));
    print!("  ");
    print_padded(&form.title, cols.saturating_sub(2));
    print!("{}", Theme::reset());

    let value_width = cols.saturating_sub(LABEL_WIDTH + 8);
    let mut current_row = row + 2;

    for field in &form.fields {
        position_cursor(current_row, 1);

        if field.is_focused {
            print!("{}", Theme::fg(&theme.colors.focus_border));
            print!("  ▶ ");
        } else {
            print!("    ");
        }

        print!("{}", Theme::fg(&theme.colors.text_dim));
        print_padded(&format!("{}:", field.label), LABEL_WIDTH);

        print!("{}", Theme::fg(&theme.colors.text_normal));
        if field.is_focused {
            print!("{}", Theme::bold());
        }

        let shown = if field.is_option {
            format!("◂ {} ▸", field.value)
        } else if field.is_focused {
            // Keep the end of long input visible while typing.
            let tail: String = {
                let chars: Vec<char> = field.value.chars().collect();
                let keep = value_width.saturating_sub(1);
                chars[chars.len().saturating_sub(keep)..].iter().collect()
            };
            format!("{tail}_")
        } else {
            truncate(&field.value, value_width)
        };
        print_padded(&shown, value_width);
        print!("{}", Theme::reset());

        current_row += 1;
    }

    current_row
}
