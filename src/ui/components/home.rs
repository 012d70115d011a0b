//! Home screen: latest jobs, top admissions and the contact block.

use crate::ui::helpers::{position_cursor, print_padded};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{HomeEntry, HomeSections};

fn render_section_title(row: usize, title: &str, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.section_title_fg));
    print!("  ");
    print_padded(title, cols.saturating_sub(2));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders entries while they fit above `last_row`. Returns the next row.
fn render_entries(
    mut row: usize,
    entries: &[HomeEntry],
    theme: &Theme,
    cols: usize,
    last_row: usize,
) -> usize {
    for entry in entries {
        if row + 1 > last_row {
            break;
        }
        position_cursor(row, 1);
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("    ");
        print_padded(&entry.primary, cols.saturating_sub(4));

        position_cursor(row + 1, 1);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("    ");
        print_padded(&entry.secondary, cols.saturating_sub(4));
        print!("{}", Theme::reset());
        row += 2;
    }
    row
}

/// Renders the home sections from `row`, never drawing past `last_row`.
pub fn render_home(row: usize, home: &HomeSections, theme: &Theme, cols: usize, last_row: usize) {
    let mut row = render_section_title(row, "Latest Jobs", theme, cols);
    row = render_entries(row, &home.latest_jobs, theme, cols, last_row);

    if row + 1 >= last_row {
        return;
    }
    row = render_section_title(row + 1, "Top Admissions", theme, cols);
    row = render_entries(row, &home.top_admissions, theme, cols, last_row);

    if home.contact.is_empty() || row + 1 + home.contact.len() > last_row {
        return;
    }
    row = render_section_title(row + 1, "Contact", theme, cols);
    for line in &home.contact {
        position_cursor(row, 1);
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("    ");
        print_padded(line, cols.saturating_sub(4));
        print!("{}", Theme::reset());
        row += 1;
    }
}
