//! Listing table renderer.
//!
//! Four columns: type badge, title, where, and a meta column (salary and date
//! for jobs, intake and last date for admissions). Column widths come from
//! [`ColumnWidths`], the same widths the view model truncated to.

use crate::ui::helpers::{self, position_cursor, print_padded, visual_len, ColumnWidths};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, TableKind};

/// Renders the column headers at `row`. Returns the next row.
pub fn render_table_headers(row: usize, kind: TableKind, theme: &Theme, cols: usize) -> usize {
    let widths = ColumnWidths::for_cols(cols);
    let (badge, title, subtitle, meta) = match kind {
        TableKind::Jobs => ("TYPE", "TITLE", "ORGANIZATION • LOCATION", "SALARY • POSTED"),
        TableKind::Admissions => ("", "PROGRAM", "UNIVERSITY • CAMPUS", "INTAKE • LAST DATE"),
    };

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(" ");
    print_padded(badge, ColumnWidths::BADGE);
    print_padded(title, widths.title + 1);
    print_padded(subtitle, widths.subtitle + 1);
    print_padded(meta, widths.meta);
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all rows starting at `row`. Returns the next free row.
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let widths = ColumnWidths::for_cols(cols);
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, widths, cols);
    }
    current_row
}

/// Renders one row.
///
/// Styling precedence: selection background, then search highlight (skipped
/// on the selected row), then normal text. The row is padded to the full
/// width so the selection background spans the pane.
fn render_table_row(
    row: usize,
    item: &DisplayItem,
    theme: &Theme,
    widths: ColumnWidths,
    cols: usize,
) -> usize {
    position_cursor(row, 1);

    let base_fg = if item.is_selected {
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        &theme.colors.selection_fg
    } else {
        &theme.colors.text_normal
    };

    print!(" ");
    print!("{}", Theme::fg(if item.is_selected { base_fg } else { &theme.colors.badge_fg }));
    print_padded(item.badge.as_deref().unwrap_or(""), ColumnWidths::BADGE);

    print!("{}", Theme::fg(base_fg));
    helpers::render_highlighted_text(&item.title, &item.highlight_ranges, theme, item.is_selected);
    if item.is_selected {
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        print!("{}", Theme::fg(base_fg));
    }
    print!("{}", " ".repeat((widths.title + 1).saturating_sub(visual_len(&item.title))));

    print_padded(&item.subtitle, widths.subtitle + 1);

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print_padded(&item.meta, widths.meta);

    let used = 1 + ColumnWidths::BADGE + widths.title + 1 + widths.subtitle + 1 + widths.meta;
    print!("{}", " ".repeat(cols.saturating_sub(used)));

    print!("{}", Theme::reset());
    row + 1
}
