//! Composable UI component renderers.
//!
//! # Components
//!
//! - `header`: Title bar and screen tabs
//! - `footer`: Keybinding hints and the delete prompt
//! - `filter_bar`: Job type filter and search box
//! - `table`: Jobs or admissions list
//! - `home`: Latest jobs, top admissions, contact
//! - `form`: Post form
//! - `empty`: Message for an empty list
//!
//! # Layout
//!
//! Every screen shares the same frame; only the body differs:
//!
//! ```text
//! [blank line]
//! [Header]
//! [Tabs]
//! [Border]
//! [Body]
//! [Border]
//! [Footer or confirmation prompt]
//! ```

mod empty;
mod filter_bar;
mod footer;
mod form;
mod header;
mod home;
mod table;

use crate::ui::helpers::{position_cursor, print_padded};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ListingTable, ScreenBody, UIViewModel};

use empty::render_empty_state;
use filter_bar::render_filter_bar;
use footer::{render_confirm, render_footer};
use form::render_form;
use header::render_header;
use home::render_home;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at `row`. Returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a listing screen body from `row`.
///
/// The line above the bottom border shows the details of the selected record.
fn render_listings(row: usize, table: &ListingTable, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = row;

    if let Some(bar) = &table.filter_bar {
        current_row = render_filter_bar(current_row, bar, theme, cols);
    }

    if let Some(empty) = &table.empty_state {
        render_empty_state(current_row + 2, empty, theme, cols);
        return;
    }

    current_row = render_table_headers(current_row, table.kind, theme, cols);
    render_table_rows(current_row, &table.rows, theme, cols);

    if let Some(details) = &table.selected_details {
        position_cursor(rows.saturating_sub(3), 1);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!(" ");
        print_padded(details, cols.saturating_sub(1));
        print!("{}", Theme::reset());
    }
}

/// Renders a full frame for the view model.
pub fn render_frame(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Row 1 stays blank.

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);

    match &vm.body {
        ScreenBody::Home(home) => render_home(current_row, home, theme, cols, border_row.saturating_sub(1)),
        ScreenBody::Listings(table) => render_listings(current_row, table, theme, cols, rows),
        ScreenBody::Post(form) => {
            render_form(current_row, form, theme, cols);
        }
        ScreenBody::Empty(empty) => {
            render_empty_state(current_row + 2, empty, theme, cols);
        }
    }

    render_border(border_row, &theme.colors.border, cols);
    if let Some(prompt) = &vm.confirm {
        render_confirm(footer_row, prompt, theme, cols);
    } else {
        render_footer(footer_row, &vm.footer, theme, cols);
    }
}
