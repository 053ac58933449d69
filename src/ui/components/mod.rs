//! Composable UI component renderers.
//!
//! Each component draws one region at a given row and returns the next free
//! row, so [`render_screen`] can stack them top to bottom.
//!
//! # Components
//!
//! - [`notification`]: transient banner on the first line
//! - [`header`]: title bar with the catalog size
//! - [`search`]: search box, always visible
//! - [`table`]: product rows and the pagination line
//! - [`empty`]: message shown instead of rows
//! - [`form`]: create-product side panel
//! - [`confirm`]: delete confirmation prompt
//! - [`footer`]: keybinding hints
//!
//! # Layout
//!
//! ```text
//! [Notification]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines]
//! [Table Headers]
//! [Table Rows | Empty State]          [Form Panel overlay]
//! [Pagination]
//!          [Confirm Dialog overlay]
//! [Border]
//! [Footer]
//! ```

mod confirm;
mod empty;
mod footer;
mod form;
mod header;
mod notification;
mod search;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use confirm::render_confirm_dialog;
use empty::render_empty_state;
use footer::render_footer;
use form::render_form_panel;
use header::render_header;
use notification::render_notification;
use search::render_search_bar;
use table::{render_pagination, render_table_headers, render_table_rows};

/// Left and right padding that centers `text` in `width` columns.
///
/// Text wider than `width` gets no padding. Odd remainders go to the right.
#[must_use]
pub fn centered_padding(text: &str, width: usize) -> (usize, usize) {
    let len = text.chars().count();
    let left = width.saturating_sub(len) / 2;
    (left, width.saturating_sub(left + len))
}

/// Renders a horizontal border line at `row` and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the whole screen for one frame.
///
/// Overlays (form panel, confirm dialog) are drawn after the table so they
/// sit on top of it. The footer is pinned to the last line.
pub fn render_screen(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = render_notification(1, vm.notification.as_ref(), theme, cols);

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    let body_top = current_row;
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);
    current_row = render_table_headers(current_row, theme, cols);
    let table_top = current_row;

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row + 1, empty, theme, cols);
    } else {
        current_row = render_table_rows(current_row, &vm.rows, theme, cols);
        render_pagination(current_row + 1, &vm.pagination, theme, cols);
    }

    if let Some(panel) = &vm.form {
        render_form_panel(body_top, panel, theme, cols);
    }

    if let Some(dialog) = &vm.confirm {
        render_confirm_dialog(table_top + 1, dialog, theme, cols);
    }

    let footer_row = rows.max(2);
    render_border(footer_row - 1, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centering_splits_remainder_to_the_right() {
        assert_eq!(centered_padding("abc", 10), (3, 4));
        assert_eq!(centered_padding("abcd", 10), (3, 3));
        assert_eq!(centered_padding("too wide", 4), (0, 0));
    }
}
