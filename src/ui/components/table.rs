//! Table component renderer.
//!
//! Renders the current page of products as five columns: `#`, `NAME`,
//! `PRICE (VND)`, `QTY` and `ACTION`. The selected row gets the selection
//! colors across the full width and carries the delete hint in its action
//! cell; search matches inside names are highlighted on the other rows.

use crate::ui::helpers::{
    self, name_column_width, pad_left, pad_right, position_cursor, ACTION_WIDTH, COLUMN_GAP,
    POSITION_WIDTH, PRICE_WIDTH, QUANTITY_WIDTH,
};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayRow, PaginationInfo};

const DELETE_HINT: &str = "[d] Delete";

/// Renders the column titles at `row` and returns the next row.
pub fn render_table_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    let name_width = name_column_width(cols);
    let gap = " ".repeat(COLUMN_GAP);

    let line = format!(
        "{}{gap}{}{gap}{}{gap}{}{gap}{}",
        pad_left("#", POSITION_WIDTH),
        pad_right("NAME", name_width),
        pad_left("PRICE (VND)", PRICE_WIDTH),
        pad_left("QTY", QUANTITY_WIDTH),
        pad_right("ACTION", ACTION_WIDTH),
    );

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", pad_right(&line, cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders every row of the current page starting at `row`.
///
/// Returns the row after the last one drawn.
pub fn render_table_rows(row: usize, rows: &[DisplayRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for display_row in rows {
        current_row = render_table_row(current_row, display_row, theme, cols);
    }
    current_row
}

fn render_table_row(row: usize, item: &DisplayRow, theme: &Theme, cols: usize) -> usize {
    let name_width = name_column_width(cols);
    let gap = " ".repeat(COLUMN_GAP);

    position_cursor(row, 1);

    let base_style = if item.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    print!("{base_style}");

    print!("{}{gap}", pad_left(&item.position.to_string(), POSITION_WIDTH));

    helpers::render_highlighted_text(&item.name, &item.highlight_ranges, theme, item.is_selected);
    let name_len = item.name.chars().count();
    print!("{}{gap}", " ".repeat(name_width.saturating_sub(name_len)));

    print!("{}{gap}", pad_left(&item.price, PRICE_WIDTH));
    print!("{}{gap}", pad_left(&item.quantity, QUANTITY_WIDTH));

    if item.is_selected {
        print!("{}", Theme::bold());
        print!("{DELETE_HINT}");
        print!("{}", Theme::reset());
        print!("{base_style}");
    } else {
        print!("{}", " ".repeat(DELETE_HINT.len()));
    }

    let used = POSITION_WIDTH + name_width + PRICE_WIDTH + QUANTITY_WIDTH + ACTION_WIDTH + 4 * COLUMN_GAP;
    print!("{}", " ".repeat(cols.saturating_sub(used)));

    print!("{}", Theme::reset());
    row + 1
}

/// Renders the `Page p/n · total` line at `row`, right-aligned.
pub fn render_pagination(row: usize, pagination: &PaginationInfo, theme: &Theme, cols: usize) -> usize {
    let text = pagination_label(pagination);

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", pad_left(&text, cols.saturating_sub(COLUMN_GAP)));
    print!("{}", Theme::reset());
    row + 1
}

fn pagination_label(pagination: &PaginationInfo) -> String {
    let noun = if pagination.total == 1 { "product" } else { "products" };
    format!(
        "Page {}/{} · {} {noun}",
        pagination.page, pagination.page_count, pagination.total
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_label_pluralizes() {
        let one = PaginationInfo { page: 1, page_count: 1, total: 1 };
        assert_eq!(pagination_label(&one), "Page 1/1 · 1 product");

        let many = PaginationInfo { page: 2, page_count: 3, total: 12 };
        assert_eq!(pagination_label(&many), "Page 2/3 · 12 products");
    }

    #[test]
    fn delete_hint_fits_action_column() {
        assert!(DELETE_HINT.len() <= ACTION_WIDTH);
    }
}
