//! Create-product side panel.
//!
//! Drawn as a bordered drawer over the right side of the table. Each field
//! takes three lines: label, value box line, and an error line that is blank
//! when the field is valid.

use crate::ui::helpers::{pad_right, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FormFieldView, FormPanel};

/// Widest the panel gets on large panes.
const MAX_PANEL_WIDTH: usize = 44;

/// Lines used by one field.
const FIELD_HEIGHT: usize = 3;

/// Width of the side panel for a pane `cols` wide.
#[must_use]
pub fn panel_width(cols: usize) -> usize {
    (cols / 2).clamp(20.min(cols), MAX_PANEL_WIDTH)
}

/// Renders the form panel with its top-left corner on `row`.
///
/// Returns the row after the bottom border.
pub fn render_form_panel(row: usize, panel: &FormPanel, theme: &Theme, cols: usize) -> usize {
    let width = panel_width(cols);
    let inner = width.saturating_sub(2);
    let col = cols.saturating_sub(width) + 1;
    let border = Theme::fg(&theme.colors.panel_border);

    let title = format!(" {} ", panel.title);
    let title_len = title.chars().count().min(inner);
    position_cursor(row, col);
    print!("{border}┌{}", Theme::bold());
    print!("{}", pad_right(&title, title_len));
    print!("{}{border}{}┐{}", Theme::reset(), "─".repeat(inner - title_len), Theme::reset());

    let mut current_row = row + 1;
    for field in &panel.fields {
        current_row = render_field(current_row, col, inner, field, theme);
    }

    position_cursor(current_row, col);
    print!("{border}└{}┘{}", "─".repeat(inner), Theme::reset());
    current_row + 1
}

fn render_field(row: usize, col: usize, inner: usize, field: &FormFieldView, theme: &Theme) -> usize {
    let border = Theme::fg(&theme.colors.panel_border);
    let edge = |r: usize| {
        position_cursor(r, col);
        print!("{border}│{}", Theme::reset());
    };
    let close = || print!("{border}│{}", Theme::reset());

    edge(row);
    let marker = if field.is_focused { "> " } else { "  " };
    print!("{}", Theme::fg(&theme.colors.text_dim));
    if field.is_focused {
        print!("{}", Theme::bold());
    }
    print!("{}", pad_right(&format!("{marker}{}", field.label), inner));
    print!("{}", Theme::reset());
    close();

    edge(row + 1);
    let cursor = if field.is_focused { "█" } else { "" };
    if field.is_focused {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    print!("{}", pad_right(&format!("  {}{cursor}", field.value), inner));
    print!("{}", Theme::reset());
    close();

    edge(row + 2);
    print!("{}", Theme::fg(&theme.colors.error_fg));
    print!("{}", pad_right(&format!("  {}", field.error.as_deref().unwrap_or("")), inner));
    print!("{}", Theme::reset());
    close();

    row + FIELD_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_width_tracks_pane_within_bounds() {
        assert_eq!(panel_width(200), MAX_PANEL_WIDTH);
        assert_eq!(panel_width(60), 30);
        assert_eq!(panel_width(30), 20);
        assert_eq!(panel_width(10), 10);
    }
}
