//! Header component renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

use super::centered_padding;

/// Renders the title bar centered at `row`, bold, across the full width.
///
/// Returns the next available row.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let (left, right) = centered_padding(&header.title, cols);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(left));
    print!("{}", header.title);
    print!("{}", " ".repeat(right));

    print!("{}", Theme::reset());
    row + 1
}
