//! Shared rendering utilities and helpers.
//!
//! Low-level pieces used by several components: cursor positioning, search
//! match highlighting, digit grouping for prices, and column sizing.
//! Everything that measures text works on character indices, never bytes.
//!
//! # Example
//!
//! ```
//! use catalog_admin::ui::helpers::{group_digits, truncate_with_ellipsis};
//!
//! assert_eq!(group_digits("32990000", '.'), "32.990.000");
//! assert_eq!(truncate_with_ellipsis("MacBook Air M3", 10), ("MacBook...".to_string(), 7));
//! ```

use crate::ui::theme::Theme;

/// Width of the `#` column.
pub const POSITION_WIDTH: usize = 4;

/// Width of the `PRICE (VND)` column.
pub const PRICE_WIDTH: usize = 14;

/// Width of the `QTY` column.
pub const QUANTITY_WIDTH: usize = 6;

/// Width of the `ACTION` column.
pub const ACTION_WIDTH: usize = 10;

/// Narrowest the name column is allowed to get.
pub const MIN_NAME_WIDTH: usize = 12;

/// Spaces between adjacent columns.
pub const COLUMN_GAP: usize = 2;

/// Positions the cursor at a specific row and column (both 1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Renders text with highlighted character ranges for search matches.
///
/// Ranges are `(start, end)` in character indices, end exclusive, sorted and
/// non-overlapping. Out-of-bounds ranges are clipped. Selected rows are
/// printed plain so the selection background stays uniform.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.max(current_pos).min(chars.len());
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

/// Inserts `separator` between every group of three digits, from the right.
///
/// Input is expected to be a plain digit string; anything else is grouped
/// by character just the same.
#[must_use]
pub fn group_digits(raw: &str, separator: char) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let mut grouped = String::with_capacity(chars.len() + chars.len() / 3);

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(*c);
    }
    grouped
}

/// Width available for product names in a pane `cols` wide.
#[must_use]
pub fn name_column_width(cols: usize) -> usize {
    let fixed = POSITION_WIDTH + PRICE_WIDTH + QUANTITY_WIDTH + ACTION_WIDTH + 4 * COLUMN_GAP;
    cols.saturating_sub(fixed).max(MIN_NAME_WIDTH)
}

/// Shortens `text` to at most `max` characters, ending in `...` when cut.
///
/// Returns the display string and how many characters of the original text
/// it still shows, so highlight ranges can be clipped to match.
#[must_use]
pub fn truncate_with_ellipsis(text: &str, max: usize) -> (String, usize) {
    let len = text.chars().count();
    if len <= max {
        return (text.to_string(), len);
    }
    if max <= 3 {
        return (text.chars().take(max).collect(), max);
    }

    let keep = max - 3;
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str("...");
    (truncated, keep)
}

/// Pads `text` with spaces to `width` characters, or cuts it if longer.
#[must_use]
pub fn pad_right(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.chars().take(width).collect()
    } else {
        format!("{text}{}", " ".repeat(width - len))
    }
}

/// Left-pads `text` with spaces to `width` characters.
#[must_use]
pub fn pad_left(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{}{text}", " ".repeat(width - len))
    }
}
