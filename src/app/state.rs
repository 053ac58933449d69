//! Application state management and view model computation.
//!
//! [`AppState`] owns the injected [`ProductStore`] together with the purely
//! presentational state around it: cursor, page size, input mode, the create
//! form, and the current notification. The filtered view is re-fetched from
//! the store with [`AppState::refresh`] after every mutation rather than being
//! kept in sync incrementally.
//!
//! # Example
//!
//! ```
//! use catalog_admin::app::AppState;
//! use catalog_admin::store::InMemoryStore;
//! use catalog_admin::Theme;
//!
//! let mut state = AppState::new(Box::new(InMemoryStore::seeded()), Theme::default());
//! state.refresh();
//! let vm = state.compute_viewmodel(24, 100);
//! assert_eq!(vm.rows.len(), 5);
//! ```

use super::actions::Action;
use super::form::ProductForm;
use super::modes::{FormField, InputMode};
use super::notification::Notification;
use crate::domain::Product;
use crate::store::ProductStore;
use crate::ui::helpers::{group_digits, name_column_width, truncate_with_ellipsis};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ConfirmDialog, DisplayRow, EmptyState, FooterInfo, FormFieldView, FormPanel, HeaderInfo,
    NotificationBanner, PaginationInfo, SearchBarInfo, UIViewModel,
};

/// Rows per table page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Seconds a notification stays visible unless configured otherwise.
pub const DEFAULT_NOTIFICATION_SECS: u32 = 3;

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// The catalog and search filter. Only mutated through its trait methods.
    pub store: Box<dyn ProductStore>,

    /// Last filtered read from the store, in catalog order.
    ///
    /// Recomputed by [`refresh`](Self::refresh); never edited in place.
    pub filtered_products: Vec<Product>,

    /// Zero-based cursor within `filtered_products`.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Create-product form buffers. Kept while the panel is closed only in
    /// their reset state.
    pub form: ProductForm,

    /// Currently visible notification.
    pub notification: Option<Notification>,

    /// Rows per table page. Always at least 1.
    pub page_size: usize,

    /// Lifetime of new notifications, in seconds.
    pub notification_secs: u32,

    /// Color scheme for rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a new state around `store` with default paging and timing.
    ///
    /// The filtered view starts empty; call [`refresh`](Self::refresh) once
    /// before the first render.
    #[must_use]
    pub fn new(store: Box<dyn ProductStore>, theme: Theme) -> Self {
        Self {
            store,
            filtered_products: vec![],
            selected_index: 0,
            input_mode: InputMode::Normal,
            form: ProductForm::default(),
            notification: None,
            page_size: DEFAULT_PAGE_SIZE,
            notification_secs: DEFAULT_NOTIFICATION_SECS,
            theme,
        }
    }

    /// Re-reads the filtered view from the store and clamps the cursor.
    pub fn refresh(&mut self) {
        let _span = tracing::debug_span!(
            "refresh",
            catalog_len = self.store.products().len(),
            query_len = self.store.search_text().len()
        )
        .entered();

        self.filtered_products = self.store.filtered_products();

        if self.filtered_products.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.filtered_products.len() - 1);
        }

        tracing::debug!(filtered_count = self.filtered_products.len(), "filtered view refreshed");
    }

    /// Moves the cursor down one row, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.filtered_products.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.filtered_products.len();
    }

    /// Moves the cursor up one row, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.filtered_products.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.filtered_products.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Zero-based index of the page holding the cursor.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.selected_index / self.page_size
    }

    /// Number of pages for the filtered view (at least 1).
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.filtered_products.len().div_ceil(self.page_size).max(1)
    }

    /// Jumps the cursor to the first row of the next page.
    ///
    /// Returns `false` when already on the last page.
    pub fn next_page(&mut self) -> bool {
        let page = self.current_page();
        if page + 1 >= self.page_count() {
            return false;
        }
        self.selected_index = (page + 1) * self.page_size;
        true
    }

    /// Jumps the cursor to the first row of the previous page.
    ///
    /// Returns `false` when already on the first page.
    pub fn prev_page(&mut self) -> bool {
        let page = self.current_page();
        if page == 0 {
            return false;
        }
        self.selected_index = (page - 1) * self.page_size;
        true
    }

    /// Product under the cursor, if the filtered view is non-empty.
    #[must_use]
    pub fn selected_product(&self) -> Option<&Product> {
        self.filtered_products.get(self.selected_index)
    }

    /// Shows a notification and returns the timer action that will expire it.
    pub fn notify(&mut self, notification: Notification) -> Action {
        tracing::debug!(
            kind = ?notification.kind,
            message = %notification.message,
            "notification raised"
        );
        self.notification = Some(notification);
        Action::ScheduleTimer {
            seconds: f64::from(self.notification_secs),
        }
    }

    /// Computes a renderable view model for a terminal of `rows` x `cols`.
    ///
    /// Only the page containing the cursor is materialized. Row positions
    /// restart at 1 on every page.
    #[must_use]
    pub fn compute_viewmodel(&self, _rows: usize, cols: usize) -> UIViewModel {
        let total = self.filtered_products.len();
        let page = self.current_page();
        let start = (page * self.page_size).min(total);
        let end = (start + self.page_size).min(total);

        let name_width = name_column_width(cols);
        let needle = self.active_needle();

        let rows = self.filtered_products[start..end]
            .iter()
            .enumerate()
            .map(|(offset, product)| {
                Self::compute_display_row(
                    product,
                    offset + 1,
                    start + offset == self.selected_index,
                    name_width,
                    needle.as_deref(),
                )
            })
            .collect();

        UIViewModel {
            header: self.compute_header(),
            search_bar: SearchBarInfo {
                query: self.store.search_text().to_string(),
                is_active: self.input_mode == InputMode::Search,
            },
            rows,
            pagination: PaginationInfo {
                page: page + 1,
                page_count: self.page_count(),
                total,
            },
            empty_state: self.compute_empty_state(),
            form: self.compute_form_panel(),
            confirm: self.compute_confirm_dialog(),
            notification: self.notification.as_ref().map(|n| NotificationBanner {
                kind: n.kind,
                message: n.message.clone(),
            }),
            footer: self.compute_footer(),
        }
    }

    /// Lower-cased filter when it is not blank, matching the store's rule.
    fn active_needle(&self) -> Option<String> {
        let query = self.store.search_text();
        if query.trim().is_empty() {
            None
        } else {
            Some(query.to_lowercase())
        }
    }

    fn compute_display_row(
        product: &Product,
        position: usize,
        is_selected: bool,
        name_width: usize,
        needle: Option<&str>,
    ) -> DisplayRow {
        let (name, visible_chars) = truncate_with_ellipsis(&product.name, name_width);

        let highlight_ranges = needle.map_or_else(Vec::new, |n| {
            match_ranges(&product.name, n)
                .into_iter()
                .filter(|&(start, _)| start < visible_chars)
                .map(|(start, end)| (start, end.min(visible_chars)))
                .collect()
        });

        DisplayRow {
            position,
            name,
            price: group_digits(&product.price.to_string(), '.'),
            quantity: product.quantity.to_string(),
            is_selected,
            highlight_ranges,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(" Product Management ({}) ", self.store.products().len()),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if !self.filtered_products.is_empty() {
            return None;
        }

        Some(if self.store.products().is_empty() {
            EmptyState {
                message: "No products yet".to_string(),
                subtitle: "Press 'a' to add one".to_string(),
            }
        } else {
            EmptyState {
                message: format!("No products match \"{}\"", self.store.search_text()),
                subtitle: "Press / then Esc to clear the search".to_string(),
            }
        })
    }

    fn compute_form_panel(&self) -> Option<FormPanel> {
        let InputMode::Form(focused) = self.input_mode else {
            return None;
        };

        let fields = FormField::ALL
            .into_iter()
            .map(|field| {
                let raw = self.form.value(field);
                let value = if field == FormField::Price {
                    group_digits(raw, ',')
                } else {
                    raw.to_string()
                };
                FormFieldView {
                    label: field.label().to_string(),
                    value,
                    is_focused: field == focused,
                    error: self.form.error_for(field).map(ToString::to_string),
                }
            })
            .collect();

        Some(FormPanel {
            title: "Add product".to_string(),
            fields,
        })
    }

    fn compute_confirm_dialog(&self) -> Option<ConfirmDialog> {
        let InputMode::ConfirmDelete(id) = self.input_mode else {
            return None;
        };

        let name = self
            .store
            .products()
            .iter()
            .find(|p| p.id == id)
            .map_or("this product", |p| p.name.as_str());

        Some(ConfirmDialog {
            message: format!("Delete \"{name}\"?"),
            hint: "y: delete  n: cancel".to_string(),
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Normal => "j/k: move  h/l: page  /: search  a: add  d: delete  q: quit",
            InputMode::Search => "Type to filter  Enter: done  Esc: clear  Up/Down: move",
            InputMode::Form(_) => "Tab/Up/Down: field  Enter: save  Esc: cancel",
            InputMode::ConfirmDelete(_) => "y/Enter: delete  n/Esc: cancel",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Character ranges where `needle_lower` occurs in `text`, case-insensitively.
///
/// Ranges are in character indices. Returns nothing when lower-casing changes
/// the character count of `text`, since the indices would no longer line up.
fn match_ranges(text: &str, needle_lower: &str) -> Vec<(usize, usize)> {
    let haystack: Vec<char> = text.to_lowercase().chars().collect();
    let needle: Vec<char> = needle_lower.chars().collect();

    if needle.is_empty() || haystack.len() != text.chars().count() {
        return vec![];
    }

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        if haystack[i..i + needle.len()] == needle[..] {
            ranges.push((i, i + needle.len()));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewProduct;
    use crate::store::InMemoryStore;

    fn seeded_state() -> AppState {
        let mut state = AppState::new(Box::new(InMemoryStore::seeded()), Theme::default());
        state.refresh();
        state
    }

    fn catalog_of(n: u64) -> AppState {
        let products = (1..=n)
            .map(|i| NewProduct::new(format!("Item {i}"), 1000 * i, 1).with_id(i))
            .collect();
        let mut state = AppState::new(Box::new(InMemoryStore::new(products)), Theme::default());
        state.refresh();
        state
    }

    #[test]
    fn refresh_clamps_selection_to_filtered_view() {
        let mut state = seeded_state();
        state.selected_index = 4;

        state.store.set_search_text("iphone");
        state.refresh();

        assert_eq!(state.filtered_products.len(), 1);
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut state = seeded_state();
        state.move_selection_up();
        assert_eq!(state.selected_index, 4);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn paging_jumps_to_first_row_and_stops_at_edges() {
        let mut state = catalog_of(12);
        assert_eq!(state.page_count(), 3);

        assert!(state.next_page());
        assert_eq!(state.selected_index, 5);
        assert!(state.next_page());
        assert_eq!(state.selected_index, 10);
        assert!(!state.next_page());

        state.selected_index = 7;
        assert!(state.prev_page());
        assert_eq!(state.selected_index, 0);
        assert!(!state.prev_page());
    }

    #[test]
    fn viewmodel_numbers_rows_within_the_cursor_page() {
        let mut state = catalog_of(7);
        state.selected_index = 5;

        let vm = state.compute_viewmodel(30, 100);

        let positions: Vec<usize> = vm.rows.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![1, 2]);
        assert!(vm.rows[0].is_selected);
        assert!(!vm.rows[1].is_selected);
        assert_eq!(
            vm.pagination,
            PaginationInfo {
                page: 2,
                page_count: 2,
                total: 7
            }
        );
    }

    #[test]
    fn viewmodel_formats_price_and_highlights_matches() {
        let mut state = seeded_state();
        state.store.set_search_text("DELL");
        state.refresh();

        let vm = state.compute_viewmodel(30, 100);

        assert_eq!(vm.rows.len(), 1);
        assert_eq!(vm.rows[0].price, "25.000.000");
        assert_eq!(vm.rows[0].highlight_ranges, vec![(7, 11)]);
        assert_eq!(vm.search_bar.query, "DELL");
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn empty_state_distinguishes_empty_catalog_from_no_match() {
        let mut state = AppState::new(Box::<InMemoryStore>::default(), Theme::default());
        state.refresh();
        let vm = state.compute_viewmodel(30, 100);
        assert_eq!(vm.empty_state.map(|e| e.message), Some("No products yet".to_string()));
        assert_eq!(vm.pagination.page_count, 1);

        let mut state = seeded_state();
        state.store.set_search_text("xyz");
        state.refresh();
        let vm = state.compute_viewmodel(30, 100);
        assert_eq!(
            vm.empty_state.map(|e| e.message),
            Some("No products match \"xyz\"".to_string())
        );
    }

    #[test]
    fn form_panel_groups_price_and_marks_focus() {
        let mut state = seeded_state();
        state.input_mode = InputMode::Form(FormField::Price);

        let panel = state.compute_viewmodel(30, 100).form.unwrap();

        assert_eq!(panel.fields[1].value, "1,000");
        assert!(panel.fields[1].is_focused);
        assert!(!panel.fields[0].is_focused);
    }

    #[test]
    fn confirm_dialog_names_the_product() {
        let mut state = seeded_state();
        state.input_mode = InputMode::ConfirmDelete(3);

        let confirm = state.compute_viewmodel(30, 100).confirm.unwrap();

        assert_eq!(confirm.message, "Delete \"Samsung Galaxy S24\"?");
    }

    #[test]
    fn match_ranges_finds_every_occurrence() {
        assert_eq!(match_ranges("Air Air", "air"), vec![(0, 3), (4, 7)]);
        assert!(match_ranges("iPad", "x").is_empty());
    }
}
