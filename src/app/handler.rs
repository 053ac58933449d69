//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place where key presses turn into store calls.
//! Every branch follows the same shape:
//! 1. interpret the event for the current [`InputMode`]
//! 2. call at most one store operation
//! 3. re-fetch the filtered view with [`AppState::refresh`]
//! 4. return whether to re-render plus any [`Action`]s
//!
//! # Example
//!
//! ```
//! use catalog_admin::app::{handle_event, AppState, Event};
//! use catalog_admin::store::InMemoryStore;
//! use catalog_admin::Theme;
//!
//! let mut state = AppState::new(Box::new(InMemoryStore::seeded()), Theme::default());
//! state.refresh();
//! let (should_render, actions) = handle_event(&mut state, &Event::KeyDown);
//! assert!(should_render);
//! assert!(actions.is_empty());
//! ```

use super::modes::{FormField, InputMode};
use super::notification::{now_ms, Notification};
use crate::app::{Action, AppState};

/// Events produced by the plugin shim from key presses and timers.
///
/// Text-editing events (`Char`, `Backspace`, `Confirm`, `Cancel`) are
/// interpreted according to the current input mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down (normal/search) or to the next field (form).
    KeyDown,
    /// Moves the cursor up (normal/search) or to the previous field (form).
    KeyUp,
    /// Jumps to the next table page.
    NextPage,
    /// Jumps to the previous table page.
    PrevPage,
    /// Hides the plugin pane.
    CloseFocus,
    /// Focuses the search box, keeping the current filter.
    SearchMode,
    /// Opens the create-product form.
    OpenForm,
    /// Asks for confirmation before deleting the selected product.
    RequestDelete,
    /// Moves focus to the next form field.
    NextField,
    /// Moves focus to the previous form field.
    PrevField,
    /// Types a character into the search box or focused form field.
    Char(char),
    /// Deletes the last character of the search box or focused form field.
    Backspace,
    /// Enter: leave search, submit the form, or confirm a delete.
    Confirm,
    /// Esc: clear search, close the form, cancel a delete, or dismiss a
    /// notification.
    Cancel,
    /// Timer fired; drops notifications that expired before `now_ms`.
    Tick {
        /// Current Unix time in milliseconds.
        now_ms: i64,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. `should_render` is `false` when the event was
/// ignored or changed nothing visible.
///
/// Never fails: a store failure during add becomes an error notification.
pub fn handle_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event, mode = ?state.input_mode)
        .entered();

    match state.input_mode {
        InputMode::Normal => handle_normal(state, event),
        InputMode::Search => handle_search(state, event),
        InputMode::Form(field) => handle_form(state, field, event),
        InputMode::ConfirmDelete(id) => handle_confirm_delete(state, id, event),
    }
}

fn handle_normal(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    match event {
        Event::KeyDown => {
            state.move_selection_down();
            (true, vec![])
        }
        Event::KeyUp => {
            state.move_selection_up();
            (true, vec![])
        }
        Event::NextPage => (state.next_page(), vec![]),
        Event::PrevPage => (state.prev_page(), vec![]),
        Event::CloseFocus => (false, vec![Action::CloseFocus]),
        Event::SearchMode => {
            tracing::debug!(query = %state.store.search_text(), "entering search mode");
            state.input_mode = InputMode::Search;
            (true, vec![])
        }
        Event::OpenForm => {
            tracing::debug!("opening create form");
            state.form.reset();
            state.input_mode = InputMode::Form(FormField::Name);
            (true, vec![])
        }
        Event::RequestDelete => {
            let Some(product) = state.selected_product() else {
                tracing::debug!("no product selected to delete");
                return (false, vec![]);
            };
            tracing::debug!(product_id = product.id, product_name = %product.name, "delete requested");
            state.input_mode = InputMode::ConfirmDelete(product.id);
            (true, vec![])
        }
        Event::Cancel => (state.notification.take().is_some(), vec![]),
        Event::Tick { now_ms } => (expire_notification(state, *now_ms), vec![]),
        _ => (false, vec![]),
    }
}

fn handle_search(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    match event {
        Event::Char(c) => {
            let mut query = state.store.search_text().to_string();
            query.push(*c);
            apply_search_text(state, &query);
            (true, vec![])
        }
        Event::Backspace => {
            let mut query = state.store.search_text().to_string();
            if query.pop().is_none() {
                return (false, vec![]);
            }
            apply_search_text(state, &query);
            (true, vec![])
        }
        Event::KeyDown => {
            state.move_selection_down();
            (true, vec![])
        }
        Event::KeyUp => {
            state.move_selection_up();
            (true, vec![])
        }
        Event::Confirm => {
            tracing::debug!(query = %state.store.search_text(), "search submitted");
            state.input_mode = InputMode::Normal;
            (true, vec![])
        }
        Event::Cancel => {
            tracing::debug!("search cleared");
            apply_search_text(state, "");
            state.input_mode = InputMode::Normal;
            (true, vec![])
        }
        Event::Tick { now_ms } => (expire_notification(state, *now_ms), vec![]),
        _ => (false, vec![]),
    }
}

fn handle_form(state: &mut AppState, field: FormField, event: &Event) -> (bool, Vec<Action>) {
    match event {
        Event::Char(c) => (state.form.push_char(field, *c), vec![]),
        Event::Backspace => (state.form.pop_char(field), vec![]),
        Event::NextField | Event::KeyDown => {
            state.input_mode = InputMode::Form(field.next());
            (true, vec![])
        }
        Event::PrevField | Event::KeyUp => {
            state.input_mode = InputMode::Form(field.prev());
            (true, vec![])
        }
        Event::Confirm => submit_form(state, field),
        Event::Cancel => {
            tracing::debug!("create form cancelled");
            state.form.reset();
            state.input_mode = InputMode::Normal;
            (true, vec![])
        }
        Event::Tick { now_ms } => (expire_notification(state, *now_ms), vec![]),
        _ => (false, vec![]),
    }
}

fn handle_confirm_delete(
    state: &mut AppState,
    id: crate::domain::ProductId,
    event: &Event,
) -> (bool, Vec<Action>) {
    match event {
        Event::Confirm => {
            let removed = state.store.delete(id);
            tracing::debug!(product_id = id, removed = removed.is_some(), "delete confirmed");
            state.input_mode = InputMode::Normal;
            state.refresh();

            let action = state.notify(Notification::success(
                "Product deleted",
                now_ms(),
                state.notification_secs,
            ));
            (true, vec![action])
        }
        Event::Cancel => {
            tracing::debug!(product_id = id, "delete cancelled");
            state.input_mode = InputMode::Normal;
            (true, vec![])
        }
        Event::Tick { now_ms } => (expire_notification(state, *now_ms), vec![]),
        _ => (false, vec![]),
    }
}

/// Validates the form and, if every rule passes, adds the product.
///
/// Validation failures stay in the form. A store failure keeps the panel
/// open with its input intact and shows an error notification.
fn submit_form(state: &mut AppState, field: FormField) -> (bool, Vec<Action>) {
    let candidate = match state.form.validate() {
        Ok(candidate) => candidate,
        Err(errors) => {
            tracing::debug!(error_count = errors.len(), "create form rejected");
            let first_invalid = errors.first().map_or(field, |e| e.field);
            state.form.errors = errors;
            state.input_mode = InputMode::Form(first_invalid);
            return (true, vec![]);
        }
    };

    match state.store.add(candidate) {
        Ok(product) => {
            tracing::debug!(product_id = product.id, product_name = %product.name, "product created");
            state.form.reset();
            state.input_mode = InputMode::Normal;
            state.refresh();
            let action = state.notify(Notification::success(
                "Product added",
                now_ms(),
                state.notification_secs,
            ));
            (true, vec![action])
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to add product");
            let action = state.notify(Notification::error(
                "Failed to add product",
                now_ms(),
                state.notification_secs,
            ));
            (true, vec![action])
        }
    }
}

fn apply_search_text(state: &mut AppState, text: &str) {
    state.store.set_search_text(text);
    tracing::trace!(query = %text, "search filter updated");
    state.refresh();
}

/// Drops the notification if it expired. Returns `true` if one was dropped.
fn expire_notification(state: &mut AppState, now_ms: i64) -> bool {
    if state.notification.as_ref().is_some_and(|n| n.is_expired(now_ms)) {
        state.notification = None;
        tracing::debug!("notification expired");
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::NotificationKind;
    use crate::domain::error::{CatalogError, Result};
    use crate::domain::{NewProduct, Product, ProductId};
    use crate::store::{InMemoryStore, ProductStore};
    use crate::ui::Theme;

    /// Store whose `add` always fails, for the error-notification path.
    #[derive(Debug)]
    struct RejectingStore(InMemoryStore);

    impl ProductStore for RejectingStore {
        fn add(&mut self, _candidate: NewProduct) -> Result<Product> {
            Err(CatalogError::IdSpaceExhausted { max_id: u64::MAX })
        }
        fn delete(&mut self, id: ProductId) -> Option<Product> {
            self.0.delete(id)
        }
        fn set_search_text(&mut self, text: &str) {
            self.0.set_search_text(text);
        }
        fn search_text(&self) -> &str {
            self.0.search_text()
        }
        fn products(&self) -> &[Product] {
            self.0.products()
        }
        fn filtered_products(&self) -> Vec<Product> {
            self.0.filtered_products()
        }
    }

    fn state_with(store: Box<dyn ProductStore>) -> AppState {
        let mut state = AppState::new(store, Theme::default());
        state.refresh();
        state
    }

    fn seeded() -> AppState {
        state_with(Box::new(InMemoryStore::seeded()))
    }

    fn send(state: &mut AppState, events: &[Event]) -> Vec<Action> {
        events
            .iter()
            .flat_map(|e| handle_event(state, e).1)
            .collect()
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c));
        }
    }

    fn ids(state: &AppState) -> Vec<ProductId> {
        state.store.products().iter().map(|p| p.id).collect()
    }

    #[test]
    fn typing_in_search_filters_immediately() {
        let mut state = seeded();
        send(&mut state, &[Event::SearchMode]);
        type_text(&mut state, "iphone");

        assert_eq!(state.store.search_text(), "iphone");
        assert_eq!(state.filtered_products.len(), 1);
        assert_eq!(state.filtered_products[0].name, "iPhone 15 Pro Max");
    }

    #[test]
    fn enter_keeps_filter_and_esc_clears_it() {
        let mut state = seeded();
        send(&mut state, &[Event::SearchMode]);
        type_text(&mut state, "air");
        send(&mut state, &[Event::Confirm]);

        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.filtered_products.len(), 2);

        send(&mut state, &[Event::SearchMode]);
        assert_eq!(state.store.search_text(), "air");
        send(&mut state, &[Event::Cancel]);

        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.store.search_text(), "");
        assert_eq!(state.filtered_products.len(), 5);
    }

    #[test]
    fn search_characters_are_not_commands() {
        let mut state = seeded();
        send(&mut state, &[Event::SearchMode]);
        type_text(&mut state, "q");
        let actions = send(&mut state, &[Event::CloseFocus]);

        assert!(actions.is_empty());
        assert_eq!(state.store.search_text(), "q");
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut state = seeded();
        send(&mut state, &[Event::KeyDown, Event::RequestDelete]);
        assert_eq!(state.input_mode, InputMode::ConfirmDelete(2));
        assert_eq!(state.store.products().len(), 5);

        send(&mut state, &[Event::Cancel]);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.store.products().len(), 5);

        let actions = send(&mut state, &[Event::RequestDelete, Event::Confirm]);
        assert_eq!(ids(&state), vec![1, 3, 4, 5]);
        assert_eq!(actions, vec![Action::ScheduleTimer { seconds: 3.0 }]);
        let notification = state.notification.as_ref().unwrap();
        assert_eq!(notification.kind, NotificationKind::Success);
        assert_eq!(notification.message, "Product deleted");
    }

    #[test]
    fn delete_on_empty_table_is_ignored() {
        let mut state = state_with(Box::<InMemoryStore>::default());
        let (render, actions) = handle_event(&mut state, &Event::RequestDelete);
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn deleting_last_row_moves_cursor_up() {
        let mut state = seeded();
        send(&mut state, &[Event::KeyUp]);
        assert_eq!(state.selected_index, 4);

        send(&mut state, &[Event::RequestDelete, Event::Confirm]);

        assert_eq!(state.selected_index, 3);
        assert_eq!(state.selected_product().map(|p| p.id), Some(4));
    }

    #[test]
    fn invalid_form_never_reaches_the_store() {
        let mut state = seeded();
        send(&mut state, &[Event::OpenForm]);
        type_text(&mut state, "TV");
        send(&mut state, &[Event::NextField, Event::Backspace, Event::Backspace,
            Event::Backspace, Event::Backspace, Event::Confirm]);

        assert_eq!(state.store.products().len(), 5);
        assert_eq!(state.input_mode, InputMode::Form(FormField::Name));
        assert_eq!(
            state.form.error_for(FormField::Name),
            Some("Product name must be at least 3 characters")
        );
        assert_eq!(state.form.error_for(FormField::Price), Some("Price is required"));
        assert!(state.notification.is_none());
    }

    #[test]
    fn valid_form_adds_product_and_closes() {
        let mut state = seeded();
        send(&mut state, &[Event::OpenForm]);
        type_text(&mut state, "Test Product");
        let actions = send(&mut state, &[Event::Confirm]);

        let last = state.store.products().last().unwrap();
        assert_eq!(last, &NewProduct::new("Test Product", 1000, 1).with_id(6));
        assert_eq!(state.filtered_products.len(), 6);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.form, crate::app::ProductForm::default());
        assert_eq!(actions.len(), 1);
        assert_eq!(state.notification.as_ref().map(|n| n.message.as_str()), Some("Product added"));
    }

    #[test]
    fn form_fields_cycle_and_accept_digits_only() {
        let mut state = seeded();
        send(&mut state, &[Event::OpenForm, Event::KeyDown, Event::KeyDown]);
        assert_eq!(state.input_mode, InputMode::Form(FormField::Quantity));

        type_text(&mut state, "2x");
        assert_eq!(state.form.quantity, "12");

        send(&mut state, &[Event::PrevField]);
        assert_eq!(state.input_mode, InputMode::Form(FormField::Price));
    }

    #[test]
    fn cancel_discards_form_input() {
        let mut state = seeded();
        send(&mut state, &[Event::OpenForm]);
        type_text(&mut state, "Draft");
        send(&mut state, &[Event::Cancel]);

        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.form.name, "");
        assert_eq!(state.store.products().len(), 5);
    }

    #[test]
    fn store_failure_shows_error_and_keeps_form_open() {
        let mut state = state_with(Box::new(RejectingStore(InMemoryStore::seeded())));
        send(&mut state, &[Event::OpenForm]);
        type_text(&mut state, "Doomed");
        let actions = send(&mut state, &[Event::Confirm]);

        assert_eq!(state.store.products().len(), 5);
        assert_eq!(state.input_mode, InputMode::Form(FormField::Name));
        assert_eq!(state.form.name, "Doomed");
        assert_eq!(actions.len(), 1);
        let notification = state.notification.as_ref().unwrap();
        assert_eq!(notification.kind, NotificationKind::Error);
        assert_eq!(notification.message, "Failed to add product");
    }

    #[test]
    fn store_failure_comes_back_as_a_render_and_a_timer() {
        let mut state = state_with(Box::new(RejectingStore(InMemoryStore::seeded())));
        send(&mut state, &[Event::OpenForm]);
        type_text(&mut state, "Doomed");

        let (render, actions) = handle_event(&mut state, &Event::Confirm);

        assert!(render);
        assert_eq!(
            actions,
            vec![Action::ScheduleTimer {
                seconds: f64::from(state.notification_secs)
            }]
        );
    }

    #[test]
    fn tick_expires_notifications() {
        let mut state = seeded();
        state.notification = Some(Notification::success("Product added", 1_000, 3));

        let (render, _) = handle_event(&mut state, &Event::Tick { now_ms: 2_000 });
        assert!(!render);
        assert!(state.notification.is_some());

        let (render, _) = handle_event(&mut state, &Event::Tick { now_ms: 4_000 });
        assert!(render);
        assert!(state.notification.is_none());
    }

    #[test]
    fn escape_dismisses_notification_in_normal_mode() {
        let mut state = seeded();
        state.notification = Some(Notification::error("Failed to add product", 0, 3));
        let (render, _) = handle_event(&mut state, &Event::Cancel);
        assert!(render);
        assert!(state.notification.is_none());
    }

    #[test]
    fn quit_only_from_normal_mode() {
        let mut state = seeded();
        let actions = send(&mut state, &[Event::CloseFocus]);
        assert_eq!(actions, vec![Action::CloseFocus]);

        send(&mut state, &[Event::OpenForm]);
        let actions = send(&mut state, &[Event::CloseFocus]);
        assert!(actions.is_empty());
    }

    #[test]
    fn delete_max_then_add_reuses_id_end_to_end() {
        let mut state = seeded();
        send(&mut state, &[Event::KeyUp, Event::RequestDelete, Event::Confirm]);
        assert_eq!(ids(&state), vec![1, 2, 3, 4]);

        send(&mut state, &[Event::OpenForm]);
        type_text(&mut state, "Test Product");
        send(&mut state, &[Event::Confirm]);

        assert_eq!(ids(&state), vec![1, 2, 3, 4, 5]);
        assert_eq!(state.store.products()[4].name, "Test Product");
    }
}
