//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (`main.rs`) and the product store:
//!
//! ```text
//! Key / Timer → Event → handle_event → Store call → refresh → Actions → Side Effects
//! ```
//!
//! # Modules
//!
//! - [`actions`]: side effect commands emitted by the event handler
//! - [`form`]: create-product form buffers and validation
//! - [`handler`]: event processing and state transitions
//! - [`modes`]: input mode state machine types
//! - [`notification`]: transient success/error messages
//! - [`state`]: central application state and view model computation
//!
//! # Example
//!
//! ```
//! use catalog_admin::app::{handle_event, AppState, Event, InputMode};
//! use catalog_admin::store::InMemoryStore;
//! use catalog_admin::Theme;
//!
//! let mut state = AppState::new(Box::new(InMemoryStore::seeded()), Theme::default());
//! state.refresh();
//! handle_event(&mut state, &Event::SearchMode);
//! handle_event(&mut state, &Event::Char('s'));
//! assert_eq!(state.input_mode, InputMode::Search);
//! assert_eq!(state.store.search_text(), "s");
//! ```

pub mod actions;
pub mod form;
pub mod handler;
pub mod modes;
pub mod notification;
pub mod state;

pub use actions::Action;
pub use form::{FieldError, ProductForm};
pub use handler::{handle_event, Event};
pub use modes::{FormField, InputMode};
pub use notification::{Notification, NotificationKind};
pub use state::AppState;
