//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never talks to Zellij directly. It mutates
//! [`AppState`](super::AppState) and returns a `Vec<Action>` that `main.rs`
//! translates into host calls, so the whole state machine stays testable
//! off-wasm.
//!
//! # Example
//!
//! ```
//! use catalog_admin::Action;
//!
//! let actions = vec![Action::ScheduleTimer { seconds: 3.0 }, Action::CloseFocus];
//! assert_eq!(actions.len(), 2);
//! ```

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly quits (`q` in normal mode).
    CloseFocus,

    /// Asks Zellij for a `Timer` event after the given delay.
    ///
    /// Emitted whenever a notification is raised so it can be dismissed once
    /// it expires.
    ScheduleTimer {
        /// Delay before the timer fires.
        seconds: f64,
    },
}
