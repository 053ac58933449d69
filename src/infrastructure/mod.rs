//! Infrastructure layer for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`; the
//! helpers here translate user-facing paths into sandbox paths.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, trace_file_path};
