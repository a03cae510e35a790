//! A ratatui text input that shows placeholder text while it is empty.
//!
//! [`PlaceholderField`] wraps the base [`TextInput`](ui::input::TextInput)
//! and draws its hint after the input has rendered itself.

pub mod app;
pub mod cli;
pub mod config;
pub mod document;
pub mod event;
pub mod ui;

pub use document::Document;
pub use ui::input::{Insets, TextInput};
pub use ui::metrics::FontMetrics;
pub use ui::placeholder::PlaceholderField;
pub use ui::theme::Theme;
