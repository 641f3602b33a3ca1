//! Training summaries and their rendering.

pub mod format;
pub mod info;

pub use format::{render, render_all, OutputFormat, ReportError};
pub use info::{InfoMessage, Locale};
