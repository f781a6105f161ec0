//! Report rendering adapters.

mod text;

pub use text::TextReportRenderer;
