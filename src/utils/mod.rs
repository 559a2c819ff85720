//! Shared helpers for the audit pipeline.

pub mod dates;
pub mod text;

pub use dates::parse_date;
pub use text::title_case;
