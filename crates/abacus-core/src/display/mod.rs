//! Display text ownership and number formatting.
//!
//! The calculator never hands out widgets: presentation layers pull the
//! current text from the [`DisplayBuffer`] and decide on their own how to
//! draw it.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Engine      │    │   Formatter     │    │  DisplayBuffer  │
//! │ (f64 results)   │───▶│ (format_number) │───▶│   (text pull)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`buffer`]: The display text, error token and backspace handling
//! - [`format`]: Conversion of computed values into bounded-width text

pub mod buffer;
pub mod format;

pub use buffer::{DisplayBuffer, DEFAULT_ERROR_TOKEN};
pub use format::format_number;
