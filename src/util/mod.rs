//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `date_format` and `names` are pure display helpers for the table;
//! `browser` isolates the DOM calls (file reading, downloads, element
//! measurement) that only exist under the `csr` feature.

#[cfg(feature = "csr")]
pub mod browser;
pub mod date_format;
pub mod names;
