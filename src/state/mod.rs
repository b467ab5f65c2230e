//! Widget state modules.
//!
//! DESIGN
//! ======
//! Each widget owns one plain state struct with pure update methods; the
//! components keep it in a signal and only translate DOM events into calls.
//! `table` is the row viewer, `logo` wraps the compositor core with the
//! export status shown under the download button.

pub mod logo;
pub mod table;
