//! Page widgets.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each widget owns its state signal and translates DOM events into calls on
//! the plain-Rust models in `crate::state`; they share only the `AppConfig`
//! and `DateLocale` provided by `App`.

pub mod data_table;
pub mod logo_compositor;
pub mod pagination;
