//! Logo compositor engine for the product mock-up widget.
//!
//! This crate owns everything the compositor widget does that is not a DOM
//! call: tracking where the uploaded logo sits over the product photo,
//! translating pointer input into clamped moves, aspect-preserving resizes,
//! and flattening the final composite into a PNG. The host Leptos component
//! only measures the container, forwards pointer events, and delivers the
//! exported bytes as a download.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::CompositorCore`], the per-widget state with pure update methods |
//! | [`geom`] | `Point` / `Size` primitives and clamping |
//! | [`input`] | The drag gesture state machine |
//! | [`export`] | Export placement math and PNG rasterization |
//! | [`data_url`] | `data:` URL encoding for uploaded images |
//! | [`consts`] | Shared numeric constants (default placement, minimum width) |

pub mod consts;
pub mod data_url;
pub mod engine;
pub mod export;
pub mod geom;
pub mod input;
