//! Shared numeric constants for the compositor crate.

// ── Placement ───────────────────────────────────────────────────

/// Overlay left edge before the user moves it, in container pixels.
pub const DEFAULT_OVERLAY_X: f64 = 50.0;

/// Overlay top edge before the user moves it, in container pixels.
pub const DEFAULT_OVERLAY_Y: f64 = 50.0;

/// Overlay width before the first resize, in container pixels.
pub const DEFAULT_OVERLAY_WIDTH: f64 = 100.0;

/// Overlay height before the first resize, in container pixels.
pub const DEFAULT_OVERLAY_HEIGHT: f64 = 100.0;

// ── Resize ──────────────────────────────────────────────────────

/// The overlay never gets narrower than this.
pub const MIN_OVERLAY_WIDTH: f64 = 50.0;

/// Width change applied by one click on the grow/shrink controls.
pub const RESIZE_STEP_PX: f64 = 20.0;

// ── Export ──────────────────────────────────────────────────────

/// Filename offered for the downloaded composite.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "custom-tshirt.png";

/// MIME type of the exported composite.
pub const EXPORT_MIME: &str = "image/png";
