use std::sync::Arc;

use crate::consts::{
    DEFAULT_OVERLAY_HEIGHT, DEFAULT_OVERLAY_WIDTH, DEFAULT_OVERLAY_X, DEFAULT_OVERLAY_Y, MIN_OVERLAY_WIDTH,
};
use crate::data_url;
use crate::export::{self, ExportError};
use crate::geom::{Point, Size, clamp_into};
use crate::input::DragState;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// The uploaded logo, held as a `data:` URL.
///
/// The URL is shared: clones of the overlay (and of any state holding it)
/// point at the same buffer, so moving or resizing never copies image data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayImage {
    pub data_url: Arc<str>,
}

impl OverlayImage {
    #[must_use]
    pub fn new(data_url: impl Into<Arc<str>>) -> Self {
        Self { data_url: data_url.into() }
    }

    /// Build an overlay from raw file bytes and the picker-reported MIME type.
    #[must_use]
    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Self {
        Self::new(data_url::encode(mime, bytes))
    }

    /// Whether both overlays share one data URL buffer.
    #[must_use]
    pub fn same_source(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data_url, &other.data_url)
    }
}

/// Everything the export step needs, captured at the moment of the click.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportJob {
    pub overlay: OverlayImage,
    pub container: Size,
    pub position: Point,
    pub size: Size,
}

impl ExportJob {
    /// Composite this job over the encoded `background` image.
    ///
    /// # Errors
    ///
    /// Returns an [`ExportError`] if the overlay data URL or either image
    /// fails to decode, or PNG encoding fails.
    pub fn render(&self, background: &[u8]) -> Result<Vec<u8>, ExportError> {
        let overlay = data_url::decode(&self.overlay.data_url)?;
        export::compose_png(background, &overlay, self.container, self.position, self.size)
    }
}

/// Compositor widget state. All logic lives here so it can be tested without
/// a browser; the Leptos host only forwards measured sizes and pointer
/// positions.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositorCore {
    pub overlay: Option<OverlayImage>,
    pub position: Point,
    pub size: Size,
    pub drag: DragState,
    pub container: Size,
}

impl Default for CompositorCore {
    fn default() -> Self {
        Self {
            overlay: None,
            position: Point::new(DEFAULT_OVERLAY_X, DEFAULT_OVERLAY_Y),
            size: Size::new(DEFAULT_OVERLAY_WIDTH, DEFAULT_OVERLAY_HEIGHT),
            drag: DragState::Idle,
            container: Size::new(0.0, 0.0),
        }
    }
}

impl CompositorCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// Show `overlay`, keeping the current position and size.
    pub fn upload_image(&mut self, overlay: OverlayImage) {
        self.overlay = Some(overlay);
    }

    /// Record the on-screen size of the container.
    pub fn set_container(&mut self, container: Size) {
        self.container = container;
    }

    // --- Drag ---

    /// Start dragging with the pointer at `pointer`. No-op without an overlay.
    pub fn begin_drag(&mut self, pointer: Point) {
        if self.overlay.is_none() {
            return;
        }
        self.drag = DragState::Dragging { grab_offset: pointer.offset_from(self.position) };
    }

    /// Follow the pointer while dragging, keeping the overlay inside the
    /// container. Returns whether the position changed.
    pub fn update_drag(&mut self, pointer: Point) -> bool {
        let Some(target) = self.drag.target_for(pointer) else {
            return false;
        };
        let next = clamp_into(target, self.size, self.container);
        let changed = next != self.position;
        self.position = next;
        changed
    }

    /// Stop dragging. Safe to call when idle.
    pub fn end_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    // --- Resize ---

    /// Change the width by `delta` pixels (never below the minimum) and
    /// derive the height from the current aspect ratio.
    pub fn resize(&mut self, delta: f64) {
        if self.overlay.is_none() {
            return;
        }
        let aspect = self.size.aspect_ratio();
        let width = (self.size.width + delta).max(MIN_OVERLAY_WIDTH);
        self.size = Size::new(width, width / aspect);
        if self.container.is_measurable() {
            self.position = clamp_into(self.position, self.size, self.container);
        }
    }

    // --- Export ---

    /// Snapshot the state needed to export.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::NoOverlay`] before the first upload and
    /// [`ExportError::ContainerNotMeasured`] if the container size is unknown.
    pub fn export_job(&self) -> Result<ExportJob, ExportError> {
        let overlay = self.overlay.clone().ok_or(ExportError::NoOverlay)?;
        if !self.container.is_measurable() {
            return Err(ExportError::ContainerNotMeasured);
        }
        Ok(ExportJob { overlay, container: self.container, position: self.position, size: self.size })
    }

    // --- Queries ---

    #[must_use]
    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }
}
