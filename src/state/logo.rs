//! Compositor widget state: the engine core plus export progress.

#[cfg(test)]
#[path = "logo_test.rs"]
mod logo_test;

use std::sync::Arc;

use compositor::engine::{CompositorCore, ExportJob, OverlayImage};
use compositor::export::ExportError;

/// Outcome of the last "Download" press, shown under the button.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExportStatus {
    #[default]
    Idle,
    Working,
    /// The named file was handed to the browser.
    Done(String),
    Failed(String),
}

impl ExportStatus {
    /// Status line text; empty when idle.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Idle => String::new(),
            Self::Working => "Preparing your image...".to_owned(),
            Self::Done(file_name) => format!("Saved {file_name}"),
            Self::Failed(reason) => format!("Download failed: {reason}"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogoState {
    pub core: CompositorCore,
    pub export: ExportStatus,
}

impl LogoState {
    /// Show a newly picked image and clear any stale export message.
    pub fn upload(&mut self, overlay: OverlayImage) {
        self.core.upload_image(overlay);
        self.export = ExportStatus::Idle;
    }

    /// Start an export. Returns the job to run, or `None` if one is already
    /// running or the state cannot be exported (the reason is recorded).
    pub fn begin_export(&mut self) -> Option<ExportJob> {
        if self.export == ExportStatus::Working {
            return None;
        }
        match self.core.export_job() {
            Ok(job) => {
                self.export = ExportStatus::Working;
                Some(job)
            }
            Err(e) => {
                self.export = ExportStatus::Failed(e.to_string());
                None
            }
        }
    }

    /// Record how the running export ended.
    pub fn finish_export(&mut self, result: Result<String, ExportError>) {
        self.export = match result {
            Ok(file_name) => ExportStatus::Done(file_name),
            Err(e) => ExportStatus::Failed(e.to_string()),
        };
    }

    /// Shared handle to the overlay's `data:` URL, for the `<img src>`.
    #[must_use]
    pub fn overlay_src(&self) -> Option<Arc<str>> {
        self.core.overlay.as_ref().map(|o| Arc::clone(&o.data_url))
    }

    #[must_use]
    pub fn is_exporting(&self) -> bool {
        self.export == ExportStatus::Working
    }
}
