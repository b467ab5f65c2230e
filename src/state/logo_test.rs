use compositor::consts::RESIZE_STEP_PX;
use compositor::geom::{Point, Size};

use super::*;

fn measured() -> LogoState {
    let mut state = LogoState::default();
    state.core.set_container(Size::new(400.0, 400.0));
    state
}

#[test]
fn default_is_idle_without_overlay() {
    let state = LogoState::default();
    assert_eq!(state.export, ExportStatus::Idle);
    assert!(!state.core.has_overlay());
}

#[test]
fn export_without_upload_fails_visibly() {
    let mut state = measured();
    assert!(state.begin_export().is_none());
    assert_eq!(state.export, ExportStatus::Failed(ExportError::NoOverlay.to_string()));
}

#[test]
fn upload_clears_previous_failure() {
    let mut state = measured();
    state.begin_export();
    state.upload(OverlayImage::new("data:image/png;base64,AAAA".to_owned()));
    assert_eq!(state.export, ExportStatus::Idle);
}

#[test]
fn begin_export_hands_out_one_job_at_a_time() {
    let mut state = measured();
    state.upload(OverlayImage::new("data:image/png;base64,AAAA".to_owned()));
    assert!(state.begin_export().is_some());
    assert!(state.is_exporting());
    assert!(state.begin_export().is_none());
    assert!(state.is_exporting());
}

#[test]
fn finish_export_records_outcome() {
    let mut state = measured();
    state.upload(OverlayImage::new("data:image/png;base64,AAAA".to_owned()));
    state.begin_export();
    state.finish_export(Err(ExportError::BackgroundFetch("HTTP 403".to_owned())));
    assert_eq!(state.export, ExportStatus::Failed("could not load the product image: HTTP 403".to_owned()));

    state.begin_export();
    state.finish_export(Ok("custom-tshirt.png".to_owned()));
    assert_eq!(state.export, ExportStatus::Done("custom-tshirt.png".to_owned()));
}

#[test]
fn status_messages() {
    assert_eq!(ExportStatus::Idle.message(), "");
    assert_eq!(ExportStatus::Done("a.png".to_owned()).message(), "Saved a.png");
    assert_eq!(
        ExportStatus::Failed(ExportError::NoOverlay.to_string()).message(),
        "Download failed: upload a logo before downloading"
    );
}

#[test]
fn overlay_src_is_shared_through_drag_and_resize() {
    let mut state = measured();
    assert!(state.overlay_src().is_none());
    state.upload(OverlayImage::new("data:image/png;base64,AAAA".to_owned()));
    let before = state.overlay_src();

    state.core.begin_drag(Point::new(60.0, 60.0));
    for step in 0..50 {
        state.core.update_drag(Point::new(60.0 + f64::from(step), 70.0));
    }
    state.core.end_drag();
    state.core.resize(RESIZE_STEP_PX);

    let after = state.overlay_src();
    assert!(matches!((&before, &after), (Some(a), Some(b)) if Arc::ptr_eq(a, b)));
}
