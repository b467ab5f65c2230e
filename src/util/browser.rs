//! DOM glue for the compositor: measuring, reading picked files, downloads.
//!
//! Only compiled under `csr`. `JsValue` failures are turned into strings here
//! so callers deal with plain Rust errors.

use compositor::engine::OverlayImage;
use compositor::geom::{Point, Size};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use gloo_timers::callback::Timeout;

/// Delay before a download's object URL is released.
const OBJECT_URL_REVOKE_DELAY_MS: u32 = 1_000;

fn js_error(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| value.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
        .unwrap_or_else(|| format!("{value:?}"))
}

/// On-screen size of `element` in CSS pixels.
pub fn element_size(element: &web_sys::Element) -> Size {
    let rect = element.get_bounding_client_rect();
    Size::new(rect.width(), rect.height())
}

/// Pointer position relative to `element`'s top-left corner, plus the
/// element's current size.
pub fn pointer_in(element: &web_sys::Element, ev: &web_sys::MouseEvent) -> (Point, Size) {
    let rect = element.get_bounding_client_rect();
    let point = Point::new(f64::from(ev.client_x()) - rect.left(), f64::from(ev.client_y()) - rect.top());
    (point, Size::new(rect.width(), rect.height()))
}

/// Read a picked file into an overlay `data:` URL without uploading it.
///
/// # Errors
///
/// Returns an error string if the browser fails to read the file.
pub async fn read_overlay(file: web_sys::File) -> Result<OverlayImage, String> {
    let buffer = JsFuture::from(file.array_buffer()).await.map_err(|e| js_error(&e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(OverlayImage::from_bytes(&file.type_(), &bytes))
}

/// Offer `bytes` to the user as a file download named `file_name`.
///
/// # Errors
///
/// Returns an error string if any DOM step fails.
pub fn download_bytes(bytes: &[u8], mime: &str, file_name: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let body = document.body().ok_or("no document body")?;

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(|e| js_error(&e))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| js_error(&e))?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| js_error(&e))?
        .dyn_into()
        .map_err(|e| js_error(&e))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    body.append_child(&anchor).map_err(|e| js_error(&e))?;
    anchor.click();
    anchor.remove();

    // The download reads the blob asynchronously; revoking on the same tick
    // can cancel it in some browsers.
    Timeout::new(OBJECT_URL_REVOKE_DELAY_MS, move || {
        if let Err(e) = web_sys::Url::revoke_object_url(&url) {
            log::warn!("could not revoke download URL: {}", js_error(&e));
        }
    })
    .forget();
    Ok(())
}
