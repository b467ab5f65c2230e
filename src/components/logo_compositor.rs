//! Product mock-up widget: upload a logo, drag and resize it over the product
//! photo, then download the flattened PNG.
//!
//! SYSTEM CONTEXT
//! ==============
//! Geometry, clamping and rasterization live in the `compositor` crate. This
//! component only measures the container, converts pointer events into
//! container-relative points and runs the async parts of the export (fetching
//! the background, handing the PNG to the browser).

use std::sync::Arc;

use leptos::prelude::*;

use compositor::consts::RESIZE_STEP_PX;
use compositor::geom::Point;

use crate::config::AppConfig;
use crate::state::logo::LogoState;

/// Logo placement and export widget.
#[component]
pub fn LogoCompositor() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let logo = RwSignal::new(LogoState::default());
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let background_url = config.background_image_url.clone();

    // Written only on upload so pointer moves never touch the image data.
    let overlay_src = RwSignal::new(None::<Arc<str>>);

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        if !logo.with_untracked(|s| s.core.is_dragging()) {
            return;
        }
        if let Some(point) = locate(container_ref, logo, &ev) {
            logo.maybe_update(|s| s.core.update_drag(point));
        }
    };
    let on_pointer_end = move |_: leptos::ev::PointerEvent| {
        if logo.with_untracked(|s| s.core.is_dragging()) {
            logo.update(|s| s.core.end_drag());
        }
    };

    let on_file_picked = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::util::browser::read_overlay(file).await {
                    Ok(overlay) => {
                        log::info!("logo loaded ({} byte data URL)", overlay.data_url.len());
                        logo.update(|s| s.upload(overlay));
                        overlay_src.set(logo.with_untracked(LogoState::overlay_src));
                    }
                    Err(e) => {
                        log::warn!("could not read picked file: {e}");
                        logo.update(|s| {
                            s.export = crate::state::logo::ExportStatus::Failed(format!(
                                "could not read the selected file: {e}"
                            ));
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    let on_download = {
        #[cfg(feature = "csr")]
        let background_url = background_url.clone();
        #[cfg(feature = "csr")]
        let file_name = config.export_file_name.clone();
        move |_| {
            measure(container_ref, logo);
            let Some(job) = logo.try_update(LogoState::begin_export).flatten() else {
                return;
            };
            #[cfg(feature = "csr")]
            {
                let background_url = background_url.clone();
                let file_name = file_name.clone();
                leptos::task::spawn_local(async move {
                    let result = export_and_download(job, &background_url, &file_name).await;
                    match &result {
                        Ok(name) => log::info!("exported {name}"),
                        Err(e) => log::warn!("export failed: {e}"),
                    }
                    logo.update(|s| s.finish_export(result));
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                log::debug!("export of {:?} needs a browser", job.size);
            }
        }
    };

    view! {
        <section class="logo-compositor">
            <div
                class="logo-compositor__stage"
                node_ref=container_ref
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_end
                on:pointerleave=on_pointer_end
            >
                <img
                    class="logo-compositor__background"
                    src=background_url
                    alt="T-shirt template"
                    draggable="false"
                    on:load=move |_| measure(container_ref, logo)
                />
                <Show when=move || logo.with(|s| s.core.has_overlay())>
                    <div
                        class="logo-compositor__overlay"
                        class=("logo-compositor__overlay--dragging", move || logo.with(|s| s.core.is_dragging()))
                        style:left=move || px(logo.with(|s| s.core.position.x))
                        style:top=move || px(logo.with(|s| s.core.position.y))
                        style:width=move || px(logo.with(|s| s.core.size.width))
                        style:height=move || px(logo.with(|s| s.core.size.height))
                        on:pointerdown=move |ev: leptos::ev::PointerEvent| {
                            ev.prevent_default();
                            if let Some(point) = locate(container_ref, logo, &ev) {
                                logo.update(|s| s.core.begin_drag(point));
                            }
                        }
                    >
                        <img
                            class="logo-compositor__logo"
                            src=move || overlay_src.with(|src| src.as_deref().map(str::to_owned).unwrap_or_default())
                            alt="Logo"
                            draggable="false"
                        />
                        <div
                            class="logo-compositor__handle"
                            title="Enlarge"
                            on:pointerdown=move |ev: leptos::ev::PointerEvent| {
                                ev.stop_propagation();
                                measure(container_ref, logo);
                                logo.update(|s| s.core.resize(RESIZE_STEP_PX));
                            }
                        ></div>
                    </div>
                </Show>
            </div>

            <div class="logo-compositor__controls">
                <input type="file" accept="image/*" class="logo-compositor__file" on:change=on_file_picked/>
                <button
                    class="btn"
                    title="Shrink logo"
                    disabled=move || logo.with(|s| !s.core.has_overlay())
                    on:click=move |_| {
                        measure(container_ref, logo);
                        logo.update(|s| s.core.resize(-RESIZE_STEP_PX));
                    }
                >
                    "−"
                </button>
                <button
                    class="btn"
                    title="Enlarge logo"
                    disabled=move || logo.with(|s| !s.core.has_overlay())
                    on:click=move |_| {
                        measure(container_ref, logo);
                        logo.update(|s| s.core.resize(RESIZE_STEP_PX));
                    }
                >
                    "+"
                </button>
                <button
                    class="btn btn--primary"
                    disabled=move || logo.with(LogoState::is_exporting)
                    on:click=on_download
                >
                    "Download Final Image"
                </button>
            </div>

            <p class="logo-compositor__status">{move || logo.with(|s| s.export.message())}</p>
        </section>
    }
}

fn px(value: f64) -> String {
    format!("{value}px")
}

/// Record the stage's current on-screen size in the core.
fn measure(container: NodeRef<leptos::html::Div>, logo: RwSignal<LogoState>) {
    #[cfg(feature = "csr")]
    {
        if let Some(element) = container.get_untracked() {
            let size = crate::util::browser::element_size(&element);
            logo.maybe_update(|s| {
                let changed = s.core.container != size;
                s.core.set_container(size);
                changed
            });
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (container, logo);
    }
}

/// Pointer position relative to the stage; also refreshes the stage size.
fn locate(
    container: NodeRef<leptos::html::Div>,
    logo: RwSignal<LogoState>,
    ev: &leptos::ev::PointerEvent,
) -> Option<Point> {
    #[cfg(feature = "csr")]
    {
        let element = container.get_untracked()?;
        let (point, size) = crate::util::browser::pointer_in(&element, ev);
        logo.maybe_update(|s| {
            let changed = s.core.container != size;
            s.core.set_container(size);
            changed
        });
        Some(point)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (container, logo, ev);
        None
    }
}

/// Fetch the background, flatten the job onto it and start the download.
/// Returns the offered file name.
#[cfg(feature = "csr")]
async fn export_and_download(
    job: compositor::engine::ExportJob,
    background_url: &str,
    file_name: &str,
) -> Result<String, compositor::export::ExportError> {
    use compositor::export::ExportError;

    let background = crate::net::api::fetch_bytes(background_url)
        .await
        .map_err(ExportError::BackgroundFetch)?;
    let png = job.render(&background)?;
    crate::util::browser::download_bytes(&png, compositor::consts::EXPORT_MIME, file_name)
        .map_err(ExportError::Delivery)?;
    Ok(file_name.to_owned())
}
