//! Root component: resolves configuration and lays out the two widgets.

use leptos::prelude::*;

use crate::components::data_table::DataTable;
use crate::components::logo_compositor::LogoCompositor;
use crate::config::AppConfig;
use crate::util::date_format::DateLocale;

/// Application root.
#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env().unwrap_or_else(|e| {
        log::warn!("invalid build configuration, using defaults: {e}");
        AppConfig::default()
    });
    let locale = DateLocale::from_browser();
    log::debug!("rows endpoint {}, date locale {locale:?}", config.rows_endpoint);

    provide_context(config);
    provide_context(locale);

    view! {
        <main class="storefront">
            <LogoCompositor/>
            <DataTable/>
        </main>
    }
}
