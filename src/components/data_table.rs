//! Searchable, paginated row viewer with checkbox selection.
//!
//! SYSTEM CONTEXT
//! ==============
//! The component owns a `RwSignal<TableState>`. An effect keyed on the search
//! term and page size issues a fetch whenever either changes (and once on
//! mount); completions are applied through `TableState::apply_fetch`, which
//! drops any response that is no longer the latest.
//!
//! The search box and page-size selector stay mounted in every state so the
//! user can recover from an error by changing them.

use leptos::prelude::*;

use crate::components::pagination::PaginationBar;
use crate::config::AppConfig;
use crate::state::table::{DisplayRow, LoadStatus, TableState};
use crate::util::date_format::DateLocale;

/// Row viewer backed by the configured rows endpoint.
#[component]
pub fn DataTable() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let locale = expect_context::<DateLocale>();
    let table = RwSignal::new(TableState::new(config.default_rows_per_page));

    let fetch_key = Memo::new(move |_| table.with(|t| (t.search_term.clone(), t.rows_per_page)));
    let endpoint = config.rows_endpoint.clone();
    Effect::new(move |_| {
        fetch_key.track();
        start_fetch(table, &endpoint);
    });

    let on_search = move |ev: leptos::ev::Event| {
        let term = event_target_value(&ev);
        table.update(|t| {
            t.set_search_term(&term);
        });
    };

    view! {
        <section class="data-table">
            <input
                type="text"
                class="data-table__search"
                placeholder="Search area"
                prop:value=move || table.with(|t| t.search_term.clone())
                on:input=on_search
            />

            {move || match table.with(|t| t.status.clone()) {
                LoadStatus::Loading => {
                    view! { <div class="data-table__loading">"Loading..."</div> }.into_any()
                }
                LoadStatus::Error(message) => {
                    view! { <div class="data-table__error">"Error: " {message}</div> }.into_any()
                }
                LoadStatus::Ready => view! { <RowsTable table=table locale=locale/> }.into_any(),
            }}

            <PaginationBar table=table page_sizes=config.page_size_options()/>
        </section>
    }
}

#[component]
fn RowsTable(table: RwSignal<TableState>, locale: DateLocale) -> impl IntoView {
    view! {
        <table class="data-table__table">
            <thead>
                <tr>
                    <th class="data-table__check">
                        <input
                            type="checkbox"
                            title="Select page"
                            prop:checked=move || table.with(TableState::is_page_fully_selected)
                            on:change=move |_| table.update(TableState::select_all)
                        />
                    </th>
                    <th>"First Name"</th>
                    <th>"Last Name"</th>
                    <th>"Email"</th>
                    <th>"Created Date"</th>
                    <th>"Updated Date"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || table.with(|t| t.display_rows(locale))
                    key=DisplayRow::clone
                    children=move |row| {
                        let id = row.id;
                        view! {
                            <tr class=("data-table__row--selected", move || table.with(|t| t.is_selected(id)))>
                                <td class="data-table__check">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || table.with(|t| t.is_selected(id))
                                        on:change=move |_| table.update(|t| t.toggle_row(id))
                                    />
                                </td>
                                <td>{row.first_name}</td>
                                <td>{row.last_name}</td>
                                <td>{row.email}</td>
                                <td>{row.created}</td>
                                <td>{row.updated}</td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}

/// Enter `Loading` and run the fetch the state asks for.
fn start_fetch(table: RwSignal<TableState>, endpoint: &str) {
    let Some(request) = table.try_update(TableState::begin_fetch) else {
        return;
    };
    let url = crate::net::api::rows_url(endpoint, &request.search_term, request.rows_per_page);

    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            let result = match url {
                Ok(url) => {
                    log::debug!("fetching rows #{} from {url}", request.seq);
                    crate::net::api::fetch_rows(&url).await
                }
                Err(e) => Err(e),
            };
            if let Err(e) = &result {
                log::warn!("row fetch #{} failed: {e}", request.seq);
            }
            table.update(|t| {
                t.apply_fetch(request.seq, result);
            });
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("row fetch #{} not started outside the browser: {url:?}", request.seq);
    }
}
