//! Footer under the data table: page size, range summary and page buttons.

use leptos::prelude::*;

use crate::state::table::TableState;

/// Pagination controls bound to the table signal.
#[component]
pub fn PaginationBar(table: RwSignal<TableState>, page_sizes: Vec<usize>) -> impl IntoView {
    let on_rows_per_page = move |ev: leptos::ev::Event| match event_target_value(&ev).parse::<usize>() {
        Ok(rows_per_page) => table.update(|t| {
            t.set_rows_per_page(rows_per_page);
        }),
        Err(e) => log::warn!("ignoring page size {:?}: {e}", event_target_value(&ev)),
    };

    view! {
        <div class="pagination">
            <label class="pagination__size">
                "Rows per page"
                <select
                    class="pagination__select"
                    prop:value=move || table.with(|t| t.rows_per_page.to_string())
                    on:change=on_rows_per_page
                >
                    {page_sizes
                        .into_iter()
                        .map(|size| view! { <option value=size.to_string()>{size}</option> })
                        .collect_view()}
                </select>
            </label>

            <span class="pagination__range">{move || table.with(TableState::range_label)}</span>

            <div class="pagination__buttons">
                <button
                    class="btn pagination__btn"
                    title="First page"
                    disabled=move || table.with(TableState::is_first_page)
                    on:click=move |_| table.update(TableState::first_page)
                >
                    "|<"
                </button>
                <button
                    class="btn pagination__btn"
                    title="Previous page"
                    disabled=move || table.with(TableState::is_first_page)
                    on:click=move |_| table.update(TableState::prev_page)
                >
                    "<"
                </button>
                <button
                    class="btn pagination__btn"
                    title="Next page"
                    disabled=move || table.with(TableState::is_last_page)
                    on:click=move |_| table.update(TableState::next_page)
                >
                    ">"
                </button>
                <button
                    class="btn pagination__btn"
                    title="Last page"
                    disabled=move || table.with(TableState::is_last_page)
                    on:click=move |_| table.update(TableState::last_page)
                >
                    ">|"
                </button>
            </div>
        </div>
    }
}
