//! 検索バー（キーワード入力とフィルタ表示切替）

use leptos::prelude::*;

#[component]
pub fn SearchBar<FS, FT>(
    search: Signal<String>,
    show_filters: Signal<bool>,
    on_search: FS,
    on_toggle_filters: FT,
) -> impl IntoView
where
    FS: Fn(String) + 'static + Clone + Send,
    FT: Fn(()) + 'static + Clone + Send,
{
    view! {
        <div class="search-bar">
            <input
                type="search"
                id="job-search"
                placeholder="Search jobs, companies, or skills..."
                prop:value=move || search.get()
                on:input=move |ev| on_search(event_target_value(&ev))
            />
            <button
                class="btn btn-secondary"
                class:active=move || show_filters.get()
                on:click=move |_| on_toggle_filters(())
            >
                "Filters"
            </button>
        </div>
    }
}
