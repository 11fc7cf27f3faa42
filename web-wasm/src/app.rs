//! メインアプリケーションコンポーネント
//!
//! 求人データは起動時に一度だけ読み込み、以降は `PanelState` だけが変化する。

use crate::components::{
    filter_panel::FilterPanel,
    header::Header,
    job_detail::JobDetail,
    job_list::JobList,
    search_bar::SearchBar,
};
use job_board_common::{seed_listings, EmploymentType, Listing, PanelState, WorkArrangement};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let listings = StoredValue::new(seed_listings());
    let state = RwSignal::new(PanelState::new());

    let listing_count = Signal::derive(move || listings.with_value(|l| l.len()));
    let search = Signal::derive(move || state.with(|s| s.search.clone()));
    let show_filters = Signal::derive(move || state.with(|s| s.show_filters));
    let filters = Signal::derive(move || state.with(|s| s.filters));
    let selected = Signal::derive(move || state.with(|s| s.selected));

    // 表示中の一覧（検索・フィルタ・並び替え済み）
    let visible = Signal::derive(move || {
        state.with(|s| {
            listings.with_value(|l| s.visible(l).into_iter().cloned().collect::<Vec<Listing>>())
        })
    });

    // 詳細パネルの内容（未選択・該当なしはNone）
    let detail = Signal::derive(move || {
        state.with(|s| listings.with_value(|l| s.detail(l).listing().cloned()))
    });

    let on_search = move |query: String| state.update(|s| s.set_search(query));
    let on_toggle_filters = move |_: ()| state.update(|s| s.toggle_filters());
    let on_arrangement =
        move |value: Option<WorkArrangement>| state.update(|s| s.set_work_arrangement(value));
    let on_employment =
        move |value: Option<EmploymentType>| state.update(|s| s.set_employment_type(value));
    let on_clear_filters = move |_: ()| state.update(|s| s.clear_filters());
    let on_select = move |id: u32| state.update(|s| s.select(id));
    let on_close = move |_: ()| state.update(|s| s.clear_selection());

    view! {
        <div class="container">
            <Header listing_count=listing_count />

            <SearchBar
                search=search
                show_filters=show_filters
                on_search=on_search
                on_toggle_filters=on_toggle_filters
            />

            <Show when=move || show_filters.get()>
                <FilterPanel
                    filters=filters
                    on_arrangement=on_arrangement
                    on_employment=on_employment
                    on_clear=on_clear_filters
                />
            </Show>

            <div class="job-board">
                <JobList listings=visible selected=selected on_select=on_select />
                <JobDetail detail=detail on_close=on_close />
            </div>
        </div>
    }
}
