//! フィルタパネル（勤務形態・雇用形態）
//!
//! 空文字の選択肢は「指定なし」として扱う。

use job_board_common::{EmploymentType, FilterSelection, WorkArrangement};
use leptos::prelude::*;

#[component]
pub fn FilterPanel<FA, FE, FC>(
    filters: Signal<FilterSelection>,
    on_arrangement: FA,
    on_employment: FE,
    on_clear: FC,
) -> impl IntoView
where
    FA: Fn(Option<WorkArrangement>) + 'static + Clone + Send,
    FE: Fn(Option<EmploymentType>) + 'static + Clone + Send,
    FC: Fn(()) + 'static + Clone + Send,
{
    let arrangement_options = WorkArrangement::ALL
        .iter()
        .map(|&value| {
            view! {
                <option
                    value=value.as_str()
                    selected=move || filters.get().work_arrangement == Some(value)
                >
                    {value.label()}
                </option>
            }
        })
        .collect_view();

    let employment_options = EmploymentType::ALL
        .iter()
        .map(|&value| {
            view! {
                <option
                    value=value.as_str()
                    selected=move || filters.get().employment_type == Some(value)
                >
                    {value.label()}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="filter-panel">
            <div class="form-group">
                <label for="work-arrangement">"Work arrangement"</label>
                <select
                    id="work-arrangement"
                    on:change=move |ev| on_arrangement(event_target_value(&ev).parse().ok())
                >
                    <option value="" selected=move || filters.get().work_arrangement.is_none()>
                        "Any"
                    </option>
                    {arrangement_options}
                </select>
            </div>

            <div class="form-group">
                <label for="employment-type">"Employment type"</label>
                <select
                    id="employment-type"
                    on:change=move |ev| on_employment(event_target_value(&ev).parse().ok())
                >
                    <option value="" selected=move || filters.get().employment_type.is_none()>
                        "Any"
                    </option>
                    {employment_options}
                </select>
            </div>

            <button
                class="btn btn-tertiary btn-small"
                disabled=move || filters.get().is_empty()
                on:click=move |_| on_clear(())
            >
                "Clear filters"
            </button>
        </div>
    }
}
