//! 求人一覧コンポーネント

use job_board_common::{Listing, NO_RESULTS_MESSAGE};
use leptos::prelude::*;

#[component]
pub fn JobList<FS>(
    listings: Signal<Vec<Listing>>,
    selected: Signal<Option<u32>>,
    on_select: FS,
) -> impl IntoView
where
    FS: Fn(u32) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="job-list">
            <Show
                when=move || !listings.get().is_empty()
                fallback=|| view! { <p class="text-muted empty-state">{NO_RESULTS_MESSAGE}</p> }
            >
                <For
                    each=move || listings.get()
                    key=|listing| listing.id
                    children={
                        let on_select = on_select.clone();
                        move |listing| {
                            let on_select = on_select.clone();
                            view! {
                                <JobCard listing=listing selected=selected on_select=on_select />
                            }
                        }
                    }
                />
            </Show>
        </div>
    }
}

#[component]
fn JobCard<FS>(listing: Listing, selected: Signal<Option<u32>>, on_select: FS) -> impl IntoView
where
    FS: Fn(u32) + 'static + Clone + Send + Sync,
{
    let id = listing.id;
    let featured = listing.featured.then(|| view! { <span class="featured-badge">"Featured"</span> });
    let tags = listing
        .tags
        .iter()
        .map(|tag| view! { <span class="tag">{tag.clone()}</span> })
        .collect_view();

    view! {
        <div
            class="job-card"
            class:featured=listing.featured
            class:selected=move || selected.get() == Some(id)
            on:click=move |_| on_select(id)
        >
            <div class="job-card-header">
                <div class="company-logo">{listing.logo.clone()}</div>
                <div class="job-card-title">
                    <h3>{listing.title.clone()}</h3>
                    <span class="company">{listing.company.clone()}</span>
                </div>
                {featured}
                <span class="match-badge">{format!("{}% match", listing.match_percentage)}</span>
            </div>
            <div class="job-card-meta">
                <span>{listing.location.clone()}</span>
                <span>{listing.work_arrangement.label()}</span>
                <span>{listing.employment_type.label()}</span>
                <span>{listing.salary.clone()}</span>
            </div>
            <div class="job-card-tags">{tags}</div>
            <div class="job-card-footer text-muted">
                {format!("{} · {} applicants", listing.posted, listing.applicants)}
            </div>
        </div>
    }
}
