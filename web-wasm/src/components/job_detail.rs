//! 求人詳細パネル

use job_board_common::{Listing, EMPTY_SELECTION_PROMPT};
use leptos::prelude::*;

#[component]
pub fn JobDetail<FC>(detail: Signal<Option<Listing>>, on_close: FC) -> impl IntoView
where
    FC: Fn(()) + 'static + Clone + Send,
{
    view! {
        <aside class="job-detail">
            {move || match detail.get() {
                None => view! {
                    <p class="text-muted empty-state">{EMPTY_SELECTION_PROMPT}</p>
                }
                .into_any(),
                Some(listing) => {
                    let on_close = on_close.clone();
                    view! { <DetailBody listing=listing on_close=on_close /> }.into_any()
                }
            }}
        </aside>
    }
}

#[component]
fn DetailBody<FC>(listing: Listing, on_close: FC) -> impl IntoView
where
    FC: Fn(()) + 'static + Clone + Send,
{
    let tags = listing
        .tags
        .iter()
        .map(|tag| view! { <span class="tag">{tag.clone()}</span> })
        .collect_view();
    let requirements = listing
        .requirements
        .iter()
        .map(|item| view! { <li>{item.clone()}</li> })
        .collect_view();
    let responsibilities = listing
        .responsibilities
        .iter()
        .map(|item| view! { <li>{item.clone()}</li> })
        .collect_view();

    view! {
        <div class="job-detail-body">
            <div class="job-detail-header">
                <div class="company-logo large">{listing.logo.clone()}</div>
                <div>
                    <h2>{listing.title.clone()}</h2>
                    <span class="company">{listing.company.clone()}</span>
                </div>
                <button class="btn btn-tertiary btn-small" on:click=move |_| on_close(())>
                    "Close"
                </button>
            </div>

            <dl class="job-detail-facts">
                <dt>"Location"</dt><dd>{listing.location.clone()}</dd>
                <dt>"Arrangement"</dt><dd>{listing.work_arrangement.label()}</dd>
                <dt>"Type"</dt><dd>{listing.employment_type.label()}</dd>
                <dt>"Salary"</dt><dd>{listing.salary.clone()}</dd>
                <dt>"Experience"</dt><dd>{listing.experience.clone()}</dd>
                <dt>"Match"</dt><dd>{format!("{}%", listing.match_percentage)}</dd>
                <dt>"Posted"</dt><dd>{listing.posted.clone()}</dd>
                <dt>"Applicants"</dt><dd>{listing.applicants}</dd>
            </dl>

            <div class="job-card-tags">{tags}</div>

            <p class="job-description">{listing.description.clone()}</p>

            <h3>"Requirements"</h3>
            <ul>{requirements}</ul>

            <h3>"Responsibilities"</h3>
            <ul>{responsibilities}</ul>
        </div>
    }
}
