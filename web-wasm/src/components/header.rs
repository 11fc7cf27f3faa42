//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header(listing_count: Signal<usize>) -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Job Board"</h1>
            <span class="header-count">{move || format!("{} jobs", listing_count.get())}</span>
        </header>
    }
}
