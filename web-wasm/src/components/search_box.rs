//! 検索ボックスコンポーネント

use leptos::prelude::*;

#[component]
pub fn SearchBox<F>(on_search: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send,
{
    view! {
        <input
            type="search"
            id="searchInput"
            class="form-control"
            placeholder="Search title, tags or description..."
            on:input=move |ev| on_search(event_target_value(&ev))
        />
    }
}
