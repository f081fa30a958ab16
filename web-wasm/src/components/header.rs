//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="mb-4">
            <h1 class="h3">"Photo Gallery"</h1>
        </header>
    }
}
