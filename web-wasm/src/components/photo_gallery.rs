//! 写真ギャラリーコンポーネント
//!
//! グリッドは共通ライブラリで生成したHTMLをそのまま差し込み、
//! クリックはグリッド全体で受けて `img[data-id]` からIDを取り出す。

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use photo_gallery_common::{GridArea, NO_RESULTS_NOTICE};

#[component]
pub fn PhotoGallery<F>(
    grid: Memo<GridArea>,
    on_open: F,
) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send,
{
    let markup = move || grid.with(|g| g.markup.clone());
    let hide_no_results = move || grid.with(|g| !g.show_no_results);

    let on_click = move |ev: leptos::ev::MouseEvent| {
        if let Some(id) = clicked_photo_id(&ev) {
            on_open(id);
        }
    };

    view! {
        <div id="galleryRow" class="row g-3" inner_html=markup on:click=on_click></div>
        <div
            id="noResults"
            class="text-center text-muted py-5"
            class:d-none=hide_no_results
        >
            {NO_RESULTS_NOTICE}
        </div>
    }
}

/// クリックされたカード画像の `data-id`
fn clicked_photo_id(ev: &leptos::ev::MouseEvent) -> Option<String> {
    let target = ev.target()?;
    let element = target.dyn_into::<web_sys::Element>().ok()?;
    let image = element.closest("img[data-id]").ok()??;
    image.get_attribute("data-id")
}
