//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use photo_gallery_common::{
    category_controls, grid_area, CategoryControl, FilterState, GalleryConfig, LoadState,
    OverlayController, PhotoRecord,
};
use crate::api::photos::fetch_photos;
use crate::components::{
    header::Header,
    search_box::SearchBox,
    category_buttons::CategoryButtons,
    photo_gallery::PhotoGallery,
    photo_modal::PhotoModal,
};
use crate::overlay_bridge::show_overlay;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let config = GalleryConfig::default();
    let lazy_images = config.lazy_images;

    // アプリケーション状態
    let (load_state, set_load_state) = signal(LoadState::Loading);
    let (photos, set_photos) = signal(Vec::<PhotoRecord>::new());
    let (filter, set_filter) = signal(FilterState::default());
    let (overlay, set_overlay) = signal(OverlayController::default());
    let modal_ref = NodeRef::<leptos::html::Div>::new();

    // 起動時に一度だけ読み込む
    let data_url = config.data_url;
    spawn_local(async move {
        match fetch_photos(&data_url).await {
            Ok(loaded) => {
                set_photos.set(loaded);
                set_load_state.set(LoadState::Ready);
            }
            Err(e) => {
                gloo::console::error!(format!("Failed to load {}: {}", data_url, e));
                set_load_state.set(LoadState::Failed);
            }
        }
    });

    // カテゴリ一覧は読み込み完了後のコレクションから毎回導出する
    let categories = Memo::new(move |_| {
        if load_state.get() == LoadState::Ready {
            filter.with(|f| photos.with(|p| category_controls(p, f)))
        } else {
            Vec::<CategoryControl>::new()
        }
    });

    let grid = Memo::new(move |_| {
        let state = load_state.get();
        filter.with(|f| photos.with(|p| grid_area(state, p, f, lazy_images)))
    });

    // カテゴリ選択ハンドラ
    let on_select = move |category: String| {
        set_filter.update(|f| f.active_category = category);
    };

    // 検索入力ハンドラ（入力ごとに再描画）
    let on_search = move |text: String| {
        set_filter.update(|f| f.search_text = text);
    };

    // カードクリックハンドラ
    // 見つからない・表示できない場合は Hidden のまま
    let on_open = move |id: String| {
        photos.with_untracked(|p| {
            set_overlay.update(|o| {
                o.open_with(p, &id, || match modal_ref.get_untracked() {
                    Some(el) => show_overlay(&el),
                    None => Err("overlay element is not mounted".to_string()),
                });
            })
        });
    };

    // モーダルが閉じられた
    let on_dismiss = move |_: ()| {
        set_overlay.update(|o| o.dismiss());
    };

    view! {
        <div class="container py-4">
            <Header />

            <div class="row mb-3">
                <div class="col-md-6">
                    <SearchBox on_search=on_search />
                </div>
            </div>

            <CategoryButtons
                categories=categories
                on_select=on_select
            />

            <PhotoGallery
                grid=grid
                on_open=on_open
            />

            <PhotoModal
                overlay=overlay
                modal_ref=modal_ref
                on_dismiss=on_dismiss
            />
        </div>
    }
}
