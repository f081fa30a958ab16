//! カテゴリ選択ボタン

use leptos::prelude::*;
use photo_gallery_common::CategoryControl;

/// カテゴリごとに1つのボタン
///
/// 選択状態は `category_controls` が決める（常にちょうど1つ、初期値は `All`）。
#[component]
pub fn CategoryButtons<F>(
    categories: Memo<Vec<CategoryControl>>,
    on_select: F,
) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    view! {
        <div id="categoryButtons" class="mb-3">
            <For
                each=move || categories.get()
                key=|control| control.clone()
                children=move |control: CategoryControl| {
                    let on_click = {
                        let on_select = on_select.clone();
                        let category = control.label.clone();
                        move |_: leptos::ev::MouseEvent| on_select(category.clone())
                    };
                    let data_category = control.label.clone();
                    view! {
                        <button
                            type="button"
                            class="btn btn-sm btn-outline-secondary me-1 mb-1"
                            class:active=control.active
                            data-category=data_category
                            on:click=on_click
                        >
                            {control.label}
                        </button>
                    }
                }
            />
        </div>
    }
}
