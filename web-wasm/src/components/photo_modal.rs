//! 写真詳細モーダル

use gloo::events::EventListener;
use leptos::prelude::*;
use photo_gallery_common::OverlayController;
use crate::overlay_bridge::OVERLAY_HIDDEN_EVENT;

#[component]
pub fn PhotoModal<F>(
    overlay: ReadSignal<OverlayController>,
    modal_ref: NodeRef<leptos::html::Div>,
    on_dismiss: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send,
{
    // 閉じる操作はモーダル側で行われるので、イベントで状態だけ戻す
    Effect::new(move |_| {
        if let Some(el) = modal_ref.get() {
            let on_dismiss = on_dismiss.clone();
            EventListener::new(&el, OVERLAY_HIDDEN_EVENT, move |_| on_dismiss(())).forget();
        }
    });

    let image_url = move || {
        overlay.with(|o| {
            let url = o.content().image_url.clone();
            (!url.is_empty()).then_some(url)
        })
    };
    let alt = move || overlay.with(|o| o.content().alt.clone());
    let title = move || overlay.with(|o| o.content().title.clone());
    let description = move || overlay.with(|o| o.content().description.clone());

    view! {
        <div
            node_ref=modal_ref
            id="photoModal"
            class="modal fade"
            tabindex="-1"
            aria-hidden="true"
        >
            <div class="modal-dialog modal-dialog-centered modal-lg">
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 id="modalTitle" class="modal-title">{title}</h5>
                        <button
                            type="button"
                            class="btn-close"
                            data-bs-dismiss="modal"
                            aria-label="Close"
                        ></button>
                    </div>
                    <div class="modal-body text-center">
                        <img id="modalImage" class="img-fluid" src=image_url alt=alt />
                        <p id="modalDesc" class="mt-3 mb-0 text-muted">{description}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
