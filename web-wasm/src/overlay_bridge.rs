//! Bootstrapモーダル（詳細オーバーレイ）へのブリッジ

use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/js/overlay.js")]
extern "C" {
    #[wasm_bindgen(js_name = "showOverlay", catch)]
    fn show_overlay_js(element: &web_sys::Element) -> Result<(), JsValue>;
}

/// モーダルを表示する
///
/// 閉じる操作はモーダル側に任せ、`hidden.bs.modal` イベントで通知を受ける。
pub fn show_overlay(element: &web_sys::Element) -> Result<(), String> {
    show_overlay_js(element).map_err(|e| format!("showOverlay failed: {:?}", e))
}

/// モーダルが閉じられたときに発火するイベント名
pub const OVERLAY_HIDDEN_EVENT: &str = "hidden.bs.modal";
