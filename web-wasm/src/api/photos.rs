//! 写真一覧の取得
//!
//! 起動時に一度だけ photos.json を取得する。リトライはしない。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use photo_gallery_common::{parse_collection, Error, PhotoRecord, Result};

/// 写真一覧を取得してパース
///
/// 通信エラー・HTTPエラー・JSON不正・レコード不正はすべて `Err`。
pub async fn fetch_photos(url: &str) -> Result<Vec<PhotoRecord>> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Fetch("window is unavailable".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(Error::Fetch(format!("HTTP {} for {}", resp.status(), url)));
    }

    let body = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let text = body
        .as_string()
        .ok_or_else(|| Error::Fetch("response body is not text".into()))?;

    parse_collection(&text)
}

fn js_error(value: JsValue) -> Error {
    Error::Fetch(format!("{:?}", value))
}
