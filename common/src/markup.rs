//! カードグリッドのHTML生成
//!
//! Bootstrap 5 のグリッド/カード構造を文字列で組み立てる。
//! レコード由来の値はすべて escape_html を通してから埋め込む。

use crate::escape::escape_html;
use crate::types::PhotoRecord;

/// 読み込み失敗時にグリッド領域へ表示する通知
pub const LOAD_ERROR_NOTICE: &str = r#"<div class="col-12"><div class="alert alert-danger">Failed to load photos.json — check console.</div></div>"#;

/// 該当なし通知の文言
pub const NO_RESULTS_NOTICE: &str = "No photos match your filters.";

/// 写真1枚分のカード
///
/// 画像には `data-id` を付け、クリック時にIDを取り出せるようにする。
pub fn render_card(photo: &PhotoRecord, lazy_images: bool) -> String {
    let title = escape_html(photo.title_text());
    let loading = if lazy_images { r#" loading="lazy""# } else { "" };

    format!(
        r#"<div class="col-6 col-md-4 col-lg-3">
  <div class="card photo-card h-100">
    <div class="ratio ratio-4x3">
      <img src="{src}"{loading} alt="{title}" class="card-img-top w-100" style="object-fit:cover;cursor:pointer" data-id="{id}">
    </div>
    <div class="card-body p-2">
      <h6 class="card-title mb-1" style="font-size:0.95rem">{title}</h6>
      <p class="card-text text-muted small mb-0">{category}</p>
    </div>
  </div>
</div>"#,
        src = escape_html(photo.image_src()),
        loading = loading,
        title = title,
        id = escape_html(photo.id.as_str()),
        category = escape_html(photo.display_category()),
    )
}

/// 表示対象の写真からグリッド全体を生成（0件なら空文字）
pub fn render_grid(photos: &[&PhotoRecord], lazy_images: bool) -> String {
    photos
        .iter()
        .map(|photo| render_card(photo, lazy_images))
        .collect::<Vec<_>>()
        .join("\n")
}
