//! プレビュー生成
//!
//! Webビューアと同じ共通処理でカテゴリ一覧・グリッド・オーバーレイ内容を作る

use crate::error::{GalleryError, Result};
use photo_gallery_common::{
    category_controls, category_index, escape_html, grid_area, FilterState, GalleryConfig,
    LoadState, OverlayContent, OverlayController, PhotoRecord, ALL_CATEGORY, NO_RESULTS_NOTICE,
};
use serde::Serialize;

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

/// カテゴリ別の件数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// コレクションの概要
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionSummary {
    pub total: usize,
    pub categories: Vec<CategoryCount>,
}

/// カテゴリ一覧の順に件数を数える（`All` は全件）
pub fn summarize(photos: &[PhotoRecord]) -> CollectionSummary {
    let categories = category_index(photos)
        .into_iter()
        .map(|category| {
            let count = if category == ALL_CATEGORY {
                photos.len()
            } else {
                photos
                    .iter()
                    .filter(|p| p.normalized_category() == category)
                    .count()
            };
            CategoryCount { category, count }
        })
        .collect();

    CollectionSummary {
        total: photos.len(),
        categories,
    }
}

/// 単体で開けるHTMLページを生成
///
/// 一覧に無いカテゴリは0件として扱い、該当なし通知を表示する。
pub fn render_preview(
    photos: &[PhotoRecord],
    filter: &FilterState,
    config: &GalleryConfig,
) -> String {
    let buttons = category_controls(photos, filter)
        .iter()
        .map(|control| {
            let active = if control.active { " active" } else { "" };
            let label = escape_html(&control.label);
            format!(
                r#"<button type="button" class="btn btn-sm btn-outline-secondary me-1 mb-1{active}" data-category="{label}">{label}</button>"#
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let area = grid_area(LoadState::Ready, photos, filter, config.lazy_images);
    let no_results_class = if area.show_no_results { "" } else { " d-none" };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Photo Gallery</title>
<link rel="stylesheet" href="{css}">
</head>
<body>
<div class="container py-4">
<h1 class="h3 mb-4">Photo Gallery</h1>
<div id="categoryButtons" class="mb-3">
{buttons}
</div>
<div id="galleryRow" class="row g-3">
{grid}
</div>
<div id="noResults" class="text-center text-muted py-5{no_results_class}">{notice}</div>
</div>
</body>
</html>
"#,
        css = BOOTSTRAP_CSS,
        grid = area.markup,
        notice = NO_RESULTS_NOTICE,
    )
}

/// オーバーレイに表示される内容
pub fn describe_photo(photos: &[PhotoRecord], id: &str) -> Result<OverlayContent> {
    let mut overlay = OverlayController::default();
    if overlay.open(photos, id) {
        Ok(overlay.content().clone())
    } else {
        Err(GalleryError::PhotoNotFound(id.to_string()))
    }
}
