//! グリッド領域の表示内容
//!
//! 読み込み状態と絞り込み条件から、グリッドに差し込むHTMLと
//! 該当なし通知の表示有無を決める。

use crate::catalog::{filter_photos, FilterState};
use crate::markup::{render_grid, LOAD_ERROR_NOTICE};
use crate::types::PhotoRecord;

/// 写真一覧の読み込み状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// グリッド領域の描画結果
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridArea {
    pub markup: String,
    pub visible_count: usize,
    pub show_no_results: bool,
}

/// グリッド領域を組み立てる
///
/// - Loading: 空、通知なし
/// - Failed: 読み込み失敗通知のみ、該当なし通知は出さない
/// - Ready: 絞り込み結果のカード。0件なら空にして該当なし通知を出す
pub fn grid_area(
    state: LoadState,
    photos: &[PhotoRecord],
    filter: &FilterState,
    lazy_images: bool,
) -> GridArea {
    match state {
        LoadState::Loading => GridArea::default(),
        LoadState::Failed => GridArea {
            markup: LOAD_ERROR_NOTICE.to_string(),
            ..Default::default()
        },
        LoadState::Ready => {
            let visible = filter_photos(photos, filter);
            GridArea {
                markup: render_grid(&visible, lazy_images),
                visible_count: visible.len(),
                show_no_results: visible.is_empty(),
            }
        }
    }
}
