//! photo-gallery
//!
//! ギャラリーと同じ読み込み・絞り込み・描画処理を手元の photos.json に対して実行する

pub mod cli;
pub mod error;
pub mod loader;
pub mod preview;
