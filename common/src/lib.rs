//! Photo Gallery Common Library
//!
//! Web(WASM)ビューアとCLIで共有される型とフィルタ/描画パイプライン

pub mod types;
pub mod error;
pub mod escape;
pub mod catalog;
pub mod markup;
pub mod overlay;
pub mod config;
pub mod parser;
pub mod view;

pub use types::{PhotoId, PhotoRecord, ALL_CATEGORY, UNCATEGORIZED};
pub use error::{Error, Result};
pub use escape::escape_html;
pub use catalog::{category_controls, category_index, filter_photos, CategoryControl, FilterState};
pub use markup::{render_card, render_grid, LOAD_ERROR_NOTICE, NO_RESULTS_NOTICE};
pub use overlay::{find_photo, OverlayContent, OverlayController, OverlayState};
pub use config::GalleryConfig;
pub use parser::parse_collection;
pub use view::{grid_area, GridArea, LoadState};
