use crate::error::{GalleryError, Result};
use photo_gallery_common::{parse_collection, GalleryConfig, PhotoRecord};
use std::path::Path;

/// 設定ファイルを読み込む（指定がなければ既定値）
pub fn load_config(path: Option<&Path>) -> Result<GalleryConfig> {
    let Some(path) = path else {
        return Ok(GalleryConfig::default());
    };

    if !path.exists() {
        return Err(GalleryError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    Ok(GalleryConfig::from_json(&content)?)
}

/// photos.json を読み込んで検証
pub fn load_collection(path: &Path) -> Result<Vec<PhotoRecord>> {
    if !path.exists() {
        return Err(GalleryError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    Ok(parse_collection(&content)?)
}
