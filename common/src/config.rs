//! ギャラリー設定

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryConfig {
    /// 写真一覧JSONの取得先（ページからの相対パス）
    pub data_url: String,
    /// カード画像を遅延読み込みする
    pub lazy_images: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            data_url: "data/photos.json".into(),
            lazy_images: true,
        }
    }
}

impl GalleryConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GalleryConfig = serde_json::from_str(json)?;
        if config.data_url.trim().is_empty() {
            return Err(Error::Config("dataUrl が空です".into()));
        }
        Ok(config)
    }
}
