use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error(transparent)]
    Common(#[from] photo_gallery_common::Error),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("写真が見つかりません: id={0}")]
    PhotoNotFound(String),

    #[error("JSON出力エラー: {0}")]
    JsonOutput(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
