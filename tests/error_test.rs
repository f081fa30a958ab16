//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use photo_gallery::error::GalleryError;
use photo_gallery::loader;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないファイルを読み込んだ場合
#[test]
fn test_load_nonexistent_file() {
    let result = loader::load_collection(Path::new("/nonexistent/path/photos.json"));
    assert!(matches!(result, Err(GalleryError::FileNotFound(_))));
}

/// JSONとして不正なファイル
#[test]
fn test_load_malformed_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("photos.json");
    std::fs::write(&path, "[{\"id\": 1,").unwrap();

    let result = loader::load_collection(&path);
    assert!(matches!(
        result,
        Err(GalleryError::Common(photo_gallery_common::Error::Json(_)))
    ));
}

/// url の無いレコード
#[test]
fn test_load_invalid_record() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("photos.json");
    std::fs::write(&path, r#"[{"id": 1, "url": "a.jpg"}, {"id": 2}]"#).unwrap();

    let err = loader::load_collection(&path).unwrap_err();
    assert!(matches!(
        err,
        GalleryError::Common(photo_gallery_common::Error::InvalidRecord { index: 1, .. })
    ));
    // 透過的エラーなので共通エラーのメッセージがそのまま表示される
    assert!(format!("{}", err).contains("Invalid record #1"));
}

/// 空の配列はエラーではない
#[test]
fn test_load_empty_collection() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("photos.json");
    std::fs::write(&path, "[]").unwrap();

    let photos = loader::load_collection(&path).unwrap();
    assert!(photos.is_empty());
}

/// 設定ファイルが無い場合
#[test]
fn test_load_config_missing_file() {
    let result = loader::load_config(Some(Path::new("/nonexistent/gallery.json")));
    assert!(matches!(result, Err(GalleryError::FileNotFound(_))));
}

/// 設定ファイルの値が不正
#[test]
fn test_load_config_invalid_value() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("gallery.json");
    std::fs::write(&path, r#"{"dataUrl": ""}"#).unwrap();

    let result = loader::load_config(Some(&path));
    assert!(matches!(
        result,
        Err(GalleryError::Common(photo_gallery_common::Error::Config(_)))
    ));
}

/// GalleryErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        GalleryError::FileNotFound("photos.json".to_string()),
        GalleryError::PhotoNotFound("999".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: GalleryError = io_err.into();

    assert!(matches!(err, GalleryError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}
