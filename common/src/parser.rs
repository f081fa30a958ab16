//! photos.json パーサー
//!
//! 読み込み時点で全レコードの形を検証し、不正なデータは
//! 描画前にエラーとして返す。

use crate::error::{Error, Result};
use crate::types::PhotoRecord;

/// 写真一覧JSONをパース
///
/// # Arguments
/// * `json` - PhotoRecord オブジェクトの配列
///
/// # Returns
/// * `Ok(Vec<PhotoRecord>)` - 元の順序のまま
/// * `Err(Error::Json)` - JSONとして不正、または配列でない
/// * `Err(Error::InvalidRecord)` - 要素の形が不正（何番目かを含む）
///
/// # Examples
/// ```
/// use photo_gallery_common::parse_collection;
///
/// let photos = parse_collection(r#"[{"id": 1, "url": "a.jpg"}]"#).unwrap();
/// assert_eq!(photos[0].id.as_str(), "1");
/// ```
pub fn parse_collection(json: &str) -> Result<Vec<PhotoRecord>> {
    let values: Vec<serde_json::Value> = serde_json::from_str(json)?;

    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| parse_record(index, value))
        .collect()
}

fn parse_record(index: usize, value: serde_json::Value) -> Result<PhotoRecord> {
    let record: PhotoRecord = serde_json::from_value(value).map_err(|e| Error::InvalidRecord {
        index,
        reason: e.to_string(),
    })?;

    if record.url.trim().is_empty() {
        return Err(Error::InvalidRecord {
            index,
            reason: "url is empty".into(),
        });
    }

    Ok(record)
}
