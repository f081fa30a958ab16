//! 写真レコードの型定義
//!
//! Web(WASM)とCLIで共有される型:
//! - PhotoId: 文字列/数値どちらでも受け付ける不透明な識別子
//! - PhotoRecord: photos.json の1エントリ

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// 全件表示を表すカテゴリラベル
pub const ALL_CATEGORY: &str = "All";

/// カテゴリ未設定時のラベル
pub const UNCATEGORIZED: &str = "Uncategorized";

/// 写真ID
///
/// JSON上は文字列でも数値でもよい。読み込み時に文字列へ正規化し、
/// 以降は文字列の一致でのみ比較する。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PhotoId(String);

impl PhotoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PhotoId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PhotoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for PhotoId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => PhotoId(text),
            RawId::Number(number) => PhotoId(number_to_id(&number)),
        })
    }
}

/// 数値IDを文字列化
///
/// 整数値の浮動小数（`2.0`, `1e16`）は 1e21 未満なら指数表記を使わず
/// 整数として書く（`-0.0` は `"0"`）。
fn number_to_id(number: &serde_json::Number) -> String {
    if number.is_f64() {
        if let Some(value) = number.as_f64() {
            if value.fract() == 0.0 && value.abs() < 1e21 {
                if value == 0.0 {
                    return "0".to_string();
                }
                return format!("{:.0}", value);
            }
        }
    }
    number.to_string()
}

/// 写真レコード
///
/// `url` と `id` 以外はすべて省略可能（`null` も省略扱い）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub id: PhotoId,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// 原寸画像
    pub url: String,

    /// サムネイル（なければ `url`）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
}

impl PhotoRecord {
    /// 表示用タイトル（未設定なら空文字）
    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// 説明文（未設定なら空文字）
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// 絞り込み・カテゴリ一覧用のカテゴリ
    ///
    /// 未設定・空文字は `Uncategorized` に正規化する。
    pub fn normalized_category(&self) -> &str {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(UNCATEGORIZED)
    }

    /// カード表示用のカテゴリ（未設定なら空文字）
    pub fn display_category(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }

    /// 検索用にタグを空白区切りで連結
    pub fn joined_tags(&self) -> Option<String> {
        self.tags.as_ref().map(|tags| tags.join(" "))
    }

    /// カードに使う画像（サムネイル優先）
    pub fn image_src(&self) -> &str {
        self.thumb
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.url)
    }
}
