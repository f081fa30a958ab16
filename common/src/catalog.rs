//! カテゴリ一覧と絞り込み
//!
//! - category_index: 読み込んだ写真からカテゴリボタンのラベル一覧を作る
//! - FilterState: 選択中カテゴリと検索文字列
//! - filter_photos: 両条件を満たす写真を元の順序で返す

use crate::types::{PhotoRecord, ALL_CATEGORY};

/// 絞り込み条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub active_category: String,
    pub search_text: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            active_category: ALL_CATEGORY.to_string(),
            search_text: String::new(),
        }
    }
}

impl FilterState {
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.active_category = category.into();
        self
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// 比較用の検索語（前後空白除去・小文字化）
    pub fn normalized_query(&self) -> String {
        self.search_text.trim().to_lowercase()
    }

    pub fn matches_category(&self, photo: &PhotoRecord) -> bool {
        self.active_category == ALL_CATEGORY || photo.normalized_category() == self.active_category
    }

    pub fn matches(&self, photo: &PhotoRecord) -> bool {
        self.matches_category(photo) && matches_query(photo, &self.normalized_query())
    }
}

/// 検索語がタイトル・タグ・説明のいずれかに含まれるか
///
/// `query` は正規化済み（小文字・trim済み）であること。
/// 未設定のフィールドは一致しないものとして扱う。
pub fn matches_query(photo: &PhotoRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let contains = |field: &str| field.to_lowercase().contains(query);

    photo.title.as_deref().is_some_and(contains)
        || photo.joined_tags().as_deref().is_some_and(contains)
        || photo.description.as_deref().is_some_and(contains)
}

/// 表示対象の写真を元の順序のまま返す
pub fn filter_photos<'a>(photos: &'a [PhotoRecord], filter: &FilterState) -> Vec<&'a PhotoRecord> {
    let query = filter.normalized_query();
    photos
        .iter()
        .filter(|photo| filter.matches_category(photo) && matches_query(photo, &query))
        .collect()
}

/// カテゴリボタンのラベル一覧
///
/// 先頭は常に `All`。以降は正規化済みカテゴリを初出順に重複なく並べる。
pub fn category_index(photos: &[PhotoRecord]) -> Vec<String> {
    let mut labels = vec![ALL_CATEGORY.to_string()];
    for photo in photos {
        let category = photo.normalized_category();
        if !labels.iter().any(|label| label == category) {
            labels.push(category.to_string());
        }
    }
    labels
}

/// カテゴリボタン1つ分
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryControl {
    pub label: String,
    pub active: bool,
}

/// カテゴリボタン一覧（選択中カテゴリのボタンだけ `active`）
pub fn category_controls(photos: &[PhotoRecord], filter: &FilterState) -> Vec<CategoryControl> {
    category_index(photos)
        .into_iter()
        .map(|label| CategoryControl {
            active: label == filter.active_category,
            label,
        })
        .collect()
}
