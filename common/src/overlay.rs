//! 詳細オーバーレイ
//!
//! IDから写真を引き、表示内容を組み立てる。表示/非表示の切り替え自体は
//! 呼び出し側（Bootstrapモーダル等）に任せ、ここでは状態だけを持つ。

use crate::types::PhotoRecord;

/// オーバーレイの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Hidden,
    Visible,
}

/// オーバーレイに表示する内容
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OverlayContent {
    pub image_url: String,
    pub alt: String,
    pub title: String,
    pub description: String,
}

impl From<&PhotoRecord> for OverlayContent {
    fn from(photo: &PhotoRecord) -> Self {
        Self {
            image_url: photo.url.clone(),
            alt: photo.title_text().to_string(),
            title: photo.title_text().to_string(),
            description: photo.description_text().to_string(),
        }
    }
}

/// IDの文字列一致で最初の写真を探す
pub fn find_photo<'a>(photos: &'a [PhotoRecord], id: &str) -> Option<&'a PhotoRecord> {
    photos.iter().find(|photo| photo.id.as_str() == id)
}

/// オーバーレイ制御
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OverlayController {
    state: OverlayState,
    content: OverlayContent,
}

impl OverlayController {
    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn content(&self) -> &OverlayContent {
        &self.content
    }

    pub fn is_visible(&self) -> bool {
        self.state == OverlayState::Visible
    }

    /// 写真を開く
    ///
    /// 見つかれば内容を差し替えて `Visible` にし `true` を返す。
    /// 見つからなければ何も変えずに `false`。
    pub fn open(&mut self, photos: &[PhotoRecord], id: &str) -> bool {
        match find_photo(photos, id) {
            Some(photo) => {
                self.content = OverlayContent::from(photo);
                self.state = OverlayState::Visible;
                true
            }
            None => false,
        }
    }

    /// 写真を開いて表示を要求する
    ///
    /// `show` が失敗したら `Hidden` に戻す。表示できた場合のみ `true`。
    pub fn open_with<F, E>(&mut self, photos: &[PhotoRecord], id: &str, show: F) -> bool
    where
        F: FnOnce() -> Result<(), E>,
    {
        if !self.open(photos, id) {
            return false;
        }
        if show().is_err() {
            self.dismiss();
            return false;
        }
        true
    }

    /// ユーザー操作で閉じられた
    pub fn dismiss(&mut self) {
        self.state = OverlayState::Hidden;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_collection() -> Vec<PhotoRecord> {
        serde_json::from_str(
            r#"[
                {"id": 1, "title": "Sunset", "category": "Nature", "tags": ["sky"], "url": "1.jpg", "description": "Evening"},
                {"id": 2, "title": "City", "category": "Urban", "url": "2.jpg"}
            ]"#,
        )
        .expect("デシリアライズ失敗")
    }

    #[test]
    fn test_open_numeric_id_with_string() {
        let photos = sample_collection();
        let mut overlay = OverlayController::default();

        assert!(overlay.open(&photos, "2"));
        assert_eq!(overlay.state(), OverlayState::Visible);
        assert_eq!(overlay.content().title, "City");
        assert_eq!(overlay.content().alt, "City");
        assert_eq!(overlay.content().image_url, "2.jpg");
        assert_eq!(overlay.content().description, "");
    }

    #[test]
    fn test_open_unknown_id_is_noop() {
        let photos = sample_collection();
        let mut overlay = OverlayController::default();

        assert!(!overlay.open(&photos, "999"));
        assert_eq!(overlay, OverlayController::default());
        assert!(!overlay.is_visible());
    }

    #[test]
    fn test_open_unknown_id_keeps_current_content() {
        let photos = sample_collection();
        let mut overlay = OverlayController::default();
        overlay.open(&photos, "1");
        let before = overlay.clone();

        assert!(!overlay.open(&photos, "999"));
        assert_eq!(overlay, before);
    }

    #[test]
    fn test_open_uses_full_resolution_url() {
        let photos: Vec<PhotoRecord> = serde_json::from_str(
            r#"[{"id": "a", "url": "full.jpg", "thumb": "small.jpg"}]"#,
        )
        .unwrap();
        let mut overlay = OverlayController::default();

        assert!(overlay.open(&photos, "a"));
        assert_eq!(overlay.content().image_url, "full.jpg");
        assert_eq!(overlay.content().title, "");
    }

    #[test]
    fn test_dismiss() {
        let photos = sample_collection();
        let mut overlay = OverlayController::default();
        overlay.open(&photos, "1");
        assert_eq!(overlay.content().description, "Evening");

        overlay.dismiss();
        assert_eq!(overlay.state(), OverlayState::Hidden);
    }

    #[test]
    fn test_open_with_shows_overlay() {
        let photos = sample_collection();
        let mut overlay = OverlayController::default();
        let mut show_calls = 0;

        let shown = overlay.open_with(&photos, "2", || {
            show_calls += 1;
            Ok::<(), String>(())
        });
        assert!(shown);
        assert_eq!(show_calls, 1);
        assert_eq!(overlay.state(), OverlayState::Visible);
        assert_eq!(overlay.content().title, "City");
    }

    #[test]
    fn test_open_with_unknown_id_does_not_show() {
        let photos = sample_collection();
        let mut overlay = OverlayController::default();
        let mut show_calls = 0;

        let shown = overlay.open_with(&photos, "999", || {
            show_calls += 1;
            Ok::<(), String>(())
        });
        assert!(!shown);
        assert_eq!(show_calls, 0);
        assert_eq!(overlay.state(), OverlayState::Hidden);
    }

    #[test]
    fn test_open_with_show_failure_stays_hidden() {
        let photos = sample_collection();
        let mut overlay = OverlayController::default();

        let shown = overlay.open_with(&photos, "1", || Err("modal unavailable".to_string()));
        assert!(!shown);
        assert_eq!(overlay.state(), OverlayState::Hidden);
    }

    #[test]
    fn test_find_photo_first_match() {
        let photos: Vec<PhotoRecord> = serde_json::from_str(
            r#"[
                {"id": 7, "title": "first", "url": "a.jpg"},
                {"id": "7", "title": "second", "url": "b.jpg"}
            ]"#,
        )
        .unwrap();
        let found = find_photo(&photos, "7").expect("見つからない");
        assert_eq!(found.title_text(), "first");
    }
}
