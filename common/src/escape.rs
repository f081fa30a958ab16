//! HTMLエスケープ

/// `& < > " '` を実体参照に置き換える
///
/// 1文字ずつ1回だけ置換するため二重エスケープは起きない
/// （入力に含まれる `&amp;` は `&amp;amp;` になる）。
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
