//! ピッチ文テンプレートへの差し込み

use super::article::{Article, choose_article};
use super::models::Pitch;
use crate::config::PITCH_TEMPLATE;

const PLACEHOLDER: char = '_';

/// テンプレート中の `_` を左から順に1回ずつ `values` で置き換える。
///
/// 差し込んだ値の中の `_` は再度置換しない。値が足りなければ残りの `_` はそのまま。
pub fn fill_placeholders(template: &str, values: &[&str]) -> String {
    let extra: usize = values.iter().map(|v| v.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = values.iter();
    for ch in template.chars() {
        if ch == PLACEHOLDER {
            if let Some(v) = rest.next() {
                out.push_str(v);
                continue;
            }
        }
        out.push(ch);
    }
    out
}

/// 成功応答を表示用の一文にする
pub fn render_pitch(pitch: &Pitch) -> String {
    let text = fill_placeholders(
        PITCH_TEMPLATE,
        &[pitch.genre.as_str(), pitch.emotion.as_str(), pitch.fantasy.as_str()],
    );
    match choose_article(&pitch.genre) {
        Article::An => apply_an(text),
        Article::A => text,
    }
}

/// 先頭の "A" を "An" にする（先頭が "A" でなければそのまま）
fn apply_an(text: String) -> String {
    match text.strip_prefix('A') {
        Some(rest) => format!("{}{}", Article::An, rest),
        None => text,
    }
}
