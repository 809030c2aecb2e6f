//! 不定冠詞 (a / an) の選択

use std::fmt;

/// 母音字で始まっても "a" を使う語
///
/// 先頭の1文字だけ大文字小文字を無視し、2文字目以降は完全一致で比較する。
pub const ARTICLE_EXCEPTIONS: &[&str] = &["one"];

const VOWELS: &[char] = &['A', 'E', 'I', 'O', 'U', 'a', 'e', 'i', 'o', 'u'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Article {
    A,
    An,
}

impl Article {
    pub fn as_str(self) -> &'static str {
        match self {
            Article::A => "A",
            Article::An => "An",
        }
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 綴りから冠詞を推定する。
///
/// 発音ではなく先頭の文字だけを見る近似で、例外は [`ARTICLE_EXCEPTIONS`] のみ。
/// "hour" や "unicorn" のような語は誤判定する。
pub fn choose_article(word: &str) -> Article {
    if !word.starts_with(VOWELS) {
        return Article::A;
    }
    if ARTICLE_EXCEPTIONS.iter().any(|ex| starts_with_word(word, ex)) {
        return Article::A;
    }
    Article::An
}

/// `word` が `prefix` を単語として先頭に持つか（直後がASCII英数字・`_` 以外か終端）
fn starts_with_word(word: &str, prefix: &str) -> bool {
    let mut word_chars = word.chars();
    let mut prefix_chars = prefix.chars();
    let (Some(w), Some(p)) = (word_chars.next(), prefix_chars.next()) else {
        return false;
    };
    if !w.eq_ignore_ascii_case(&p) {
        return false;
    }
    let rest = word_chars.as_str();
    let Some(after) = rest.strip_prefix(prefix_chars.as_str()) else {
        return false;
    };
    match after.chars().next() {
        None => true,
        Some(c) => !(c.is_ascii_alphanumeric() || c == '_'),
    }
}
