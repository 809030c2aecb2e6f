//! パーマリンク (`/l/<genre><emotion><fantasy>`) の判定と解析
//!
//! 各IDはサーバー側の行IDを2桁の16進数にしたもの。

use std::fmt;

const PERMALINK_PREFIX: &str = "/l/";

/// パーマリンク表示中のページ位置か
pub fn is_permalink_path(path: &str) -> bool {
    path.contains(PERMALINK_PREFIX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permalink {
    pub genre_id: u8,
    pub emotion_id: u8,
    pub fantasy_id: u8,
}

impl Permalink {
    pub fn new(genre_id: u8, emotion_id: u8, fantasy_id: u8) -> Self {
        Self { genre_id, emotion_id, fantasy_id }
    }

    /// `/l/0a0b0c` 形式のパス（クエリやフラグメントは不可）を解析する
    pub fn parse(path: &str) -> Option<Self> {
        let code = path.strip_prefix(PERMALINK_PREFIX)?;
        if code.len() != 6 || !code.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let id = |range: std::ops::Range<usize>| u8::from_str_radix(&code[range], 16).ok();
        Some(Self::new(id(0..2)?, id(2..4)?, id(4..6)?))
    }
}

impl fmt::Display for Permalink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{PERMALINK_PREFIX}{:02x}{:02x}{:02x}",
            self.genre_id, self.emotion_id, self.fantasy_id
        )
    }
}
