//! ゲームデータサービスの応答モデル

use serde::Deserialize;

/// `/api/game/` の応答ボディ（ワイヤ形式のフィールド名は先頭大文字）
///
/// 成功時は `Genre`/`Emotion`/`Fantasy`/`Link`、失敗時は `Error` のみを持つ。
/// どちらの形かの判定は [`GamePitch::classify`] で行う。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GamePitch {
    #[serde(rename = "Genre", default)]
    pub genre: Option<String>,
    #[serde(rename = "Emotion", default)]
    pub emotion: Option<String>,
    #[serde(rename = "Fantasy", default)]
    pub fantasy: Option<String>,
    #[serde(rename = "Link", default)]
    pub link: Option<String>,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

/// 完全な成功応答
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pitch {
    pub genre: String,
    pub emotion: String,
    pub fantasy: String,
    pub link: String,
}

/// 応答の分類結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PitchOutcome {
    Pitch(Pitch),
    ServiceError(String),
}

impl GamePitch {
    /// 成功タプル・エラー文字列・どちらでもない、のいずれかに分類する。
    ///
    /// `Genre` が空でなければ成功扱いだが、残りのフィールドが欠けていれば
    /// 部分的な応答として `None` を返す。
    pub fn classify(self) -> Option<PitchOutcome> {
        match self.genre {
            Some(genre) if !genre.is_empty() => {
                let (emotion, fantasy, link) = (self.emotion?, self.fantasy?, self.link?);
                Some(PitchOutcome::Pitch(Pitch { genre, emotion, fantasy, link }))
            }
            _ => self.error.map(PitchOutcome::ServiceError),
        }
    }
}
