//! ピッチ取得・描画のエラー分類

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PitchError {
    /// 通信失敗または 2xx 以外のステータス
    #[error("transport error: {0}")]
    Transport(String),
    /// JSONとして読めない、または成功/エラーどちらの形でもない応答
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    /// サービスが `Error` フィールドで失敗を返した
    #[error("service reported error: {0}")]
    ServiceReported(String),
}

impl From<reqwest::Error> for PitchError {
    fn from(e: reqwest::Error) -> Self {
        PitchError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for PitchError {
    fn from(e: serde_json::Error) -> Self {
        PitchError::MalformedResponse(e.to_string())
    }
}
