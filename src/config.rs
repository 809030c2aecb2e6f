//! アプリケーション設定と定数

use color_eyre::{Result, eyre::eyre};
use std::time::Duration;

/// ゲームデータ取得APIのパス
pub const API_GAME_PATH: &str = "/api/game/";

/// ピッチ文のテンプレート（`_` を左から順に genre / emotion / fantasy で置換）
pub const PITCH_TEMPLATE: &str = "A _ about _ in _";

/// 応答が壊れていた場合などに表示する固定メッセージ
pub const FALLBACK_MESSAGE: &str = "Something went wrong fetching a game. Try again!";

/// ピッチ文を書き込む要素ID
pub const GAME_ELEMENT_ID: &str = "game";

/// パーマリンクを書き込む要素ID
pub const PERMALINK_ELEMENT_ID: &str = "permalink";

/// アプリケーション設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// ゲームデータサービスのベースURL
    pub base_url: String,
    /// 起動時のページ位置（`/l/xxxxxx` ならパーマリンク表示）
    pub start_path: String,
    /// パーマリンク表示中なら取得せずに `/` へ遷移する
    pub skip_if_on_permalink_page: bool,
    /// `Error` フィールドをそのまま表示する（false ならフォールバック表示）
    pub honor_service_error: bool,
    /// 成功時にパーマリンクを更新する
    pub update_permalink: bool,
    /// リクエストのタイムアウト（None なら無制限）
    pub request_timeout: Option<Duration>,
    /// イベントポーリング間隔（ミリ秒）
    pub poll_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            start_path: "/".to_string(),
            skip_if_on_permalink_page: true,
            honor_service_error: true,
            update_permalink: true,
            request_timeout: None,
            poll_interval_ms: 100,
        }
    }
}

impl Config {
    /// 新しい設定インスタンスを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// `.env` と環境変数から設定を読み込む。未設定の項目はデフォルト値。
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// キー→値の参照関数から設定を構築する（テストでは環境変数を汚さずに使える）
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("NIG_BASE_URL") {
            let v = v.trim().trim_end_matches('/');
            if v.is_empty() {
                return Err(eyre!("NIG_BASE_URL is empty"));
            }
            config.base_url = v.to_string();
        }
        if let Some(v) = lookup("NIG_START_PATH") {
            config.start_path = v.trim().to_string();
        }
        if let Some(v) = lookup("NIG_SKIP_ON_PERMALINK") {
            config.skip_if_on_permalink_page = parse_bool("NIG_SKIP_ON_PERMALINK", &v)?;
        }
        if let Some(v) = lookup("NIG_HONOR_SERVICE_ERROR") {
            config.honor_service_error = parse_bool("NIG_HONOR_SERVICE_ERROR", &v)?;
        }
        if let Some(v) = lookup("NIG_UPDATE_PERMALINK") {
            config.update_permalink = parse_bool("NIG_UPDATE_PERMALINK", &v)?;
        }
        if let Some(v) = lookup("NIG_REQUEST_TIMEOUT_SECS") {
            let secs: u64 = v
                .trim()
                .parse()
                .map_err(|e| eyre!("NIG_REQUEST_TIMEOUT_SECS={v:?}: {e}"))?;
            config.request_timeout = Some(Duration::from_secs(secs));
        }
        if let Some(v) = lookup("NIG_POLL_INTERVAL_MS") {
            config.poll_interval_ms = v
                .trim()
                .parse()
                .map_err(|e| eyre!("NIG_POLL_INTERVAL_MS={v:?}: {e}"))?;
        }

        Ok(config)
    }

    /// APIエンドポイントの完全なURL
    pub fn game_endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), API_GAME_PATH)
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(eyre!("{key}: expected a boolean, got {other:?}")),
    }
}
