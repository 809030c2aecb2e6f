//! ゲームデータサービス（外部HTTP API）へのアクセス

use super::error::PitchError;
use crate::config::Config;
use std::future::Future;
use tracing::{debug, instrument};

/// ピッチの生データ（JSON文字列）を返す外部サービス
///
/// 2xx 以外や通信失敗は `PitchError::Transport` として返す。
pub trait GameDataService: Send + Sync {
    fn fetch_game(&self) -> impl Future<Output = Result<String, PitchError>> + Send;
}

/// `GET <base_url>/api/game/` を叩く reqwest 実装
#[derive(Debug, Clone)]
pub struct HttpGameService {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpGameService {
    pub fn new(config: &Config) -> Result<Self, PitchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self::with_client(client, config.game_endpoint()))
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self { client, endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl GameDataService for HttpGameService {
    #[instrument(name = "fetch_game", skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch_game(&self) -> Result<String, PitchError> {
        let resp = self.client.get(&self.endpoint).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        debug!(target: "pitch", status = %status, len = body.len(), "game_response_raw");

        if !status.is_success() {
            return Err(PitchError::Transport(format!("status {}", status.as_u16())));
        }
        Ok(body)
    }
}
