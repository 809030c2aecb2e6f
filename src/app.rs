//! アプリケーション状態管理モジュール
//!
//! ターミナル上の「ページ」そのもの。`game` と `permalink` の2要素と現在位置を持つ。

use crate::config::{Config, GAME_ELEMENT_ID, PERMALINK_ELEMENT_ID};
use crate::page::{ChannelPage, PageUpdate};
use crate::pitch::{HttpGameService, Permalink, PitchRenderer, RenderOptions, is_permalink_path};
use crate::worker::{RenderRequest, start_pitch_worker};
use color_eyre::Result;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, RwLock};
use std::time::Instant;
use tracing::{info, warn};

/// `game` 要素の初期表示
pub const INITIAL_GAME_TEXT: &str = "(まだありません)";

/// アプリケーションの状態を管理する構造体
pub struct App {
    /// 設定
    pub config: Config,
    /// `game` 要素の表示テキスト
    pub game_text: String,
    /// `permalink` 要素のリンク先（応答の `Link` そのまま）
    pub permalink: Option<String>,
    /// 応答待ちのリクエスト数
    pub in_flight: usize,
    /// アプリケーション開始時刻
    pub started: Instant,
    /// 現在位置（ワーカー側のページと共有）
    location: Arc<RwLock<String>>,
    /// 描画依頼送信用チャンネル
    tx: Sender<RenderRequest>,
    /// ページ更新受信用チャンネル
    rx: Receiver<PageUpdate>,
}

impl App {
    /// 設定を指定してアプリケーションインスタンスを作成し、ワーカーを起動する
    pub fn with_config(config: Config) -> Result<Self> {
        let (tx_request, rx_request) = mpsc::channel::<RenderRequest>();
        let (tx_update, rx_update) = mpsc::channel::<PageUpdate>();
        let location = Arc::new(RwLock::new(config.start_path.clone()));

        let service = HttpGameService::new(&config)?;
        info!(target: "app", endpoint = service.endpoint(), "game_service_ready");
        let page = ChannelPage::new(tx_update, Arc::clone(&location));
        let renderer = PitchRenderer::new(service, page, RenderOptions::from(&config));

        // ワーカーをバックグラウンドで開始（終了時は join しない）
        start_pitch_worker(rx_request, renderer)?;

        Ok(Self::with_channels(config, location, tx_request, rx_update))
    }

    /// ワーカーを起動せずにチャンネルだけを繋いで作成する
    pub fn with_channels(
        config: Config,
        location: Arc<RwLock<String>>,
        tx: Sender<RenderRequest>,
        rx: Receiver<PageUpdate>,
    ) -> Self {
        Self {
            config,
            game_text: INITIAL_GAME_TEXT.to_string(),
            permalink: None,
            in_flight: 0,
            started: Instant::now(),
            location,
            tx,
            rx,
        }
    }

    /// 起動直後の処理。パーマリンク表示中でなければ最初の1件を取得する。
    pub fn start(&mut self) {
        if !is_permalink_path(&self.location()) {
            self.request_new_game();
        }
    }

    /// 新しいピッチを依頼する（重複排除しない）
    pub fn request_new_game(&mut self) {
        match self.tx.send(RenderRequest::NewGame) {
            Ok(()) => {
                self.in_flight += 1;
                info!(target: "app", in_flight = self.in_flight, "new_game_requested");
            }
            // ワーカーが終了している場合は送信エラーを無視
            Err(e) => warn!(target: "app", "worker unavailable: {e}"),
        }
    }

    /// 届いたページ更新をすべて到着順に反映する
    pub fn check_page_updates(&mut self) {
        while let Ok(update) = self.rx.try_recv() {
            self.apply(update);
        }
    }

    fn apply(&mut self, update: PageUpdate) {
        match update {
            PageUpdate::Text { id, text } if id == GAME_ELEMENT_ID => {
                self.game_text = text;
                self.in_flight = self.in_flight.saturating_sub(1);
            }
            PageUpdate::Link { id, href } if id == PERMALINK_ELEMENT_ID => {
                self.permalink = Some(href);
            }
            PageUpdate::Navigate { path } => {
                info!(target: "app", path = %path, "navigated");
                self.in_flight = self.in_flight.saturating_sub(1);
                self.game_text = INITIAL_GAME_TEXT.to_string();
                self.permalink = None;
                // 遷移先を読み込んだ扱いで新しい1件を取得
                if !is_permalink_path(&path) {
                    self.request_new_game();
                }
            }
            other => warn!(target: "app", ?other, "update for unknown element ignored"),
        }
    }

    /// 現在位置
    pub fn location(&self) -> String {
        match self.location.read() {
            Ok(loc) => loc.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// 表示用の完全なパーマリンクURL
    pub fn permalink_url(&self) -> Option<String> {
        self.permalink
            .as_ref()
            .map(|href| format!("{}{}", self.config.base_url.trim_end_matches('/'), href))
    }

    /// パーマリンクに埋め込まれたID（解析できれば）
    pub fn permalink_ids(&self) -> Option<Permalink> {
        self.permalink.as_deref().and_then(Permalink::parse)
    }

    /// アプリケーション開始からの経過時間を取得
    pub fn elapsed_time(&self) -> std::time::Duration {
        self.started.elapsed()
    }
}
