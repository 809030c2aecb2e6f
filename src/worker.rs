//! ピッチ取得ワーカー（TUIとは別スレッドで動く）
//!
//! UIから `RenderRequest` を受け取るたびに独立したタスクを起動する。
//! リクエストの重複排除や順序制御はしないので、後に完了した応答が表示に残る。

use crate::page::Page;
use crate::pitch::{GameDataService, PitchRenderer};
use color_eyre::Result;
use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::thread::JoinHandle;
use tokio::runtime::Runtime;
use tracing::{debug, info};

/// UIからワーカーへの依頼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderRequest {
    /// 新しいピッチを取得して描画する
    NewGame,
}

/// ワーカーを開始する。`rx_request` の送信側がすべて drop されると終了する。
pub fn start_pitch_worker<S, P>(
    rx_request: Receiver<RenderRequest>,
    renderer: PitchRenderer<S, P>,
) -> Result<JoinHandle<()>>
where
    S: GameDataService + 'static,
    P: Page + 'static,
{
    // 専用スレッド内でTokioランタイムを構築
    let rt = Runtime::new()?;
    let renderer = Arc::new(renderer);

    let handle = std::thread::Builder::new()
        .name("pitch-worker".to_string())
        .spawn(move || {
            rt.block_on(async move {
                let mut tasks = Vec::new();
                while let Ok(request) = rx_request.recv() {
                    info!(target: "worker", ?request, "render_request_received");
                    let renderer = Arc::clone(&renderer);
                    tasks.push(tokio::spawn(async move {
                        renderer.request_and_render().await;
                    }));
                    tasks.retain(|t| !t.is_finished());
                }
                debug!(target: "worker", pending = tasks.len(), "request channel closed; draining");
                for t in tasks {
                    let _ = t.await;
                }
            });
        })?;

    Ok(handle)
}
