
// 同階層のファイルをモジュールとしてインポート
pub mod app;
pub mod config;
pub mod event;
pub mod page;
pub mod pitch;
pub mod ui;
pub mod worker;

pub use app::App;
pub use config::Config;
pub use page::{MemoryPage, Page};
pub use pitch::{PitchRenderer, RenderOptions};

use color_eyre::Result;
use crossterm::event::{self as crossterm_event, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use std::time::Duration;

// Ensure .env is loaded for tests before anything else runs in the test process.
#[cfg(test)]
#[ctor::ctor]
fn load_dotenv_for_tests() {
    let _ = dotenvy::dotenv();
}

/// アプリケーションのメインループを実行
pub fn run(mut terminal: DefaultTerminal, config: Config) -> Result<()> {
    let poll_interval = Duration::from_millis(config.poll_interval_ms);
    let mut app = App::with_config(config)?;
    app.start();

    loop {
        // ワーカーからのページ更新を反映
        app.check_page_updates();

        // 画面を描画
        terminal.draw(|f| ui::render(f, &app))?;

        // poll_interval 以内にイベントが来たら処理
        if crossterm_event::poll(poll_interval)? {
            match crossterm_event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if event::handle_key(&mut app, key)? {
                        break;
                    }
                }
                Event::Resize(_, _) => {
                    // 次ループで再描画されるので特別な処理なし
                }
                _ => {}
            }
        }
    }
    tracing::info!(target: "app", "exit");
    Ok(())
}
