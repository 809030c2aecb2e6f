//! イベント処理モジュール

use crate::app::App;
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// キーイベントを処理
///
/// # Returns
/// - `Ok(true)` - アプリケーションを終了
/// - `Ok(false)` - 処理を継続
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => return Ok(true),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Ok(true),
        KeyCode::Enter | KeyCode::Char('n') | KeyCode::Char(' ') => app.request_new_game(),
        _ => {}
    }
    Ok(false)
}
