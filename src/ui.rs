//! UI描画モジュール

use crate::app::App;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// メインUI描画関数
pub fn render(f: &mut Frame, app: &App) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // ヘッダ
            Constraint::Length(5), // ピッチ
            Constraint::Length(4), // パーマリンク
            Constraint::Min(0),    // 余白
            Constraint::Length(1), // フッター
        ])
        .split(area);

    render_header(f, chunks[0]);
    render_game(f, app, chunks[1]);
    render_permalink(f, app, chunks[2]);
    render_footer(f, app, chunks[4]);
}

/// ヘッダー/ガイド部分を描画
fn render_header(f: &mut Frame, area: Rect) {
    let guide = vec![
        Line::from("Next Indie Game".bold()),
        Line::from("n / Enter で新しいピッチ / Esc, q, Ctrl+C で終了"),
    ];
    let guide_widget = Paragraph::new(guide)
        .block(Block::default().borders(Borders::ALL).title("Guide"));
    f.render_widget(guide_widget, area);
}

/// `game` 要素を描画
fn render_game(f: &mut Frame, app: &App, area: Rect) {
    let title = if app.in_flight > 0 { "Your next game (問い合わせ中...)" } else { "Your next game" };
    let game_widget = Paragraph::new(app.game_text.clone())
        .style(Style::default().fg(Color::Cyan).bold())
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(game_widget, area);
}

/// `permalink` 要素を描画
fn render_permalink(f: &mut Frame, app: &App, area: Rect) {
    let lines = match (app.permalink_url(), app.permalink_ids()) {
        (Some(url), Some(ids)) => vec![
            Line::from(Span::raw(url).underlined()),
            Line::from(format!(
                "genre #{} / emotion #{} / fantasy #{}",
                ids.genre_id, ids.emotion_id, ids.fantasy_id
            )),
        ],
        (Some(url), None) => vec![Line::from(Span::raw(url).underlined())],
        _ => vec![Line::from("(まだありません)".dim())],
    };
    let link_widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Permalink"));
    f.render_widget(link_widget, area);
}

/// フッター部分を描画
fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let elapsed = app.elapsed_time().as_secs_f32();
    let footer = Paragraph::new(Line::from(vec![
        Span::raw(format!("location: {}", app.location())),
        Span::raw(format!("  in flight: {}", app.in_flight)),
        Span::raw(format!("  経過: {elapsed:.1}s")),
    ]));
    f.render_widget(footer, area);
}
