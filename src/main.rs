use color_eyre::Result;
use next_indie_game::Config;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    color_eyre::install()?;

    // .env（任意）と環境変数から設定を読む
    let config = Config::from_env()?;

    // ログ: 標準出力は使わず、ファイルへのみ出力してratatuiと衝突しないようにする
    let file_appender = rolling::daily("logs", "app.log");
    // _guard は drop するとログが失われるため main の終わりまで保持
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false) // ファイルにANSIカラー不要
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!(target: "app", base_url = %config.base_url, start_path = %config.start_path, "starting");

    let terminal = ratatui::init();
    let res = next_indie_game::run(terminal, config);
    ratatui::restore();
    res
}
