//! ピッチの取得から描画までをまとめるレンダラ

use super::error::PitchError;
use super::models::{GamePitch, PitchOutcome};
use super::permalink::is_permalink_path;
use super::service::GameDataService;
use super::template::render_pitch;
use crate::config::{Config, FALLBACK_MESSAGE, GAME_ELEMENT_ID, PERMALINK_ELEMENT_ID};
use crate::page::Page;
use tracing::{info, instrument, warn};

/// 描画時の挙動切り替え
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// パーマリンク表示中なら取得せずトップへ遷移する
    pub skip_if_on_permalink_page: bool,
    /// サービスの `Error` をそのまま表示する
    pub honor_service_error: bool,
    /// 成功時にパーマリンク要素を更新する
    pub update_permalink: bool,
    /// 失敗時の表示文言
    pub fallback_message: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            skip_if_on_permalink_page: true,
            honor_service_error: true,
            update_permalink: true,
            fallback_message: FALLBACK_MESSAGE.to_string(),
        }
    }
}

impl From<&Config> for RenderOptions {
    fn from(config: &Config) -> Self {
        Self {
            skip_if_on_permalink_page: config.skip_if_on_permalink_page,
            honor_service_error: config.honor_service_error,
            update_permalink: config.update_permalink,
            ..Self::default()
        }
    }
}

/// 成功応答を描画した結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub permalink: String,
}

/// 応答ボディを解析して表示文を作る（I/Oなし）
pub fn render_response(body: &str) -> Result<Rendered, PitchError> {
    let raw: GamePitch = serde_json::from_str(body)?;
    match raw.classify() {
        Some(PitchOutcome::Pitch(pitch)) => Ok(Rendered {
            text: render_pitch(&pitch),
            permalink: pitch.link,
        }),
        Some(PitchOutcome::ServiceError(msg)) => Err(PitchError::ServiceReported(msg)),
        None => Err(PitchError::MalformedResponse(
            "expected a complete Genre/Emotion/Fantasy/Link tuple or an Error".to_string(),
        )),
    }
}

/// エラー時に `game` 要素へ書く文言
pub fn error_text(err: &PitchError, options: &RenderOptions) -> String {
    match err {
        PitchError::ServiceReported(msg) if options.honor_service_error => msg.clone(),
        _ => options.fallback_message.clone(),
    }
}

/// サービスから1件取得してページに書き込む
pub struct PitchRenderer<S, P> {
    service: S,
    page: P,
    options: RenderOptions,
}

impl<S: GameDataService, P: Page> PitchRenderer<S, P> {
    pub fn new(service: S, page: P, options: RenderOptions) -> Self {
        Self { service, page, options }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn into_page(self) -> P {
        self.page
    }

    /// 新しいピッチを取得して `game` / `permalink` 要素を更新する。
    ///
    /// 失敗はすべてページ上の文言として表現し、呼び出し元へは返さない。
    /// 同時に複数回呼んだ場合は後から完了した方が表示に残る。
    #[instrument(name = "request_and_render", skip(self))]
    pub async fn request_and_render(&self) {
        if self.options.skip_if_on_permalink_page {
            let location = self.page.location();
            if is_permalink_path(&location) {
                info!(target: "pitch", location = %location, "on_permalink_page: redirecting to root");
                self.page.navigate("/");
                return;
            }
        }

        let result = match self.service.fetch_game().await {
            Ok(body) => render_response(&body),
            Err(e) => Err(e),
        };

        match result {
            Ok(rendered) => {
                info!(target: "pitch", text = %rendered.text, link = %rendered.permalink, "pitch_rendered");
                self.page.set_text(GAME_ELEMENT_ID, &rendered.text);
                if self.options.update_permalink {
                    self.page.set_link(PERMALINK_ELEMENT_ID, &rendered.permalink);
                }
            }
            Err(e) => {
                warn!(target: "pitch", error = %e, "pitch_failed");
                self.page.set_text(GAME_ELEMENT_ID, &error_text(&e, &self.options));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::MemoryPage;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// 固定の結果を返し、呼び出し回数を数えるサービス
    struct FixedService {
        result: Result<&'static str, &'static str>,
        calls: AtomicUsize,
    }

    impl FixedService {
        fn ok(body: &'static str) -> Self {
            Self { result: Ok(body), calls: AtomicUsize::new(0) }
        }
        fn transport(msg: &'static str) -> Self {
            Self { result: Err(msg), calls: AtomicUsize::new(0) }
        }
    }

    impl GameDataService for FixedService {
        async fn fetch_game(&self) -> Result<String, PitchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result
                .map(str::to_string)
                .map_err(|m| PitchError::Transport(m.to_string()))
        }
    }

    const SUCCESS: &str = r#"{"Genre":"dungeon crawler","Emotion":"wonder","Fantasy":"a floating city","Link":"/l/0a0b0c"}"#;

    fn run(renderer: &PitchRenderer<FixedService, MemoryPage>) {
        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        rt.block_on(renderer.request_and_render());
    }

    #[test]
    fn render_response_success() {
        let r = render_response(SUCCESS).unwrap();
        assert_eq!(r.text, "A dungeon crawler about wonder in a floating city");
        assert_eq!(r.permalink, "/l/0a0b0c");
    }

    #[test]
    fn render_response_keeps_link_bytes() {
        let body = r#"{"Genre":"idle game","Emotion":"calm","Fantasy":"a café","Link":"/l/a b?q=%20é"}"#;
        let r = render_response(body).unwrap();
        assert_eq!(r.text, "An idle game about calm in a café");
        assert_eq!(r.permalink, "/l/a b?q=%20é");
    }

    #[test]
    fn render_response_classifies_errors() {
        assert!(matches!(
            render_response(r#"{"Error":"No games left"}"#),
            Err(PitchError::ServiceReported(m)) if m == "No games left"
        ));
        assert!(matches!(render_response("<html>oops</html>"), Err(PitchError::MalformedResponse(_))));
        assert!(matches!(render_response("{}"), Err(PitchError::MalformedResponse(_))));
        assert!(matches!(render_response("[1,2]"), Err(PitchError::MalformedResponse(_))));
        assert!(matches!(render_response("null"), Err(PitchError::MalformedResponse(_))));
    }

    #[test]
    fn default_options_match_default_config() {
        assert_eq!(RenderOptions::default(), RenderOptions::from(&Config::default()));
    }

    #[test]
    fn error_text_respects_options() {
        let err = PitchError::ServiceReported("No games left".into());
        let mut opts = RenderOptions::default();
        assert_eq!(error_text(&err, &opts), "No games left");
        opts.honor_service_error = false;
        assert_eq!(error_text(&err, &opts), FALLBACK_MESSAGE);
        let err = PitchError::Transport("status 500".into());
        assert_eq!(error_text(&err, &RenderOptions::default()), FALLBACK_MESSAGE);
    }

    #[test]
    fn success_writes_game_and_permalink() {
        let r = PitchRenderer::new(FixedService::ok(SUCCESS), MemoryPage::new(), RenderOptions::default());
        run(&r);
        assert_eq!(
            r.page().text(GAME_ELEMENT_ID).as_deref(),
            Some("A dungeon crawler about wonder in a floating city")
        );
        assert_eq!(r.page().link(PERMALINK_ELEMENT_ID).as_deref(), Some("/l/0a0b0c"));
    }

    #[test]
    fn failure_leaves_permalink_untouched() {
        let page = MemoryPage::new();
        page.set_link(PERMALINK_ELEMENT_ID, "/l/010101");
        let r = PitchRenderer::new(
            FixedService::ok(r#"{"Error":"No games left"}"#),
            page,
            RenderOptions::default(),
        );
        run(&r);
        assert_eq!(r.page().text(GAME_ELEMENT_ID).as_deref(), Some("No games left"));
        assert_eq!(r.page().link(PERMALINK_ELEMENT_ID).as_deref(), Some("/l/010101"));
    }

    #[test]
    fn transport_error_shows_fallback() {
        let r = PitchRenderer::new(
            FixedService::transport("connection refused"),
            MemoryPage::new(),
            RenderOptions::default(),
        );
        run(&r);
        assert_eq!(r.page().text(GAME_ELEMENT_ID).as_deref(), Some(FALLBACK_MESSAGE));
        assert_eq!(r.page().link(PERMALINK_ELEMENT_ID), None);
    }

    #[test]
    fn permalink_update_can_be_disabled() {
        let opts = RenderOptions { update_permalink: false, ..RenderOptions::default() };
        let r = PitchRenderer::new(FixedService::ok(SUCCESS), MemoryPage::new(), opts);
        run(&r);
        assert!(r.page().text(GAME_ELEMENT_ID).is_some());
        assert_eq!(r.page().link(PERMALINK_ELEMENT_ID), None);
    }

    #[test]
    fn permalink_guard_redirects_without_fetching() {
        let opts = RenderOptions { skip_if_on_permalink_page: true, ..RenderOptions::default() };
        let r = PitchRenderer::new(FixedService::ok(SUCCESS), MemoryPage::at("/l/0a0b0c"), opts);
        run(&r);
        assert_eq!(r.service.calls.load(Ordering::SeqCst), 0);
        assert_eq!(r.page().navigations(), vec!["/".to_string()]);
        assert_eq!(r.page().text(GAME_ELEMENT_ID), None);
    }

    #[test]
    fn guard_disabled_fetches_on_permalink_page() {
        let opts = RenderOptions { skip_if_on_permalink_page: false, ..RenderOptions::default() };
        let r = PitchRenderer::new(FixedService::ok(SUCCESS), MemoryPage::at("/l/0a0b0c"), opts);
        run(&r);
        assert_eq!(r.service.calls.load(Ordering::SeqCst), 1);
        assert!(r.page().navigations().is_empty());
    }
}
