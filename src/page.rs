//! 描画先ページの抽象
//!
//! レンダラはページに対して「要素のテキストを書く」「要素のリンク先を変える」
//! 「現在位置を読む」「遷移する」の4操作だけを行う。

use std::collections::HashMap;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex, RwLock};
use tracing::warn;

/// レンダラから見たホストページ
pub trait Page: Send + Sync {
    /// 要素 `id` の表示テキストを置き換える
    fn set_text(&self, id: &str, text: &str);
    /// 要素 `id` のリンク先を置き換える
    fn set_link(&self, id: &str, href: &str);
    /// 現在のページ位置（パス）
    fn location(&self) -> String;
    /// 指定パスへ遷移する
    fn navigate(&self, path: &str);
}

/// UIスレッドへ送るページ更新
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageUpdate {
    Text { id: String, text: String },
    Link { id: String, href: String },
    Navigate { path: String },
}

/// 更新をチャンネル経由でUIスレッドへ流すページ
///
/// 位置情報はUI側と共有し、遷移したら即座に書き換える。
#[derive(Debug, Clone)]
pub struct ChannelPage {
    tx: Sender<PageUpdate>,
    location: Arc<RwLock<String>>,
}

impl ChannelPage {
    pub fn new(tx: Sender<PageUpdate>, location: Arc<RwLock<String>>) -> Self {
        Self { tx, location }
    }

    fn send(&self, update: PageUpdate) {
        // UIが終了済みなら捨てる
        if self.tx.send(update).is_err() {
            warn!(target: "app", "page_update_dropped: receiver closed");
        }
    }
}

impl Page for ChannelPage {
    fn set_text(&self, id: &str, text: &str) {
        self.send(PageUpdate::Text { id: id.to_string(), text: text.to_string() });
    }

    fn set_link(&self, id: &str, href: &str) {
        self.send(PageUpdate::Link { id: id.to_string(), href: href.to_string() });
    }

    fn location(&self) -> String {
        match self.location.read() {
            Ok(loc) => loc.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn navigate(&self, path: &str) {
        match self.location.write() {
            Ok(mut loc) => *loc = path.to_string(),
            Err(poisoned) => *poisoned.into_inner() = path.to_string(),
        }
        self.send(PageUpdate::Navigate { path: path.to_string() });
    }
}

#[derive(Debug, Default)]
struct MemoryPageState {
    texts: HashMap<String, String>,
    links: HashMap<String, String>,
    location: String,
    navigations: Vec<String>,
}

/// メモリ上のページ（テストやヘッドレス実行用）
#[derive(Debug, Default)]
pub struct MemoryPage {
    state: Mutex<MemoryPageState>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::at("/")
    }

    /// 指定位置から始まるページ
    pub fn at(location: &str) -> Self {
        let state = MemoryPageState { location: location.to_string(), ..Default::default() };
        Self { state: Mutex::new(state) }
    }

    pub fn text(&self, id: &str) -> Option<String> {
        self.with_state(|s| s.texts.get(id).cloned())
    }

    pub fn link(&self, id: &str) -> Option<String> {
        self.with_state(|s| s.links.get(id).cloned())
    }

    /// これまでの遷移先（古い順）
    pub fn navigations(&self) -> Vec<String> {
        self.with_state(|s| s.navigations.clone())
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut MemoryPageState) -> T) -> T {
        let mut guard = match self.state.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut guard)
    }
}

impl Page for MemoryPage {
    fn set_text(&self, id: &str, text: &str) {
        self.with_state(|s| s.texts.insert(id.to_string(), text.to_string()));
    }

    fn set_link(&self, id: &str, href: &str) {
        self.with_state(|s| s.links.insert(id.to_string(), href.to_string()));
    }

    fn location(&self) -> String {
        self.with_state(|s| s.location.clone())
    }

    fn navigate(&self, path: &str) {
        self.with_state(|s| {
            s.location = path.to_string();
            s.navigations.push(path.to_string());
        });
    }
}
