//! インディーゲームのピッチ取得と描画

pub mod article;
pub mod error;
pub mod models;
pub mod permalink;
pub mod renderer;
pub mod service;
pub mod template;

pub use article::{Article, choose_article};
pub use error::PitchError;
pub use models::{GamePitch, Pitch, PitchOutcome};
pub use permalink::{Permalink, is_permalink_path};
pub use renderer::{PitchRenderer, RenderOptions, Rendered, error_text, render_response};
pub use service::{GameDataService, HttpGameService};
pub use template::{fill_placeholders, render_pitch};
