//! Narrative-script interpreter.
//!
//! A [`Novel`] is a graph of scenes, each a chain of pages. Scenes are parsed
//! from line-oriented scripts, checked with [`Novel::validate`], and read
//! page by page through an [`Engine`].

mod builder;
mod engine;
mod error;
pub mod lexer;
mod manifest;
mod novel;
pub mod validate;

pub use builder::{page_id, BlankLines, ParseOptions, SceneBuilder};
pub use engine::Engine;
pub use error::{NovelError, NovelResult};
pub use lexer::{tokenize, Token, TokenKind};
pub use manifest::{load_novel, ManifestError, SceneEntry, SceneSource, StoryManifest};
pub use novel::{Novel, Page, Scene, SimpleScene, TextPage};
