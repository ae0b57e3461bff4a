use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{NovelError, NovelResult};
use crate::lexer::{Token, TokenKind};
use crate::novel::{Page, Scene};

/// Handling of blank lines inside a scene script.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlankLines {
    /// A blank line becomes a page with empty text.
    #[default]
    Keep,
    /// Blank and whitespace-only lines produce no page.
    Skip,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub blank_lines: BlankLines,
}

/// Turns a token stream into a linked chain of pages.
#[derive(Clone, Debug, Default)]
pub struct SceneBuilder {
    options: ParseOptions,
}

/// Identifier of the page at `index` in source order.
pub fn page_id(index: usize) -> String {
    format!("page-{index}")
}

impl SceneBuilder {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Consumes `tokens` and builds scene `id`.
    ///
    /// Pages are named `page-0`, `page-1`, ... in source order and each links
    /// to its successor; the last page has no next page. Unrecognized tokens
    /// are skipped with a warning.
    pub fn build<I>(&self, id: &str, next_scene: Option<&str>, tokens: I) -> NovelResult<Scene>
    where
        I: IntoIterator<Item = NovelResult<Token>>,
    {
        let mut texts = Vec::new();
        for token in tokens {
            let token = token?;
            match token.kind {
                TokenKind::Line => {
                    let text = token.text();
                    if self.options.blank_lines == BlankLines::Skip && text.trim().is_empty() {
                        continue;
                    }
                    texts.push(text);
                }
                TokenKind::Unrecognized(_) => {
                    warn!(scene = id, kind = token.kind.label(), "unrecognized kind of token");
                }
            }
        }
        if texts.is_empty() {
            return Err(NovelError::EmptyScene {
                scene: id.to_string(),
            });
        }

        let count = texts.len();
        let pages: BTreeMap<String, Page> = texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| {
                let key = page_id(index);
                let next = (index + 1 < count).then(|| page_id(index + 1));
                let page = Page::text(key.clone(), text, next.as_deref());
                (key, page)
            })
            .collect();
        debug!(scene = id, pages = count, "built scene");
        Ok(Scene::simple(id, page_id(0), pages, next_scene))
    }
}

#[cfg(test)]
#[path = "tests/builder_tests.rs"]
mod tests;
