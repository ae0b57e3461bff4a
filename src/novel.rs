//! Story graph: a novel owns its scenes, each scene owns its pages.
//!
//! Links between scenes and between pages are identifiers resolved through the
//! owning map, never direct references. The logical graph may cycle.

use std::collections::BTreeMap;
use std::io::{BufReader, Read};

use tracing::debug;

use crate::builder::SceneBuilder;
use crate::error::NovelResult;
use crate::lexer::tokenize;
use crate::validate;

pub(crate) fn non_empty(id: Option<&str>) -> Option<String> {
    id.filter(|id| !id.is_empty()).map(str::to_string)
}

/// One displayable unit of a scene.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page {
    Text(TextPage),
}

/// A page that shows a literal string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextPage {
    pub id: String,
    pub text: String,
    pub next: Option<String>,
}

impl Page {
    /// Builds a text page. An empty `next` marks the last page of its scene.
    pub fn text(id: impl Into<String>, text: impl Into<String>, next: Option<&str>) -> Self {
        Page::Text(TextPage {
            id: id.into(),
            text: text.into(),
            next: non_empty(next),
        })
    }

    pub fn id(&self) -> &str {
        match self {
            Page::Text(page) => &page.id,
        }
    }

    pub fn text_content(&self) -> &str {
        match self {
            Page::Text(page) => &page.text,
        }
    }

    pub fn next_page(&self) -> Option<&str> {
        match self {
            Page::Text(page) => page.next.as_deref(),
        }
    }

    pub fn set_next_page(&mut self, next: Option<&str>) {
        match self {
            Page::Text(page) => page.next = non_empty(next),
        }
    }
}

/// A named, ordered run of pages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scene {
    Simple(SimpleScene),
}

/// A scene backed by plain data with no computed behavior.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimpleScene {
    pub id: String,
    pub first_page: String,
    pub pages: BTreeMap<String, Page>,
    pub next: Option<String>,
}

impl Scene {
    /// Builds a data-backed scene. An empty `next` ends the story when reached.
    pub fn simple(
        id: impl Into<String>,
        first_page: impl Into<String>,
        pages: BTreeMap<String, Page>,
        next: Option<&str>,
    ) -> Self {
        Scene::Simple(SimpleScene {
            id: id.into(),
            first_page: first_page.into(),
            pages,
            next: non_empty(next),
        })
    }

    pub fn id(&self) -> &str {
        match self {
            Scene::Simple(scene) => &scene.id,
        }
    }

    pub fn first_page(&self) -> &str {
        match self {
            Scene::Simple(scene) => &scene.first_page,
        }
    }

    pub fn page(&self, id: &str) -> Option<&Page> {
        match self {
            Scene::Simple(scene) => scene.pages.get(id),
        }
    }

    pub fn page_count(&self) -> usize {
        match self {
            Scene::Simple(scene) => scene.pages.len(),
        }
    }

    pub fn next_scene(&self) -> Option<&str> {
        match self {
            Scene::Simple(scene) => scene.next.as_deref(),
        }
    }

    pub fn page_mut(&mut self, id: &str) -> Option<&mut Page> {
        match self {
            Scene::Simple(scene) => scene.pages.get_mut(id),
        }
    }
}

/// The complete story definition.
///
/// A novel holds no read-through state; see [`crate::Engine`] for that.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Novel {
    pub name: String,
    pub first_scene: String,
    pub scenes: BTreeMap<String, Scene>,
}

impl Novel {
    /// Creates a novel with no scenes yet.
    pub fn new(name: impl Into<String>, first_scene: impl Into<String>) -> Self {
        Self::with_scenes(name, first_scene, BTreeMap::new())
    }

    /// Creates a novel from a prebuilt scene map.
    pub fn with_scenes(
        name: impl Into<String>,
        first_scene: impl Into<String>,
        scenes: BTreeMap<String, Scene>,
    ) -> Self {
        Self {
            name: name.into(),
            first_scene: first_scene.into(),
            scenes,
        }
    }

    pub fn scene(&self, id: &str) -> Option<&Scene> {
        self.scenes.get(id)
    }

    /// Inserts `scene` under its own id, replacing any scene with that id.
    pub fn insert_scene(&mut self, scene: Scene) -> Option<Scene> {
        debug!(
            scene = scene.id(),
            pages = scene.page_count(),
            "inserting scene"
        );
        self.scenes.insert(scene.id().to_string(), scene)
    }

    /// Parses a scene script with default options and inserts the result.
    pub fn parse_scene<R: Read>(
        &mut self,
        id: &str,
        next_scene: Option<&str>,
        reader: R,
    ) -> NovelResult<()> {
        self.parse_scene_with(&SceneBuilder::default(), id, next_scene, reader)
    }

    /// Parses a scene script with `builder` and inserts the result.
    ///
    /// On error the novel is left unchanged.
    pub fn parse_scene_with<R: Read>(
        &mut self,
        builder: &SceneBuilder,
        id: &str,
        next_scene: Option<&str>,
        reader: R,
    ) -> NovelResult<()> {
        let scene = builder.build(id, next_scene, tokenize(BufReader::new(reader)))?;
        self.insert_scene(scene);
        Ok(())
    }

    /// Parses a scene from an in-memory script.
    pub fn parse_scene_str(
        &mut self,
        id: &str,
        next_scene: Option<&str>,
        text: &str,
    ) -> NovelResult<()> {
        self.parse_scene(id, next_scene, text.as_bytes())
    }

    /// Checks referential integrity of the whole graph.
    pub fn validate(&self) -> NovelResult<()> {
        validate::validate(self)
    }
}

#[cfg(test)]
#[path = "tests/novel_tests.rs"]
mod tests;
