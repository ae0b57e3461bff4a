//! Read-through cursor over a novel.

use tracing::trace;

use crate::error::{NovelError, NovelResult};
use crate::novel::{Novel, Page, Scene};

/// Tracks the current scene and page of one read-through.
///
/// The novel is only borrowed, so any number of engines can read the same
/// novel independently.
#[derive(Clone, Debug)]
pub struct Engine<'a> {
    novel: &'a Novel,
    scene: &'a Scene,
    page_key: &'a str,
    page: &'a Page,
}

impl<'a> Engine<'a> {
    /// Positions a new engine on the first page of the first scene.
    ///
    /// Run [`Novel::validate`] beforehand; links that fail to resolve later in
    /// the read-through surface as errors from [`Engine::advance`].
    pub fn new(novel: &'a Novel) -> NovelResult<Self> {
        let scene =
            novel
                .scene(&novel.first_scene)
                .ok_or_else(|| NovelError::UndefinedFirstScene {
                    scene: novel.first_scene.clone(),
                })?;
        let page = first_page_of(scene)?;
        Ok(Self {
            novel,
            scene,
            page_key: scene.first_page(),
            page,
        })
    }

    /// Returns the name of the novel being read.
    pub fn name(&self) -> &'a str {
        &self.novel.name
    }

    pub fn current_page(&self) -> &'a Page {
        self.page
    }

    pub fn current_scene(&self) -> &'a Scene {
        self.scene
    }

    pub fn scene_id(&self) -> &'a str {
        self.scene.id()
    }

    /// Key of the current page within its scene.
    pub fn page_id(&self) -> &'a str {
        self.page_key
    }

    /// True when neither the page nor the scene has a successor.
    pub fn at_ending(&self) -> bool {
        self.page.next_page().is_none() && self.scene.next_scene().is_none()
    }

    /// Moves to the next page, or to the first page of the next scene.
    ///
    /// # Panics
    ///
    /// Panics when called at an ending. Check [`Engine::at_ending`] first.
    pub fn advance(&mut self) -> NovelResult<()> {
        assert!(
            !self.at_ending(),
            "advance called at an ending (scene '{}', page '{}')",
            self.scene.id(),
            self.page_key
        );
        if let Some(next) = self.page.next_page() {
            self.page = self
                .scene
                .page(next)
                .ok_or_else(|| NovelError::UndefinedNextPage {
                    scene: self.scene.id().to_string(),
                    page: self.page_key.to_string(),
                    next: next.to_string(),
                })?;
            self.page_key = next;
        } else if let Some(next) = self.scene.next_scene() {
            let scene = self
                .novel
                .scene(next)
                .ok_or_else(|| NovelError::UndefinedNextScene {
                    scene: self.scene.id().to_string(),
                    next: next.to_string(),
                })?;
            self.page = first_page_of(scene)?;
            self.page_key = scene.first_page();
            self.scene = scene;
        }
        trace!(scene = self.scene.id(), page = self.page_key, "advanced");
        Ok(())
    }
}

fn first_page_of(scene: &Scene) -> NovelResult<&Page> {
    scene
        .page(scene.first_page())
        .ok_or_else(|| NovelError::UndefinedFirstPage {
            scene: scene.id().to_string(),
            page: scene.first_page().to_string(),
        })
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
