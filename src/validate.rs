//! Referential-integrity checks over an assembled novel.
//!
//! Phases run in a fixed order: first scene, next-scene links, first pages,
//! then page chains. Within a phase scenes are visited in id order.

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::{NovelError, NovelResult};
use crate::novel::{Novel, Scene};

/// Fails with the first integrity violation found.
pub fn validate(novel: &Novel) -> NovelResult<()> {
    match issues(novel).next() {
        Some(err) => Err(err),
        None => {
            debug!(novel = %novel.name, scenes = novel.scenes.len(), "novel validated");
            Ok(())
        }
    }
}

/// Lazily yields every integrity violation, in the order `validate` checks them.
pub fn issues(novel: &Novel) -> impl Iterator<Item = NovelError> + '_ {
    first_scene_issue(novel)
        .into_iter()
        .chain(next_scene_issues(novel))
        .chain(first_page_issues(novel))
        .chain(novel.scenes.values().flat_map(page_chain_issues))
}

fn first_scene_issue(novel: &Novel) -> Option<NovelError> {
    (!novel.scenes.contains_key(&novel.first_scene)).then(|| NovelError::UndefinedFirstScene {
        scene: novel.first_scene.clone(),
    })
}

fn next_scene_issues(novel: &Novel) -> impl Iterator<Item = NovelError> + '_ {
    novel.scenes.values().filter_map(move |scene| {
        let next = scene.next_scene()?;
        (!novel.scenes.contains_key(next)).then(|| NovelError::UndefinedNextScene {
            scene: scene.id().to_string(),
            next: next.to_string(),
        })
    })
}

fn first_page_issues(novel: &Novel) -> impl Iterator<Item = NovelError> + '_ {
    novel.scenes.values().filter_map(|scene| {
        let first = scene.first_page();
        (first.is_empty() || scene.page(first).is_none()).then(|| {
            NovelError::UndefinedFirstPage {
                scene: scene.id().to_string(),
                page: first.to_string(),
            }
        })
    })
}

/// Walks the chain from the first page by map key. A revisited key ends the walk.
fn page_chain_issues(scene: &Scene) -> Option<NovelError> {
    let mut key = scene.first_page();
    let mut current = scene.page(key)?;
    let mut seen = BTreeSet::new();
    while seen.insert(key) {
        let next = current.next_page()?;
        match scene.page(next) {
            Some(page) => {
                key = next;
                current = page;
            }
            None => {
                return Some(NovelError::UndefinedNextPage {
                    scene: scene.id().to_string(),
                    page: key.to_string(),
                    next: next.to_string(),
                })
            }
        }
    }
    None
}

#[cfg(test)]
#[path = "tests/validate_tests.rs"]
mod tests;
