use std::fs::File;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::builder::{ParseOptions, SceneBuilder};
use crate::error::NovelError;
use crate::novel::Novel;

/// TOML description of a novel: its name, first scene, and scene scripts.
///
/// ```toml
/// name = "Test Novel"
/// first_scene = "first-scene"
///
/// [parse]
/// blank_lines = "skip"
///
/// [[scenes]]
/// id = "first-scene"
/// next = "second-scene"
/// script = "first-scene.txt"
///
/// [[scenes]]
/// id = "second-scene"
/// text = "This is the only page of the second scene.\n"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoryManifest {
    pub name: String,
    pub first_scene: String,
    #[serde(default)]
    pub parse: ParseOptions,
    #[serde(default)]
    pub scenes: Vec<SceneEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SceneEntry {
    pub id: String,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(flatten)]
    pub source: SceneSource,
}

/// Where a scene's script comes from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SceneSource {
    /// Path relative to the manifest's directory.
    Script(PathBuf),
    /// Inline script text.
    Text(String),
}

#[derive(Debug, Error, Diagnostic)]
pub enum ManifestError {
    #[error("manifest file not found at {0}")]
    #[diagnostic(
        code(manifest::not_found),
        help("pass the path of a story manifest such as 'story.toml'")
    )]
    NotFound(PathBuf),

    #[error("failed to parse manifest: {0}")]
    #[diagnostic(code(manifest::parse_error))]
    ParseError(#[from] toml::de::Error),

    #[error("failed to open script for scene '{scene}' at {path}")]
    #[diagnostic(code(manifest::script_missing))]
    Script {
        scene: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Novel(#[from] NovelError),

    #[error("io error: {0}")]
    #[diagnostic(code(manifest::io_error))]
    IoError(#[from] std::io::Error),
}

impl StoryManifest {
    /// Loads a manifest from a file path.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        if !path.exists() {
            return Err(ManifestError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ManifestError> {
        Ok(toml::from_str(content)?)
    }

    /// Parses every scene into a new novel. Script paths resolve against `base_dir`.
    ///
    /// The result is not validated.
    pub fn build_novel(&self, base_dir: &Path) -> Result<Novel, ManifestError> {
        let builder = SceneBuilder::new(self.parse);
        let mut novel = Novel::new(self.name.as_str(), self.first_scene.as_str());
        for entry in &self.scenes {
            let next = entry.next.as_deref();
            match &entry.source {
                SceneSource::Script(relative) => {
                    let path = base_dir.join(relative);
                    let file = File::open(&path).map_err(|source| ManifestError::Script {
                        scene: entry.id.clone(),
                        path: path.clone(),
                        source,
                    })?;
                    novel.parse_scene_with(&builder, &entry.id, next, file)?;
                }
                SceneSource::Text(text) => {
                    novel.parse_scene_with(&builder, &entry.id, next, text.as_bytes())?;
                }
            }
        }
        Ok(novel)
    }
}

/// Loads the manifest at `path` and builds its novel.
pub fn load_novel(path: &Path) -> Result<Novel, ManifestError> {
    let manifest = StoryManifest::load(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    manifest.build_novel(base_dir)
}
