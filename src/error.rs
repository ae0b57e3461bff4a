use miette::Diagnostic;
use thiserror::Error;

pub type NovelResult<T> = Result<T, NovelError>;

/// Failures raised while building or checking a story graph.
#[derive(Debug, Error, Diagnostic)]
pub enum NovelError {
    #[error("scene '{scene}' has no pages")]
    #[diagnostic(
        code("novel.empty_scene"),
        help("every scene script needs at least one line of text")
    )]
    EmptyScene { scene: String },
    #[error("first scene '{scene}' is not defined")]
    #[diagnostic(code("novel.undefined_first_scene"))]
    UndefinedFirstScene { scene: String },
    #[error("scene '{scene}' continues to undefined scene '{next}'")]
    #[diagnostic(code("novel.undefined_next_scene"))]
    UndefinedNextScene { scene: String, next: String },
    #[error("scene '{scene}' starts at undefined page '{page}'")]
    #[diagnostic(code("novel.undefined_first_page"))]
    UndefinedFirstPage { scene: String, page: String },
    #[error("page '{page}' in scene '{scene}' continues to undefined page '{next}'")]
    #[diagnostic(code("novel.undefined_next_page"))]
    UndefinedNextPage {
        scene: String,
        page: String,
        next: String,
    },
    #[error("failed to read scene script: {0}")]
    #[diagnostic(code("novel.io"))]
    Io(#[from] std::io::Error),
}
