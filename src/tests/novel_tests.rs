use super::*;
use crate::error::NovelError;

#[test]
fn new_novel_starts_empty() {
    let novel = Novel::new("Test Novel", "first-scene");
    assert_eq!(novel.name, "Test Novel");
    assert_eq!(novel.first_scene, "first-scene");
    assert!(novel.scenes.is_empty());
}

#[test]
fn parse_scene_inserts_under_its_id() {
    let mut novel = Novel::new("n", "s1");
    novel.parse_scene_str("s1", Some("s2"), "one\ntwo\n").unwrap();

    let scene = novel.scene("s1").expect("scene inserted");
    assert_eq!(scene.id(), "s1");
    assert_eq!(scene.next_scene(), Some("s2"));
    assert_eq!(scene.page_count(), 2);
}

#[test]
fn parse_scene_replaces_existing_scene() {
    let mut novel = Novel::new("n", "s1");
    novel.parse_scene_str("s1", None, "old\n").unwrap();
    novel.parse_scene_str("s1", None, "new\nnewer\n").unwrap();

    assert_eq!(novel.scenes.len(), 1);
    let scene = novel.scene("s1").unwrap();
    assert_eq!(scene.page("page-0").map(Page::text_content), Some("new"));
    assert_eq!(scene.page_count(), 2);
}

#[test]
fn failed_parse_keeps_other_scenes() {
    let mut novel = Novel::new("n", "s1");
    novel.parse_scene_str("s1", None, "kept\n").unwrap();

    let err = novel.parse_scene_str("s2", None, "").unwrap_err();
    assert!(matches!(err, NovelError::EmptyScene { ref scene } if scene == "s2"));
    assert!(novel.scene("s1").is_some());
    assert!(novel.scene("s2").is_none());
}

#[test]
fn parse_scene_reads_any_reader() {
    let mut novel = Novel::new("n", "s1");
    let cursor = std::io::Cursor::new(b"from a reader\n".to_vec());
    novel.parse_scene("s1", None, cursor).unwrap();
    assert_eq!(
        novel
            .scene("s1")
            .and_then(|scene| scene.page("page-0"))
            .map(Page::text_content),
        Some("from a reader")
    );
}

#[test]
fn with_scenes_accepts_prebuilt_graph() {
    let mut pages = BTreeMap::new();
    pages.insert("intro".to_string(), Page::text("intro", "Hi", Some("outro")));
    pages.insert("outro".to_string(), Page::text("outro", "Bye", None));
    let mut scenes = BTreeMap::new();
    scenes.insert(
        "only".to_string(),
        Scene::simple("only", "intro", pages, None),
    );

    let novel = Novel::with_scenes("Handmade", "only", scenes);
    novel.validate().expect("prebuilt graph is valid");
}

#[test]
fn empty_next_page_means_last_page() {
    let page = Page::text("p", "t", Some(""));
    assert_eq!(page.next_page(), None);
}

#[test]
fn set_next_page_rewrites_link() {
    let mut page = Page::text("p", "t", None);
    page.set_next_page(Some("q"));
    assert_eq!(page.next_page(), Some("q"));
    page.set_next_page(Some(""));
    assert_eq!(page.next_page(), None);
}
