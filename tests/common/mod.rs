use novel_engine::{Engine, Novel};

/// Reads `novel` from the start, collecting `(scene, page, text)` for every page shown.
pub fn read_through(novel: &Novel, max_pages: usize) -> Vec<(String, String, String)> {
    let mut engine = Engine::new(novel).expect("create engine");
    let mut seen = Vec::new();
    for _ in 0..max_pages {
        seen.push((
            engine.scene_id().to_string(),
            engine.page_id().to_string(),
            engine.current_page().text_content().to_string(),
        ));
        if engine.at_ending() {
            break;
        }
        engine.advance().expect("advance");
    }
    seen
}
