use criterion::{black_box, criterion_group, criterion_main, Criterion};

use novel_engine::{Engine, Novel};

fn scene_script(lines: usize) -> String {
    (0..lines).map(|idx| format!("Line {idx}\n")).collect()
}

fn chained_novel(scenes: usize, lines: usize) -> Novel {
    let script = scene_script(lines);
    let mut novel = Novel::new("Bench", "scene-0");
    for idx in 0..scenes {
        let next = (idx + 1 < scenes).then(|| format!("scene-{}", idx + 1));
        novel
            .parse_scene_str(&format!("scene-{idx}"), next.as_deref(), &script)
            .expect("parse scene");
    }
    novel
}

fn bench_parse_scene(c: &mut Criterion) {
    let script = scene_script(1_000);
    c.bench_function("parse_scene_1000_lines", |b| {
        b.iter(|| {
            let mut novel = Novel::new("Bench", "s");
            novel
                .parse_scene_str("s", None, black_box(&script))
                .expect("parse scene");
            novel
        })
    });
}

fn bench_validate(c: &mut Criterion) {
    let novel = chained_novel(50, 100);
    c.bench_function("validate_50x100", |b| {
        b.iter(|| black_box(&novel).validate().expect("valid"))
    });
}

fn bench_read_through(c: &mut Criterion) {
    let novel = chained_novel(50, 100);
    c.bench_function("read_through_50x100", |b| {
        b.iter(|| {
            let mut engine = Engine::new(&novel).expect("engine");
            let mut pages = 0usize;
            while !engine.at_ending() {
                engine.advance().expect("advance");
                pages += 1;
            }
            black_box(pages)
        })
    });
}

criterion_group!(benches, bench_parse_scene, bench_validate, bench_read_through);
criterion_main!(benches);
