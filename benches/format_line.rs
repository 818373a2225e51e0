use criterion::{criterion_group, criterion_main, Criterion};
use rcfeed::{format_line, ChangeEvent, FeedConfig, SiteConfig};

fn format_line_bench(c: &mut Criterion) {
    let event = ChangeEvent::from_json(
        r#"{
            "type": "edit",
            "id": 987654,
            "title": "Lista de Pokémon",
            "comment": "/* Kanto */ sorted &amp; deduplicated",
            "user": "Bulbasaur",
            "bot": false,
            "minor": true,
            "patrolled": false,
            "length": { "old": 2000, "new": 1300 },
            "revision": { "old": 41, "new": 42 }
        }"#,
    )
    .unwrap();
    let feed = FeedConfig::default();
    let site = SiteConfig::new("https://wiki.example.org", "/w/index.php")
        .unwrap()
        .rc_patrol(true);

    c.benchmark_group("format_line")
        .bench_function("edit", |bencher| {
            bencher.iter(|| format_line(&event, &feed, &site))
        });
}

criterion_group!(benches, format_line_bench);
criterion_main!(benches);
