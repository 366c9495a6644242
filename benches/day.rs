// benches/day.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use boxscore::{
    RawBoxscoreBundle, RawTable,
    aggregate_day, aggregate_day_with,
    config::options::ParseOptions,
};

fn strings(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

/// A full-size synthetic game: nine starters plus a pinch hitter a side.
fn sample_game(n: usize) -> RawBoxscoreBundle {
    let hitters = [
        "B. Nimmo CF", "S. Marte RF", "F. Lindor SS", "P. Alonso 1B", "J. McNeil 2B",
        "M. Vientos DH", "B. Baty 3B", "T. Nido C", "M. Canha LF", "a- D. Vogelbach PH",
    ];
    let batting = RawTable::new(
        strings(&["HITTERS", "AB", "R", "H", "RBI", "BB", "SO", "HR", "AVG"]),
        hitters.iter()
            .map(|&h| strings(&[h, "4", "1", "1", "0", "1", "1", "0", ".260"]))
            .collect(),
    );
    let pitching = RawTable::new(
        strings(&["PITCHERS", "IP", "H", "R", "ER", "BB", "SO", "HR", "ERA"]),
        vec![
            strings(&["M. Scherzer (W, 2-1)", "6.2", "5", "2", "2", "1", "9", "1", "3.10"]),
            strings(&["A. Ottavino", "1.1", "1", "0", "0", "0", "2", "0", "2.00"]),
            strings(&["E. Diaz (S, 4)", "1.0", "0", "0", "0", "0", "2", "0", "0.00"]),
        ],
    );
    RawBoxscoreBundle {
        game_id: format!("MLB_20230403_T{n}A@T{n}H"),
        tables: vec![batting.clone(), batting, pitching.clone(), pitching],
        sb_info: vec![
            "BASERUNNING SB: F. Lindor 2 (5, 2nd base off X), B. Baty (1, 3rd base off Y)".into(),
            "BASERUNNING SB: J. McNeil (3, 2nd base off Z)".into(),
        ],
        sb_headers: Vec::new(),
        players: Vec::new(),
    }
}

fn bench_day(c: &mut Criterion) {
    let day: Vec<RawBoxscoreBundle> = (0..15).map(sample_game).collect();

    c.bench_function("day_sequential", |b| {
        b.iter(|| {
            let out = aggregate_day(black_box(&day));
            black_box(out.batters.len())
        })
    });

    c.bench_function("day_workers_4", |b| {
        let opts = ParseOptions { workers: 4 };
        b.iter(|| {
            let out = aggregate_day_with(black_box(&day), &opts, None);
            black_box(out.batters.len())
        })
    });
}

criterion_group!(benches, bench_day);
criterion_main!(benches);
