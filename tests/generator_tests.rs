use rand::rngs::StdRng;
use rand::SeedableRng;
use station_stats::aggregator::aggregate_reader;
use station_stats::generator::{generate, generate_file, STATIONS};
use station_stats::parser::parse_line;
use std::collections::HashSet;
use std::io::Cursor;

#[test]
fn test_generated_lines_parse_and_use_known_stations() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut buf = Vec::new();
    generate(&mut buf, &mut rng, 2_000).unwrap();

    let known: HashSet<&str> = STATIONS.iter().map(|(name, _)| *name).collect();
    let text = String::from_utf8(buf).unwrap();

    for line in text.lines() {
        let m = parse_line(line).unwrap();
        assert!(known.contains(m.key), "unknown station {}", m.key);
    }
}

#[test]
fn test_same_seed_same_output() {
    let run = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut buf = Vec::new();
        generate(&mut buf, &mut rng, 500).unwrap();
        buf
    };

    assert_eq!(run(99), run(99));
    assert_ne!(run(99), run(100));
}

#[test]
fn test_generated_file_aggregates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("measurements.txt");
    let mut rng = StdRng::seed_from_u64(5);

    let written = generate_file(&path, &mut rng, 10_000).unwrap();
    assert_eq!(written, 10_000);

    let content = std::fs::read_to_string(&path).unwrap();
    let table = aggregate_reader(Cursor::new(content)).unwrap();

    assert_eq!(table.observations(), 10_000);
    assert!(table.len() <= STATIONS.len());
}

#[test]
fn test_station_names_are_unique_and_delimiter_free() {
    let mut seen = HashSet::new();
    for (name, _) in STATIONS {
        assert!(!name.contains(';'));
        assert!(seen.insert(*name), "duplicate station {}", name);
    }
}
