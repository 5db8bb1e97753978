//! Tests for pattern store recognition, training, listing and persistence

#[cfg(test)]
mod tests {
    use crate::grid_with;
    use sketchmem::io::configuration::GRID_SIDE;
    use sketchmem::{Grid, PatternStore, SketchError};
    use std::fs;

    fn horizontal() -> Grid {
        Grid::from_fn(GRID_SIDE, |row, _| row == 50)
    }

    fn vertical() -> Grid {
        Grid::from_fn(GRID_SIDE, |_, col| col == 50)
    }

    // Tests an empty store never recognizes anything
    // Verified by returning a default name
    #[test]
    fn test_empty_store_recognizes_nothing() {
        let store = PatternStore::new();

        assert!(store.is_empty());
        assert_eq!(store.recognize(&horizontal()), None);
        assert_eq!(store.recognize(&Grid::new(GRID_SIDE)), None);
    }

    // Tests training creates patterns lazily and counts examples
    // Verified by creating a new pattern on every call
    #[test]
    fn test_train_finds_or_creates() {
        let mut store = PatternStore::new();

        assert_eq!(store.train("line", &horizontal()).ok(), Some(1));
        assert_eq!(store.train("line", &horizontal()).ok(), Some(2));
        assert_eq!(store.train("bar", &vertical()).ok(), Some(1));

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("line").map(|p| p.example_count()), Some(2));
    }

    // Tests names are matched case-sensitively
    // Verified by comparing names case-insensitively
    #[test]
    fn test_names_are_case_sensitive() {
        let mut store = PatternStore::new();
        assert!(store.train("a", &horizontal()).is_ok());
        assert!(store.train("A", &horizontal()).is_ok());

        assert_eq!(store.len(), 2);
        assert!(store.get("a").is_some());
        assert!(store.get("b").is_none());
    }

    // Tests empty names are rejected without creating a pattern
    // Verified by removing the empty name check
    #[test]
    fn test_empty_name_rejected() {
        let mut store = PatternStore::new();

        let result = store.train("", &horizontal());
        assert!(matches!(
            result,
            Err(SketchError::InvalidParameter {
                parameter: "name",
                ..
            })
        ));
        assert!(store.is_empty());
    }

    // Tests distinct training sets are told apart
    // Verified by returning the last pattern scored
    #[test]
    fn test_recognize_distinguishes_patterns() {
        let mut store = PatternStore::new();
        assert!(store.train("horizontal", &horizontal()).is_ok());
        assert!(store.train("vertical", &vertical()).is_ok());

        assert_eq!(store.recognize(&horizontal()), Some("horizontal"));
        assert_eq!(store.recognize(&vertical()), Some("vertical"));
        assert_eq!(store.recognize(&Grid::new(GRID_SIDE)), None);
    }

    // Tests queries without overlap are unknown
    // Verified by accepting a zero score as a match
    #[test]
    fn test_zero_score_is_no_match() {
        let mut store = PatternStore::new();
        assert!(store.train("corner", &grid_with(GRID_SIDE, &[(0, 0)])).is_ok());

        assert_eq!(store.recognize(&grid_with(GRID_SIDE, &[(99, 99)])), None);
    }

    // Tests ties go to the pattern inserted first
    // Verified by using >= when comparing scores
    #[test]
    fn test_ties_prefer_first_inserted() {
        let mut store = PatternStore::new();
        assert!(store.train("zeta", &horizontal()).is_ok());
        assert!(store.train("alpha", &horizontal()).is_ok());

        assert_eq!(store.recognize(&horizontal()), Some("zeta"));
    }

    // Tests best_match reports the winning score
    // Verified by returning the last score seen
    #[test]
    fn test_best_match_score() {
        let mut store = PatternStore::new();
        assert!(store.train("horizontal", &horizontal()).is_ok());
        assert!(store.train("vertical", &vertical()).is_ok());

        let Some((name, score)) = store.best_match(&horizontal()) else {
            unreachable!("horizontal should match");
        };
        assert_eq!(name, "horizontal");
        assert!((score - GRID_SIDE as f64).abs() < f64::EPSILON);
    }

    // Tests names are listed in lexical order without mutating the store
    // Verified by returning insertion order
    #[test]
    fn test_names_sorted() {
        let mut store = PatternStore::new();
        for name in ["star", "Circle", "arrow", "box"] {
            assert!(store.train(name, &horizontal()).is_ok());
        }
        let before = store.clone();

        assert_eq!(store.names(), vec!["Circle", "arrow", "box", "star"]);
        assert_eq!(store, before);
    }

    // Tests save then load reproduces names, counts and weights exactly
    // Verified by rounding weights during encoding
    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("memory.json");

        let mut store = PatternStore::new();
        assert!(store.train("line", &horizontal()).is_ok());
        assert!(store.train("line", &vertical()).is_ok());
        assert!(store.train("line", &vertical()).is_ok());
        assert!(store.train("dot", &grid_with(GRID_SIDE, &[(3, 4)])).is_ok());

        assert!(store.save(&path).is_ok());
        let loaded = PatternStore::load(&path);

        assert_eq!(loaded, store);
        assert_eq!(loaded.names(), vec!["dot", "line"]);
        assert_eq!(loaded.get("line").map(|p| p.example_count()), Some(3));
    }

    // Tests saving overwrites previous content
    // Verified by appending to the memory file
    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("memory.json");

        let mut store = PatternStore::new();
        assert!(store.train("first", &horizontal()).is_ok());
        assert!(store.save(&path).is_ok());

        let mut replacement = PatternStore::new();
        assert!(replacement.train("second", &vertical()).is_ok());
        assert!(replacement.save(&path).is_ok());

        assert_eq!(PatternStore::load(&path).names(), vec!["second"]);
    }

    // Tests a missing memory file loads as an empty store
    // Verified by propagating the missing file error
    #[test]
    fn test_load_missing_is_empty() {
        let dir = tempfile::tempdir().unwrap();

        assert!(PatternStore::load(dir.path().join("absent.json")).is_empty());
    }

    // Tests empty and corrupt memory files load as an empty store
    // Verified by keeping records decoded before the corruption
    #[test]
    fn test_load_corrupt_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let empty = dir.path().join("empty.json");
        let garbage = dir.path().join("garbage.json");
        assert!(fs::write(&empty, "").is_ok());
        assert!(fs::write(&garbage, "[{\"name\": \"x\", \"example_count\": 1").is_ok());

        assert!(PatternStore::load(&empty).is_empty());
        assert!(PatternStore::load(&garbage).is_empty());
    }

    // Tests the bootstrap memory seeds only a missing memory file
    // Verified by always preferring the bootstrap file
    #[test]
    fn test_load_with_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let seed_path = dir.path().join("seed.json");
        let memory_path = dir.path().join("memory.json");

        let mut seed = PatternStore::new();
        assert!(seed.train("seeded", &horizontal()).is_ok());
        assert!(seed.save(&seed_path).is_ok());

        let first = PatternStore::load_with_fallback(&memory_path, Some(seed_path.as_path()));
        assert_eq!(first.names(), vec!["seeded"]);

        let mut own = PatternStore::new();
        assert!(own.train("own", &vertical()).is_ok());
        assert!(own.save(&memory_path).is_ok());

        let second = PatternStore::load_with_fallback(&memory_path, Some(seed_path.as_path()));
        assert_eq!(second.names(), vec!["own"]);

        assert!(PatternStore::load_with_fallback(dir.path().join("none.json"), None).is_empty());
    }
}
