use speech_rules::{CompoundStore, DynamicCstr, LoadSummary, load_rules_dir};
use std::fs;
use std::path::Path;

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

#[test]
fn loads_symbols_then_functions() {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempfile::tempdir().unwrap();
    write(
        &dir.path().join("symbols/math_symbols.json"),
        r#"[{"category":"Sm","key":"2B","mappings":{"default":{"short":"plus","default":"plus sign"}}},
            {"category":"Ll","key":"1D400","mappings":{"default":{"default":"bold cap A"}}}]"#,
    );
    write(
        &dir.path().join("functions/algebra.json"),
        r#"[{"category":"Functions","names":["sin","sine"],"mappings":{"default":{"default":"sine"}}}]"#,
    );
    write(&dir.path().join("functions/README.txt"), "not a rule file");

    let mut store = CompoundStore::new();
    let summary = load_rules_dir(&mut store, dir.path()).unwrap();
    assert_eq!(
        summary,
        LoadSummary {
            files: 2,
            descriptors: 3
        }
    );
    assert_eq!(store.len(), 4);

    let default = DynamicCstr::new("default", "default");
    assert_eq!(store.lookup_string("+", &default), "plus sign");
    assert_eq!(store.lookup_string("\u{1D400}", &default), "bold cap A");
    assert_eq!(store.lookup_string("sine", &default), "sine");
}

#[test]
fn later_files_win() {
    let dir = tempfile::tempdir().unwrap();
    write(
        &dir.path().join("functions/a.json"),
        r#"[{"names":["ln"],"mappings":{"default":{"short":"log"}}}]"#,
    );
    write(
        &dir.path().join("functions/b.json"),
        r#"[{"names":["ln"],"mappings":{"default":{"short":"natural log"}}}]"#,
    );

    let mut store = CompoundStore::new();
    load_rules_dir(&mut store, dir.path()).unwrap();
    assert_eq!(
        store.lookup_string("ln", &DynamicCstr::new("default", "short")),
        "natural log"
    );
}

#[test]
fn missing_subdirectories_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = CompoundStore::new();
    let summary = load_rules_dir(&mut store, dir.path()).unwrap();
    assert_eq!(summary, LoadSummary::default());
    assert!(store.is_empty());
}

#[test]
fn malformed_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("symbols/broken.json"), "[{\"key\": 43}]");

    let mut store = CompoundStore::new();
    let err = load_rules_dir(&mut store, dir.path()).unwrap_err();
    assert!(format!("{err:#}").contains("broken.json"));
}
