use articulate::model::{Draft, Field};
use articulate::store::backend::StorageBackend;
use articulate::store::fs_backend::FsBackend;
use articulate::store::{CardStore, CARDS_KEY};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

fn draft(word: &str, category: &str) -> Draft {
    let mut draft = Draft::new().with_category(category);
    for field in Field::ALL {
        draft.set(field, format!("{} {}", word, field));
    }
    draft
}

#[test]
fn test_missing_key_reads_as_none() {
    let (_dir, backend) = setup();
    assert_eq!(backend.read(CARDS_KEY).unwrap(), None);
}

#[test]
fn test_atomic_write_leaves_no_tmp_files() {
    let (dir, backend) = setup();

    backend.write(CARDS_KEY, "[]").unwrap();
    backend.write(CARDS_KEY, "[1]").unwrap();

    let expected_path = dir.path().join("articulateCards.json");
    assert_eq!(fs::read_to_string(&expected_path).unwrap(), "[1]");

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_creates_missing_root() {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().join("nested").join("data"));
    backend.write(CARDS_KEY, "[]").unwrap();
    assert!(backend.key_path(CARDS_KEY).exists());
}

#[test]
fn test_store_survives_reopen() {
    let (dir, backend) = setup();
    let mut store = CardStore::open(backend);
    let first = store.add(&draft("one", "person")).unwrap();
    let second = store.add(&draft("two", "random")).unwrap();
    store.remove(first.id);

    let reopened = CardStore::open(FsBackend::new(dir.path().to_path_buf()));
    assert_eq!(reopened.list(), &[second.clone()]);

    // New ids keep increasing past what was loaded.
    let mut reopened = reopened;
    let third = reopened.add(&draft("three", "world")).unwrap();
    assert!(third.id > second.id);
}

#[test]
fn test_record_uses_browser_field_names() {
    let (dir, backend) = setup();
    let mut store = CardStore::open(backend);
    store.add(&draft("one", "nature")).unwrap();

    let raw = fs::read_to_string(dir.path().join("articulateCards.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let card = &value[0];
    assert_eq!(card["spadeCategory"], "nature");
    assert_eq!(card["person"], "one person");
    assert!(card["id"].is_u64());
}

#[test]
fn test_corrupt_record_loads_empty() {
    let (dir, backend) = setup();
    fs::write(dir.path().join("articulateCards.json"), "{not json").unwrap();

    let store = CardStore::open(backend);
    assert_eq!(store.count(), 0);
}
