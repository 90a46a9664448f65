use super::*;
use std::collections::BTreeSet;

#[test]
fn test_memory_storage_round_trip() {
    let storage = MemoryStorage::new();
    assert!(storage.read(StoreKey::Favs).unwrap().is_none());

    storage.write(StoreKey::Favs, "[\"seed_food_1\"]").unwrap();
    assert_eq!(
        storage.read(StoreKey::Favs).unwrap().as_deref(),
        Some("[\"seed_food_1\"]")
    );
}

#[test]
fn test_load_or_default_on_absent_key() {
    let storage = MemoryStorage::new();
    let favs: BTreeSet<String> = load_or_default(&storage, StoreKey::Favs);
    assert!(favs.is_empty());
}

#[test]
fn test_load_or_default_on_malformed_payload() {
    let storage = MemoryStorage::new();
    storage.preload(StoreKey::Favs, "not json {{{");

    let favs: BTreeSet<String> = load_or_default(&storage, StoreKey::Favs);
    assert!(favs.is_empty());
}

#[test]
fn test_save_then_load() {
    let storage = MemoryStorage::new();
    let mut favs = BTreeSet::new();
    favs.insert("seed_food_1".to_string());
    favs.insert("my_12".to_string());

    save(&storage, StoreKey::Favs, &favs).unwrap();
    let thawed: BTreeSet<String> = load_or_default(&storage, StoreKey::Favs);
    assert_eq!(thawed, favs);
}

#[test]
fn test_saved_payload_is_human_inspectable() {
    let storage = MemoryStorage::new();
    save(&storage, StoreKey::Shop, &vec!["bread", "milk"]).unwrap();

    let payload = storage.read(StoreKey::Shop).unwrap().unwrap();
    assert!(payload.contains('\n'), "pretty-printed JSON expected");
}

#[test]
fn test_file_storage_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::open(dir.path().join("state")).unwrap();

    assert!(storage.read(StoreKey::Units).unwrap().is_none());
    storage.write(StoreKey::Units, "\"imperial\"").unwrap();
    assert_eq!(
        storage.read(StoreKey::Units).unwrap().as_deref(),
        Some("\"imperial\"")
    );

    assert!(dir.path().join("state").join("units.json").is_file());
}

#[test]
fn test_file_storage_creates_root() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let storage = FileStorage::open(&nested).unwrap();
    assert!(nested.is_dir());
    assert_eq!(storage.root(), nested.as_path());
}

#[test]
fn test_store_key_file_names_are_distinct() {
    let names: BTreeSet<&str> = StoreKey::ALL.iter().map(|k| k.file_name()).collect();
    assert_eq!(names.len(), StoreKey::ALL.len());
}
