use std::fs;

use tempfile::TempDir;

use super::*;
use crate::input_file::{InputFileStatus, InputFileType};

fn record(temp: &TempDir, relative: &str) -> InputFile {
    InputFile::new(relative, temp.path().join(relative))
}

#[test]
fn test_cache_new_is_empty() {
    let cache = InputFileCache::new();

    assert_eq!(cache.version(), 1);
    assert!(cache.is_empty());
    assert_eq!(cache.all().count(), 0);
    assert_eq!(cache.by_module("struts").count(), 0);
}

#[test]
fn test_modules_are_isolated() {
    let temp = TempDir::new().unwrap();
    let mut cache = InputFileCache::new();
    cache.put("struts", record(&temp, "src/main/java/Foo.java"));
    cache.put("struts-core", record(&temp, "src/main/java/Bar.java"));

    assert_eq!(cache.by_module("struts").count(), 1);
    assert_eq!(cache.by_module("struts-core").count(), 1);
    assert_eq!(cache.all().count(), 2);
    for file in cache.all() {
        assert!(file.relative_path().starts_with("src/main/java/"));
    }

    assert_eq!(cache.remove_module("struts"), 1);
    assert_eq!(cache.by_module("struts").count(), 0);
    assert_eq!(cache.by_module("struts-core").count(), 1);
    assert_eq!(cache.all().count(), 1);
}

#[test]
fn test_put_overwrites_same_key() {
    let temp = TempDir::new().unwrap();
    let mut cache = InputFileCache::new();
    cache.put("struts", record(&temp, "src/Foo.java"));
    cache.put(
        "struts",
        record(&temp, "src/Foo.java")
            .with_type(InputFileType::Test)
            .with_status(InputFileStatus::Changed),
    );

    assert_eq!(cache.len(), 1);
    let stored = cache.get("struts", "src/Foo.java").unwrap();
    assert_eq!(stored.file_type(), InputFileType::Test);
    assert_eq!(stored.status(), InputFileStatus::Changed);
}

#[test]
fn test_same_path_in_two_modules_is_two_entries() {
    let temp = TempDir::new().unwrap();
    let mut cache = InputFileCache::new();
    cache.put("a", record(&temp, "pom.xml"));
    cache.put("b", record(&temp, "pom.xml"));

    assert_eq!(cache.len(), 2);
    assert_eq!(cache.module_keys().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn test_remove_single_entry() {
    let temp = TempDir::new().unwrap();
    let mut cache = InputFileCache::new();
    let foo = record(&temp, "src/Foo.java");
    cache.put("struts", foo.clone());
    cache.put("struts", record(&temp, "src/Bar.java"));

    assert!(cache.remove("struts", &foo).is_some());
    assert!(cache.remove("struts", &foo).is_none());
    assert!(cache.remove("other", &foo).is_none());
    assert_eq!(cache.by_module("struts").count(), 1);
}

#[test]
fn test_remove_unknown_module_is_noop() {
    let mut cache = InputFileCache::new();
    assert_eq!(cache.remove_module("missing"), 0);
}

#[test]
fn test_save_and_load() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("work").join("cache.json");
    let mut cache = InputFileCache::new();
    cache.put(
        "struts",
        record(&temp, "src/Foo.java")
            .with_language(Some("java".to_string()))
            .with_hash("abc"),
    );

    cache.save(&path).unwrap();
    let loaded = InputFileCache::load(&path).unwrap();

    let file = loaded.get("struts", "src/Foo.java").unwrap();
    assert_eq!(file.language(), Some("java"));
    assert_eq!(file.hash(), "abc");
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn test_load_or_default_without_file() {
    let temp = TempDir::new().unwrap();
    let cache = InputFileCache::load_or_default(&temp.path().join("cache.json")).unwrap();
    assert!(cache.is_empty());
}

#[test]
fn test_load_or_default_ignores_other_version() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("cache.json");
    fs::write(&path, r#"{"version": 99, "modules": {"m": {}}}"#).unwrap();

    let cache = InputFileCache::load_or_default(&path).unwrap();
    assert_eq!(cache.version(), 1);
    assert_eq!(cache.module_keys().count(), 0);
}

#[test]
fn test_load_invalid_json_is_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("cache.json");
    fs::write(&path, "not json").unwrap();

    assert!(matches!(
        InputFileCache::load_or_default(&path),
        Err(IndexerError::JsonSerialize(_))
    ));
}
