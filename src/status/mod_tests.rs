use std::fs;

use tempfile::TempDir;

use super::*;

#[test]
fn unknown_file_is_added() {
    let detection = HashStatusDetection::default();
    assert!(detection.is_empty());
    assert_eq!(detection.status("src/Foo.java", "abc"), InputFileStatus::Added);
}

#[test]
fn same_hash_is_same_and_different_hash_is_changed() {
    let previous = HashMap::from([("src/Foo.java".to_string(), "abc".to_string())]);
    let detection = HashStatusDetection::new(previous);

    assert_eq!(detection.status("src/Foo.java", "abc"), InputFileStatus::Same);
    assert_eq!(detection.status("src/Foo.java", "def"), InputFileStatus::Changed);
    assert_eq!(detection.status("src/Bar.java", "abc"), InputFileStatus::Added);
}

#[test]
fn snapshot_skips_records_without_hash() {
    let hashed = InputFile::new("src/Foo.java", "/p/src/Foo.java").with_hash("abc");
    let unhashed = InputFile::new("src/Bar.java", "/p/src/Bar.java");
    let detection = HashStatusDetection::from_snapshot([&hashed, &unhashed]);

    assert_eq!(detection.len(), 1);
    assert_eq!(detection.status("src/Foo.java", "abc"), InputFileStatus::Same);
    assert_eq!(detection.status("src/Bar.java", ""), InputFileStatus::Added);
}

#[test]
fn compute_file_hash_is_content_based() {
    let temp = TempDir::new().unwrap();
    let a = temp.path().join("a.txt");
    let b = temp.path().join("b.txt");
    fs::write(&a, "class Foo {}").unwrap();
    fs::write(&b, "class Foo {}").unwrap();

    let hash_a = compute_file_hash(&a).unwrap();
    assert_eq!(hash_a.len(), 64);
    assert_eq!(hash_a, compute_file_hash(&b).unwrap());

    fs::write(&b, "class Bar {}").unwrap();
    assert_ne!(hash_a, compute_file_hash(&b).unwrap());
}

#[test]
fn compute_file_hash_missing_file_is_error() {
    let temp = TempDir::new().unwrap();
    let err = compute_file_hash(&temp.path().join("gone.txt")).unwrap_err();
    assert!(matches!(err, IndexerError::FileRead { .. }));
}
