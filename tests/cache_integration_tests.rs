//! Integration tests for the `cache` command.

mod common;

use common::{MAVEN_CONFIG, TestFixture};
use predicates::prelude::*;

fn indexed_project() -> TestFixture {
    let fixture = TestFixture::maven_project();
    fixture.create_config(MAVEN_CONFIG);
    source_indexer!()
        .current_dir(fixture.path())
        .arg("index")
        .assert()
        .success();
    fixture
}

#[test]
fn list_prints_cached_records() {
    let fixture = indexed_project();

    source_indexer!()
        .current_dir(fixture.path())
        .args(["cache", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "core test added java src/test/java/FooTest.java",
        ));
}

#[test]
fn list_before_any_index_is_empty() {
    let fixture = TestFixture::maven_project();
    fixture.create_config(MAVEN_CONFIG);

    source_indexer!()
        .current_dir(fixture.path())
        .args(["cache", "list"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn clear_drops_module_records() {
    let fixture = indexed_project();

    source_indexer!()
        .current_dir(fixture.path())
        .args(["cache", "clear", "--module", "core"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Removed 3 cached files of module 'core'",
        ));

    source_indexer!()
        .current_dir(fixture.path())
        .args(["cache", "list", "--module", "core"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn corrupt_cache_is_error() {
    let fixture = indexed_project();
    fixture.create_file(".source-indexer/cache.json", "{ not json");

    source_indexer!()
        .current_dir(fixture.path())
        .args(["cache", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error:"));
}
