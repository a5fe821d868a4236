use tempfile::TempDir;

use super::*;
use crate::input_file::{InputFileStatus, InputFileType};

fn sample_fs() -> ModuleFileSystem {
    let mut fs = ModuleFileSystem::new("struts");
    fs.add(
        InputFile::new("src/main/java/Foo.java", "/p/src/main/java/Foo.java")
            .with_language(Some("java".to_string())),
    );
    fs.add(
        InputFile::new("src/test/java/FooTest.java", "/p/src/test/java/FooTest.java")
            .with_type(InputFileType::Test)
            .with_language(Some("java".to_string()))
            .with_status(InputFileStatus::Changed),
    );
    fs.add(InputFile::new("src/main/resources/app.conf", "/p/src/main/resources/app.conf"));
    fs.add(
        InputFile::new("build.rs", "/p/build.rs")
            .with_language(Some("rust".to_string()))
            .with_status(InputFileStatus::Same),
    );
    fs
}

#[test]
fn new_module_defaults() {
    let fs = ModuleFileSystem::new("struts");

    assert_eq!(fs.module_key(), "struts");
    assert_eq!(fs.base_dir(), None);
    assert_eq!(fs.work_dir(), None);
    assert_eq!(fs.encoding(), "UTF-8");
    assert!(fs.source_files().is_empty());
    assert!(fs.test_files().is_empty());
    assert!(!fs.is_aggregator());
    assert!(fs.is_empty());
}

#[test]
fn submodules_make_an_aggregator() {
    let fs = ModuleFileSystem::new("root").with_submodules(vec!["core".to_string()]);
    assert!(fs.is_aggregator());
    assert_eq!(fs.submodules(), ["core".to_string()]);
}

#[test]
fn existing_base_dir_is_canonicalized() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("core")).unwrap();
    let fs = ModuleFileSystem::new("core").with_base_dir(temp.path().join("core/../core"));

    let expected = dunce::canonicalize(temp.path().join("core")).unwrap();
    assert_eq!(fs.base_dir(), Some(expected.as_path()));
}

#[test]
fn missing_base_dir_is_kept_normalized() {
    let fs = ModuleFileSystem::new("core").with_base_dir("/does/not/./exist");
    assert_eq!(fs.base_dir(), Some(Path::new("/does/not/exist")));
}

#[test]
fn add_replaces_same_relative_path() {
    let mut fs = ModuleFileSystem::new("struts");
    fs.add(InputFile::new("Foo.java", "/p/Foo.java"));
    fs.add(InputFile::new("Foo.java", "/p/Foo.java").with_type(InputFileType::Test));

    assert_eq!(fs.len(), 1);
    assert_eq!(
        fs.input_file("Foo.java").unwrap().file_type(),
        InputFileType::Test
    );
}

#[test]
fn query_by_type() {
    let fs = sample_fs();
    let tests = fs.files(&FilePredicate::Type(InputFileType::Test));

    assert_eq!(tests.len(), 1);
    assert_eq!(tests[0].relative_path(), "src/test/java/FooTest.java");
}

#[test]
fn query_by_language() {
    let fs = sample_fs();
    assert_eq!(fs.files(&FilePredicate::has_language("java")).len(), 2);
    assert_eq!(fs.files(&FilePredicate::has_language("cobol")).len(), 0);
}

#[test]
fn query_by_status() {
    let fs = sample_fs();
    assert_eq!(fs.files(&FilePredicate::Status(InputFileStatus::Added)).len(), 2);
    assert_eq!(fs.files(&FilePredicate::Status(InputFileStatus::Same)).len(), 1);
}

#[test]
fn query_by_pattern() {
    let fs = sample_fs();
    let predicate = FilePredicate::matches_pattern("src/main/**").unwrap();
    assert_eq!(fs.files(&predicate).len(), 2);
}

#[test]
fn query_combinators() {
    let fs = sample_fs();
    let main_java = FilePredicate::And(vec![
        FilePredicate::Type(InputFileType::Main),
        FilePredicate::has_language("java"),
    ]);
    assert_eq!(fs.files(&main_java).len(), 1);

    let java_or_rust = FilePredicate::Or(vec![
        FilePredicate::has_language("java"),
        FilePredicate::has_language("rust"),
    ]);
    assert_eq!(fs.files(&java_or_rust).len(), 3);

    let unlabeled = FilePredicate::not(java_or_rust);
    let files = fs.files(&unlabeled);
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].language(), None);

    assert_eq!(fs.files(&FilePredicate::All).len(), 4);
}

#[test]
fn languages_are_distinct_and_sorted() {
    let fs = sample_fs();
    assert_eq!(fs.languages().into_iter().collect::<Vec<_>>(), vec!["java", "rust"]);
}

#[test]
fn clear_input_files_empties_the_view() {
    let mut fs = sample_fs();
    fs.clear_input_files();
    assert!(fs.is_empty());
    assert_eq!(fs.input_files().count(), 0);
}
