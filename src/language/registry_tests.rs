use super::*;

#[test]
fn registry_contains_builtin_languages() {
    let registry = LanguageRegistry::default();

    assert!(registry.get("rust").is_some());
    assert!(registry.get("java").is_some());
    assert!(registry.get("py").is_some());
    assert!(registry.get("cobol").is_none());
}

#[test]
fn file_patterns_derive_from_extensions() {
    let language = Language::new("java", vec!["java", ".jav"]);
    assert_eq!(language.file_patterns(), vec!["**/*.java", "**/*.jav"]);
}

#[test]
fn explicit_patterns_replace_extensions() {
    let language =
        Language::new("java", vec!["java"]).with_patterns(vec!["**/src/**/*.jsp".to_string()]);
    assert_eq!(language.file_patterns(), vec!["**/src/**/*.jsp"]);
}

#[test]
fn register_replaces_same_name() {
    let mut registry = LanguageRegistry::new();
    registry.register(Language::new("java", vec!["java"]));
    registry.register(Language::new("java", vec!["jav"]));

    assert_eq!(registry.all().len(), 1);
    assert_eq!(registry.get("java").unwrap().extensions, vec!["jav"]);
}

#[test]
fn custom_languages_overlay_builtins() {
    let custom = vec![
        LanguageConfig {
            name: "rust".to_string(),
            extensions: vec!["rs".to_string(), "rs.in".to_string()],
            patterns: Vec::new(),
        },
        LanguageConfig {
            name: "proto".to_string(),
            extensions: vec!["proto".to_string()],
            patterns: Vec::new(),
        },
    ];
    let registry = LanguageRegistry::with_custom_languages(&custom);
    let builtin_count = LanguageRegistry::default().all().len();

    assert_eq!(registry.all().len(), builtin_count + 1);
    assert_eq!(registry.get("rust").unwrap().extensions, vec!["rs", "rs.in"]);
    assert!(registry.get("proto").is_some());
}
