use crate::config::LanguageConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub name: String,
    pub extensions: Vec<String>,
    /// Explicit file patterns; when non-empty they replace the
    /// extension-derived ones.
    pub patterns: Vec<String>,
}

impl Language {
    #[must_use]
    pub fn new(name: &str, extensions: Vec<&str>) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.into_iter().map(String::from).collect(),
            patterns: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_patterns(mut self, patterns: Vec<String>) -> Self {
        self.patterns = patterns;
        self
    }

    /// Patterns identifying files of this language.
    #[must_use]
    pub fn file_patterns(&self) -> Vec<String> {
        if self.patterns.is_empty() {
            self.extensions
                .iter()
                .map(|ext| format!("**/*.{}", ext.trim_start_matches('.')))
                .collect()
        } else {
            self.patterns.clone()
        }
    }
}

#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
}

impl LanguageRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            languages: Vec::new(),
        }
    }

    /// Register a language, replacing any previous one with the same name.
    pub fn register(&mut self, language: Language) {
        if let Some(existing) = self.languages.iter_mut().find(|l| l.name == language.name) {
            *existing = language;
        } else {
            self.languages.push(language);
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Language> {
        self.languages.iter().find(|l| l.name == name)
    }

    #[must_use]
    pub fn all(&self) -> &[Language] {
        &self.languages
    }

    /// Builtin languages overlaid with configured definitions.
    #[must_use]
    pub fn with_custom_languages(custom: &[LanguageConfig]) -> Self {
        let mut registry = Self::default();

        for config in custom {
            let language = Language {
                name: config.name.clone(),
                extensions: config.extensions.clone(),
                patterns: config.patterns.clone(),
            };
            registry.register(language);
        }

        registry
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        let mut registry = Self::new();

        registry.register(Language::new("rust", vec!["rs"]));
        registry.register(Language::new("go", vec!["go"]));
        registry.register(Language::new("py", vec!["py", "pyi"]));
        registry.register(Language::new("java", vec!["java", "jav"]));
        registry.register(Language::new("js", vec!["js", "mjs", "cjs", "jsx"]));
        registry.register(Language::new("ts", vec!["ts", "mts", "cts", "tsx"]));
        registry.register(Language::new("c", vec!["c", "h"]));
        registry.register(Language::new("cpp", vec!["cpp", "hpp", "cc", "cxx", "hxx"]));
        registry.register(Language::new("kotlin", vec!["kt", "kts"]));
        registry.register(Language::new("scala", vec!["scala"]));
        registry.register(Language::new("xml", vec!["xml", "xsd", "xsl"]));

        registry
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
