mod loader;
mod model;
mod validation;

pub use loader::{
    CONFIG_FILE_NAME, ConfigLoader, FileConfigLoader, FileSystem, LoadedConfig, RealFileSystem,
};
pub use model::{
    CACHE_FILE_NAME, Config, DEFAULT_ENCODING, DEFAULT_WORK_DIR, LanguageConfig, ModuleConfig,
    ProjectConfig, split_patterns,
};
pub use validation::validate_config;
