// Runtime configuration. The only knob is where the catalog lives.

use std::path::PathBuf;

/// Environment variable naming the storage file.
pub const STORAGE_ENV: &str = "BOOKSHELF_FILE";

/// Storage file used when `BOOKSHELF_FILE` is unset or blank, relative to
/// the working directory.
pub const DEFAULT_STORAGE_FILE: &str = "library.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub storage_path: PathBuf,
}

impl Config {
    /// Build a config from the `BOOKSHELF_FILE` environment variable,
    /// falling back to `library.json`.
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(STORAGE_ENV).ok())
    }

    fn from_value(value: Option<String>) -> Self {
        let storage_path = value
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_FILE));
        Config { storage_path }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_value(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_library_json() {
        assert_eq!(Config::default().storage_path, PathBuf::from("library.json"));
        assert_eq!(
            Config::from_value(Some("   ".into())).storage_path,
            PathBuf::from("library.json")
        );
    }

    #[test]
    fn uses_given_path() {
        let config = Config::from_value(Some("/tmp/books.json".into()));
        assert_eq!(config.storage_path, PathBuf::from("/tmp/books.json"));
    }
}
