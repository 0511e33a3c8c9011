use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Per-project config file name, looked up in the source directory.
pub const PROJECT_CONFIG_FILE: &str = "md2h.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output directory name, created under the source directory.
    pub output_dir: String,
    /// Directory names left out of the scan and the navigation tree.
    pub excluded_dirs: Vec<String>,
    /// Markdown file names never converted.
    pub skip_files: Vec<String>,
    /// Glob patterns, relative to the source directory, of images to stage.
    pub image_patterns: Vec<String>,
    /// Grammar name or alias used for every code fence.
    pub code_language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: "ZOut".to_string(),
            excluded_dirs: [".git", "Content", "Res", "Img", "ZOut"]
                .map(String::from)
                .to_vec(),
            skip_files: vec!["Readme.md".to_string()],
            image_patterns: vec!["**/*.png".to_string()],
            code_language: "csharp".to_string(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    /// Project file in `source_dir`, then the user config, then defaults.
    pub fn load(source_dir: &Path) -> Result<Self, ConfigError> {
        if let Some(config) = Self::load_from_path(Self::project_path(source_dir))? {
            return Ok(config);
        }
        Ok(Self::load_from_path(Self::config_path())?.unwrap_or_default())
    }

    /// An explicit config path must exist; otherwise falls back to [`Config::load`].
    pub fn resolve(explicit: Option<&Path>, source_dir: &Path) -> Result<Self, ConfigError> {
        let Some(path) = explicit else {
            return Self::load(source_dir);
        };
        let expanded = Self::expand_path(path).unwrap_or_else(|| path.to_path_buf());
        Self::load_from_path(&expanded)?.ok_or_else(|| ConfigError::ConfigReadError {
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
            config_path: expanded,
        })
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// Writes to the user config path.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    /// Project config location inside `source_dir`.
    pub fn project_path(source_dir: &Path) -> PathBuf {
        source_dir.join(PROJECT_CONFIG_FILE)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/md2h");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/md2h/config.toml"));
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.output_dir, "ZOut");
        assert_eq!(config.skip_files, vec!["Readme.md"]);
        assert_eq!(config.image_patterns, vec!["**/*.png"]);
        assert_eq!(config.code_language, "csharp");
        assert!(config.excluded_dirs.contains(&".git".to_string()));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str(r#"code_language = "ts""#).unwrap();

        assert_eq!(config.code_language, "ts");
        assert_eq!(config.output_dir, "ZOut");
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            output_dir: "site".to_string(),
            ..Config::default()
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("MD2H_TEST_VAR", "/test/env/path");
        }

        let expanded = Config::expand_path(Path::new("$MD2H_TEST_VAR/md2h.toml"));

        assert_eq!(expanded, Some(PathBuf::from("/test/env/path/md2h.toml")));

        unsafe {
            env::remove_var("MD2H_TEST_VAR");
        }
    }

    #[test]
    fn test_expand_path_with_relative_path() {
        let path = PathBuf::from("relative/path");
        assert_eq!(Config::expand_path(&path), Some(path));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("md2h.toml");
        std::fs::write(&config_file, "output_dir = [").unwrap();

        let result = Config::load_from_path(&config_file);

        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_project_file_wins() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(PROJECT_CONFIG_FILE),
            "output_dir = \"public\"\n",
        )
        .unwrap();

        let config = Config::load(temp_dir.path()).unwrap();

        assert_eq!(config.output_dir, "public");
    }

    #[test]
    fn test_explicit_missing_path_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.toml");

        let result = Config::resolve(Some(&missing), temp_dir.path());

        assert!(matches!(result, Err(ConfigError::ConfigReadError { .. })));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/config.toml");
        let test_config = Config {
            code_language: "javascript".to_string(),
            ..Config::default()
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }
}
