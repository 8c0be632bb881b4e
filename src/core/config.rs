//! # Configuration
//!
//! Two layers live in the config directory (`config/` by default):
//!
//! - **Lists**: `numbers`, `persons`, `tenses`, `verbs`, one entry per line.
//!   Each is seeded from `<name>.default` on first run and then belongs to the
//!   user.
//! - **Settings**: optional `hacer.toml`, resolved with the override hierarchy
//!   defaults → settings file → env vars → CLI flags.

use log::{debug, info};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Settings Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub source: SourceSettings,
    #[serde(default)]
    pub cache: CacheSettings,
}

#[derive(Debug, Default, Deserialize)]
pub struct SourceSettings {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CacheSettings {
    pub data_dir: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CONFIG_DIR: &str = "config";
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_BASE_URL: &str = "https://www.spanishdict.com/conjugate";
pub const SETTINGS_FILE: &str = "hacer.toml";
pub const CACHE_FILE: &str = "conjugations";

/// The user-editable list files, in load order.
pub const LIST_FILES: [&str; 4] = ["numbers", "persons", "tenses", "verbs"];

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub data_dir: PathBuf,
}

impl ResolvedConfig {
    pub fn cache_path(&self) -> PathBuf {
        self.data_dir.join(CACHE_FILE)
    }
}

/// Raw list contents, exactly as written in the config files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigLists {
    pub numbers: Vec<String>,
    pub persons: Vec<String>,
    pub tenses: Vec<String>,
    pub verbs: Vec<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    /// A list file is absent and so is the `.default` it would be seeded from.
    MissingDefault(PathBuf),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "config I/O error on {}: {e}", path.display()),
            ConfigError::MissingDefault(path) => {
                write!(f, "missing default config file: {}", path.display())
            }
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Lists
// ============================================================================

/// Seed every missing list file from its `.default` sibling.
///
/// Returns the names of the files that were created.
pub fn initialize(config_dir: &Path) -> Result<Vec<&'static str>, ConfigError> {
    let mut created = Vec::new();
    for name in LIST_FILES {
        let target = config_dir.join(name);
        if target.exists() {
            continue;
        }
        let default = config_dir.join(format!("{name}.default"));
        if !default.exists() {
            return Err(ConfigError::MissingDefault(default));
        }
        println!("creating {name} file from default...");
        info!("Seeding {} from {}", target.display(), default.display());
        fs::copy(&default, &target).map_err(|e| ConfigError::Io(target.clone(), e))?;
        created.push(name);
    }
    Ok(created)
}

/// Read all four list files.
pub fn load_lists(config_dir: &Path) -> Result<ConfigLists, ConfigError> {
    let read = |name: &str| -> Result<Vec<String>, ConfigError> {
        let path = config_dir.join(name);
        let contents = fs::read_to_string(&path).map_err(|e| ConfigError::Io(path, e))?;
        Ok(contents.lines().map(str::to_string).collect())
    };

    let lists = ConfigLists {
        numbers: read("numbers")?,
        persons: read("persons")?,
        tenses: read("tenses")?,
        verbs: read("verbs")?,
    };
    debug!(
        "Loaded lists: {} numbers, {} persons, {} tenses, {} verbs",
        lists.numbers.len(),
        lists.persons.len(),
        lists.tenses.len(),
        lists.verbs.len()
    );
    Ok(lists)
}

// ============================================================================
// Settings
// ============================================================================

/// Load `hacer.toml` from the config directory.
///
/// A missing file yields `Settings::default()`. A malformed one is an error.
pub fn load_settings(config_dir: &Path) -> Result<Settings, ConfigError> {
    let path = config_dir.join(SETTINGS_FILE);
    if !path.exists() {
        debug!("No settings file at {}, using defaults", path.display());
        return Ok(Settings::default());
    }

    let contents = fs::read_to_string(&path).map_err(|e| ConfigError::Io(path.clone(), e))?;
    let settings: Settings = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded settings from {}", path.display());
    debug!("Settings: {:?}", settings);
    Ok(settings)
}

/// Values picked up from `HACER_BASE_URL` / `HACER_DATA_DIR`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub base_url: Option<String>,
    pub data_dir: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("HACER_BASE_URL").ok(),
            data_dir: std::env::var("HACER_DATA_DIR").ok(),
        }
    }
}

/// Resolve the final config by collapsing: defaults → settings file → env vars → CLI.
pub fn resolve(settings: &Settings, cli_data_dir: Option<&Path>) -> ResolvedConfig {
    resolve_with(settings, &EnvOverrides::from_env(), cli_data_dir)
}

/// `resolve` with the env layer passed in.
pub fn resolve_with(
    settings: &Settings,
    env: &EnvOverrides,
    cli_data_dir: Option<&Path>,
) -> ResolvedConfig {
    // Base URL: env → settings → default
    let base_url = env
        .base_url
        .clone()
        .or_else(|| settings.source.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Data dir: CLI → env → settings → default
    let data_dir = cli_data_dir
        .map(Path::to_path_buf)
        .or_else(|| env.data_dir.as_ref().map(PathBuf::from))
        .or_else(|| settings.cache.data_dir.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

    ResolvedConfig {
        base_url: base_url.trim_end_matches('/').to_string(),
        data_dir,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::scratch_dir;

    fn write_defaults(dir: &Path) {
        fs::write(dir.join("numbers.default"), "singular\nplural\n").unwrap();
        fs::write(dir.join("persons.default"), "first\nsecond\nthird\n").unwrap();
        fs::write(dir.join("tenses.default"), "present\nfuture\n").unwrap();
        fs::write(dir.join("verbs.default"), "hablar\ncomer\n").unwrap();
    }

    #[test]
    fn test_initialize_copies_defaults() {
        let dir = scratch_dir("config_init");
        write_defaults(&dir);

        let created = initialize(&dir).unwrap();
        assert_eq!(created, LIST_FILES.to_vec());
        for name in LIST_FILES {
            let seeded = fs::read_to_string(dir.join(name)).unwrap();
            let default = fs::read_to_string(dir.join(format!("{name}.default"))).unwrap();
            assert_eq!(seeded, default);
        }
    }

    #[test]
    fn test_initialize_keeps_user_edits() {
        let dir = scratch_dir("config_keep");
        write_defaults(&dir);
        fs::write(dir.join("verbs"), "ser\n").unwrap();

        let created = initialize(&dir).unwrap();
        assert!(!created.contains(&"verbs"));
        assert_eq!(fs::read_to_string(dir.join("verbs")).unwrap(), "ser\n");
    }

    #[test]
    fn test_initialize_missing_default_fails() {
        let dir = scratch_dir("config_missing");
        let err = initialize(&dir).unwrap_err();
        assert!(matches!(err, ConfigError::MissingDefault(p) if p.ends_with("numbers.default")));
    }

    #[test]
    fn test_load_lists_splits_lines() {
        let dir = scratch_dir("config_load");
        write_defaults(&dir);
        fs::write(dir.join("verbs.default"), "hablar\r\ncomer").unwrap();
        initialize(&dir).unwrap();

        let lists = load_lists(&dir).unwrap();
        assert_eq!(lists.numbers, ["singular", "plural"]);
        assert_eq!(lists.tenses, ["present", "future"]);
        assert_eq!(lists.verbs, ["hablar", "comer"]);
    }

    #[test]
    fn test_load_settings_missing_file_is_default() {
        let dir = scratch_dir("settings_missing");
        let settings = load_settings(&dir).unwrap();
        assert!(settings.source.base_url.is_none());
        assert!(settings.cache.data_dir.is_none());
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[source]
base_url = "http://localhost:8080/conjugate/"
"#;
        let settings: Settings = toml::from_str(toml_str).unwrap();
        assert_eq!(
            settings.source.base_url.as_deref(),
            Some("http://localhost:8080/conjugate/")
        );
        assert!(settings.cache.data_dir.is_none());
    }

    #[test]
    fn test_malformed_settings_is_parse_error() {
        let dir = scratch_dir("settings_bad");
        fs::write(dir.join(SETTINGS_FILE), "[source\nbase_url = 3").unwrap();
        assert!(matches!(load_settings(&dir), Err(ConfigError::Parse(_))));
    }

    fn file_settings() -> Settings {
        Settings {
            source: SourceSettings {
                base_url: Some("http://file.test/conjugate/".to_string()),
            },
            cache: CacheSettings {
                data_dir: Some("from-file".to_string()),
            },
        }
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with(&Settings::default(), &EnvOverrides::default(), None);
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
        assert_eq!(resolved.cache_path(), Path::new(DEFAULT_DATA_DIR).join(CACHE_FILE));
    }

    #[test]
    fn test_resolve_settings_override_defaults() {
        let resolved = resolve_with(&file_settings(), &EnvOverrides::default(), None);
        assert_eq!(resolved.base_url, "http://file.test/conjugate");
        assert_eq!(resolved.data_dir, PathBuf::from("from-file"));
    }

    #[test]
    fn test_resolve_env_overrides_settings() {
        let env = EnvOverrides {
            base_url: Some("http://env.test/c/".to_string()),
            data_dir: Some("from-env".to_string()),
        };
        let resolved = resolve_with(&file_settings(), &env, None);
        assert_eq!(resolved.base_url, "http://env.test/c");
        assert_eq!(resolved.data_dir, PathBuf::from("from-env"));
    }

    #[test]
    fn test_resolve_cli_data_dir_wins() {
        let env = EnvOverrides {
            base_url: None,
            data_dir: Some("from-env".to_string()),
        };
        let resolved = resolve_with(&file_settings(), &env, Some(Path::new("from-cli")));
        assert_eq!(resolved.data_dir, PathBuf::from("from-cli"));
        assert_eq!(resolved.cache_path(), Path::new("from-cli").join(CACHE_FILE));
        // CLI has no base URL flag; settings still apply
        assert_eq!(resolved.base_url, "http://file.test/conjugate");
    }
}
