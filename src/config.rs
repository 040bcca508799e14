use crate::domain::strategy::Strategy;
use crate::error::{Result, TaggerError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Manifest target selected with `--write`.
///
/// `FlutterBuild` is the `flutter+` spelling: update the pubspec version
/// and increment its build counter in the same replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteTarget {
    Npm,
    Flutter,
    FlutterBuild,
}

impl FromStr for WriteTarget {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "npm" => Ok(WriteTarget::Npm),
            "flutter" => Ok(WriteTarget::Flutter),
            "flutter+" => Ok(WriteTarget::FlutterBuild),
            other => Err(format!(
                "unknown write target '{}' (expected npm, flutter or flutter+)",
                other
            )),
        }
    }
}

/// Immutable per-invocation configuration.
///
/// Constructed once from the parsed CLI arguments (plus file-config
/// defaults) and passed to the orchestrator; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub strategy: Strategy,
    pub hash_len: Option<usize>,
    pub note: Option<String>,
    pub dry_run: bool,
    pub write: Option<WriteTarget>,
    pub package_json: PathBuf,
    pub pubspec: PathBuf,
}

impl RunConfig {
    /// Build a run configuration from CLI selections and file defaults.
    pub fn new(
        strategy: Strategy,
        hash_len: Option<usize>,
        note: Option<String>,
        dry_run: bool,
        write: Option<WriteTarget>,
        file_config: &FileConfig,
    ) -> Self {
        RunConfig {
            strategy,
            hash_len,
            note,
            dry_run,
            write,
            package_json: PathBuf::from(&file_config.manifests.package_json),
            pubspec: PathBuf::from(&file_config.manifests.pubspec),
        }
    }
}

fn default_package_json() -> String {
    "package.json".to_string()
}

fn default_pubspec() -> String {
    "pubspec.yaml".to_string()
}

/// Manifest file locations, overridable via `tagger.toml`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ManifestsConfig {
    #[serde(default = "default_package_json")]
    pub package_json: String,

    #[serde(default = "default_pubspec")]
    pub pubspec: String,
}

impl Default for ManifestsConfig {
    fn default() -> Self {
        ManifestsConfig {
            package_json: default_package_json(),
            pubspec: default_pubspec(),
        }
    }
}

/// Optional on-disk configuration for git-tagger.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub manifests: ManifestsConfig,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `tagger.toml` in the current directory
/// 3. `tagger.toml` in the user config directory
/// 4. Default configuration if no file found
pub fn load_config(config_path: Option<&str>) -> Result<FileConfig> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./tagger.toml").exists() {
        fs::read_to_string("./tagger.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("tagger.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(FileConfig::default());
        }
    } else {
        return Ok(FileConfig::default());
    };

    let config: FileConfig =
        toml::from_str(&config_str).map_err(|e| TaggerError::config(e.to_string()))?;
    Ok(config)
}
