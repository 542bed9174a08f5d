//! Optional `config.toml` with menu defaults.
//!
//! Loading never fails: problems are returned as warnings and the defaults
//! stay in effect.

use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB

/// Render width used by the menu when nothing else is configured.
pub const MENU_CELL_WIDTH: usize = 12;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    cell_width: Option<usize>,
    rows: Option<usize>,
    cols: Option<usize>,
}

/// Effective settings for a menu session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub cell_width: usize,
    /// Skip the rows prompt when set
    pub rows: Option<usize>,
    /// Skip the columns prompt when set
    pub cols: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            cell_width: MENU_CELL_WIDTH,
            rows: None,
            cols: None,
        }
    }
}

impl Config {
    /// Parse TOML config text. Zero values are rejected.
    pub fn from_toml(content: &str) -> Result<Config, String> {
        let file: ConfigFile = toml::from_str(content).map_err(|e| e.to_string())?;
        for (key, value) in [
            ("cell_width", file.cell_width),
            ("rows", file.rows),
            ("cols", file.cols),
        ] {
            if value == Some(0) {
                return Err(format!("{} must be positive", key));
            }
        }
        let defaults = Config::default();
        Ok(Config {
            cell_width: file.cell_width.unwrap_or(defaults.cell_width),
            rows: file.rows,
            cols: file.cols,
        })
    }
}

/// Load settings from `config_file`, or from the user config dir when none is given.
///
/// Returns the config and any warnings worth showing the user. A missing
/// file in the user config dir is not worth a warning; a missing explicit
/// file is.
pub fn load_config(config_file: Option<&PathBuf>) -> (Config, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();
    let config_path = config_file.cloned().or_else(user_config_path);

    let Some(path) = config_path else {
        return (Config::default(), warnings);
    };

    if !path.exists() {
        if config_file.is_some() {
            warnings.push(format!("Config file not found: {}", path.display()));
        }
        return (Config::default(), warnings);
    }

    match read_config(&path) {
        Ok(config) => {
            tracing::debug!(path = %path.display(), ?config, "loaded config");
            (config, warnings)
        }
        Err(err) => {
            warnings.push(err);
            (Config::default(), warnings)
        }
    }
}

fn read_config(path: &Path) -> Result<Config, String> {
    let meta = std::fs::metadata(path)
        .map_err(|err| format!("Failed to read metadata for {}: {}", path.display(), err))?;
    if meta.len() > MAX_CONFIG_FILE_BYTES {
        return Err(format!(
            "Refusing to read {}: file too large ({} bytes, max {})",
            path.display(),
            meta.len(),
            MAX_CONFIG_FILE_BYTES
        ));
    }
    let content = std::fs::read_to_string(path)
        .map_err(|err| format!("Failed to read {}: {}", path.display(), err))?;
    Config::from_toml(&content)
        .map_err(|err| format!("Failed to parse {}: {}", path.display(), err))
}

fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "gridsheet")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "gridsheet_config_{}_{}_{:?}.toml",
            tag,
            std::process::id(),
            std::thread::current().id(),
        ))
    }

    struct Cleanup(PathBuf);
    impl Drop for Cleanup {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    #[test]
    fn test_from_toml_full() {
        let config = Config::from_toml("cell_width = 8\nrows = 3\ncols = 4\n").unwrap();
        assert_eq!(
            config,
            Config {
                cell_width: 8,
                rows: Some(3),
                cols: Some(4)
            }
        );
    }

    #[test]
    fn test_from_toml_defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
        assert_eq!(Config::default().cell_width, MENU_CELL_WIDTH);
    }

    #[test]
    fn test_from_toml_rejects_unknown_and_zero() {
        assert!(Config::from_toml("colour = \"red\"").is_err());
        assert!(Config::from_toml("rows = 0").is_err());
        assert!(Config::from_toml("cell_width = -1").is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let path = temp_path("explicit");
        let _cleanup = Cleanup(path.clone());
        std::fs::write(&path, "cols = 2\n").unwrap();

        let (config, warnings) = load_config(Some(&path));
        assert!(warnings.is_empty());
        assert_eq!(config.cols, Some(2));
        assert_eq!(config.cell_width, MENU_CELL_WIDTH);
    }

    #[test]
    fn test_load_missing_explicit_file_warns() {
        let path = temp_path("missing");
        let (config, warnings) = load_config(Some(&path));
        assert_eq!(config, Config::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Config file not found"));
    }

    #[test]
    fn test_load_oversized_file_warns() {
        let path = temp_path("oversized");
        let _cleanup = Cleanup(path.clone());
        let mut content = String::from("rows = 3\n");
        content.push_str(&"#".repeat(MAX_CONFIG_FILE_BYTES as usize));
        std::fs::write(&path, content).unwrap();

        let (config, warnings) = load_config(Some(&path));
        assert_eq!(config, Config::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Refusing to read"));
        assert!(warnings[0].contains("file too large"));
    }

    #[test]
    fn test_load_invalid_file_warns_and_uses_defaults() {
        let path = temp_path("invalid");
        let _cleanup = Cleanup(path.clone());
        std::fs::write(&path, "rows = \"many\"\n").unwrap();

        let (config, warnings) = load_config(Some(&path));
        assert_eq!(config, Config::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Failed to parse"));
    }
}
