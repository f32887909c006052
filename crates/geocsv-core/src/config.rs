use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::export::DEFAULT_FILE_NAME;
use crate::extract::FetchOptions;

/// HTTP fetch parameters (optional `[fetch]` section in config.toml).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Connect timeout in seconds. Unset = libcurl default.
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Whole-transfer timeout in seconds. Unset = no limit.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Maximum redirects to follow. Unset = libcurl default.
    #[serde(default)]
    pub max_redirections: Option<u32>,
    /// User-Agent header sent with the GET.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl FetchConfig {
    pub fn to_options(&self) -> FetchOptions {
        let defaults = FetchOptions::default();
        FetchOptions {
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            timeout: self.timeout_secs.map(Duration::from_secs),
            max_redirections: self.max_redirections,
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
        }
    }
}

/// Global configuration loaded from `~/.config/geocsv/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeocsvConfig {
    /// Feature collection URL used when none is given on the command line.
    #[serde(default)]
    pub source_url: Option<String>,
    /// Output file name for `geocsv export`.
    #[serde(default = "default_output_file")]
    pub output_file: String,
    /// Directory the output file is written to. Unset = current directory.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default)]
    pub fetch: FetchConfig,
}

fn default_output_file() -> String {
    DEFAULT_FILE_NAME.to_string()
}

impl Default for GeocsvConfig {
    fn default() -> Self {
        Self {
            source_url: None,
            output_file: default_output_file(),
            output_dir: None,
            fetch: FetchConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("geocsv")?;
    Ok(xdg_dirs.get_config_home().join("geocsv").join("config.toml"))
}

/// Load configuration from disk. A missing file yields the defaults; nothing is written.
pub fn load_or_default() -> Result<GeocsvConfig> {
    let path = config_path()?;
    match load_from_path(&path)? {
        Some(cfg) => Ok(cfg),
        None => {
            tracing::debug!("no config at {}, using defaults", path.display());
            Ok(GeocsvConfig::default())
        }
    }
}

/// Load configuration from `path`. Returns `Ok(None)` if the file does not exist.
pub fn load_from_path(path: &Path) -> Result<Option<GeocsvConfig>> {
    if !path.exists() {
        return Ok(None);
    }
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: GeocsvConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(Some(cfg))
}

/// Effective configuration as TOML, for display.
pub fn render(cfg: &GeocsvConfig) -> Result<String> {
    Ok(toml::to_string_pretty(cfg)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = GeocsvConfig::default();
        assert_eq!(cfg.output_file, "value_coordinates_map.csv");
        assert!(cfg.source_url.is_none());
        assert!(cfg.output_dir.is_none());
        assert_eq!(cfg.fetch, FetchConfig::default());
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let cfg: GeocsvConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, GeocsvConfig::default());
    }

    #[test]
    fn config_toml_roundtrip() {
        let mut cfg = GeocsvConfig::default();
        cfg.source_url = Some("https://example.com/cont_mmi.json".to_string());
        cfg.fetch.timeout_secs = Some(90);
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: GeocsvConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            source_url = "https://example.com/features.json"
            output_file = "mmi.csv"
            output_dir = "/tmp/out"

            [fetch]
            connect_timeout_secs = 5
            timeout_secs = 120
            max_redirections = 3
            user_agent = "custom/1.0"
        "#;
        let cfg: GeocsvConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            cfg.source_url.as_deref(),
            Some("https://example.com/features.json")
        );
        assert_eq!(cfg.output_file, "mmi.csv");
        assert_eq!(cfg.output_dir.as_deref(), Some(Path::new("/tmp/out")));

        let opts = cfg.fetch.to_options();
        assert_eq!(opts.connect_timeout, Some(Duration::from_secs(5)));
        assert_eq!(opts.timeout, Some(Duration::from_secs(120)));
        assert_eq!(opts.max_redirections, Some(3));
        assert_eq!(opts.user_agent, "custom/1.0");
    }

    #[test]
    fn fetch_defaults_leave_transport_defaults() {
        let opts = FetchConfig::default().to_options();
        assert!(opts.connect_timeout.is_none());
        assert!(opts.timeout.is_none());
        assert!(opts.max_redirections.is_none());
        assert_eq!(opts.user_agent, FetchOptions::default().user_agent);
    }

    #[test]
    fn render_shows_output_file() {
        let text = render(&GeocsvConfig::default()).unwrap();
        assert!(text.contains("output_file = \"value_coordinates_map.csv\""));
    }

    #[test]
    fn load_from_missing_path_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_from_path(&dir.path().join("config.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn load_from_path_reads_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"output_file = \"quake.csv\"\n").unwrap();
        f.flush().unwrap();
        let cfg = load_from_path(f.path()).unwrap().unwrap();
        assert_eq!(cfg.output_file, "quake.csv");
    }

    #[test]
    fn load_from_path_rejects_bad_toml() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"output_file = [1, 2\n").unwrap();
        f.flush().unwrap();
        assert!(load_from_path(f.path()).is_err());
    }
}
