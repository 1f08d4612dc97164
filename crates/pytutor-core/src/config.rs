use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::lang::Language;

/// Defaults applied when a flag is not given on the command line,
/// loaded from `~/.config/pytutor/config.toml`. Flags always win.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PytutorConfig {
    /// Default language when `--lang` is absent.
    #[serde(default)]
    pub language: Option<Language>,
    /// Default iframe height in pixels when `--height` is absent.
    #[serde(default)]
    pub height: Option<u32>,
    /// Default to https when set.
    #[serde(default)]
    pub secure: bool,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pytutor")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PytutorConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PytutorConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let mut cfg: PytutorConfig = toml::from_str(&data)?;
    if cfg.height == Some(0) {
        tracing::warn!("ignoring height = 0 in {}", path.display());
        cfg.height = None;
    }
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = PytutorConfig::default();
        assert!(cfg.language.is_none());
        assert!(cfg.height.is_none());
        assert!(!cfg.secure);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = PytutorConfig {
            language: Some(Language::Java),
            height: Some(500),
            secure: true,
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: PytutorConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.language, Some(Language::Java));
        assert_eq!(parsed.height, Some(500));
        assert!(parsed.secure);
    }

    #[test]
    fn config_toml_empty_is_all_defaults() {
        let cfg: PytutorConfig = toml::from_str("").unwrap();
        assert!(cfg.language.is_none());
        assert!(cfg.height.is_none());
        assert!(!cfg.secure);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            language = "ruby"
            height = 400
        "#;
        let cfg: PytutorConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.language, Some(Language::Ruby));
        assert_eq!(cfg.height, Some(400));
        assert!(!cfg.secure);
    }

    #[test]
    fn config_toml_rejects_unknown_language() {
        let toml = r#"language = "pascal""#;
        assert!(toml::from_str::<PytutorConfig>(toml).is_err());
    }
}
