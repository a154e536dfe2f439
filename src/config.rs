use crate::constants::UniquenessScope;
use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Export
    pub output_dir: PathBuf,
    pub pretty_json: bool,

    // Guard
    pub uniqueness: UniquenessScope,
    pub strict_translations: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Export
            output_dir: std::env::var("CATALOG_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/seed")),
            pretty_json: bool_var("CATALOG_PRETTY_JSON", true)?,

            // Guard
            uniqueness: match std::env::var("CATALOG_UNIQUENESS") {
                Ok(value) => value
                    .parse()
                    .map_err(|e: String| anyhow!(e))
                    .context("CATALOG_UNIQUENESS is invalid")?,
                Err(_) => UniquenessScope::default(),
            },
            strict_translations: bool_var("CATALOG_STRICT_TRANSLATIONS", false)?,
        })
    }
}

fn bool_var(name: &str, default: bool) -> Result<bool> {
    match std::env::var(name) {
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => Err(anyhow!("{} must be a boolean, got '{}'", name, other)),
        },
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 4] = [
        "CATALOG_OUTPUT_DIR",
        "CATALOG_UNIQUENESS",
        "CATALOG_STRICT_TRANSLATIONS",
        "CATALOG_PRETTY_JSON",
    ];

    fn clear() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear();
        let config = Config::from_env().expect("Should load");

        assert_eq!(config.output_dir, PathBuf::from("data/seed"));
        assert_eq!(config.uniqueness, UniquenessScope::Global);
        assert!(!config.strict_translations);
        assert!(config.pretty_json);
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear();
        std::env::set_var("CATALOG_OUTPUT_DIR", "/tmp/seed");
        std::env::set_var("CATALOG_UNIQUENESS", "per-family");
        std::env::set_var("CATALOG_STRICT_TRANSLATIONS", "TRUE");
        std::env::set_var("CATALOG_PRETTY_JSON", "0");

        let config = Config::from_env().expect("Should load");
        clear();

        assert_eq!(config.output_dir, PathBuf::from("/tmp/seed"));
        assert_eq!(config.uniqueness, UniquenessScope::PerFamily);
        assert!(config.strict_translations);
        assert!(!config.pretty_json);
    }

    #[test]
    #[serial]
    fn test_invalid_values_are_errors() {
        clear();
        std::env::set_var("CATALOG_UNIQUENESS", "everywhere");
        let err = Config::from_env().unwrap_err();
        assert!(format!("{:#}", err).contains("CATALOG_UNIQUENESS"));

        clear();
        std::env::set_var("CATALOG_STRICT_TRANSLATIONS", "maybe");
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("CATALOG_STRICT_TRANSLATIONS"));
        clear();
    }
}
