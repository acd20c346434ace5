//! Terminal options and their TOML form.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Options for creating a Terminal.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TerminalOptions {
    /// Home directory; also the initial working directory
    pub home: String,
    /// Name shown by `whoami` and in the prompt
    pub user: String,
    /// Host shown in the prompt
    pub host: String,
    /// Address printed by `email` and `send-idea`
    pub email: String,
    /// Names accepted by `open`, mapped to their URLs
    pub links: HashMap<String, String>,
    /// Text for content references, layered over the built-in texts
    pub content: HashMap<String, String>,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        let mut links = HashMap::new();
        links.insert("sitch".to_string(), "https://sitch.lol".to_string());
        links.insert("sitch.lol".to_string(), "https://sitch.lol".to_string());

        Self {
            home: "/home/user".to_string(),
            user: "user".to_string(),
            host: "lvl404".to_string(),
            email: "404@lvl404.com".to_string(),
            links,
            content: HashMap::new(),
        }
    }
}

impl TerminalOptions {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = TerminalOptions::default();
        assert_eq!(opts.home, "/home/user");
        assert_eq!(opts.links.get("sitch").map(String::as_str), Some("https://sitch.lol"));
        assert!(opts.content.is_empty());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let opts = TerminalOptions::from_toml_str(
            r#"
            user = "neo"

            [content]
            about-content = "follow the white rabbit"
            "#,
        )
        .unwrap();
        assert_eq!(opts.user, "neo");
        assert_eq!(opts.host, "lvl404");
        assert_eq!(opts.content["about-content"], "follow the white rabbit");
        assert!(opts.links.contains_key("sitch"));
    }

    #[test]
    fn test_invalid_toml() {
        let err = TerminalOptions::from_toml_str("user = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = TerminalOptions::from_path(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
