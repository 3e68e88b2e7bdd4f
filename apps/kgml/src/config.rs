//! # Configuration
//!
//! Optional TOML configuration for the `kgml` binary.
//!
//! ```toml
//! [parser]
//! silent = false
//! offline = true
//! ```
//!
//! Lookup order: `--config <path>`, then the `KGML_CONFIG` environment
//! variable, then built-in defaults. Command-line flags override the file.

use kgml_core::{KgmlError, ParserOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming a configuration file.
pub const CONFIG_ENV_VAR: &str = "KGML_CONFIG";

/// Top-level configuration file layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// `[parser]` table.
    pub parser: ParserOptions,
}

impl AppConfig {
    /// Decode a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, KgmlError> {
        toml::from_str(text).map_err(|e| KgmlError::ConfigError(e.to_string()))
    }

    /// Read and decode the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self, KgmlError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            KgmlError::ConfigError(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    /// Load from `explicit`, else from `KGML_CONFIG`, else use defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, KgmlError> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

        match path {
            Some(p) => {
                tracing::debug!("Loading configuration from {}", p.display());
                Self::load(&p)
            }
            None => Ok(Self::default()),
        }
    }

    /// Parser options after applying command-line overrides.
    ///
    /// Flags can only switch behavior on: `--verbose` un-silences the
    /// parser, `--offline` enables the DTD rewrite.
    #[must_use]
    pub fn parser_options(&self, verbose: bool, offline: bool) -> ParserOptions {
        ParserOptions {
            silent: self.parser.silent && !verbose,
            offline: self.parser.offline || offline,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let config = AppConfig::from_toml_str("").expect("parse");
        assert_eq!(config, AppConfig::default());
        assert!(config.parser.silent);
        assert!(!config.parser.offline);
    }

    #[test]
    fn partial_parser_table() {
        let config = AppConfig::from_toml_str("[parser]\noffline = true\n").expect("parse");
        assert!(config.parser.offline);
        assert!(config.parser.silent);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = AppConfig::from_toml_str("[render]\nscale = 2\n");
        assert!(matches!(result, Err(KgmlError::ConfigError(_))));
    }

    #[test]
    fn misspelled_parser_key_is_rejected() {
        let result = AppConfig::from_toml_str("[parser]\nofline = true\n");
        assert!(matches!(result, Err(KgmlError::ConfigError(_))));
    }

    #[test]
    fn flags_override_file() {
        let config = AppConfig::default();
        let options = config.parser_options(true, true);
        assert!(!options.silent);
        assert!(options.offline);

        let unchanged = config.parser_options(false, false);
        assert_eq!(unchanged, ParserOptions::default());
    }
}
