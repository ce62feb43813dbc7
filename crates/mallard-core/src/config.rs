//! Shell configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use mallard_autocomplete::RowPolicy;
use mallard_navigation::{InputResolver, DEFAULT_SEARCH_TEMPLATE};

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Search engine URL template
    pub search_engine: String,
    /// Placeholder rows shown when there are no suggestions
    pub min_suggestion_rows: usize,
    /// Upper bound on rendered suggestion rows
    pub max_suggestion_rows: usize,
}

impl ShellConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), "Loaded shell configuration");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        InputResolver::validate_template(&self.search_engine)
            .map_err(|e| CoreError::Config(e.to_string()))?;

        if self.min_suggestion_rows == 0 {
            return Err(CoreError::Config(
                "min_suggestion_rows must be at least 1".to_string(),
            ));
        }
        if self.max_suggestion_rows < self.min_suggestion_rows {
            return Err(CoreError::Config(format!(
                "max_suggestion_rows ({}) is below min_suggestion_rows ({})",
                self.max_suggestion_rows, self.min_suggestion_rows
            )));
        }
        Ok(())
    }

    pub fn row_policy(&self) -> RowPolicy {
        RowPolicy::new(self.min_suggestion_rows, self.max_suggestion_rows)
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            search_engine: DEFAULT_SEARCH_TEMPLATE.to_string(),
            min_suggestion_rows: 1,
            max_suggestion_rows: 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_valid() {
        let config = ShellConfig::default();
        config.validate().unwrap();
        assert_eq!(config.row_policy(), RowPolicy::new(1, 6));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = ShellConfig::from_json(r#"{"max_suggestion_rows": 4}"#).unwrap();
        assert_eq!(config.max_suggestion_rows, 4);
        assert_eq!(config.min_suggestion_rows, 1);
        assert_eq!(config.search_engine, DEFAULT_SEARCH_TEMPLATE);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            ShellConfig::from_json(r#"{"search_engine": "https://example.com/"}"#),
            Err(CoreError::Config(_))
        ));
        assert!(matches!(
            ShellConfig::from_json(r#"{"min_suggestion_rows": 0}"#),
            Err(CoreError::Config(_))
        ));
        assert!(matches!(
            ShellConfig::from_json(r#"{"min_suggestion_rows": 3, "max_suggestion_rows": 2}"#),
            Err(CoreError::Config(_))
        ));
        assert!(matches!(
            ShellConfig::from_json("{not json"),
            Err(CoreError::Serialization(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"search_engine": "https://search.example/?q=%s", "max_suggestion_rows": 8}}"#
        )
        .unwrap();

        let config = ShellConfig::load(file.path()).unwrap();
        assert_eq!(config.search_engine, "https://search.example/?q=%s");
        assert_eq!(config.max_suggestion_rows, 8);

        assert!(matches!(
            ShellConfig::load(Path::new("/nonexistent/mallard.json")),
            Err(CoreError::Io(_))
        ));
    }
}
