// Selection limits: salary budget and position limit, parsed from TOML.

use serde::Deserialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse selection config: {source}")]
    ParseError { source: toml::de::Error },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Public config
// ---------------------------------------------------------------------------

/// Limits for a single signing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionConfig {
    /// Maximum total salary that may be committed.
    pub budget: u64,
    /// Highest position index eligible for signing.
    pub position_limit: u32,
}

impl SelectionConfig {
    pub fn new(budget: u64, position_limit: u32) -> Self {
        SelectionConfig {
            budget,
            position_limit,
        }
    }

    /// Parse a `[selection]` table:
    ///
    /// ```toml
    /// [selection]
    /// budget = 700000
    /// position_limit = 4
    /// ```
    ///
    /// Values are read as signed integers so that negative budgets or limits
    /// are reported rather than rejected by the deserializer with a less
    /// helpful message.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let file: SelectionFile =
            toml::from_str(text).map_err(|e| ConfigError::ParseError { source: e })?;
        validate(&file.selection)
    }
}

// ---------------------------------------------------------------------------
// Raw TOML structs
// ---------------------------------------------------------------------------

/// Wrapper for the top-level `[selection]` table.
#[derive(Debug, Deserialize)]
struct SelectionFile {
    selection: RawSelection,
}

#[derive(Debug, Deserialize)]
struct RawSelection {
    budget: i64,
    position_limit: i64,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(raw: &RawSelection) -> Result<SelectionConfig, ConfigError> {
    let budget = u64::try_from(raw.budget).map_err(|_| ConfigError::ValidationError {
        field: "selection.budget".into(),
        message: format!("must not be negative, got {}", raw.budget),
    })?;

    let position_limit =
        u32::try_from(raw.position_limit).map_err(|_| ConfigError::ValidationError {
            field: "selection.position_limit".into(),
            message: format!(
                "must be between 0 and {} inclusive, got {}",
                u32::MAX,
                raw.position_limit
            ),
        })?;

    Ok(SelectionConfig {
        budget,
        position_limit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_config() {
        let text = r#"
[selection]
budget = 700000
position_limit = 4
"#;
        let config = SelectionConfig::from_toml_str(text).unwrap();
        assert_eq!(config, SelectionConfig::new(700_000, 4));
    }

    #[test]
    fn zero_values_are_allowed() {
        let text = "[selection]\nbudget = 0\nposition_limit = 0\n";
        let config = SelectionConfig::from_toml_str(text).unwrap();
        assert_eq!(config.budget, 0);
        assert_eq!(config.position_limit, 0);
    }

    #[test]
    fn negative_budget_is_rejected() {
        let text = "[selection]\nbudget = -5\nposition_limit = 4\n";
        match SelectionConfig::from_toml_str(text) {
            Err(ConfigError::ValidationError { field, message }) => {
                assert_eq!(field, "selection.budget");
                assert!(message.contains("-5"), "message was: {message}");
            }
            other => panic!("expected ValidationError, got {other:?}"),
        }
    }

    #[test]
    fn negative_position_limit_is_rejected() {
        let text = "[selection]\nbudget = 100\nposition_limit = -1\n";
        match SelectionConfig::from_toml_str(text) {
            Err(ConfigError::ValidationError { field, .. }) => {
                assert_eq!(field, "selection.position_limit");
            }
            other => panic!("expected ValidationError, got {other:?}"),
        }
    }

    #[test]
    fn oversized_position_limit_is_rejected() {
        let text = "[selection]\nbudget = 100\nposition_limit = 5000000000\n";
        assert!(matches!(
            SelectionConfig::from_toml_str(text),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn missing_field_is_a_parse_error() {
        let text = "[selection]\nbudget = 100\n";
        assert!(matches!(
            SelectionConfig::from_toml_str(text),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            SelectionConfig::from_toml_str("[selection\nbudget ="),
            Err(ConfigError::ParseError { .. })
        ));
    }
}
