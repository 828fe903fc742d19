use crate::core::ConfigProvider;
use crate::utils::error::{Result, SummaryError};
use crate::utils::validation::{
    validate_file_name, validate_non_empty_string, validate_range, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: f32 = 0.4;
pub const DEFAULT_LANGUAGE: &str = "Python";
pub const DEFAULT_CREDENTIAL_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_PANEL_TITLE: &str = "Summary + Suggestions";
pub const DEFAULT_EXPORT_NAME: &str = "summary.md";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SummariserConfig {
    pub completion: CompletionConfig,
    pub panel: PanelConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    pub endpoint: String,
    pub model: String,
    pub temperature: f32,
    /// Language named in the prompt, e.g. "Python" or "Rust".
    pub language: String,
    /// Environment variable holding the bearer token.
    pub credential_env: String,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            language: DEFAULT_LANGUAGE.to_string(),
            credential_env: DEFAULT_CREDENTIAL_ENV.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub title: String,
    pub default_export_name: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_PANEL_TITLE.to_string(),
            default_export_name: DEFAULT_EXPORT_NAME.to_string(),
        }
    }
}

impl SummariserConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses a TOML document. `${VAR}` references are replaced with the
    /// environment value when set and left untouched otherwise.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SummaryError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn panel_title(&self) -> &str {
        &self.panel.title
    }

    pub fn default_export_name(&self) -> &str {
        &self.panel.default_export_name
    }

    pub fn credential_env(&self) -> &str {
        &self.completion.credential_env
    }
}

impl ConfigProvider for SummariserConfig {
    fn endpoint(&self) -> &str {
        &self.completion.endpoint
    }

    fn model(&self) -> &str {
        &self.completion.model
    }

    fn temperature(&self) -> f32 {
        self.completion.temperature
    }

    fn language(&self) -> &str {
        &self.completion.language
    }
}

impl Validate for SummariserConfig {
    fn validate(&self) -> Result<()> {
        validate_url("completion.endpoint", &self.completion.endpoint)?;
        validate_non_empty_string("completion.model", &self.completion.model)?;
        validate_range(
            "completion.temperature",
            self.completion.temperature,
            0.0,
            2.0,
        )?;
        validate_non_empty_string("completion.language", &self.completion.language)?;
        validate_non_empty_string("completion.credential_env", &self.completion.credential_env)?;
        validate_non_empty_string("panel.title", &self.panel.title)?;
        validate_file_name("panel.default_export_name", &self.panel.default_export_name)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_openai_chat() {
        let config = SummariserConfig::default();

        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(config.model(), "gpt-3.5-turbo");
        assert_eq!(config.temperature(), 0.4);
        assert_eq!(config.credential_env(), "OPENAI_API_KEY");
        assert_eq!(config.default_export_name(), "summary.md");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let toml_content = r#"
[completion]
model = "gpt-4o-mini"
language = "Rust"
"#;

        let config = SummariserConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.model(), "gpt-4o-mini");
        assert_eq!(config.language(), "Rust");
        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(config.panel_title(), DEFAULT_PANEL_TITLE);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CODE_SUMMARISER_TEST_ENDPOINT", "https://llm.internal.test/v1/chat");

        let toml_content = r#"
[completion]
endpoint = "${CODE_SUMMARISER_TEST_ENDPOINT}"
"#;

        let config = SummariserConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.endpoint(), "https://llm.internal.test/v1/chat");

        std::env::remove_var("CODE_SUMMARISER_TEST_ENDPOINT");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[completion]
endpoint = "invalid-url"
"#;
        let config = SummariserConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());

        let toml_content = r#"
[completion]
temperature = 3.5
"#;
        let config = SummariserConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_reported() {
        let result = SummariserConfig::from_toml_str("[completion\nmodel = 1");
        assert!(matches!(result, Err(SummaryError::TomlError(_))));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[panel]
title = "Code Review"
default_export_name = "review.md"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = SummariserConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.panel_title(), "Code Review");
        assert_eq!(config.default_export_name(), "review.md");
    }
}
