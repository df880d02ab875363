use serde::Deserialize;

use crate::domain::generation::GenerationSettings;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub llm: LlmConfig,
    pub generation: GenerationConfig,
    pub scoring: ScoringWordLists,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Parameters for the outbound LLM call.
///
/// temperature 0.3 keeps the JSON deterministic while leaving room for the
/// cases not to be robotically identical; max_tokens 2048 fits four cases
/// plus envelope for complex domains; top_p 0.95 trims the improbable tail.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Extra attempts after the first one when the LLM output cannot be
    /// parsed or validated.
    pub max_retries: u32,
}

/// Word lists for the quality scorer. Empty lists fall back to the built-in
/// bilingual defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScoringWordLists {
    pub vague_words: Vec<String>,
    pub generic_preconditions: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com".to_string(),
            temperature: 0.3,
            max_tokens: 2048,
            top_p: 0.95,
            timeout_seconds: 30,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self { max_retries: 2 }
    }
}

impl LlmConfig {
    /// The configured key, falling back to the conventional OPENAI_API_KEY
    /// environment variable.
    pub fn resolve_api_key(&self) -> String {
        if !self.api_key.is_empty() {
            return self.api_key.clone();
        }
        std::env::var("OPENAI_API_KEY").unwrap_or_default()
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl From<&AppConfig> for GenerationSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            model: config.llm.model.clone(),
            temperature: config.llm.temperature,
            max_tokens: config.llm.max_tokens,
            top_p: config.llm.top_p,
            max_retries: config.generation.max_retries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.timeout_seconds, 30);
        assert_eq!(config.generation.max_retries, 2);
        assert!(config.scoring.vague_words.is_empty());
    }

    #[test]
    fn test_generation_settings_from_config() {
        let mut config = AppConfig::default();
        config.llm.model = "gpt-4o".to_string();
        config.generation.max_retries = 5;

        let settings = GenerationSettings::from(&config);
        assert_eq!(settings.model, "gpt-4o");
        assert_eq!(settings.max_retries, 5);
        assert_eq!(settings.max_tokens, 2048);
    }
}
