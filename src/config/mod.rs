mod app_config;

pub use app_config::{
    AppConfig, GenerationConfig, LlmConfig, LogFormat, LoggingConfig, ScoringWordLists,
    ServerConfig,
};
