pub mod cli;
pub mod toml_config;

pub use cli::{CliConfig, ProviderSelection};
pub use toml_config::{AppConfig, HeadHunterConfig, HttpConfig, SearchConfig, SuperJobConfig};
