pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{AsciiTable, HeadHunterClient, SuperJobClient};
pub use crate::config::{AppConfig, CliConfig, ProviderSelection};
pub use crate::core::{collector::StatsCollector, LanguageStats, ProviderReport};
pub use crate::utils::error::{Result, StatsError};
