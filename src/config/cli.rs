use crate::config::toml_config::AppConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_required_field, Validate};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProviderSelection {
    #[value(name = "headhunter", alias = "hh")]
    HeadHunter,
    #[value(name = "superjob", alias = "sj")]
    SuperJob,
    All,
}

impl ProviderSelection {
    pub fn includes_headhunter(self) -> bool {
        matches!(self, ProviderSelection::HeadHunter | ProviderSelection::All)
    }

    pub fn includes_superjob(self) -> bool {
        matches!(self, ProviderSelection::SuperJob | ProviderSelection::All)
    }
}

#[derive(Clone, Parser)]
#[command(name = "vacancy-stats")]
#[command(about = "Average salaries of programming languages on HeadHunter and SuperJob")]
pub struct CliConfig {
    #[arg(long, help = "Optional TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, value_delimiter = ',', help = "Languages to search for")]
    pub languages: Vec<String>,

    #[arg(long, value_enum, default_value = "all")]
    pub provider: ProviderSelection,

    #[arg(long, help = "Delay between paginated requests in milliseconds")]
    pub page_delay_ms: Option<u64>,

    #[arg(long, help = "Maximum pages fetched per language")]
    pub max_pages: Option<u32>,

    #[arg(long, env = "SJ_KEY", hide_env_values = true)]
    pub superjob_key: Option<String>,

    #[arg(long, env = "VACANCY_STATS_USER_AGENT")]
    pub user_agent: Option<String>,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl std::fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliConfig")
            .field("config", &self.config)
            .field("languages", &self.languages)
            .field("provider", &self.provider)
            .field("page_delay_ms", &self.page_delay_ms)
            .field("max_pages", &self.max_pages)
            .field("superjob_key", &self.superjob_key.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .field("log_json", &self.log_json)
            .field("verbose", &self.verbose)
            .finish()
    }
}

impl CliConfig {
    /// Resolves the run configuration: defaults, then the TOML file, then flags.
    pub fn load_app_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                AppConfig::from_file(path)?
            }
            None => AppConfig::default(),
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        if self.provider.includes_superjob() {
            validate_required_field("superjob.api_key", &config.superjob.api_key)?;
        }
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if !self.languages.is_empty() {
            config.search.languages = self.languages.clone();
        }
        if let Some(delay) = self.page_delay_ms {
            config.search.page_delay_ms = delay;
        }
        if let Some(max_pages) = self.max_pages {
            config.search.max_pages = max_pages;
        }
        if let Some(key) = &self.superjob_key {
            config.superjob.api_key = Some(key.clone());
        }
        if let Some(user_agent) = &self.user_agent {
            config.http.user_agent = user_agent.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::StatsError;

    fn parse(args: &[&str]) -> CliConfig {
        let mut argv = vec!["vacancy-stats"];
        argv.extend_from_slice(args);
        CliConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_languages_are_comma_separated() {
        let cli = parse(&["--languages", "Rust,Go,C++", "--provider", "hh"]);

        assert_eq!(cli.languages, vec!["Rust", "Go", "C++"]);
        assert_eq!(cli.provider, ProviderSelection::HeadHunter);
        assert!(cli.provider.includes_headhunter());
        assert!(!cli.provider.includes_superjob());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = parse(&[
            "--languages",
            "Rust",
            "--page-delay-ms",
            "0",
            "--max-pages",
            "2",
            "--superjob-key",
            "v3.r.flag",
            "--user-agent",
            "stats-bot/2.0 (ops@example.com)",
        ]);

        let config = cli.load_app_config().unwrap();

        assert_eq!(config.search.languages, vec!["Rust"]);
        assert_eq!(config.search.page_delay_ms, 0);
        assert_eq!(config.search.max_pages, 2);
        assert_eq!(config.superjob.api_key.as_deref(), Some("v3.r.flag"));
        assert_eq!(config.http.user_agent, "stats-bot/2.0 (ops@example.com)");
    }

    #[test]
    fn test_superjob_key_required_up_front() {
        let mut cli = parse(&[]);
        // Ignore any SJ_KEY present in the test environment.
        cli.superjob_key = None;

        let err = cli.load_app_config().unwrap_err();
        assert!(matches!(err, StatsError::MissingConfig { ref field } if field == "superjob.api_key"));
    }

    #[test]
    fn test_headhunter_only_runs_without_key() {
        let mut cli = parse(&["--provider", "headhunter"]);
        cli.superjob_key = None;

        assert!(cli.load_app_config().is_ok());
    }

    #[test]
    fn test_zero_max_pages_is_rejected() {
        let cli = parse(&["--max-pages", "0"]);
        assert!(cli.load_app_config().is_err());
    }

    #[test]
    fn test_debug_redacts_key() {
        let cli = parse(&["--superjob-key", "v3.r.flag"]);
        let printed = format!("{:?}", cli);
        assert!(!printed.contains("v3.r.flag"));
        assert!(printed.contains("<redacted>"));
    }
}
