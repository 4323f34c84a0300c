use crate::utils::error::{Result, StatsError};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_LANGUAGES: [&str; 8] = [
    "javascript",
    "java",
    "python",
    "1c",
    "PHP",
    "C++",
    "C#",
    "Go",
];

/// Everything a run needs, resolved once at startup and handed to the
/// providers by value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub http: HttpConfig,
    pub headhunter: HeadHunterConfig,
    pub superjob: SuperJobConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub languages: Vec<String>,
    pub page_delay_ms: u64,
    pub max_pages: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            languages: DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect(),
            page_delay_ms: 500,
            max_pages: 20,
        }
    }
}

impl SearchConfig {
    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Sent as `User-Agent`; HeadHunter rejects anonymous clients.
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("vacancy-stats/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadHunterConfig {
    pub title: String,
    pub endpoint: String,
    /// Region id, 1 is Moscow.
    pub area: String,
    pub per_page: u32,
    /// Only vacancies published within this many months are searched.
    pub period_months: u32,
    pub currency: String,
}

impl Default for HeadHunterConfig {
    fn default() -> Self {
        Self {
            title: "HeadHunter Moscow".to_string(),
            endpoint: "https://api.hh.ru/vacancies".to_string(),
            area: "1".to_string(),
            per_page: 100,
            period_months: 1,
            currency: "RUR".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuperJobConfig {
    pub title: String,
    pub endpoint: String,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Catalogue 48 is "Development, programming".
    pub catalogue: u32,
    /// Town 4 is Moscow.
    pub town: u32,
    pub count: u32,
    pub currency: String,
}

impl Default for SuperJobConfig {
    fn default() -> Self {
        Self {
            title: "SuperJob Moscow".to_string(),
            endpoint: "https://api.superjob.ru/2.0/vacancies/".to_string(),
            api_key: None,
            catalogue: 48,
            town: 4,
            count: 40,
            currency: "rub".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_toml_str_with(content, |name| std::env::var(name).ok())
    }

    /// Like `from_toml_str`, resolving `${VAR}` through `lookup` instead of
    /// the process environment.
    pub fn from_toml_str_with<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let processed_content = Self::substitute_vars(content, lookup)?;

        let mut config: AppConfig =
            toml::from_str(&processed_content).map_err(|e| StatsError::ConfigParse {
                message: format!("TOML parsing error: {}", e),
            })?;

        // An unset ${SJ_KEY} survives substitution verbatim; treat it as missing.
        if let Some(key) = &config.superjob.api_key {
            if key.trim().is_empty() || key.starts_with("${") {
                tracing::warn!("superjob.api_key is empty or unresolved, ignoring it");
                config.superjob.api_key = None;
            }
        }

        Ok(config)
    }

    /// Replaces `${VAR}` with `lookup(VAR)`, leaving unknown variables
    /// untouched.
    fn substitute_vars<F>(content: &str, lookup: F) -> Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| StatsError::ConfigParse {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        if self.search.languages.is_empty() {
            return Err(StatsError::MissingConfig {
                field: "search.languages".to_string(),
            });
        }
        for language in &self.search.languages {
            validate_non_empty_string("search.languages", language)?;
        }
        validate_positive_number("search.max_pages", self.search.max_pages, 1)?;

        validate_non_empty_string("http.user_agent", &self.http.user_agent)?;

        validate_url("headhunter.endpoint", &self.headhunter.endpoint)?;
        validate_range("headhunter.per_page", self.headhunter.per_page, 1, 100)?;
        validate_non_empty_string("headhunter.currency", &self.headhunter.currency)?;

        validate_url("superjob.endpoint", &self.superjob.endpoint)?;
        validate_range("superjob.count", self.superjob.count, 1, 100)?;
        validate_non_empty_string("superjob.currency", &self.superjob.currency)?;

        Ok(())
    }
}
