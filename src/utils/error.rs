use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },
}

impl StatsError {
    /// True for failures coming from the upstream job boards rather than local setup.
    pub fn is_upstream(&self) -> bool {
        matches!(self, StatsError::Http(_) | StatsError::Decode(_))
    }

    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            StatsError::MissingConfig { field } if field == "superjob.api_key" => Some(
                "set SJ_KEY (or pass --superjob-key), or run with --provider headhunter",
            ),
            StatsError::ConfigParse { .. } | StatsError::InvalidConfigValue { .. } => {
                Some("check the --config file and command line flags")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
