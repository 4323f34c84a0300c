use crate::config::{HttpConfig, SuperJobConfig};
use crate::core::{SalaryBounds, VacancyPage, VacancySource};
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// SuperJob reports an unspecified bound as `0`, which the estimator treats
/// as absent.
#[derive(Debug, Clone, Deserialize)]
pub struct SuperJobVacancy {
    #[serde(default)]
    pub payment_from: Option<f64>,
    #[serde(default)]
    pub payment_to: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
}

impl SalaryBounds for SuperJobVacancy {
    fn salary_from(&self) -> Option<f64> {
        self.payment_from
    }

    fn salary_to(&self) -> Option<f64> {
        self.payment_to
    }

    fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    objects: Vec<SuperJobVacancy>,
    total: u64,
    more: bool,
}

/// Client for the SuperJob `/2.0/vacancies/` search.
pub struct SuperJobClient {
    client: Client,
    config: SuperJobConfig,
    api_key: String,
}

impl SuperJobClient {
    /// Fails when no API key is configured.
    pub fn new(config: SuperJobConfig, http: &HttpConfig) -> Result<Self> {
        let api_key = validate_required_field("superjob.api_key", &config.api_key)?.clone();

        let client = Client::builder()
            .user_agent(http.user_agent.as_str())
            .timeout(Duration::from_secs(http.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    fn search_query(&self, language: &str, page: u32) -> Vec<(&'static str, String)> {
        vec![
            ("catalogues", self.config.catalogue.to_string()),
            ("keywords[0][srws]", "1".to_string()),
            ("keywords[0][skwc]", "or".to_string()),
            (
                "keywords[0][keys]",
                format!("программист разработчик developer {}", language),
            ),
            ("keywords[1][srws]", "4".to_string()),
            ("keywords[1][skwc]", "and".to_string()),
            ("keywords[1][keys]", language.to_string()),
            ("town", self.config.town.to_string()),
            ("count", self.config.count.to_string()),
            ("page", page.to_string()),
        ]
    }
}

#[async_trait]
impl VacancySource for SuperJobClient {
    type Vacancy = SuperJobVacancy;

    fn title(&self) -> &str {
        &self.config.title
    }

    fn currency(&self) -> &str {
        &self.config.currency
    }

    async fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage<SuperJobVacancy>> {
        let response = self
            .client
            .get(&self.config.endpoint)
            .header("X-Api-App-Id", &self.api_key)
            .query(&self.search_query(language, page))
            .send()
            .await?
            .error_for_status()?;
        tracing::debug!("SuperJob response status: {}", response.status());

        let body = response.bytes().await?;
        let parsed: SearchResponse = serde_json::from_slice(&body)?;

        Ok(VacancyPage {
            has_more: parsed.more,
            found: parsed.total,
            vacancies: parsed.objects,
        })
    }
}
