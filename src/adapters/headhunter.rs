use crate::config::{HeadHunterConfig, HttpConfig};
use crate::core::{SalaryBounds, VacancyPage, VacancySource};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{Local, Months, NaiveDate};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct HeadHunterVacancy {
    #[serde(default)]
    pub salary: Option<HeadHunterSalary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeadHunterSalary {
    #[serde(default)]
    pub from: Option<f64>,
    #[serde(default)]
    pub to: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
}

impl SalaryBounds for HeadHunterVacancy {
    fn salary_from(&self) -> Option<f64> {
        self.salary.as_ref().and_then(|s| s.from)
    }

    fn salary_to(&self) -> Option<f64> {
        self.salary.as_ref().and_then(|s| s.to)
    }

    fn currency(&self) -> Option<&str> {
        self.salary.as_ref().and_then(|s| s.currency.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Vec<HeadHunterVacancy>,
    found: u64,
    pages: u32,
}

/// Client for the HeadHunter `/vacancies` search.
pub struct HeadHunterClient {
    client: Client,
    config: HeadHunterConfig,
    date_from: NaiveDate,
}

impl HeadHunterClient {
    pub fn new(config: HeadHunterConfig, http: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(http.user_agent.as_str())
            .timeout(Duration::from_secs(http.timeout_secs))
            .build()?;

        let today = Local::now().date_naive();
        let date_from = today
            .checked_sub_months(Months::new(config.period_months))
            .unwrap_or(today);

        Ok(Self {
            client,
            config,
            date_from,
        })
    }

    /// Pins the publication cutoff instead of deriving it from today.
    pub fn with_date_from(mut self, date_from: NaiveDate) -> Self {
        self.date_from = date_from;
        self
    }

    fn search_text(language: &str) -> String {
        format!("Программист {}", language)
    }
}

#[async_trait]
impl VacancySource for HeadHunterClient {
    type Vacancy = HeadHunterVacancy;

    fn title(&self) -> &str {
        &self.config.title
    }

    fn currency(&self) -> &str {
        &self.config.currency
    }

    async fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage<HeadHunterVacancy>> {
        let query = [
            ("text", Self::search_text(language)),
            ("area", self.config.area.clone()),
            ("date_from", self.date_from.format("%Y-%m-%d").to_string()),
            ("per_page", self.config.per_page.to_string()),
            ("page", page.to_string()),
        ];

        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&query)
            .send()
            .await?
            .error_for_status()?;
        tracing::debug!("HeadHunter response status: {}", response.status());

        let body = response.bytes().await?;
        let parsed: SearchResponse = serde_json::from_slice(&body)?;

        Ok(VacancyPage {
            has_more: page + 1 < parsed.pages,
            found: parsed.found,
            vacancies: parsed.items,
        })
    }
}
