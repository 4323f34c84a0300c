use crate::core::aggregator::aggregate;
use crate::domain::model::{LanguageReport, LanguageStats, ProviderReport};
use crate::domain::ports::VacancySource;
use crate::utils::error::Result;
use std::time::Duration;

/// Walks a board page by page for each language and aggregates the results.
///
/// Requests are issued one at a time with `page_delay` between any two of
/// them, including across languages.
pub struct StatsCollector<S: VacancySource> {
    source: S,
    page_delay: Duration,
    max_pages: u32,
}

impl<S: VacancySource> StatsCollector<S> {
    pub fn new(source: S, page_delay: Duration, max_pages: u32) -> Self {
        Self {
            source,
            page_delay,
            max_pages: max_pages.max(1),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn collect(&self, languages: &[String]) -> Result<ProviderReport> {
        tracing::info!(
            "Collecting {} languages from {}",
            languages.len(),
            self.source.title()
        );

        let mut rows = Vec::with_capacity(languages.len());
        for (index, language) in languages.iter().enumerate() {
            if index > 0 {
                tokio::time::sleep(self.page_delay).await;
            }
            let stats = self.collect_language(language).await?;
            tracing::info!(
                "{} / {}: found {}, processed {}, average {}",
                self.source.title(),
                language,
                stats.vacancies_found,
                stats.vacancies_processed,
                stats.avg_salary
            );
            rows.push(LanguageReport {
                language: language.clone(),
                stats,
            });
        }

        Ok(ProviderReport {
            title: self.source.title().to_string(),
            rows,
        })
    }

    pub async fn collect_language(&self, language: &str) -> Result<LanguageStats> {
        let mut vacancies = Vec::new();
        let mut found = 0;
        let mut page = 0;

        loop {
            tracing::debug!("Fetching {} page {} for {}", self.source.title(), page, language);
            let batch = self.source.fetch_page(language, page).await?;
            tracing::debug!(
                "Got {} vacancies (reported total {}, more: {})",
                batch.vacancies.len(),
                batch.found,
                batch.has_more
            );

            if page == 0 {
                found = batch.found;
            }
            vacancies.extend(batch.vacancies);
            page += 1;

            if !batch.has_more {
                break;
            }
            if page >= self.max_pages {
                tracing::warn!(
                    "Stopping {} pagination for {} at the {} page cap",
                    self.source.title(),
                    language,
                    self.max_pages
                );
                break;
            }
            tokio::time::sleep(self.page_delay).await;
        }

        Ok(aggregate(found, &vacancies, self.source.currency()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::VacancyPage;
    use crate::domain::ports::SalaryBounds;
    use crate::utils::error::StatsError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Debug, Clone)]
    struct Posting(Option<f64>, Option<f64>);

    impl SalaryBounds for Posting {
        fn salary_from(&self) -> Option<f64> {
            self.0
        }

        fn salary_to(&self) -> Option<f64> {
            self.1
        }

        fn currency(&self) -> Option<&str> {
            Some("rub")
        }
    }

    /// Serves pre-baked pages and records every request.
    struct ScriptedSource {
        pages: Vec<Vec<Posting>>,
        found: u64,
        requests: Mutex<Vec<(String, u32)>>,
    }

    impl ScriptedSource {
        fn new(pages: Vec<Vec<Posting>>, found: u64) -> Self {
            Self {
                pages,
                found,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<(String, u32)> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl VacancySource for ScriptedSource {
        type Vacancy = Posting;

        fn title(&self) -> &str {
            "Scripted"
        }

        fn currency(&self) -> &str {
            "rub"
        }

        async fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage<Posting>> {
            self.requests
                .lock()
                .unwrap()
                .push((language.to_string(), page));

            let index = page as usize;
            let vacancies = self.pages.get(index).cloned().ok_or_else(|| {
                StatsError::ConfigParse {
                    message: format!("no page {}", page),
                }
            })?;
            Ok(VacancyPage {
                vacancies,
                found: self.found,
                has_more: index + 1 < self.pages.len(),
            })
        }
    }

    fn three_pages() -> Vec<Vec<Posting>> {
        vec![
            vec![Posting(Some(100.0), Some(200.0))],
            vec![Posting(None, Some(150.0)), Posting(None, None)],
            vec![Posting(Some(80.0), None)],
        ]
    }

    #[test]
    fn test_collects_all_pages() {
        let collector = StatsCollector::new(ScriptedSource::new(three_pages(), 4), Duration::ZERO, 20);

        let stats = tokio_test::block_on(collector.collect_language("python")).unwrap();

        assert_eq!(stats.vacancies_found, 4);
        assert_eq!(stats.vacancies_processed, 3);
        assert_eq!(stats.avg_salary, 122);
        assert_eq!(
            collector.source().requests(),
            vec![
                ("python".to_string(), 0),
                ("python".to_string(), 1),
                ("python".to_string(), 2)
            ]
        );
    }

    #[test]
    fn test_page_cap_stops_pagination() {
        let collector = StatsCollector::new(ScriptedSource::new(three_pages(), 4), Duration::ZERO, 2);

        let stats = tokio_test::block_on(collector.collect_language("go")).unwrap();

        assert_eq!(collector.source().requests().len(), 2);
        assert_eq!(stats.vacancies_found, 4);
        assert_eq!(stats.vacancies_processed, 2);
        assert_eq!(stats.avg_salary, 135);
    }

    #[test]
    fn test_report_keeps_language_order() {
        let collector = StatsCollector::new(
            ScriptedSource::new(vec![vec![Posting(Some(1000.0), None)]], 1),
            Duration::ZERO,
            20,
        );
        let languages = vec!["java".to_string(), "C++".to_string()];

        let report = tokio_test::block_on(collector.collect(&languages)).unwrap();

        assert_eq!(report.title, "Scripted");
        let names: Vec<&str> = report.rows.iter().map(|r| r.language.as_str()).collect();
        assert_eq!(names, vec!["java", "C++"]);
        assert_eq!(report.rows[1].stats.avg_salary, 1200);
    }

    #[test]
    fn test_fetch_error_aborts() {
        let collector = StatsCollector::new(ScriptedSource::new(Vec::new(), 0), Duration::ZERO, 20);

        let result = tokio_test::block_on(collector.collect(&["php".to_string()]));

        assert!(result.is_err());
    }
}
