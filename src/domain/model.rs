use serde::{Deserialize, Serialize};

/// Per-language summary of one job board search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LanguageStats {
    /// Total reported by the board, not the number of records fetched.
    pub vacancies_found: u64,
    /// Vacancies that produced a salary estimate.
    pub vacancies_processed: u64,
    /// Truncated mean of the estimates, 0 when nothing was processed.
    pub avg_salary: u64,
}

/// One decoded page of a board response.
#[derive(Debug, Clone)]
pub struct VacancyPage<V> {
    pub vacancies: Vec<V>,
    pub found: u64,
    pub has_more: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageReport {
    pub language: String,
    pub stats: LanguageStats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderReport {
    pub title: String,
    pub rows: Vec<LanguageReport>,
}
