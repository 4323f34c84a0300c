use crate::core::estimator::estimate_vacancy;
use crate::domain::model::LanguageStats;
use crate::domain::ports::SalaryBounds;

/// Running sum and count of salary estimates.
///
/// Merging is commutative and associative, so pages can be folded in any
/// order or in chunks.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SalaryAccumulator {
    sum: f64,
    count: u64,
}

impl SalaryAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, estimate: Option<f64>) {
        if let Some(value) = estimate {
            self.sum += value;
            self.count += 1;
        }
    }

    pub fn merge(mut self, other: SalaryAccumulator) -> Self {
        self.sum += other.sum;
        self.count += other.count;
        self
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Truncated mean, 0 when empty.
    pub fn average(&self) -> u64 {
        if self.count == 0 {
            return 0;
        }
        (self.sum / self.count as f64) as u64
    }

    pub fn into_stats(self, vacancies_found: u64) -> LanguageStats {
        LanguageStats {
            vacancies_found,
            vacancies_processed: self.count,
            avg_salary: self.average(),
        }
    }
}

impl FromIterator<Option<f64>> for SalaryAccumulator {
    fn from_iter<I: IntoIterator<Item = Option<f64>>>(iter: I) -> Self {
        let mut acc = SalaryAccumulator::new();
        for estimate in iter {
            acc.push(estimate);
        }
        acc
    }
}

/// Builds the stats for one language from the fetched records.
///
/// `vacancies_found` is the board's reported total and is passed through
/// untouched.
pub fn aggregate<I>(vacancies_found: u64, vacancies: I, currency: &str) -> LanguageStats
where
    I: IntoIterator,
    I::Item: SalaryBounds,
{
    vacancies
        .into_iter()
        .map(|vacancy| estimate_vacancy(&vacancy, currency))
        .collect::<SalaryAccumulator>()
        .into_stats(vacancies_found)
}
