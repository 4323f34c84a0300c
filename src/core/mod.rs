pub mod aggregator;
pub mod collector;
pub mod estimator;

pub use crate::domain::model::{LanguageReport, LanguageStats, ProviderReport, VacancyPage};
pub use crate::domain::ports::{SalaryBounds, VacancySource};
pub use crate::utils::error::Result;
