use crate::domain::model::VacancyPage;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Raw salary fields of a vacancy, as the board reported them.
pub trait SalaryBounds {
    fn salary_from(&self) -> Option<f64>;
    fn salary_to(&self) -> Option<f64>;
    fn currency(&self) -> Option<&str>;
}

impl<T: SalaryBounds + ?Sized> SalaryBounds for &T {
    fn salary_from(&self) -> Option<f64> {
        (**self).salary_from()
    }

    fn salary_to(&self) -> Option<f64> {
        (**self).salary_to()
    }

    fn currency(&self) -> Option<&str> {
        (**self).currency()
    }
}

#[async_trait]
pub trait VacancySource: Send + Sync {
    type Vacancy: SalaryBounds + Send;

    /// Title printed above the table.
    fn title(&self) -> &str;

    /// Currency token an estimate must carry to be counted.
    fn currency(&self) -> &str;

    async fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage<Self::Vacancy>>;
}
