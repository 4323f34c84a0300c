use crate::domain::ports::SalaryBounds;

const LOWER_BOUND_FACTOR: f64 = 1.2;
const UPPER_BOUND_FACTOR: f64 = 0.8;

/// Estimates a salary from an optional fork.
///
/// Only positive bounds count: boards report an unspecified bound as `null`
/// or `0`.
pub fn predict_salary(from: Option<f64>, to: Option<f64>) -> Option<f64> {
    let from = from.filter(|v| *v > 0.0);
    let to = to.filter(|v| *v > 0.0);

    match (from, to) {
        (Some(from), Some(to)) => Some((from + to) / 2.0),
        (Some(from), None) => Some(from * LOWER_BOUND_FACTOR),
        (None, Some(to)) => Some(to * UPPER_BOUND_FACTOR),
        (None, None) => None,
    }
}

/// Estimates a vacancy salary, counting it only when its currency token is
/// exactly `currency`.
pub fn estimate_vacancy<V: SalaryBounds + ?Sized>(vacancy: &V, currency: &str) -> Option<f64> {
    if vacancy.currency() != Some(currency) {
        return None;
    }
    predict_salary(vacancy.salary_from(), vacancy.salary_to())
}
