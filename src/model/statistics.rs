use crate::model::Person;
use serde::Serialize;

/// Aggregate metrics over the registry's current record set.
///
/// Averages are defined as 0.0 (not NaN) for an empty registry so the value
/// is always serializable and comparable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Statistics {
    pub count: usize,
    pub average_monthly_salary: f64,
    pub average_age: f64,
    pub total_salary_mass: f64,
}

impl Statistics {
    /// The all-zero statistics of an empty registry.
    pub fn empty() -> Self {
        Self {
            count: 0,
            average_monthly_salary: 0.0,
            average_age: 0.0,
            total_salary_mass: 0.0,
        }
    }

    /// Computes statistics over a snapshot of records.
    ///
    /// The salary mass sums monthly salaries only; a manager's annual bonus
    /// does not contribute.
    pub fn from_persons<'a, I>(persons: I) -> Self
    where
        I: IntoIterator<Item = &'a Person>,
    {
        let mut count = 0usize;
        let mut age_sum = 0u64;
        let mut salary_sum = 0.0f64;

        for person in persons {
            count += 1;
            age_sum += u64::from(person.age());
            salary_sum += person.monthly_salary();
        }

        if count == 0 {
            return Self::empty();
        }

        Self {
            count,
            average_monthly_salary: salary_sum / count as f64,
            average_age: age_sum as f64 / count as f64,
            total_salary_mass: salary_sum,
        }
    }
}
