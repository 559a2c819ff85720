//! Policy entity model
//!
//! Policyholder age is derived as inception year minus birth year. A
//! negative result, or a missing inception date or birth year, leaves the
//! age null — the `age_missing` rule keys off exactly that.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// An insurance policy record
#[derive(Debug, Clone, Serialize)]
pub struct Policy {
    /// Policy identifier (primary key)
    pub policy_id: String,
    /// Policy inception date, if parseable
    pub inception_date: Option<NaiveDate>,
    /// Policyholder birth year
    pub birth_year: Option<i32>,
    /// Policyholder gender
    pub gender: Option<String>,
    /// Product sold under this policy
    pub product: Option<String>,
    /// Selling agent; absent entirely when the source table has no
    /// Agent column
    pub agent: Option<String>,
    /// Policyholder age at inception; `None` when inputs are missing or
    /// the computed value is negative
    pub age: Option<i32>,
}

impl Policy {
    /// Create a policy with no derived columns filled yet
    #[must_use]
    pub fn new(
        policy_id: String,
        inception_date: Option<NaiveDate>,
        birth_year: Option<i32>,
        gender: Option<String>,
        product: Option<String>,
        agent: Option<String>,
    ) -> Self {
        Self {
            policy_id,
            inception_date,
            birth_year,
            gender,
            product,
            agent,
            age: None,
        }
    }

    /// Fill `age` from the inception year and birth year. Negative
    /// results become `None`, never a negative number.
    pub fn derive_age(&mut self) {
        self.age = match (self.inception_date, self.birth_year) {
            (Some(inception), Some(birth_year)) => {
                let age = inception.year() - birth_year;
                (age >= 0).then_some(age)
            }
            _ => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(inception: Option<NaiveDate>, birth_year: Option<i32>) -> Policy {
        Policy::new("P1".into(), inception, birth_year, None, None, None)
    }

    #[test]
    fn age_is_inception_year_minus_birth_year() {
        let mut p = policy(NaiveDate::from_ymd_opt(2023, 1, 1), Some(1990));
        p.derive_age();
        assert_eq!(p.age, Some(33));
    }

    #[test]
    fn negative_age_becomes_none() {
        let mut p = policy(NaiveDate::from_ymd_opt(2000, 6, 1), Some(2010));
        p.derive_age();
        assert_eq!(p.age, None);
    }

    #[test]
    fn missing_inputs_leave_age_none() {
        let mut p = policy(None, Some(1990));
        p.derive_age();
        assert_eq!(p.age, None);

        let mut p = policy(NaiveDate::from_ymd_opt(2023, 1, 1), None);
        p.derive_age();
        assert_eq!(p.age, None);
    }
}
