//! Claim entity model
//!
//! One row per insurance claim episode, tied to one policy and one
//! hospital. The stay length is derived from the admission and discharge
//! dates and is inclusive of both endpoints.

use chrono::NaiveDate;
use serde::Serialize;

/// A single insurance claim episode
#[derive(Debug, Clone, Serialize)]
pub struct Claim {
    /// Claim identifier (primary key)
    pub claim_id: String,
    /// Policy the claim was made under
    pub policy_id: String,
    /// Hospital where the episode took place
    pub hospital_id: String,
    /// Admission date, if parseable
    pub admission_date: Option<NaiveDate>,
    /// Discharge date, if parseable
    pub discharge_date: Option<NaiveDate>,
    /// Stay length in days, inclusive of both endpoints; `None` when either
    /// date is missing or the computed span is negative
    pub length_of_stay: Option<i64>,
}

impl Claim {
    /// Create a claim with no derived columns filled yet
    #[must_use]
    pub fn new(
        claim_id: String,
        policy_id: String,
        hospital_id: String,
        admission_date: Option<NaiveDate>,
        discharge_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            claim_id,
            policy_id,
            hospital_id,
            admission_date,
            discharge_date,
            length_of_stay: None,
        }
    }

    /// Fill `length_of_stay` from the admission and discharge dates.
    ///
    /// Negative spans (discharge before admission) become `None` rather
    /// than being clamped.
    pub fn derive_length_of_stay(&mut self) {
        self.length_of_stay = match (self.admission_date, self.discharge_date) {
            (Some(admitted), Some(discharged)) => {
                let days = (discharged - admitted).num_days() + 1;
                (days >= 0).then_some(days)
            }
            _ => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claim(admission: Option<NaiveDate>, discharge: Option<NaiveDate>) -> Claim {
        Claim::new(
            "C1".into(),
            "P1".into(),
            "H1".into(),
            admission,
            discharge,
        )
    }

    #[test]
    fn stay_is_inclusive_of_both_endpoints() {
        let mut c = claim(
            NaiveDate::from_ymd_opt(2023, 1, 1),
            NaiveDate::from_ymd_opt(2023, 1, 10),
        );
        c.derive_length_of_stay();
        assert_eq!(c.length_of_stay, Some(10));
    }

    #[test]
    fn same_day_stay_is_one() {
        let mut c = claim(
            NaiveDate::from_ymd_opt(2023, 1, 1),
            NaiveDate::from_ymd_opt(2023, 1, 1),
        );
        c.derive_length_of_stay();
        assert_eq!(c.length_of_stay, Some(1));
    }

    #[test]
    fn negative_stay_becomes_none() {
        let mut c = claim(
            NaiveDate::from_ymd_opt(2023, 1, 10),
            NaiveDate::from_ymd_opt(2023, 1, 1),
        );
        c.derive_length_of_stay();
        assert_eq!(c.length_of_stay, None);
    }

    #[test]
    fn missing_date_yields_none() {
        let mut c = claim(NaiveDate::from_ymd_opt(2023, 1, 1), None);
        c.derive_length_of_stay();
        assert_eq!(c.length_of_stay, None);
    }
}
