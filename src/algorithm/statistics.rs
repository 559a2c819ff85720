//! Exploratory statistics over the loaded tables
//!
//! Read-only summaries for the presentation layer's exploratory view:
//! table shapes, numeric summaries for stay length and age, and frequency
//! tables for the categorical columns. Computed from the preprocessed
//! tables, before any rule evaluation.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::loader::{self, ClaimDataset};

/// Row and column count of one input table
#[derive(Debug, Clone, Serialize)]
pub struct TableShape {
    /// Source file name
    pub name: &'static str,
    /// Number of data rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

/// Summary of a numeric column, ignoring nulls
#[derive(Debug, Clone, Default, Serialize)]
pub struct NumericSummary {
    /// Number of non-null values
    pub count: usize,
    /// Smallest value
    pub min: Option<i64>,
    /// Largest value
    pub max: Option<i64>,
    /// Arithmetic mean of the non-null values
    pub mean: Option<f64>,
}

impl NumericSummary {
    /// Summarize the non-null values of an iterator
    pub fn of(values: impl Iterator<Item = i64>) -> Self {
        let mut summary = Self::default();
        let mut sum = 0i64;
        for value in values {
            summary.count += 1;
            sum += value;
            summary.min = Some(summary.min.map_or(value, |m| m.min(value)));
            summary.max = Some(summary.max.map_or(value, |m| m.max(value)));
        }
        if summary.count > 0 {
            summary.mean = Some(sum as f64 / summary.count as f64);
        }
        summary
    }
}

/// One value and its occurrence count
#[derive(Debug, Clone, Serialize)]
pub struct FrequencyEntry {
    /// Observed value
    pub value: String,
    /// Number of occurrences
    pub count: usize,
}

/// Occurrence counts for a categorical column, sorted descending
#[derive(Debug, Clone, Default, Serialize)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    /// Count occurrences from an iterator of values, skipping nulls.
    /// Entries are sorted descending by count, first-seen order among ties.
    pub fn of<'a>(values: impl Iterator<Item = &'a str>) -> Self {
        let mut order: Vec<&str> = Vec::new();
        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        for value in values {
            match counts.get_mut(value) {
                Some(count) => *count += 1,
                None => {
                    order.push(value);
                    counts.insert(value, 1);
                }
            }
        }
        let mut entries: Vec<FrequencyEntry> = order
            .into_iter()
            .map(|value| FrequencyEntry {
                count: counts[value],
                value: value.to_string(),
            })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        Self { entries }
    }

    /// All entries, most frequent first
    #[must_use]
    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    /// The `n` most frequent entries
    #[must_use]
    pub fn top(&self, n: usize) -> &[FrequencyEntry] {
        &self.entries[..self.entries.len().min(n)]
    }
}

/// Exploratory statistics over one loaded dataset
#[derive(Debug, Clone, Serialize)]
pub struct ExplorationReport {
    /// Shapes of the six input tables
    pub shapes: Vec<TableShape>,
    /// Stay-length distribution over claims
    pub length_of_stay: NumericSummary,
    /// Age distribution over policyholders
    pub age: NumericSummary,
    /// Diagnosis labels by frequency
    pub diagnoses: FrequencyTable,
    /// Policyholder gender distribution
    pub gender: FrequencyTable,
    /// Product distribution
    pub product: FrequencyTable,
    /// Hospitals per location
    pub hospitals_per_location: FrequencyTable,
    /// Doctors per (canonicalized) specialty
    pub doctors_per_specialty: FrequencyTable,
    /// Policies per agent; empty when the dataset has no Agent column
    pub policies_per_agent: FrequencyTable,
}

/// Compute exploratory statistics from the preprocessed dataset
#[must_use]
pub fn explore(dataset: &ClaimDataset) -> ExplorationReport {
    let policy_cols = if dataset.has_agent { 6 } else { 5 };
    let shapes = vec![
        TableShape {
            name: loader::CLAIM_TABLE,
            rows: dataset.claims.len(),
            cols: 5,
        },
        TableShape {
            name: loader::DIAGNOSIS_TABLE,
            rows: dataset.diagnoses.len(),
            cols: 2,
        },
        TableShape {
            name: loader::ASSIGNMENT_TABLE,
            rows: dataset.assignments.len(),
            cols: 2,
        },
        TableShape {
            name: loader::DOCTOR_TABLE,
            rows: dataset.doctors.len(),
            cols: 2,
        },
        TableShape {
            name: loader::HOSPITAL_TABLE,
            rows: dataset.hospitals.len(),
            cols: 2,
        },
        TableShape {
            name: loader::POLICY_TABLE,
            rows: dataset.policies.len(),
            cols: policy_cols,
        },
    ];

    let policies_per_agent = if dataset.has_agent {
        FrequencyTable::of(
            dataset
                .policies
                .iter()
                .filter_map(|p| p.agent.as_deref()),
        )
    } else {
        FrequencyTable::default()
    };

    ExplorationReport {
        shapes,
        length_of_stay: NumericSummary::of(
            dataset.claims.iter().filter_map(|c| c.length_of_stay),
        ),
        age: NumericSummary::of(
            dataset
                .policies
                .iter()
                .filter_map(|p| p.age.map(i64::from)),
        ),
        diagnoses: FrequencyTable::of(dataset.diagnoses.iter().map(|d| d.diagnosis.as_str())),
        gender: FrequencyTable::of(dataset.policies.iter().filter_map(|p| p.gender.as_deref())),
        product: FrequencyTable::of(dataset.policies.iter().filter_map(|p| p.product.as_deref())),
        hospitals_per_location: FrequencyTable::of(
            dataset.hospitals.iter().filter_map(|h| h.location.as_deref()),
        ),
        doctors_per_specialty: FrequencyTable::of(
            dataset.doctors.iter().map(|d| d.specialty.as_str()),
        ),
        policies_per_agent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_summary_computes_count_min_max_mean() {
        let summary = NumericSummary::of([10, 2, 6].into_iter());
        assert_eq!(summary.count, 3);
        assert_eq!(summary.min, Some(2));
        assert_eq!(summary.max, Some(10));
        assert_eq!(summary.mean, Some(6.0));
    }

    #[test]
    fn empty_numeric_summary_is_all_none() {
        let summary = NumericSummary::of(std::iter::empty());
        assert_eq!(summary.count, 0);
        assert_eq!(summary.min, None);
        assert_eq!(summary.mean, None);
    }

    #[test]
    fn frequency_table_sorts_descending_with_stable_ties() {
        let table = FrequencyTable::of(["b", "a", "a", "c", "b", "a"].into_iter());
        let values: Vec<&str> = table.entries().iter().map(|e| e.value.as_str()).collect();
        assert_eq!(values, ["a", "b", "c"]);
        assert_eq!(table.entries()[0].count, 3);
        assert_eq!(table.top(2).len(), 2);
    }
}
