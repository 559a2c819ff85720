//! Denormalized master view
//!
//! One [`MasterRow`] per claim: the claim's own columns, the pre-reduced
//! diagnosis/doctor counts, and the left-joined policy and hospital
//! attributes. This is a view rebuilt in full on every run, never stored.

use chrono::NaiveDate;
use serde::Serialize;

/// One denormalized row per claim
#[derive(Debug, Clone, Serialize)]
pub struct MasterRow {
    /// Claim identifier
    pub claim_id: String,
    /// Policy foreign key as recorded on the claim
    pub policy_id: String,
    /// Hospital foreign key as recorded on the claim
    pub hospital_id: String,
    /// Admission date
    pub admission_date: Option<NaiveDate>,
    /// Discharge date
    pub discharge_date: Option<NaiveDate>,
    /// Derived stay length in days
    pub length_of_stay: Option<i64>,
    /// Number of diagnosis rows for this claim; 0 when absent from the
    /// diagnosis table, never null
    pub num_diagnoses: u32,
    /// Number of doctor assignments for this claim; 0 when absent, never
    /// null
    pub num_doctors: u32,
    /// Policyholder gender, from the joined policy
    pub gender: Option<String>,
    /// Product, from the joined policy
    pub product: Option<String>,
    /// Selling agent, from the joined policy
    pub agent: Option<String>,
    /// Policyholder age at inception, from the joined policy
    pub age: Option<i32>,
    /// Hospital location, from the joined hospital registry
    pub hospital_location: Option<String>,
}
