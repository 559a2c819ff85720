//! Diagnosis entity model
//!
//! Diagnoses recorded against a claim. A claim may carry any number of
//! diagnosis rows; the join engine reduces them to a per-claim count.

use serde::Serialize;

/// A diagnosis recorded against a claim
#[derive(Debug, Clone, Serialize)]
pub struct ClaimDiagnosis {
    /// Claim the diagnosis belongs to
    pub claim_id: String,
    /// Diagnosis label as recorded in the source table
    pub diagnosis: String,
}

impl ClaimDiagnosis {
    /// Create a new diagnosis row
    #[must_use]
    pub fn new(claim_id: String, diagnosis: String) -> Self {
        Self {
            claim_id,
            diagnosis,
        }
    }
}
