//! Preprocessor stage
//!
//! Fills the derived columns on the loaded tables: stay length on claims,
//! policyholder age on policies, and canonical specialty labels on the
//! doctor registry. Identifying columns are never touched, and the pass is
//! idempotent.

use log::debug;

use crate::loader::ClaimDataset;
use crate::models::doctor::normalize_specialty;

/// Derive computed columns and normalize categorical text in place
pub fn preprocess(dataset: &mut ClaimDataset) {
    for claim in &mut dataset.claims {
        claim.derive_length_of_stay();
    }

    for policy in &mut dataset.policies {
        policy.derive_age();
    }

    for doctor in &mut dataset.doctors {
        doctor.specialty = normalize_specialty(&doctor.specialty);
    }

    debug!(
        "Preprocessed {} claims ({} with stay length), {} policies ({} with age)",
        dataset.claims.len(),
        dataset
            .claims
            .iter()
            .filter(|c| c.length_of_stay.is_some())
            .count(),
        dataset.policies.len(),
        dataset.policies.iter().filter(|p| p.age.is_some()).count(),
    );
}
