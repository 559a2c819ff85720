//! Doctor registry and doctor-to-claim assignment models
//!
//! Specialty text arrives in inconsistent casing and spelling; the
//! preprocessor canonicalizes it through [`normalize_specialty`].

use serde::Serialize;

use crate::utils::title_case;

/// A registered doctor
#[derive(Debug, Clone, Serialize)]
pub struct Doctor {
    /// Doctor identifier (primary key)
    pub doctor_id: String,
    /// Medical specialty, canonicalized by the preprocessor
    pub specialty: String,
}

impl Doctor {
    /// Create a new doctor record
    #[must_use]
    pub fn new(doctor_id: String, specialty: String) -> Self {
        Self {
            doctor_id,
            specialty,
        }
    }
}

/// Assignment of a doctor to a claim
#[derive(Debug, Clone, Serialize)]
pub struct DoctorAssignment {
    /// Claim the doctor worked on
    pub claim_id: String,
    /// Assigned doctor
    pub doctor_id: String,
}

impl DoctorAssignment {
    /// Create a new assignment row
    #[must_use]
    pub fn new(claim_id: String, doctor_id: String) -> Self {
        Self {
            claim_id,
            doctor_id,
        }
    }
}

/// Canonicalize a specialty label: trim, title-case, then collapse known
/// spelling variants to a single canonical name. Reapplying to already
/// canonical input is a no-op.
#[must_use]
pub fn normalize_specialty(raw: &str) -> String {
    let titled = title_case(raw);
    match titled.as_str() {
        "Paediatrician" | "Pediatrician" | "Paediatrics" => "Paediatrician".to_string(),
        _ => titled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_paediatrician_variants() {
        assert_eq!(normalize_specialty("pediatrician "), "Paediatrician");
        assert_eq!(normalize_specialty("PAEDIATRICS"), "Paediatrician");
        assert_eq!(normalize_specialty("Paediatrician"), "Paediatrician");
    }

    #[test]
    fn unmatched_values_pass_through_title_cased() {
        assert_eq!(normalize_specialty("  general surgery"), "General Surgery");
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in ["pediatrician", "general surgery", "CARDIOLOGY"] {
            let once = normalize_specialty(raw);
            assert_eq!(normalize_specialty(&once), once);
        }
    }
}
