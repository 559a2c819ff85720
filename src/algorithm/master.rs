//! Join engine
//!
//! Builds the denormalized master view: one row per claim, with the
//! diagnosis and doctor-assignment tables pre-reduced to per-claim counts
//! and the policy and hospital attributes left-joined on. Claims with no
//! matching policy or hospital keep null attributes but stay in the
//! output, so the master row count always equals the claim row count.

use itertools::Itertools;
use log::debug;
use rustc_hash::FxHashMap;

use crate::loader::ClaimDataset;
use crate::models::{Hospital, MasterRow, Policy};

/// Build one [`MasterRow`] per claim, preserving claim order
#[must_use]
pub fn build_master(dataset: &ClaimDataset) -> Vec<MasterRow> {
    let diagnosis_counts = dataset
        .diagnoses
        .iter()
        .counts_by(|d| d.claim_id.as_str());
    let doctor_counts = dataset
        .assignments
        .iter()
        .counts_by(|a| a.claim_id.as_str());

    let policies: FxHashMap<&str, &Policy> = dataset
        .policies
        .iter()
        .map(|p| (p.policy_id.as_str(), p))
        .collect();
    let hospitals: FxHashMap<&str, &Hospital> = dataset
        .hospitals
        .iter()
        .map(|h| (h.hospital_id.as_str(), h))
        .collect();

    let master: Vec<MasterRow> = dataset
        .claims
        .iter()
        .map(|claim| {
            let policy = policies.get(claim.policy_id.as_str());
            let hospital = hospitals.get(claim.hospital_id.as_str());
            MasterRow {
                claim_id: claim.claim_id.clone(),
                policy_id: claim.policy_id.clone(),
                hospital_id: claim.hospital_id.clone(),
                admission_date: claim.admission_date,
                discharge_date: claim.discharge_date,
                length_of_stay: claim.length_of_stay,
                num_diagnoses: diagnosis_counts
                    .get(claim.claim_id.as_str())
                    .map_or(0, |&n| n as u32),
                num_doctors: doctor_counts
                    .get(claim.claim_id.as_str())
                    .map_or(0, |&n| n as u32),
                gender: policy.and_then(|p| p.gender.clone()),
                product: policy.and_then(|p| p.product.clone()),
                agent: policy.and_then(|p| p.agent.clone()),
                age: policy.and_then(|p| p.age),
                hospital_location: hospital.and_then(|h| h.location.clone()),
            }
        })
        .collect();

    debug!(
        "Built master view: {} rows, {} without policy match, {} without hospital match",
        master.len(),
        master.iter().filter(|r| !policies.contains_key(r.policy_id.as_str())).count(),
        master.iter().filter(|r| !hospitals.contains_key(r.hospital_id.as_str())).count(),
    );

    master
}
