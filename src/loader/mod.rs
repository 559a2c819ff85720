//! Dataset loader
//!
//! Reads the six fixed-name input tables into typed in-memory tables. A
//! missing file is the only fatal condition and is reported before any
//! parsing starts. Date columns parse leniently: an unrecognized value
//! becomes `None` and the row is kept.
//!
//! The `Agent` column on the policy table is optional in the wild; its
//! presence is detected once here, from the header row, and recorded as a
//! capability flag on the dataset so the aggregation never has to probe
//! for it.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use log::info;
use serde::{Deserialize, Deserializer, de::DeserializeOwned};

use crate::error::{ClaimAuditError, Result};
use crate::models::{Claim, ClaimDiagnosis, Doctor, DoctorAssignment, Hospital, Policy};
use crate::utils::parse_date;

/// File name of the claim table
pub const CLAIM_TABLE: &str = "Claim_Basic.csv";
/// File name of the diagnosis table
pub const DIAGNOSIS_TABLE: &str = "Claim_Diagnosis.csv";
/// File name of the doctor-assignment table
pub const ASSIGNMENT_TABLE: &str = "Claim_Doctor.csv";
/// File name of the doctor registry
pub const DOCTOR_TABLE: &str = "Doctor_Info.csv";
/// File name of the hospital registry
pub const HOSPITAL_TABLE: &str = "Hospital_Info.csv";
/// File name of the policy table
pub const POLICY_TABLE: &str = "Policy_Info.csv";

/// All six required input tables
pub const INPUT_TABLES: [&str; 6] = [
    CLAIM_TABLE,
    DIAGNOSIS_TABLE,
    ASSIGNMENT_TABLE,
    DOCTOR_TABLE,
    HOSPITAL_TABLE,
    POLICY_TABLE,
];

/// The six loaded input tables plus dataset-level capabilities
#[derive(Debug)]
pub struct ClaimDataset {
    /// Claim table, one row per claim episode
    pub claims: Vec<Claim>,
    /// Diagnosis rows, many per claim
    pub diagnoses: Vec<ClaimDiagnosis>,
    /// Doctor-to-claim assignment rows
    pub assignments: Vec<DoctorAssignment>,
    /// Doctor registry
    pub doctors: Vec<Doctor>,
    /// Hospital registry
    pub hospitals: Vec<Hospital>,
    /// Policy table
    pub policies: Vec<Policy>,
    /// Whether the policy table carries an Agent column
    pub has_agent: bool,
}

impl ClaimDataset {
    /// Load all six tables from a data directory.
    ///
    /// Fails with [`ClaimAuditError::MissingInput`] naming the first absent
    /// file; all six are checked before any parsing begins.
    pub fn load(dir: &Path) -> Result<Self> {
        for name in INPUT_TABLES {
            let path = dir.join(name);
            if !path.is_file() {
                return Err(ClaimAuditError::MissingInput(path));
            }
        }

        let claims: Vec<Claim> = read_table::<RawClaim>(&dir.join(CLAIM_TABLE))?
            .into_iter()
            .map(Claim::from)
            .collect();
        let diagnoses: Vec<ClaimDiagnosis> = read_table::<RawDiagnosis>(&dir.join(DIAGNOSIS_TABLE))?
            .into_iter()
            .map(ClaimDiagnosis::from)
            .collect();
        let assignments: Vec<DoctorAssignment> =
            read_table::<RawAssignment>(&dir.join(ASSIGNMENT_TABLE))?
                .into_iter()
                .map(DoctorAssignment::from)
                .collect();
        let doctors: Vec<Doctor> = read_table::<RawDoctor>(&dir.join(DOCTOR_TABLE))?
            .into_iter()
            .map(Doctor::from)
            .collect();
        let hospitals: Vec<Hospital> = read_table::<RawHospital>(&dir.join(HOSPITAL_TABLE))?
            .into_iter()
            .map(Hospital::from)
            .collect();

        let policy_path = dir.join(POLICY_TABLE);
        let file = File::open(&policy_path).map_err(|e| ClaimAuditError::io(&policy_path, e))?;
        let (raw_policies, has_agent) = read_policy_table(file, &policy_path)?;
        let policies: Vec<Policy> = raw_policies.into_iter().map(Policy::from).collect();

        info!(
            "Loaded {} claims, {} diagnoses, {} assignments, {} doctors, {} hospitals, {} policies (agent column: {})",
            claims.len(),
            diagnoses.len(),
            assignments.len(),
            doctors.len(),
            hospitals.len(),
            policies.len(),
            if has_agent { "present" } else { "absent" },
        );

        Ok(Self {
            claims,
            diagnoses,
            assignments,
            doctors,
            hospitals,
            policies,
            has_agent,
        })
    }
}

/// Read a whole CSV table into typed records
fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| ClaimAuditError::csv(path, e))?;
    reader
        .deserialize()
        .map(|record| record.map_err(|e| ClaimAuditError::csv(path, e)))
        .collect()
}

/// Read the policy table, also reporting whether an Agent column exists.
///
/// Takes any reader so tests can feed byte slices; `path` is only used for
/// error context.
pub(crate) fn read_policy_table<R: Read>(
    source: R,
    path: &Path,
) -> Result<(Vec<RawPolicy>, bool)> {
    let mut reader = csv::Reader::from_reader(source);
    let has_agent = reader
        .headers()
        .map_err(|e| ClaimAuditError::csv(path, e))?
        .iter()
        .any(|h| h.trim() == "Agent");
    let policies = reader
        .deserialize()
        .map(|record| record.map_err(|e| ClaimAuditError::csv(path, e)))
        .collect::<Result<Vec<RawPolicy>>>()?;
    Ok((policies, has_agent))
}

fn lenient_date<'de, D>(deserializer: D) -> std::result::Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_date))
}

fn lenient_year<'de, D>(deserializer: D) -> std::result::Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(|s| {
        let s = s.trim();
        // Tables exported through spreadsheet tools sometimes carry years
        // as floats ("1990.0")
        s.parse::<i32>()
            .ok()
            .or_else(|| s.parse::<f64>().ok().map(|v| v as i32))
    }))
}

fn non_empty<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

#[derive(Debug, Deserialize)]
struct RawClaim {
    #[serde(rename = "Claim ID")]
    claim_id: String,
    #[serde(rename = "Policy ID")]
    policy_id: String,
    #[serde(rename = "Hospital ID")]
    hospital_id: String,
    #[serde(rename = "Admission Date", deserialize_with = "lenient_date", default)]
    admission_date: Option<NaiveDate>,
    #[serde(
        rename = "Discharged Date",
        deserialize_with = "lenient_date",
        default
    )]
    discharge_date: Option<NaiveDate>,
}

impl From<RawClaim> for Claim {
    fn from(raw: RawClaim) -> Self {
        Claim::new(
            raw.claim_id,
            raw.policy_id,
            raw.hospital_id,
            raw.admission_date,
            raw.discharge_date,
        )
    }
}

#[derive(Debug, Deserialize)]
struct RawDiagnosis {
    #[serde(rename = "Claim ID")]
    claim_id: String,
    #[serde(rename = "Diagnosis")]
    diagnosis: String,
}

impl From<RawDiagnosis> for ClaimDiagnosis {
    fn from(raw: RawDiagnosis) -> Self {
        ClaimDiagnosis::new(raw.claim_id, raw.diagnosis)
    }
}

#[derive(Debug, Deserialize)]
struct RawAssignment {
    #[serde(rename = "Claim ID")]
    claim_id: String,
    #[serde(rename = "Doctor ID")]
    doctor_id: String,
}

impl From<RawAssignment> for DoctorAssignment {
    fn from(raw: RawAssignment) -> Self {
        DoctorAssignment::new(raw.claim_id, raw.doctor_id)
    }
}

#[derive(Debug, Deserialize)]
struct RawDoctor {
    #[serde(rename = "Doctor ID")]
    doctor_id: String,
    #[serde(rename = "Specialty", default)]
    specialty: String,
}

impl From<RawDoctor> for Doctor {
    fn from(raw: RawDoctor) -> Self {
        Doctor::new(raw.doctor_id, raw.specialty)
    }
}

#[derive(Debug, Deserialize)]
struct RawHospital {
    #[serde(rename = "Hospital ID")]
    hospital_id: String,
    #[serde(rename = "Location", deserialize_with = "non_empty", default)]
    location: Option<String>,
}

impl From<RawHospital> for Hospital {
    fn from(raw: RawHospital) -> Self {
        Hospital::new(raw.hospital_id, raw.location)
    }
}

/// Raw policy record as deserialized from the CSV
#[derive(Debug, Deserialize)]
pub(crate) struct RawPolicy {
    #[serde(rename = "Policy ID")]
    policy_id: String,
    #[serde(rename = "Inception Date", deserialize_with = "lenient_date", default)]
    inception_date: Option<NaiveDate>,
    #[serde(rename = "Birth Year", deserialize_with = "lenient_year", default)]
    birth_year: Option<i32>,
    #[serde(rename = "Gender", deserialize_with = "non_empty", default)]
    gender: Option<String>,
    #[serde(rename = "Product", deserialize_with = "non_empty", default)]
    product: Option<String>,
    #[serde(rename = "Agent", deserialize_with = "non_empty", default)]
    agent: Option<String>,
}

impl From<RawPolicy> for Policy {
    fn from(raw: RawPolicy) -> Self {
        Policy::new(
            raw.policy_id,
            raw.inception_date,
            raw.birth_year,
            raw.gender,
            raw.product,
            raw.agent,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn policy_table_without_agent_column_is_detected() {
        let data = "Policy ID,Inception Date,Birth Year,Gender,Product\n\
                    P1,2023-01-01,1990,F,Basic\n";
        let (policies, has_agent) =
            read_policy_table(data.as_bytes(), Path::new("Policy_Info.csv")).unwrap();
        assert!(!has_agent);
        assert_eq!(policies.len(), 1);
        assert_eq!(policies[0].agent, None);
    }

    #[test]
    fn policy_table_with_agent_column_is_detected() {
        let data = "Policy ID,Inception Date,Birth Year,Gender,Product,Agent\n\
                    P1,2023-01-01,1990,F,Basic,A7\n\
                    P2,garbage-date,,M,Plus,\n";
        let (policies, has_agent) =
            read_policy_table(data.as_bytes(), Path::new("Policy_Info.csv")).unwrap();
        assert!(has_agent);
        assert_eq!(policies[0].agent.as_deref(), Some("A7"));
        assert_eq!(
            policies[0].inception_date,
            NaiveDate::from_ymd_opt(2023, 1, 1)
        );
        // Malformed date and blank fields resolve to None, never an error
        assert_eq!(policies[1].inception_date, None);
        assert_eq!(policies[1].birth_year, None);
        assert_eq!(policies[1].agent, None);
    }

    #[test]
    fn float_formatted_birth_years_parse() {
        let data = "Policy ID,Inception Date,Birth Year,Gender,Product\n\
                    P1,2023-01-01,1990.0,F,Basic\n";
        let (policies, _) =
            read_policy_table(data.as_bytes(), Path::new("Policy_Info.csv")).unwrap();
        assert_eq!(policies[0].birth_year, Some(1990));
    }
}
