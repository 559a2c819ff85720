//! Loader and export tests over on-disk CSV fixtures.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use claim_audit::error::ClaimAuditError;
use claim_audit::loader::{self, ClaimDataset};
use claim_audit::{AuditConfig, Rule, export, run_audit};

/// Temporary fixture directory, removed on drop.
struct FixtureDir(PathBuf);

impl FixtureDir {
    fn new(label: &str) -> Self {
        let dir = std::env::temp_dir().join(format!(
            "claim_audit_{label}_{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        Self(dir)
    }

    fn write(&self, name: &str, contents: &str) {
        fs::write(self.0.join(name), contents).unwrap();
    }
}

impl Drop for FixtureDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

fn write_standard_tables(dir: &FixtureDir) {
    dir.write(
        loader::CLAIM_TABLE,
        "Claim ID,Policy ID,Hospital ID,Admission Date,Discharged Date\n\
         C1,P1,H1,2023-01-01,2023-01-10\n\
         C2,P2,H2,2023-02-01,not-a-date\n\
         C3,P-missing,H1,2023-03-05,2023-03-01\n",
    );
    dir.write(
        loader::DIAGNOSIS_TABLE,
        "Claim ID,Diagnosis\n\
         C1,Influenza\n\
         C2,Asthma\n\
         C2,Migraine\n",
    );
    dir.write(
        loader::ASSIGNMENT_TABLE,
        "Claim ID,Doctor ID\nC1,D1\nC2,D1\nC2,D2\n",
    );
    dir.write(
        loader::DOCTOR_TABLE,
        "Doctor ID,Specialty\nD1,pediatrician \nD2,Cardiology\n",
    );
    dir.write(
        loader::HOSPITAL_TABLE,
        "Hospital ID,Location\nH1,North\nH2,South\n",
    );
    dir.write(
        loader::POLICY_TABLE,
        "Policy ID,Inception Date,Birth Year,Gender,Product,Agent\n\
         P1,2023-01-01,1990,F,Basic,A1\n\
         P2,2022-06-01,1980,M,Plus,A2\n",
    );
}

#[test]
fn loads_all_six_tables() {
    let dir = FixtureDir::new("load");
    write_standard_tables(&dir);

    let dataset = ClaimDataset::load(&dir.0).unwrap();
    assert_eq!(dataset.claims.len(), 3);
    assert_eq!(dataset.diagnoses.len(), 3);
    assert_eq!(dataset.assignments.len(), 3);
    assert_eq!(dataset.doctors.len(), 2);
    assert_eq!(dataset.hospitals.len(), 2);
    assert_eq!(dataset.policies.len(), 2);
    assert!(dataset.has_agent);

    assert_eq!(
        dataset.claims[0].admission_date,
        NaiveDate::from_ymd_opt(2023, 1, 1)
    );
    // Malformed date resolves to None instead of aborting the load
    assert_eq!(dataset.claims[1].discharge_date, None);
}

#[test]
fn missing_input_file_is_fatal_and_named() {
    let dir = FixtureDir::new("missing");
    write_standard_tables(&dir);
    fs::remove_file(dir.0.join(loader::POLICY_TABLE)).unwrap();

    let err = ClaimDataset::load(&dir.0).unwrap_err();
    match err {
        ClaimAuditError::MissingInput(path) => {
            assert!(path.ends_with(loader::POLICY_TABLE), "{}", path.display());
        }
        other => panic!("expected MissingInput, got {other}"),
    }
}

#[test]
fn full_run_writes_extracts_and_report() {
    let dir = FixtureDir::new("run");
    write_standard_tables(&dir);

    let out = FixtureDir::new("run_out");
    let config = AuditConfig::new(&dir.0).with_output_dir(&out.0);
    let report = run_audit(&config).unwrap();
    assert_eq!(report.master.len(), 3);

    let extracts = export::write_rule_extracts(&report.summary, &config.output_dir).unwrap();
    assert_eq!(extracts.len(), Rule::COUNT);

    // C3's policy is missing, so it lands in the age_missing extract
    let age_missing = config.output_dir.join("age_missing_claims.csv");
    let contents = fs::read_to_string(&age_missing).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("Claim ID"));
    assert!(contents.lines().any(|l| l == "C3"));

    let report_path = export::write_report(&report, &config.output_dir).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(report_path).unwrap()).unwrap();
    assert_eq!(json["master"].as_array().unwrap().len(), 3);
    assert!(json["summary"]["by_hospital"]["rows"].is_array());
}

#[test]
fn policy_table_without_agent_column_disables_agent_dimension() {
    let dir = FixtureDir::new("no_agent");
    write_standard_tables(&dir);
    dir.write(
        loader::POLICY_TABLE,
        "Policy ID,Inception Date,Birth Year,Gender,Product\n\
         P1,2023-01-01,1990,F,Basic\n\
         P2,2022-06-01,1980,M,Plus\n",
    );

    let config = AuditConfig::new(&dir.0);
    let report = run_audit(&config).unwrap();
    assert!(report.summary.by_agent.is_empty());
    assert!(report.exploration.policies_per_agent.entries().is_empty());
}
