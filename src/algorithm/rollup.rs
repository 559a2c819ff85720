//! Aggregator stage
//!
//! Rolls the evaluated flags up along four dimensions: the exact flagged
//! claim list per rule, and per-rule flag tallies keyed by hospital,
//! doctor, and agent. Rankings are descending by total flag count with a
//! stable order among ties (first appearance in the source rows); the full
//! ranked tables are retained and `top(n)` is only a view for
//! presentation.

use log::debug;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::models::DoctorAssignment;

use super::rules::{FlagSet, FlaggedRow, Rule};

/// Per-rule flag counts for one roll-up key, plus the across-rules total
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RuleTally {
    /// True-flag count per rule, in [`Rule::ALL`] order
    pub per_rule: [u64; Rule::COUNT],
    /// Sum across all rules
    pub total: u64,
}

impl RuleTally {
    /// Accumulate one evaluated flag set
    pub fn add(&mut self, flags: FlagSet) {
        for rule in Rule::ALL {
            if flags.is_set(rule) {
                self.per_rule[rule.index()] += 1;
                self.total += 1;
            }
        }
    }

    /// Count for one rule
    #[must_use]
    pub const fn count_for(&self, rule: Rule) -> u64 {
        self.per_rule[rule.index()]
    }
}

/// One ranked roll-up entry
#[derive(Debug, Clone, Serialize)]
pub struct RollupRow {
    /// Grouping key (hospital ID, doctor ID, or agent)
    pub key: String,
    /// Accumulated flag counts for this key
    pub tally: RuleTally,
}

/// A ranked roll-up over one grouping dimension
#[derive(Debug, Clone, Default, Serialize)]
pub struct Rollup {
    rows: Vec<RollupRow>,
}

impl Rollup {
    /// All entries, ranked descending by total flag count
    #[must_use]
    pub fn rows(&self) -> &[RollupRow] {
        &self.rows
    }

    /// The top `n` entries of the ranking
    #[must_use]
    pub fn top(&self, n: usize) -> &[RollupRow] {
        &self.rows[..self.rows.len().min(n)]
    }

    /// Whether the roll-up has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of distinct keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Accumulates tallies keyed by string, remembering first-seen key order
/// so the final ranking stays stable among equal totals.
#[derive(Default)]
struct TallyBuilder {
    order: Vec<String>,
    tallies: FxHashMap<String, RuleTally>,
}

impl TallyBuilder {
    fn add(&mut self, key: &str, flags: FlagSet) {
        if let Some(tally) = self.tallies.get_mut(key) {
            tally.add(flags);
        } else {
            let mut tally = RuleTally::default();
            tally.add(flags);
            self.order.push(key.to_string());
            self.tallies.insert(key.to_string(), tally);
        }
    }

    fn build(mut self) -> Rollup {
        let mut rows: Vec<RollupRow> = self
            .order
            .drain(..)
            .map(|key| {
                let tally = self.tallies[&key];
                RollupRow { key, tally }
            })
            .collect();
        // Vec::sort_by is stable, so first-seen order survives among ties
        rows.sort_by(|a, b| b.tally.total.cmp(&a.tally.total));
        Rollup { rows }
    }
}

/// Flagged claim identifiers for one rule, in original row order
#[derive(Debug, Clone, Serialize)]
pub struct RuleClaims {
    /// The rule
    pub rule: Rule,
    /// Claim IDs where the rule fired
    pub claim_ids: Vec<String>,
}

/// All roll-up results for one audit run
#[derive(Debug, Clone, Serialize)]
pub struct FlagSummary {
    /// Flagged claim lists, one entry per rule in [`Rule::ALL`] order
    pub flagged_claims: Vec<RuleClaims>,
    /// Flag tallies per hospital
    pub by_hospital: Rollup,
    /// Flag tallies per doctor, accumulated through assignment fan-out
    pub by_doctor: Rollup,
    /// Flag tallies per agent; empty when the dataset has no Agent column
    pub by_agent: Rollup,
}

impl FlagSummary {
    /// Flagged claim IDs for one rule
    #[must_use]
    pub fn claims_for(&self, rule: Rule) -> &[String] {
        &self.flagged_claims[rule.index()].claim_ids
    }
}

/// Roll the evaluated flags up by claim, hospital, doctor, and agent.
///
/// The doctor roll-up joins the assignment table against the flagged rows
/// by claim ID, so a doctor assigned to several flagged claims accumulates
/// all of them. The agent roll-up is produced only when the dataset
/// carried an Agent column.
#[must_use]
pub fn aggregate(
    flagged: &[FlaggedRow],
    assignments: &[DoctorAssignment],
    has_agent: bool,
) -> FlagSummary {
    let flagged_claims = Rule::ALL
        .map(|rule| RuleClaims {
            rule,
            claim_ids: flagged
                .iter()
                .filter(|row| row.flags.is_set(rule))
                .map(|row| row.master.claim_id.clone())
                .collect(),
        })
        .into_iter()
        .collect();

    let mut hospitals = TallyBuilder::default();
    for row in flagged {
        hospitals.add(&row.master.hospital_id, row.flags);
    }

    let flags_by_claim: FxHashMap<&str, FlagSet> = flagged
        .iter()
        .map(|row| (row.master.claim_id.as_str(), row.flags))
        .collect();
    let mut doctors = TallyBuilder::default();
    for assignment in assignments {
        // Left join: an assignment to a claim outside the master view still
        // registers the doctor, contributing nothing to the tally
        let flags = flags_by_claim
            .get(assignment.claim_id.as_str())
            .copied()
            .unwrap_or_default();
        doctors.add(&assignment.doctor_id, flags);
    }

    let mut agents = TallyBuilder::default();
    if has_agent {
        for row in flagged {
            if let Some(agent) = &row.master.agent {
                agents.add(agent, row.flags);
            }
        }
    }

    let summary = FlagSummary {
        flagged_claims,
        by_hospital: hospitals.build(),
        by_doctor: doctors.build(),
        by_agent: agents.build(),
    };

    debug!(
        "Aggregated flags over {} hospitals, {} doctors, {} agents",
        summary.by_hospital.len(),
        summary.by_doctor.len(),
        summary.by_agent.len(),
    );

    summary
}
