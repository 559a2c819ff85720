//! Rule engine
//!
//! Five fixed, independently evaluated predicates over the master view.
//! Predicates never fail: a missing stay length coerces to 0 before any
//! comparison (the counts are already 0-defaulted by the join, so they
//! need no second fallback), and `age_missing` tests the option itself.

use serde::{Serialize, Serializer};

use crate::models::MasterRow;

/// A named anomaly rule evaluated per master row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// More than three diagnoses on one claim
    ManyDiagnoses,
    /// Short stay (two days or fewer) with more than two diagnoses
    ShortStayManyDiag,
    /// Long stay (over a week) with exactly one diagnosis
    LongStayOneDiag,
    /// More than two doctors assigned to one claim
    ManyDoctors,
    /// Policyholder age could not be derived
    AgeMissing,
}

impl Rule {
    /// Number of rules
    pub const COUNT: usize = 5;

    /// All rules, in reporting order
    pub const ALL: [Self; Self::COUNT] = [
        Self::ManyDiagnoses,
        Self::ShortStayManyDiag,
        Self::LongStayOneDiag,
        Self::ManyDoctors,
        Self::AgeMissing,
    ];

    /// Stable rule name used in reports and extract file names
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ManyDiagnoses => "many_diagnoses",
            Self::ShortStayManyDiag => "shortstay_manydiag",
            Self::LongStayOneDiag => "longstay_onediag",
            Self::ManyDoctors => "manydoctors",
            Self::AgeMissing => "age_missing",
        }
    }

    /// Position of this rule in [`Rule::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::ManyDiagnoses => 0,
            Self::ShortStayManyDiag => 1,
            Self::LongStayOneDiag => 2,
            Self::ManyDoctors => 3,
            Self::AgeMissing => 4,
        }
    }

    /// Evaluate this rule against one master row
    #[must_use]
    pub fn applies(self, row: &MasterRow) -> bool {
        // Missing numeric operands default to 0 before comparison
        let stay = row.length_of_stay.unwrap_or(0);
        match self {
            Self::ManyDiagnoses => row.num_diagnoses > 3,
            Self::ShortStayManyDiag => stay <= 2 && row.num_diagnoses > 2,
            Self::LongStayOneDiag => stay > 7 && row.num_diagnoses == 1,
            Self::ManyDoctors => row.num_doctors > 2,
            Self::AgeMissing => row.age.is_none(),
        }
    }
}

impl Serialize for Rule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// The boolean outcome of every rule for one master row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FlagSet([bool; Rule::COUNT]);

impl FlagSet {
    /// Evaluate all rules against one master row
    #[must_use]
    pub fn evaluate(row: &MasterRow) -> Self {
        Self(Rule::ALL.map(|rule| rule.applies(row)))
    }

    /// Whether the given rule fired
    #[must_use]
    pub const fn is_set(self, rule: Rule) -> bool {
        self.0[rule.index()]
    }

    /// Number of rules that fired
    #[must_use]
    pub fn count(self) -> u64 {
        self.0.iter().filter(|&&set| set).count() as u64
    }
}

/// A master row together with its evaluated flags
#[derive(Debug, Clone, Serialize)]
pub struct FlaggedRow {
    /// The denormalized claim row
    #[serde(flatten)]
    pub master: MasterRow,
    /// One boolean per rule, in [`Rule::ALL`] order
    pub flags: FlagSet,
}

/// Evaluate all rules over the master view
#[must_use]
pub fn apply_rules(master: Vec<MasterRow>) -> Vec<FlaggedRow> {
    master
        .into_iter()
        .map(|row| {
            let flags = FlagSet::evaluate(&row);
            FlaggedRow { master: row, flags }
        })
        .collect()
}
