use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Delimiter used for multi-valued cells in the persisted dataset.
///
/// Vocabulary validation guarantees no entry contains this character.
pub const LIST_DELIMITER: char = '|';

/// Column order of the persisted dataset, shared by writer and validator.
pub const JOB_COLUMNS: &[&str] = &[
    "job_id",
    "project_name",
    "domain",
    "location",
    "start_date",
    "end_date",
    "duration_months",
    "budget",
    "technologies",
    "staffing_requirements",
    "min_experience",
    "priority",
    "similar_projects",
    "remote_possible",
];

/// Monotonic record identifier (`P0001`, `P0002`, ...).
pub fn record_id(index: u32) -> String {
    format!("P{index:04}")
}

/// Structured (level, role) staffing bucket key.
///
/// Stored as a pair and only flattened to `"{level} {role}"` at the
/// serialization boundary. Level names never contain spaces, so decoding
/// splits on the first space; role names may contain further spaces.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StaffingKey {
    pub level: String,
    pub role: String,
}

impl StaffingKey {
    pub fn new(level: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            role: role.into(),
        }
    }

    /// Flatten to the persisted `"{level} {role}"` form.
    pub fn encode(&self) -> String {
        format!("{} {}", self.level, self.role)
    }

    /// Decode a persisted key; `None` when it does not split into a
    /// non-empty level and role.
    pub fn decode(raw: &str) -> Option<Self> {
        let (level, role) = raw.split_once(' ')?;
        if level.is_empty() || role.is_empty() {
            return None;
        }
        Some(Self::new(level, role))
    }
}

impl fmt::Display for StaffingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.level, self.role)
    }
}

impl Serialize for StaffingKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for StaffingKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        StaffingKey::decode(&raw)
            .ok_or_else(|| D::Error::custom(format!("malformed staffing key '{raw}'")))
    }
}

/// One fully populated job record.
///
/// Records are created once, never mutated, and appended to the id pool
/// consumed by later records' similar-project sampling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: String,
    pub project_name: String,
    pub domain: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration_months: u32,
    pub budget: u32,
    /// Order-insignificant skill set, at most the configured maximum.
    pub technologies: Vec<String>,
    /// Positive headcount per (level, role) bucket; counts sum to the
    /// originally sampled total.
    pub staffing_requirements: BTreeMap<StaffingKey, u32>,
    pub min_experience: u32,
    pub priority: String,
    /// Ids of previously generated records only, at most two.
    pub similar_projects: Vec<String>,
    pub remote_possible: bool,
}
