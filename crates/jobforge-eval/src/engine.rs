use std::collections::BTreeSet;
use std::path::Path;
use std::time::Instant;

use chrono::NaiveDate;
use tracing::info;

use jobforge_core::{StaffingKey, Vocabulary, LIST_DELIMITER};

use crate::errors::EvalError;
use crate::model::{EvaluateOptions, EvaluationResult, Violation};
use crate::report::render_report;

/// Validate a persisted job dataset against independently re-derived
/// vocabularies.
///
/// Every check runs on every record; validation never stops at the first
/// defect. Per-record defects are data in the result, not errors.
#[derive(Debug, Clone)]
pub struct ValidationEngine {
    options: EvaluateOptions,
}

impl ValidationEngine {
    pub fn new(options: EvaluateOptions) -> Self {
        Self { options }
    }

    pub fn run(
        &self,
        dataset_path: &Path,
        vocab: &Vocabulary,
    ) -> Result<EvaluationResult, EvalError> {
        let start = Instant::now();
        vocab.validate()?;
        let lookups = LookupSets::derive(vocab);

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(dataset_path)?;
        let headers = reader.headers()?.clone();
        let columns = ColumnIndex::resolve(&headers)?;

        let mut violations = Vec::new();
        let mut records_checked = 0_u64;
        for row in reader.records() {
            let row = row?;
            check_record(&row, &columns, &lookups, &mut violations);
            records_checked += 1;
        }

        let passed = violations.is_empty();
        let report = render_report(records_checked, &violations, self.options.max_examples);

        info!(
            dataset = %dataset_path.display(),
            records_checked,
            violations = violations.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "validation completed"
        );

        Ok(EvaluationResult {
            records_checked,
            violations,
            report,
            passed,
        })
    }
}

/// Lookup sets re-derived from the vocabulary bundle, independent of
/// anything the generator computed.
struct LookupSets {
    skills: BTreeSet<String>,
    roles: BTreeSet<String>,
    levels: BTreeSet<String>,
    verticals: BTreeSet<String>,
    locations: BTreeSet<String>,
}

impl LookupSets {
    fn derive(vocab: &Vocabulary) -> Self {
        Self {
            skills: vocab.all_skills(),
            roles: vocab.roles_levels.roles.iter().cloned().collect(),
            levels: vocab.roles_levels.levels.keys().cloned().collect(),
            verticals: vocab.domains.industry_verticals.iter().cloned().collect(),
            locations: vocab.locations.all().into_iter().collect(),
        }
    }
}

struct ColumnIndex {
    job_id: usize,
    domain: usize,
    location: usize,
    start_date: usize,
    end_date: usize,
    technologies: usize,
    staffing_requirements: usize,
}

impl ColumnIndex {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, EvalError> {
        let position = |name: &str| -> Result<usize, EvalError> {
            headers
                .iter()
                .position(|header| header == name)
                .ok_or_else(|| EvalError::InvalidDataset(format!("missing column '{name}'")))
        };
        Ok(Self {
            job_id: position("job_id")?,
            domain: position("domain")?,
            location: position("location")?,
            start_date: position("start_date")?,
            end_date: position("end_date")?,
            technologies: position("technologies")?,
            staffing_requirements: position("staffing_requirements")?,
        })
    }
}

/// Run every per-record check, accumulating one violation per defect.
fn check_record(
    row: &csv::StringRecord,
    columns: &ColumnIndex,
    lookups: &LookupSets,
    violations: &mut Vec<Violation>,
) {
    let cell = |index: usize| row.get(index).unwrap_or_default();
    let id = cell(columns.job_id).to_string();

    // 1. Strict date ordering; unparseable dates are their own defect.
    let start = NaiveDate::parse_from_str(cell(columns.start_date), "%Y-%m-%d");
    let end = NaiveDate::parse_from_str(cell(columns.end_date), "%Y-%m-%d");
    match (start, end) {
        (Ok(start), Ok(end)) => {
            if start >= end {
                violations.push(Violation::new(
                    &id,
                    "invalid dates: start_date must precede end_date",
                ));
            }
        }
        _ => violations.push(Violation::new(
            &id,
            "invalid dates: start_date or end_date is not an ISO date",
        )),
    }

    // 2. Domain must be an industry vertical. The service line embedded in
    // project_name is deliberately not cross-checked here.
    let domain = cell(columns.domain);
    if !lookups.verticals.contains(domain) {
        violations.push(Violation::new(&id, format!("invalid domain '{domain}'")));
    }

    // 3. Location must be in the union of the location lists.
    let location = cell(columns.location);
    if !lookups.locations.contains(location) {
        violations.push(Violation::new(&id, format!("invalid location '{location}'")));
    }

    // 4. Every skill must belong to some category.
    for skill in cell(columns.technologies).split(LIST_DELIMITER) {
        if !skill.is_empty() && !lookups.skills.contains(skill) {
            violations.push(Violation::new(&id, format!("unknown skill '{skill}'")));
        }
    }

    // 5 + 6. Staffing requirements: an unparseable cell is one distinct
    // defect and suppresses key-level checks; decodable keys get
    // independent level and role checks.
    let staffing_cell = cell(columns.staffing_requirements);
    match serde_json::from_str::<serde_json::Value>(staffing_cell) {
        Ok(serde_json::Value::Object(map)) => {
            for key in map.keys() {
                match StaffingKey::decode(key) {
                    None => violations.push(Violation::new(
                        &id,
                        format!("malformed staffing key '{key}'"),
                    )),
                    Some(parsed) => {
                        if !lookups.levels.contains(&parsed.level) {
                            violations.push(Violation::new(
                                &id,
                                format!("invalid level '{}' in staffing requirements", parsed.level),
                            ));
                        }
                        if !lookups.roles.contains(&parsed.role) {
                            violations.push(Violation::new(
                                &id,
                                format!("invalid role '{}' in staffing requirements", parsed.role),
                            ));
                        }
                    }
                }
            }
        }
        Ok(_) => violations.push(Violation::new(
            &id,
            "staffing requirements are not a JSON object",
        )),
        Err(err) => violations.push(Violation::new(
            &id,
            format!("staffing requirements not parseable: {err}"),
        )),
    }
}
