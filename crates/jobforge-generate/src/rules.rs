use std::collections::BTreeMap;

/// Roles eligible for each service line.
const SERVICE_LINE_ROLES: &[(&str, &[&str])] = &[
    (
        "Cloud Migration & Modernization",
        &["Cloud Architect", "DevOps Engineer", "Software Engineer"],
    ),
    (
        "Data Engineering & Analytics",
        &["Data Engineer", "Data Scientist", "Business Analyst"],
    ),
    (
        "Digital Experience",
        &["Software Engineer", "UX Designer", "QA Engineer"],
    ),
    (
        "Enterprise Applications",
        &["Software Engineer", "Business Analyst", "Project Manager"],
    ),
    (
        "Cybersecurity Services",
        &["Security Analyst", "Cloud Architect", "DevOps Engineer"],
    ),
    (
        "Quality Engineering",
        &["QA Engineer", "Software Engineer", "Business Analyst"],
    ),
];

/// Skill categories eligible for each service line.
const SERVICE_LINE_SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Cloud Migration & Modernization",
        &["cloud_platforms", "devops_tooling", "programming_languages"],
    ),
    (
        "Data Engineering & Analytics",
        &["data_engineering", "machine_learning", "databases"],
    ),
    (
        "Digital Experience",
        &["web_frameworks", "programming_languages", "design"],
    ),
    (
        "Enterprise Applications",
        &["programming_languages", "databases", "web_frameworks"],
    ),
    (
        "Cybersecurity Services",
        &["security", "cloud_platforms", "devops_tooling"],
    ),
    (
        "Quality Engineering",
        &["testing", "programming_languages", "devops_tooling"],
    ),
];

/// Sampling weight per level, most junior first. The slice order is the
/// scan order of the weighted sampler.
const LEVEL_WEIGHTS: &[(&str, f64)] = &[
    ("Trainee", 2.0),
    ("Associate", 5.0),
    ("Consultant", 4.0),
    ("Manager", 2.0),
    ("Director", 1.0),
];

/// Roles that may not be staffed at the two most junior levels.
const GUARDED_ROLES: &[&str] = &["Cloud Architect", "Project Manager"];
const GUARDED_MIN_RANK: u32 = 2;

/// Static coupling between service lines, roles, skill categories, and
/// level sampling weights.
///
/// Constructed once at startup and passed explicitly into the record
/// generator rather than living as module-level state.
#[derive(Debug, Clone)]
pub struct RuleTables {
    roles_by_service_line: BTreeMap<String, Vec<String>>,
    skill_categories_by_service_line: BTreeMap<String, Vec<String>>,
    level_weights: Vec<(String, f64)>,
    min_level_rank_by_role: BTreeMap<String, u32>,
}

impl RuleTables {
    /// The standard hand-authored tables.
    pub fn standard() -> Self {
        let roles_by_service_line = SERVICE_LINE_ROLES
            .iter()
            .map(|(line, roles)| {
                (
                    line.to_string(),
                    roles.iter().map(|role| role.to_string()).collect(),
                )
            })
            .collect();
        let skill_categories_by_service_line = SERVICE_LINE_SKILL_CATEGORIES
            .iter()
            .map(|(line, categories)| {
                (
                    line.to_string(),
                    categories.iter().map(|cat| cat.to_string()).collect(),
                )
            })
            .collect();
        let level_weights = LEVEL_WEIGHTS
            .iter()
            .map(|(level, weight)| (level.to_string(), *weight))
            .collect();
        let min_level_rank_by_role = GUARDED_ROLES
            .iter()
            .map(|role| (role.to_string(), GUARDED_MIN_RANK))
            .collect();

        Self {
            roles_by_service_line,
            skill_categories_by_service_line,
            level_weights,
            min_level_rank_by_role,
        }
    }

    /// Roles eligible for a service line; `None` when the line is unmapped.
    pub fn eligible_roles(&self, service_line: &str) -> Option<&[String]> {
        self.roles_by_service_line
            .get(service_line)
            .map(Vec::as_slice)
    }

    /// Skill categories eligible for a service line; `None` when unmapped.
    pub fn eligible_skill_categories(&self, service_line: &str) -> Option<&[String]> {
        self.skill_categories_by_service_line
            .get(service_line)
            .map(Vec::as_slice)
    }

    /// Level weights in sampling order, most junior first.
    pub fn level_weights(&self) -> &[(String, f64)] {
        &self.level_weights
    }

    /// Minimum allowed level rank for a seniority-guarded role.
    pub fn min_level_rank(&self, role: &str) -> Option<u32> {
        self.min_level_rank_by_role.get(role).copied()
    }
}
