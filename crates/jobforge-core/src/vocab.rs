use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::record::LIST_DELIMITER;

/// Location name that always marks a record as remote-capable.
pub const REMOTE_SENTINEL: &str = "Remote";

/// Seniority metadata for a level name. Rank 0 is the most junior.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LevelMeta {
    pub rank: u32,
}

/// Role list plus level seniority metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolesLevels {
    pub roles: Vec<String>,
    pub levels: BTreeMap<String, LevelMeta>,
}

/// Industry verticals and service lines, disjoint lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Domains {
    pub industry_verticals: Vec<String>,
    pub service_lines: Vec<String>,
}

/// Domestic, global, and virtual location lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Locations {
    pub domestic: Vec<String>,
    pub global: Vec<String>,
    #[serde(rename = "virtual")]
    pub virtual_sites: Vec<String>,
}

impl Locations {
    /// Union of the three lists, in declaration order.
    pub fn all(&self) -> Vec<String> {
        self.domestic
            .iter()
            .chain(&self.global)
            .chain(&self.virtual_sites)
            .cloned()
            .collect()
    }
}

/// The full set of reference lookup structures used by both generation
/// and validation. Immutable after loading.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub skills_by_category: BTreeMap<String, Vec<String>>,
    pub roles_levels: RolesLevels,
    pub domains: Domains,
    pub locations: Locations,
}

impl Vocabulary {
    /// Load the four vocabulary documents from a configuration directory.
    pub fn load(dir: &Path) -> Result<Self> {
        let skills_by_category = read_json(&dir.join("skills.json"))?;
        let roles_levels = read_json(&dir.join("roles_levels.json"))?;
        let domains = read_json(&dir.join("domains.json"))?;
        let locations = read_json(&dir.join("locations.json"))?;
        let vocab = Self {
            skills_by_category,
            roles_levels,
            domains,
            locations,
        };
        vocab.validate()?;
        Ok(vocab)
    }

    /// Check internal invariants of the loaded vocabularies. Any defect
    /// is a fatal configuration error.
    pub fn validate(&self) -> Result<()> {
        if self.skills_by_category.is_empty() {
            return Err(Error::InvalidVocabulary("no skill categories".into()));
        }
        for (category, skills) in &self.skills_by_category {
            if category.is_empty() {
                return Err(Error::InvalidVocabulary("empty skill category name".into()));
            }
            if skills.is_empty() {
                return Err(Error::InvalidVocabulary(format!(
                    "skill category '{category}' has no skills"
                )));
            }
            let mut seen = BTreeSet::new();
            for skill in skills {
                check_entry(skill, "skill")?;
                if !seen.insert(skill) {
                    return Err(Error::InvalidVocabulary(format!(
                        "duplicate skill '{skill}' in category '{category}'"
                    )));
                }
            }
        }

        if self.roles_levels.roles.is_empty() {
            return Err(Error::InvalidVocabulary("no roles".into()));
        }
        for role in &self.roles_levels.roles {
            check_entry(role, "role")?;
        }
        if self.roles_levels.levels.is_empty() {
            return Err(Error::InvalidVocabulary("no levels".into()));
        }
        for level in self.roles_levels.levels.keys() {
            check_entry(level, "level")?;
            // Staffing keys decode by splitting on the first space.
            if level.contains(' ') {
                return Err(Error::InvalidVocabulary(format!(
                    "level '{level}' must not contain spaces"
                )));
            }
        }

        if self.domains.industry_verticals.is_empty() {
            return Err(Error::InvalidVocabulary("no industry verticals".into()));
        }
        if self.domains.service_lines.is_empty() {
            return Err(Error::InvalidVocabulary("no service lines".into()));
        }
        for entry in self
            .domains
            .industry_verticals
            .iter()
            .chain(&self.domains.service_lines)
        {
            check_entry(entry, "domain")?;
        }

        if self.locations.all().is_empty() {
            return Err(Error::InvalidVocabulary("no locations".into()));
        }
        for location in self.locations.all() {
            check_entry(&location, "location")?;
        }

        Ok(())
    }

    /// Union of all skill names across categories.
    pub fn all_skills(&self) -> BTreeSet<String> {
        self.skills_by_category
            .values()
            .flatten()
            .cloned()
            .collect()
    }
}

fn check_entry(entry: &str, kind: &str) -> Result<()> {
    if entry.is_empty() {
        return Err(Error::InvalidVocabulary(format!("empty {kind} name")));
    }
    if entry.contains(LIST_DELIMITER) {
        return Err(Error::InvalidVocabulary(format!(
            "{kind} '{entry}' contains the list delimiter '{LIST_DELIMITER}'"
        )));
    }
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
