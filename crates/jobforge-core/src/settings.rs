use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Inclusive numeric range used by the bounded settings groups.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bounds {
    pub min: u32,
    pub max: u32,
}

impl Bounds {
    fn validate(&self, group: &str) -> Result<()> {
        if self.min > self.max {
            return Err(Error::InvalidSettings(format!(
                "{group}: min {} exceeds max {}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Cap-only group (e.g. skills per record).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Cap {
    pub max: u32,
}

/// Tunable generation parameters, read wholesale from a TOML document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub record_count: u32,
    pub duration_months: Bounds,
    pub budget: Bounds,
    pub min_experience_years: Bounds,
    pub skills_per_record: Cap,
    pub headcount: Bounds,
    pub remote_mix_probability: f64,
    /// Priority tier name to non-negative sampling weight.
    pub priority_weights: BTreeMap<String, f64>,
}

impl Settings {
    /// Load and validate a settings document. Any defect is fatal before
    /// a single record is generated.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.record_count == 0 {
            return Err(Error::InvalidSettings("record_count must be positive".into()));
        }
        self.duration_months.validate("duration_months")?;
        self.budget.validate("budget")?;
        self.min_experience_years.validate("min_experience_years")?;
        self.headcount.validate("headcount")?;
        if self.duration_months.min == 0 {
            return Err(Error::InvalidSettings(
                "duration_months: min must be at least 1".into(),
            ));
        }
        if self.headcount.min == 0 {
            return Err(Error::InvalidSettings(
                "headcount: min must be at least 1".into(),
            ));
        }
        if self.skills_per_record.max == 0 {
            return Err(Error::InvalidSettings(
                "skills_per_record: max must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.remote_mix_probability) {
            return Err(Error::InvalidSettings(format!(
                "remote_mix_probability {} outside [0, 1]",
                self.remote_mix_probability
            )));
        }
        if self.priority_weights.is_empty() {
            return Err(Error::InvalidSettings("priority_weights must not be empty".into()));
        }
        let mut total = 0.0;
        for (tier, weight) in &self.priority_weights {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(Error::InvalidSettings(format!(
                    "priority_weights: weight for '{tier}' must be a non-negative number"
                )));
            }
            total += weight;
        }
        if total <= 0.0 {
            return Err(Error::InvalidSettings(
                "priority_weights must include at least one positive weight".into(),
            ));
        }
        Ok(())
    }
}
