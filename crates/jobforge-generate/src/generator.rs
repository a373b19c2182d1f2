use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};
use rand::Rng;

use jobforge_core::{record_id, JobRecord, Settings, Vocabulary, REMOTE_SENTINEL};

use crate::allocator::allocate_requirements;
use crate::errors::GenerationError;
use crate::rules::RuleTables;
use crate::sampler::{sample_distinct, weighted_choice};

/// Average month length used to project an end date from a duration.
/// Deliberately not calendar-accurate.
const DAYS_PER_MONTH: f64 = 30.4;
/// Start dates fall within this many days after the base date.
const START_WINDOW_DAYS: i64 = 60;
/// Per-id coin flip emulating partial relevance of prior projects.
const SIMILAR_RELEVANCE_PROBABILITY: f64 = 0.6;
const MAX_SIMILAR_PROJECTS: usize = 2;
const CATEGORIES_PER_RECORD: usize = 2;

/// Shared inputs for generating records within one run.
pub struct RecordContext<'a> {
    pub settings: &'a Settings,
    pub vocab: &'a Vocabulary,
    pub rules: &'a RuleTables,
    pub base_date: NaiveDate,
}

/// Produce one fully populated job record.
///
/// `existing_ids` holds every id generated earlier in the run; similar
/// projects are sampled from it only, so a record can never reference
/// itself or a later record.
pub fn generate_record<R: Rng>(
    ctx: &RecordContext<'_>,
    index: u32,
    existing_ids: &[String],
    rng: &mut R,
) -> Result<JobRecord, GenerationError> {
    let settings = ctx.settings;
    let vocab = ctx.vocab;

    let id = record_id(index);
    let domain = pick_uniform(&vocab.domains.industry_verticals, "industry verticals", rng)?;
    let service_line = pick_uniform(&vocab.domains.service_lines, "service lines", rng)?;
    let project_name = format!("{service_line} for {domain}");

    let all_locations = vocab.locations.all();
    let location = pick_uniform(&all_locations, "locations", rng)?;
    let remote_possible =
        location == REMOTE_SENTINEL || rng.random_bool(settings.remote_mix_probability);

    let duration_months =
        rng.random_range(settings.duration_months.min..=settings.duration_months.max);
    let start_date = ctx.base_date + Duration::days(rng.random_range(0..=START_WINDOW_DAYS));
    let end_date =
        start_date + Duration::days((DAYS_PER_MONTH * f64::from(duration_months)).round() as i64);

    let budget = rng.random_range(settings.budget.min..=settings.budget.max);
    let min_experience = rng
        .random_range(settings.min_experience_years.min..=settings.min_experience_years.max);

    let priority_weights: Vec<(String, f64)> = settings
        .priority_weights
        .iter()
        .map(|(tier, weight)| (tier.clone(), *weight))
        .collect();
    let priority = weighted_choice(&priority_weights, rng)?.clone();

    let technologies = pick_skills(
        &service_line,
        vocab,
        ctx.rules,
        settings.skills_per_record.max as usize,
        rng,
    );

    let total_headcount = rng.random_range(settings.headcount.min..=settings.headcount.max);
    let staffing_requirements =
        allocate_requirements(total_headcount, &service_line, vocab, ctx.rules, rng)?;

    let similar_projects = pick_similar_projects(existing_ids, rng);

    Ok(JobRecord {
        id,
        project_name,
        domain,
        location,
        start_date,
        end_date,
        duration_months,
        budget,
        technologies,
        staffing_requirements,
        min_experience,
        priority,
        similar_projects,
        remote_possible,
    })
}

fn pick_uniform<R: Rng>(
    pool: &[String],
    what: &str,
    rng: &mut R,
) -> Result<String, GenerationError> {
    if pool.is_empty() {
        return Err(GenerationError::EmptyDomain(format!("no {what} to draw from")));
    }
    Ok(pool[rng.random_range(0..pool.len())].clone())
}

/// Sample skills from categories eligible for the service line, falling
/// back to every category when the line is unmapped. Duplicates across
/// categories collapse; the result is truncated to the configured cap.
fn pick_skills<R: Rng>(
    service_line: &str,
    vocab: &Vocabulary,
    rules: &RuleTables,
    max_skills: usize,
    rng: &mut R,
) -> Vec<String> {
    let mapped: Vec<String> = match rules.eligible_skill_categories(service_line) {
        Some(categories) if !categories.is_empty() => categories
            .iter()
            .filter(|category| vocab.skills_by_category.contains_key(*category))
            .cloned()
            .collect(),
        _ => Vec::new(),
    };
    let eligible = if mapped.is_empty() {
        vocab.skills_by_category.keys().cloned().collect()
    } else {
        mapped
    };

    let categories = sample_distinct(&eligible, CATEGORIES_PER_RECORD, rng);
    let mut seen = BTreeSet::new();
    let mut skills = Vec::new();
    for category in &categories {
        let Some(pool) = vocab.skills_by_category.get(category) else {
            continue;
        };
        let want = rng.random_range(1..=3);
        for skill in sample_distinct(pool, want, rng) {
            if seen.insert(skill.clone()) {
                skills.push(skill);
            }
        }
    }
    skills.truncate(max_skills);
    skills
}

/// Filter prior ids by a relevance coin flip, fall back to the whole pool
/// when the filter strikes out, then take 0-2 distinct ids.
fn pick_similar_projects<R: Rng>(existing_ids: &[String], rng: &mut R) -> Vec<String> {
    if existing_ids.is_empty() {
        return Vec::new();
    }
    let filtered: Vec<String> = existing_ids
        .iter()
        .filter(|_| rng.random_bool(SIMILAR_RELEVANCE_PROBABILITY))
        .cloned()
        .collect();
    let pool = if filtered.is_empty() {
        existing_ids.to_vec()
    } else {
        filtered
    };
    let want = rng.random_range(0..=MAX_SIMILAR_PROJECTS);
    sample_distinct(&pool, want, rng)
}
