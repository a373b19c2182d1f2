use std::collections::BTreeMap;

use rand::Rng;

use jobforge_core::{StaffingKey, Vocabulary};

use crate::errors::GenerationError;
use crate::rules::RuleTables;
use crate::sampler::{sample_distinct, weighted_choice};

/// Distribute `total` headcount across 1-3 (level, role) buckets.
///
/// Bucket count is capped by the eligible role pool and by `total` so every
/// bucket receives at least one head. Buckets that collide on the same
/// (level, role) pair after the seniority guard merge by summing, so the
/// returned counts always add up to `total`.
pub fn allocate_requirements<R: Rng>(
    total: u32,
    service_line: &str,
    vocab: &Vocabulary,
    rules: &RuleTables,
    rng: &mut R,
) -> Result<BTreeMap<StaffingKey, u32>, GenerationError> {
    // Unmapped service lines fall back to the full global role set.
    let eligible: Vec<String> = match rules.eligible_roles(service_line) {
        Some(roles) if !roles.is_empty() => roles.to_vec(),
        _ => vocab.roles_levels.roles.clone(),
    };
    if eligible.is_empty() {
        return Err(GenerationError::EmptyDomain(
            "no roles available for staffing".into(),
        ));
    }

    let bucket_cap = eligible.len().min(3).min(total as usize).max(1);
    let bucket_count = rng.random_range(1..=bucket_cap);
    let roles = sample_distinct(&eligible, bucket_count, rng);

    let per_bucket = (total / roles.len() as u32).max(1);
    let mut remaining = total;
    let mut requirements: BTreeMap<StaffingKey, u32> = BTreeMap::new();

    for (position, role) in roles.iter().enumerate() {
        let buckets_left = roles.len() - position - 1;
        let amount = if buckets_left == 0 {
            remaining
        } else {
            // Jittered even split, clamped so every later bucket keeps >= 1.
            let jitter = rng.random_range(-1i64..=1);
            let ceiling = remaining as i64 - buckets_left as i64;
            (per_bucket as i64 + jitter).clamp(1, ceiling) as u32
        };
        remaining -= amount;

        let level = weighted_choice(rules.level_weights(), rng)?.clone();
        let level = enforce_seniority(level, role, vocab, rules);
        *requirements
            .entry(StaffingKey::new(level, role.clone()))
            .or_insert(0) += amount;
    }

    Ok(requirements)
}

/// Deterministically promote a disallowed pairing to the most junior level
/// the role may take; non-guarded roles pass through unchanged.
fn enforce_seniority(
    level: String,
    role: &str,
    vocab: &Vocabulary,
    rules: &RuleTables,
) -> String {
    let Some(min_rank) = rules.min_level_rank(role) else {
        return level;
    };
    let current_rank = vocab
        .roles_levels
        .levels
        .get(&level)
        .map(|meta| meta.rank)
        .unwrap_or(0);
    if current_rank >= min_rank {
        return level;
    }
    vocab
        .roles_levels
        .levels
        .iter()
        .filter(|(_, meta)| meta.rank >= min_rank)
        .min_by_key(|(_, meta)| meta.rank)
        .map(|(name, _)| name.clone())
        .unwrap_or(level)
}
