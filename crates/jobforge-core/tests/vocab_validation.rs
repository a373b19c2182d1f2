use std::collections::BTreeMap;

use jobforge_core::{Domains, LevelMeta, Locations, RolesLevels, Vocabulary};

fn sample_vocab() -> Vocabulary {
    let mut skills_by_category = BTreeMap::new();
    skills_by_category.insert(
        "cloud_platforms".to_string(),
        vec!["AWS".to_string(), "Azure".to_string()],
    );
    skills_by_category.insert(
        "programming_languages".to_string(),
        vec!["Python".to_string(), "Rust".to_string()],
    );

    let mut levels = BTreeMap::new();
    levels.insert("Associate".to_string(), LevelMeta { rank: 1 });
    levels.insert("Trainee".to_string(), LevelMeta { rank: 0 });

    Vocabulary {
        skills_by_category,
        roles_levels: RolesLevels {
            roles: vec!["Software Engineer".to_string()],
            levels,
        },
        domains: Domains {
            industry_verticals: vec!["Healthcare".to_string()],
            service_lines: vec!["Digital Experience".to_string()],
        },
        locations: Locations {
            domestic: vec!["Pune".to_string()],
            global: vec!["London".to_string()],
            virtual_sites: vec!["Remote".to_string()],
        },
    }
}

#[test]
fn sample_vocabulary_passes_validation() {
    sample_vocab().validate().expect("validate");
}

#[test]
fn duplicate_skill_within_category_is_rejected() {
    let mut vocab = sample_vocab();
    vocab
        .skills_by_category
        .get_mut("cloud_platforms")
        .unwrap()
        .push("AWS".to_string());
    assert!(vocab.validate().is_err());
}

#[test]
fn level_containing_space_is_rejected() {
    let mut vocab = sample_vocab();
    vocab
        .roles_levels
        .levels
        .insert("Senior Associate".to_string(), LevelMeta { rank: 2 });
    assert!(vocab.validate().is_err());
}

#[test]
fn entry_containing_list_delimiter_is_rejected() {
    let mut vocab = sample_vocab();
    vocab.locations.global.push("London|Paris".to_string());
    assert!(vocab.validate().is_err());
}

#[test]
fn empty_skill_category_is_rejected() {
    let mut vocab = sample_vocab();
    vocab
        .skills_by_category
        .insert("empty_category".to_string(), Vec::new());
    assert!(vocab.validate().is_err());
}

#[test]
fn location_union_preserves_declaration_order() {
    let vocab = sample_vocab();
    assert_eq!(vocab.locations.all(), vec!["Pune", "London", "Remote"]);
}
