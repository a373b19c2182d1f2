use std::path::PathBuf;

use jobforge_core::{Settings, Vocabulary, REMOTE_SENTINEL};

fn config_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../config")
}

#[test]
fn shipped_settings_load_and_validate() {
    let settings = Settings::load(&config_dir().join("settings.toml")).expect("load settings");
    assert_eq!(settings.record_count, 50);
    assert!(settings.headcount.min >= 1);
}

#[test]
fn shipped_vocabulary_loads_and_validates() {
    let vocab = Vocabulary::load(&config_dir()).expect("load vocabulary");
    assert!(
        vocab
            .locations
            .virtual_sites
            .contains(&REMOTE_SENTINEL.to_string())
    );
    assert!(!vocab.domains.service_lines.is_empty());
    assert!(!vocab.all_skills().is_empty());
}
