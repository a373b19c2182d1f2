use jobforge_core::Settings;

const VALID: &str = r#"
record_count = 10
remote_mix_probability = 0.3

[duration_months]
min = 3
max = 12

[budget]
min = 10
max = 500

[min_experience_years]
min = 1
max = 10

[skills_per_record]
max = 4

[headcount]
min = 2
max = 8

[priority_weights]
low = 1.0
medium = 3.0
high = 2.0
"#;

fn parse(content: &str) -> Settings {
    toml::from_str(content).expect("parse settings")
}

#[test]
fn valid_settings_pass_validation() {
    parse(VALID).validate().expect("validate");
}

#[test]
fn inverted_bounds_are_rejected() {
    let settings = parse(&VALID.replace("[headcount]\nmin = 2\nmax = 8", "[headcount]\nmin = 9\nmax = 8"));
    let err = settings.validate().expect_err("inverted bounds");
    assert!(err.to_string().contains("headcount"));
}

#[test]
fn probability_outside_unit_interval_is_rejected() {
    let settings = parse(&VALID.replace("remote_mix_probability = 0.3", "remote_mix_probability = 1.5"));
    assert!(settings.validate().is_err());
}

#[test]
fn zero_record_count_is_rejected() {
    let settings = parse(&VALID.replace("record_count = 10", "record_count = 0"));
    assert!(settings.validate().is_err());
}

#[test]
fn negative_priority_weight_is_rejected() {
    let settings = parse(&VALID.replace("medium = 3.0", "medium = -3.0"));
    assert!(settings.validate().is_err());
}

#[test]
fn all_zero_priority_weights_are_rejected() {
    let content = VALID
        .replace("low = 1.0", "low = 0.0")
        .replace("medium = 3.0", "medium = 0.0")
        .replace("high = 2.0", "high = 0.0");
    assert!(parse(&content).validate().is_err());
}

#[test]
fn missing_group_fails_to_parse() {
    let content = VALID.replace("[headcount]\nmin = 2\nmax = 8", "");
    let result: Result<Settings, _> = toml::from_str(&content);
    assert!(result.is_err());
}
