use super::*;

#[test]
fn test_default_config() {
    let config = ProjectConfig::default();

    assert_eq!(config.scoring.new_degree_threshold, 1);
    assert!((config.scoring.new_bonus - 0.8).abs() < 1e-12);
    assert!(!config.scoring.bonus_enabled);
    assert_eq!(config.scoring.base_gender_factor, 1.0);
    assert_eq!(config.scoring.base_nationality_factor, 1.0);
    assert_eq!(config.scoring.base_specialization_factor, 1.0);
    assert!(config.scoring.categorical_weights.is_none());

    assert_eq!(config.graph.shape, GraphShape::Coauthor);
    assert_eq!(config.records.publication_prefix, "pub.");
    assert!(config.records.data.is_none());
}

#[test]
fn test_parse_toml_config() {
    let toml_content = r#"
[scoring]
new_degree_threshold = 2
new_bonus = 0.5
bonus_enabled = true
base_gender_factor = 2.0

[scoring.categorical_weights.nationality]
BR = 1.5

[scoring.categorical_weights.specialization]
Physics = 0.5

[graph]
shape = "publication"

[records]
data = "data/authors.csv"
publication_prefix = "doi:"

[defaults]
format = "json"
workers = 4
"#;

    let config: ProjectConfig = toml::from_str(toml_content).expect("parse project config");

    assert_eq!(config.scoring.new_degree_threshold, 2);
    assert!((config.scoring.new_bonus - 0.5).abs() < 1e-12);
    assert!(config.scoring.bonus_enabled);
    assert_eq!(config.scoring.base_gender_factor, 2.0);
    // Unset fields keep their defaults
    assert_eq!(config.scoring.base_nationality_factor, 1.0);

    let weights = config
        .scoring
        .categorical_weights
        .as_ref()
        .expect("categorical weights");
    assert_eq!(weights.nationality_multiplier("BR"), Some(1.5));
    assert_eq!(weights.nationality_multiplier("FR"), None);
    assert_eq!(weights.specialization_multiplier("Physics"), Some(0.5));

    assert_eq!(config.graph.shape, GraphShape::Publication);
    assert_eq!(
        config.records.data,
        Some(PathBuf::from("data/authors.csv"))
    );
    assert_eq!(config.records.publication_prefix, "doi:");
    assert_eq!(config.defaults.format, Some("json".to_string()));
    assert_eq!(config.defaults.workers, Some(4));
}

#[test]
fn test_partial_categorical_weights() {
    let config: ProjectConfig = toml::from_str(
        r#"
[scoring.categorical_weights.specialization]
Chemistry = 2.0
"#,
    )
    .expect("parse project config");

    let weights = config.scoring.categorical_weights.expect("weights");
    assert!(weights.nationality.is_empty());
    assert!(!weights.is_empty());
}

#[test]
fn test_with_bonus_keeps_other_fields() {
    let scoring = ScoringConfig {
        new_bonus: 0.3,
        ..Default::default()
    };
    let on = scoring.with_bonus(true);
    assert!(on.bonus_enabled);
    assert!((on.new_bonus - 0.3).abs() < 1e-12);
    assert!(!scoring.bonus_enabled);
}

#[test]
fn test_load_project_config_prefers_toml() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("dindex.toml"),
        "[scoring]\nnew_bonus = 0.25\n",
    )
    .expect("write toml");
    std::fs::write(
        dir.path().join(".dindexrc.json"),
        r#"{"scoring": {"new_bonus": 0.75}}"#,
    )
    .expect("write json");

    let config = load_project_config(dir.path());
    assert!((config.scoring.new_bonus - 0.25).abs() < 1e-12);
}

#[test]
fn test_load_project_config_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join(".dindexrc.json"),
        r#"{"scoring": {"bonus_enabled": true}, "graph": {"shape": "publication"}}"#,
    )
    .expect("write json");

    let config = load_project_config(dir.path());
    assert!(config.scoring.bonus_enabled);
    assert_eq!(config.graph.shape, GraphShape::Publication);
}

#[test]
fn test_invalid_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("dindex.toml"), "[scoring\nbroken").expect("write toml");

    let config = load_project_config(dir.path());
    assert_eq!(config, ProjectConfig::default());
}

#[test]
fn test_explicit_config_file_errors_on_invalid() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[graph]\nshape = \"bipartite\"\n").expect("write toml");

    assert!(load_config_file(&path).is_err());
    assert!(load_config_file(&dir.path().join("missing.toml")).is_err());
}
