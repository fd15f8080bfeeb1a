//! Tests for schedule configuration.

use super::*;

#[test]
fn test_defaults() {
    let config = ScheduleConfig::default();
    assert_eq!(config.num_shifts, 12);
    assert_eq!(config.shift_size, 2);
    assert!(config.enforce_veteran_coverage);
    assert!(!config.enforce_split_adjacency);
    assert_eq!(config.model_variant, ModelVariant::ShiftMajor);
    assert_eq!(config.shift_cap, ShiftCap::AtMost(2));
    assert!(config.friend_groups.is_empty());
    assert!(config.split_candidates.is_none());
    assert!(config.time_limit().is_none());
}

#[test]
fn test_toml_parsing() {
    let toml = r#"
        num_shifts = 8
        shift_size = 1
        enforce_veteran_coverage = false
        enforce_split_adjacency = true
        model_variant = "person_major_ranked"
        friend_groups = [[1, 2], [3, 4, 5]]
        split_candidates = [6]

        [shift_cap]
        at_most = 3

        [termination]
        millis_spent_limit = 250
        node_limit = 10000
    "#;

    let config = ScheduleConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.num_shifts, 8);
    assert_eq!(config.shift_size, 1);
    assert!(!config.enforce_veteran_coverage);
    assert!(config.enforce_split_adjacency);
    assert_eq!(config.model_variant, ModelVariant::PersonMajorRanked);
    assert_eq!(config.friend_groups.len(), 2);
    assert_eq!(config.friend_groups[1].members().len(), 3);
    assert_eq!(config.split_candidates, Some(vec![PersonId(6)]));
    assert_eq!(config.shift_cap, ShiftCap::AtMost(3));
    assert_eq!(config.time_limit(), Some(Duration::from_millis(250)));
    assert_eq!(config.node_limit(), Some(10_000));
}

#[test]
fn test_toml_partial_keeps_defaults() {
    let config = ScheduleConfig::from_toml_str("shift_size = 3").unwrap();
    assert_eq!(config.shift_size, 3);
    assert_eq!(config.num_shifts, 12);
    assert!(config.enforce_veteran_coverage);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        num_shifts: 12
        model_variant: person_major_threshold
        shift_cap:
          one_of: [0, 2]
        friend_groups:
          - [0, 1]
        termination:
          seconds_spent_limit: 5
    "#;

    let config = ScheduleConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.model_variant, ModelVariant::PersonMajorThreshold);
    assert_eq!(config.shift_cap, ShiftCap::zero_or_two());
    assert_eq!(config.friend_groups, vec![FriendGroup::new([0, 1])]);
    assert_eq!(config.time_limit(), Some(Duration::from_secs(5)));
}

#[test]
fn test_yaml_flow_shift_cap() {
    let config = ScheduleConfig::from_yaml_str("shift_cap: { at_most: 1 }").unwrap();
    assert_eq!(config.shift_cap, ShiftCap::AtMost(1));
    assert_eq!(config.num_shifts, 12);
}

#[test]
fn test_invalid_toml() {
    let result = ScheduleConfig::from_toml_str("model_variant = \"diagonal\"");
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn test_missing_file() {
    let result = ScheduleConfig::load("definitely/not/here/schedule.toml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_builder() {
    let config = ScheduleConfig::new()
        .with_num_shifts(4)
        .with_shift_size(1)
        .with_veteran_coverage(false)
        .with_split_adjacency(true)
        .with_model_variant(ModelVariant::PersonMajorThreshold)
        .with_shift_cap(ShiftCap::zero_or_two())
        .with_friend_group(FriendGroup::new([0, 1]))
        .with_split_candidates([2, 3])
        .with_termination_seconds(10)
        .with_node_limit(500);

    assert_eq!(config.num_shifts, 4);
    assert_eq!(config.friend_groups.len(), 1);
    assert_eq!(config.split_candidates, Some(vec![PersonId(2), PersonId(3)]));
    assert_eq!(config.time_limit(), Some(Duration::from_secs(10)));
    assert_eq!(config.node_limit(), Some(500));
}

#[test]
fn test_validate() {
    assert!(ScheduleConfig::default().validate().is_ok());
    assert!(ScheduleConfig::default().with_num_shifts(0).validate().is_err());
    assert!(ScheduleConfig::default().with_num_shifts(13).validate().is_err());
    assert!(ScheduleConfig::default()
        .with_shift_cap(ShiftCap::OneOf(vec![]))
        .validate()
        .is_err());
}

#[test]
fn test_shift_cap_most() {
    assert_eq!(ShiftCap::AtMost(3).most(), 3);
    assert_eq!(ShiftCap::zero_or_two().most(), 2);
    assert_eq!(ShiftCap::OneOf(vec![]).most(), 0);
}

#[test]
fn test_shift_cap_allows() {
    assert!(ShiftCap::AtMost(2).allows(0));
    assert!(ShiftCap::AtMost(2).allows(2));
    assert!(!ShiftCap::AtMost(2).allows(3));
    assert!(ShiftCap::zero_or_two().allows(0));
    assert!(!ShiftCap::zero_or_two().allows(1));
    assert!(ShiftCap::zero_or_two().allows(2));
}

#[test]
fn test_config_error_converts() {
    let err: ShiftForgeError = ConfigError::Invalid("bad".to_string()).into();
    assert!(matches!(err, ShiftForgeError::Config(_)));
}

#[test]
fn test_model_variant_display() {
    assert_eq!(format!("{}", ModelVariant::ShiftMajor), "ShiftMajor");
    assert_eq!(
        format!("{}", ModelVariant::PersonMajorThreshold),
        "PersonMajorThreshold"
    );
}
