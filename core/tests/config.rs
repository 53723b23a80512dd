use surprise_core::{config::EventConfig, error::SurpriseError, TargetDate};

#[test]
fn partial_json_fills_in_defaults() {
    let config = EventConfig::from_json(
        r#"{ "target": { "month": 12, "day": 24, "hour": 18 }, "recipient_name": "Sam" }"#,
    )
    .expect("parse");
    assert_eq!(config.target, TargetDate::new(12, 24, 18, 0).unwrap());
    assert_eq!(config.recipient_name, "Sam");
    assert_eq!(config.formation_particles, 40);
    assert_eq!(config.pop_win_score, 10);
}

#[test]
fn impossible_target_date_fails_to_load() {
    let err = EventConfig::from_json(r#"{ "target": { "month": 4, "day": 31 } }"#).unwrap_err();
    assert!(matches!(err, SurpriseError::Config(_)), "got {err:?}");
}

#[test]
fn game_rules_are_checked() {
    let err = EventConfig::from_json(r#"{ "pop_bubbles": 3, "pop_win_score": 5 }"#).unwrap_err();
    assert!(matches!(err, SurpriseError::InvalidGameRules { bubble_count: 3, win_score: 5 }));
}

#[test]
fn json_round_trip_preserves_config() {
    let config = EventConfig {
        target: TargetDate::new(2, 29, 7, 45).unwrap(),
        seed: 123,
        ..EventConfig::default()
    };
    let json = serde_json::to_string(&config).expect("serialize");
    assert_eq!(EventConfig::from_json(&json).expect("parse"), config);
}

#[test]
fn load_reads_from_disk() {
    let path = std::env::temp_dir().join(format!("surprise-config-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "celebration_message": "Surprise!" }"#).expect("write");
    let config = EventConfig::load(&path).expect("load");
    std::fs::remove_file(&path).ok();
    assert_eq!(config.celebration_message, "Surprise!");
}

#[test]
fn missing_file_is_an_io_error() {
    let err = EventConfig::load("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, SurpriseError::Io(_)));
}

#[test]
fn error_messages_name_the_problem() {
    let bad_date = TargetDate::new(2, 30, 0, 0).unwrap_err();
    assert_eq!(bad_date.to_string(), "Invalid target date: month 2, day 30, 00:00");

    let io = EventConfig::load("/definitely/not/here.json").unwrap_err();
    assert!(io.to_string().starts_with("I/O error:"), "{io}");

    let json = EventConfig::from_json("{ not json").unwrap_err();
    assert!(json.to_string().starts_with("Config error:"), "{json}");
}
