use std::path::PathBuf;

use crate::gan::{GanConfig, GanError, DEFAULT_PLOT_PATH, MLP_HIDDEN_SIZE};

#[test]
fn test_default_config() {
    let config = GanConfig::default();
    assert_eq!(config.real_mean, 4.0);
    assert_eq!(config.real_stddev, 0.5);
    assert_eq!(config.noise_range, 8.0);
    assert_eq!(config.num_steps, 1200);
    assert_eq!(config.batch_size, 12);
    assert!(!config.use_minibatch_discrimination);
    assert_eq!(config.log_every, 10);
    assert_eq!(config.animation_output_path, None);
    assert_eq!(config.num_pretrain_steps, 1000);
    assert_eq!(config.hidden_dim, MLP_HIDDEN_SIZE);
    assert_eq!(config.plot_output_path, PathBuf::from(DEFAULT_PLOT_PATH));
}

#[test]
fn test_learning_rate() {
    let mut config = GanConfig::default();
    assert_eq!(config.learning_rate(), 0.03);
    config.use_minibatch_discrimination = true;
    assert_eq!(config.learning_rate(), 0.005);
}

#[test]
fn test_partial_json_uses_defaults() {
    let dir = std::env::temp_dir().join("gan_1d_config_tests");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("partial.json");
    std::fs::write(
        &path,
        r#"{ "num_steps": 50, "use_minibatch_discrimination": true, "animation_output_path": "out.gif" }"#,
    )
    .unwrap();

    let config = GanConfig::from_json_file(&path).unwrap();
    assert_eq!(config.num_steps, 50);
    assert!(config.use_minibatch_discrimination);
    assert_eq!(config.animation_output_path, Some(PathBuf::from("out.gif")));
    assert_eq!(config.batch_size, 12);
    assert_eq!(config.real_mean, 4.0);
    assert_eq!(config.plot_output_path, PathBuf::from("gan_1d.png"));
}

#[test]
fn test_json_round_trip() {
    let config = GanConfig {
        num_steps: 7,
        seed: 99,
        plot_output_path: PathBuf::from("plot.png"),
        ..GanConfig::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    let parsed: GanConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_invalid_json() {
    let dir = std::env::temp_dir().join("gan_1d_config_tests");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("invalid.json");
    std::fs::write(&path, "{ num_steps: }").unwrap();
    assert!(matches!(
        GanConfig::from_json_file(&path),
        Err(GanError::Json(_))
    ));
    assert!(matches!(
        GanConfig::from_json_file(dir.join("missing.json")),
        Err(GanError::Io(_))
    ));
}
