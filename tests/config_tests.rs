use std::io::Write;
use std::time::Duration;

use vitrine::config::Configuration;

#[test]
fn defaults_match_shipped_tuning() {
    let cfg = Configuration::default();
    assert_eq!(cfg.slider.snap_duration, Duration::from_secs(1));
    assert!((cfg.slider.drag_step - 0.015).abs() < f64::EPSILON);
    assert!((cfg.slider.snap_threshold_px - 100.0).abs() < f64::EPSILON);
    assert!((cfg.strip.velocity_gain - 40.0).abs() < f64::EPSILON);
    assert!((cfg.parallax.to_scale - 1.7).abs() < f64::EPSILON);
    assert_eq!(cfg.startup_shuffle_seed, None);
}

#[test]
fn parse_kebab_case_config() {
    let yaml = r#"
slider:
  snap-duration: 750ms
  drag-step: 0.02
strip:
  velocity-gain: 25.0
parallax:
  to-scale: 2.0
startup-shuffle-seed: 7
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(cfg.slider.snap_duration, Duration::from_millis(750));
    assert!((cfg.slider.drag_step - 0.02).abs() < f64::EPSILON);
    // unspecified fields keep their defaults
    assert!((cfg.slider.snap_threshold_px - 100.0).abs() < f64::EPSILON);
    assert!((cfg.strip.velocity_gain - 25.0).abs() < f64::EPSILON);
    assert!((cfg.strip.follow_factor - 0.5).abs() < f64::EPSILON);
    assert!((cfg.parallax.to_scale - 2.0).abs() < f64::EPSILON);
    assert_eq!(cfg.startup_shuffle_seed, Some(7));
}

#[test]
fn empty_document_yields_defaults() {
    let cfg: Configuration = serde_yaml::from_str("{}").unwrap();
    assert!((cfg.slider.drag_step - 0.015).abs() < f64::EPSILON);
}

#[test]
fn validation_rejects_zero_drag_step() {
    let yaml = r#"
slider:
  drag-step: 0.0
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    let err = cfg.validated().unwrap_err();
    assert!(err.to_string().contains("drag-step"));
}

#[test]
fn validation_rejects_duration_cut_longer_than_snap() {
    let yaml = r#"
slider:
  snap-duration: 400ms
  max-duration-cut: 0.5
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    let err = cfg.validated().unwrap_err();
    assert!(err.to_string().contains("max-duration-cut"));
}

#[test]
fn validation_rejects_out_of_range_strip_factors() {
    let yaml = r#"
strip:
  follow-factor: 1.5
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert!(cfg.validated().is_err());
}

#[test]
fn load_from_yaml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "slider:\n  snap-threshold-px: 80.0").unwrap();
    let cfg = Configuration::from_yaml_file(file.path())
        .unwrap()
        .validated()
        .unwrap();
    assert!((cfg.slider.snap_threshold_px - 80.0).abs() < f64::EPSILON);
}

#[test]
fn missing_file_is_an_error() {
    assert!(Configuration::from_yaml_file("/nonexistent/vitrine.yaml").is_err());
}
