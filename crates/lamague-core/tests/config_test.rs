use lamague_core::config::*;
use lamague_core::errors::ConfigError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = LamagueConfig::from_toml("").unwrap();

    // TRIAD defaults
    assert_eq!(config.triad.alpha, 0.4);
    assert_eq!(config.triad.beta, 0.3);
    assert_eq!(config.triad.gamma, 0.3);
    assert_eq!(config.triad.step_size, 0.1);
    assert_eq!(config.triad.convergence_threshold, 1e-4);
    assert_eq!(config.triad.max_iterations, 1000);

    // Ledger defaults
    assert_eq!(config.ledger.spike_sigma, 3.0);
    assert_eq!(config.ledger.min_entries_for_statistics, 2);

    // Consensus defaults
    assert_eq!(config.consensus.drift_threshold, 0.4);
    assert_eq!(config.consensus.recovery_window, 10);
    assert_eq!(config.consensus.blend_rate, 0.1);
    assert_eq!(config.consensus.default_rounds, 100);

    // Observability defaults
    assert_eq!(config.observability.log_filter, "lamague=info");
    assert!(!config.observability.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[triad]
alpha = 0.6
max_iterations = 50

[consensus]
drift_threshold = 0.3
"#;
    let config = LamagueConfig::from_toml(toml).unwrap();
    assert_eq!(config.triad.alpha, 0.6);
    assert_eq!(config.triad.max_iterations, 50);
    // Non-overridden fields keep defaults
    assert_eq!(config.triad.step_size, 0.1);
    assert_eq!(config.consensus.drift_threshold, 0.3);
    assert_eq!(config.consensus.recovery_window, 10);
}

#[test]
fn weights_that_do_not_sum_to_one_are_accepted() {
    let config = LamagueConfig::from_toml("[triad]\nalpha = 0.9\nbeta = 0.9\ngamma = 0.9\n").unwrap();
    assert_eq!(config.triad.beta, 0.9);
}

#[test]
fn out_of_range_values_fail_validation() {
    let cases = [
        "[triad]\nalpha = 1.5\n",
        "[triad]\nstep_size = 0.0\n",
        "[triad]\nmax_iterations = 0\n",
        "[consensus]\ndrift_threshold = 0.0\n",
        "[consensus]\nblend_rate = 1.5\n",
        "[consensus]\nrecovery_window = 0\n",
        "[ledger]\nspike_sigma = -1.0\n",
    ];
    for toml in cases {
        let err = LamagueConfig::from_toml(toml).unwrap_err();
        assert!(
            matches!(err, ConfigError::ValidationFailed { .. }),
            "expected validation failure for {toml:?}, got {err:?}"
        );
    }
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = LamagueConfig::from_toml("[triad\nalpha = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn config_serde_roundtrip() {
    let config = LamagueConfig::default();
    let toml_str = config.to_toml().unwrap();
    let roundtripped = LamagueConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped, config);
}

#[test]
fn load_reads_file_and_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lamague.toml");
    std::fs::write(&path, "[ledger]\nspike_sigma = 2.5\n").unwrap();

    let config = LamagueConfig::load(&path).unwrap();
    assert_eq!(config.ledger.spike_sigma, 2.5);

    let missing = dir.path().join("absent.toml");
    assert!(matches!(
        LamagueConfig::load(&missing),
        Err(ConfigError::FileNotFound { .. })
    ));
}
