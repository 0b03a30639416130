mod common;

use std::path::Path;

use grinder::config::{
    CONFIG_FILE_NAME, Config, config_path, load_and_validate, load_from_dir, load_from_dir_with,
};
use grinder::errors::GrinderError;
use grinder::fs::mock::MockFileSystem;
use grinder::schedule::ShiftState;
use grinder_test_utils::VALID_CONFIG_YAML;

use common::config_dir;

#[test]
fn config_path_uses_fixed_file_name() {
    assert_eq!(
        config_path("/etc/grinder"),
        Path::new("/etc/grinder").join("config.yml")
    );
    assert_eq!(CONFIG_FILE_NAME, "config.yml");
}

#[test]
fn loads_and_validates_full_document() {
    let dir = config_dir(VALID_CONFIG_YAML);

    let cfg = load_and_validate(dir.path()).expect("valid config");

    assert_eq!(cfg.credentials.token, "mfa.abcdefghijklmnop");
    assert_eq!(cfg.credentials.channel_id, "800000000000000001");
    assert!(cfg.features.commands.fish);
    assert!(!cfg.features.commands.hunt);
    assert!(cfg.features.auto_buy.laptop);
    assert!(cfg.features.balance_check);
    assert_eq!(cfg.compat.postmeme_opts, vec!["d", "e", "n"]);
    assert_eq!(cfg.compat.auto_sell, vec!["boar", "fish"]);
    assert_eq!(cfg.compat.cooldown.beg, 45);
    assert_eq!(cfg.compat.cooldown.margin, 0);

    let sa = &cfg.suspicion_avoidance;
    assert_eq!(sa.typing.speed, 450);
    assert_eq!(sa.typing.delay().variance(), 250);
    assert_eq!(sa.message_delay.base(), 100);
    assert_eq!(sa.message_delay.variance(), 400);

    assert_eq!(sa.shifts.len(), 2);
    assert_eq!(sa.shifts[0].state, ShiftState::Active);
    assert_eq!(sa.shifts[1].state, ShiftState::Dormant);
    assert!(cfg.swarm.instances.is_empty());
}

#[test]
fn shift_duration_survives_validation_unchanged() {
    let dir = config_dir(VALID_CONFIG_YAML);

    let raw = load_from_dir(dir.path()).expect("decodes");
    assert_eq!(raw.suspicion_avoidance.shifts[0].duration.base(), 30);
    assert_eq!(raw.suspicion_avoidance.shifts[0].duration.variance(), 10);

    let cfg = Config::try_from(raw).expect("valid");
    let first = cfg.suspicion_avoidance.shifts[0];
    assert_eq!(first.duration.base(), 30);
    assert_eq!(first.duration.variance(), 10);
}

#[test]
fn absent_sections_keep_zero_values() {
    let dir = config_dir("token: abc\n");

    let raw = load_from_dir(dir.path()).expect("decodes");

    assert_eq!(raw.token, "abc");
    assert!(raw.channel_id.is_empty());
    assert!(raw.suspicion_avoidance.shifts.is_empty());
    assert_eq!(raw.compat.cooldown.fish, 0);
    assert!(!raw.features.debug);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();

    match load_and_validate(dir.path()) {
        Err(GrinderError::IoError { path, source }) => {
            assert!(path.ends_with(CONFIG_FILE_NAME));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        Err(e) => panic!("Expected IoError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn malformed_yaml_is_decode_error() {
    let dir = config_dir("token: [unclosed\nchannel_id: 1\n");

    let result = load_from_dir(dir.path());

    assert!(
        matches!(result, Err(GrinderError::DecodeError { .. })),
        "got {result:?}"
    );
}

#[test]
fn wrong_shape_is_decode_error() {
    let dir = config_dir("compatibility:\n  cooldown:\n    fish: lots\n");

    let err = load_and_validate(dir.path()).unwrap_err();

    assert!(matches!(err, GrinderError::DecodeError { .. }), "got {err:?}");
    assert!(err.to_string().contains("error while decoding config"));
}

#[test]
fn negative_shift_duration_is_decode_error() {
    let yaml = "suspicion_avoidance:\n  shifts:\n    - state: active\n      duration: {base: -5, variance: 0}\n";
    let dir = config_dir(yaml);

    let result = load_from_dir(dir.path());

    assert!(matches!(result, Err(GrinderError::DecodeError { .. })));
}

#[test]
fn mock_fs_missing_file_is_io_error() {
    let fs = MockFileSystem::new();
    fs.add_file("other/config.yml", VALID_CONFIG_YAML);

    let result = load_from_dir_with(&fs, "cfg");

    assert!(matches!(result, Err(GrinderError::IoError { .. })));
}

#[test]
fn mock_fs_reads_config_from_dir() {
    let fs = MockFileSystem::new();
    fs.add_file(config_path("cfg"), VALID_CONFIG_YAML);

    let raw = load_from_dir_with(&fs, "cfg").expect("decodes");
    assert_eq!(raw.compat.allowed_searches.len(), 3);

    fs.remove_file(config_path("cfg"));
    assert!(load_from_dir_with(&fs, "cfg").is_err());
}

#[test]
fn null_credentials_decode_as_empty() {
    let yaml = VALID_CONFIG_YAML
        .replace("token: \"mfa.abcdefghijklmnop\"", "token: ~")
        .replace("channel_id: \"800000000000000001\"", "channel_id: null");
    let dir = config_dir(&yaml);

    let raw = load_from_dir(dir.path()).expect("decodes");
    assert!(raw.token.is_empty());
    assert!(raw.channel_id.is_empty());

    let err = load_and_validate(dir.path()).unwrap_err();
    assert_eq!(err.to_string(), "token: no authorization token");
}

#[test]
fn null_channel_id_is_reported() {
    let yaml = VALID_CONFIG_YAML.replace("channel_id: \"800000000000000001\"", "channel_id: null");
    let dir = config_dir(&yaml);

    let err = load_and_validate(dir.path()).unwrap_err();

    assert_eq!(err.field(), Some("channel_id"));
}

#[test]
fn null_instance_credentials_decode_as_empty() {
    let yaml = format!(
        "{VALID_CONFIG_YAML}swarm:\n  instances:\n    - token: ~\n      channel_id: null\n"
    );
    let dir = config_dir(&yaml);

    let raw = load_from_dir(dir.path()).expect("decodes");

    assert_eq!(raw.swarm.instances.len(), 1);
    assert!(raw.swarm.instances[0].token.is_empty());
    assert!(raw.swarm.instances[0].channel_id.is_empty());
}
