mod common;

use grinder::cli::CliArgs;
use grinder::{redact, run};
use grinder_test_utils::VALID_CONFIG_YAML;

use common::config_dir;

#[test]
fn short_secrets_are_fully_masked() {
    assert_eq!(redact(""), "****");
    assert_eq!(redact("abcdefgh"), "****");
}

#[test]
fn long_secrets_keep_last_four_chars() {
    assert_eq!(redact("abcdefghi"), "****fghi");
    assert_eq!(redact("mfa.abcdefghijklmnop"), "****mnop");
}

#[test]
fn redact_counts_chars_not_bytes() {
    // 8 chars, 16 bytes
    assert_eq!(redact("éééééééé"), "****");
    assert_eq!(redact("tökën-ünïcødé"), "****cødé");
}

#[test]
fn run_accepts_valid_directory() {
    let dir = config_dir(VALID_CONFIG_YAML);
    let args = CliArgs {
        dir: dir.path().to_path_buf(),
        include_swarm: true,
        log_level: None,
    };

    run(args).expect("valid config");
}

#[test]
fn run_reports_invalid_directory() {
    let dir = config_dir("token: abc\n");
    let args = CliArgs {
        dir: dir.path().to_path_buf(),
        include_swarm: false,
        log_level: None,
    };

    let err = run(args).unwrap_err();

    assert!(format!("{err:#}").contains("channel_id: no channel id"));
}
