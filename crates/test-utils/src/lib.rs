pub mod builders;

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// A minimal `config.yml` that passes top-level validation.
pub const VALID_CONFIG_YAML: &str = r#"
token: "mfa.abcdefghijklmnop"
channel_id: "800000000000000001"
features:
  commands:
    fish: true
    hunt: false
  auto_buy:
    fishing_pole: true
    hunting_rifle: false
    laptop: true
  balance_check: true
  log_to_file: false
  debug: false
compatibility:
  postmeme_options: ["d", "e", "n"]
  allowed_searches: ["bus", "coat", "dresser"]
  auto_sell: ["boar", "fish"]
  cooldown:
    beg: 45
    fish: 60
    hunt: 60
    postmeme: 60
    search: 30
    highlow: 30
    margin: 0
suspicion_avoidance:
  typing:
    base: 0
    speed: 450
    variance: 250
  message_delay:
    base: 100
    variance: 400
  shifts:
    - state: active
      duration:
        base: 30
        variance: 10
    - state: dormant
      duration:
        base: 600
        variance: 0
"#;
