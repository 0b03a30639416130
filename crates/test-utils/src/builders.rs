#![allow(dead_code)]

use grinder::config::{Config, CooldownAction, RawConfig, RawInstance, RawShift};
use grinder::schedule::SecondsDuration;

/// Builder for `RawConfig` to simplify test setup.
///
/// `RawConfigBuilder::valid()` starts from a configuration that passes every
/// top-level check; each setter breaks (or changes) exactly one field.
pub struct RawConfigBuilder {
    config: RawConfig,
}

impl RawConfigBuilder {
    /// Everything empty/zero, as decoded from an empty mapping.
    pub fn empty() -> Self {
        Self {
            config: RawConfig::default(),
        }
    }

    pub fn valid() -> Self {
        let mut config = RawConfig::default();
        config.token = "mfa.abcdefghijklmnop".to_string();
        config.channel_id = "800000000000000001".to_string();
        config.compat.postmeme_opts = vec!["d".to_string(), "e".to_string()];
        config.compat.allowed_searches = vec!["bus".to_string(), "coat".to_string()];
        config.compat.cooldown.beg = 45;
        config.compat.cooldown.fish = 60;
        config.compat.cooldown.hunt = 60;
        config.compat.cooldown.postmeme = 60;
        config.compat.cooldown.search = 30;
        config.compat.cooldown.highlow = 30;
        config.compat.cooldown.margin = 2;
        config.suspicion_avoidance.shifts = vec![raw_shift("active", 7200, 1800)];
        Self { config }
    }

    pub fn token(mut self, token: &str) -> Self {
        self.config.token = token.to_string();
        self
    }

    pub fn channel_id(mut self, channel_id: &str) -> Self {
        self.config.channel_id = channel_id.to_string();
        self
    }

    pub fn no_shifts(mut self) -> Self {
        self.config.suspicion_avoidance.shifts.clear();
        self
    }

    pub fn shifts(mut self, shifts: Vec<RawShift>) -> Self {
        self.config.suspicion_avoidance.shifts = shifts;
        self
    }

    pub fn shift(mut self, state: &str, base: u64, variance: u64) -> Self {
        self.config
            .suspicion_avoidance
            .shifts
            .push(raw_shift(state, base, variance));
        self
    }

    pub fn postmeme_options(mut self, opts: &[&str]) -> Self {
        self.config.compat.postmeme_opts = opts.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn allowed_searches(mut self, opts: &[&str]) -> Self {
        self.config.compat.allowed_searches = opts.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn cooldown(mut self, action: CooldownAction, seconds: i64) -> Self {
        let cd = &mut self.config.compat.cooldown;
        match action {
            CooldownAction::Beg => cd.beg = seconds,
            CooldownAction::Fish => cd.fish = seconds,
            CooldownAction::Hunt => cd.hunt = seconds,
            CooldownAction::Postmeme => cd.postmeme = seconds,
            CooldownAction::Search => cd.search = seconds,
            CooldownAction::Highlow => cd.highlow = seconds,
            CooldownAction::Margin => cd.margin = seconds,
        }
        self
    }

    pub fn instance(mut self, instance: RawInstance) -> Self {
        self.config.swarm.instances.push(instance);
        self
    }

    pub fn build_raw(self) -> RawConfig {
        self.config
    }

    pub fn build(self) -> Config {
        Config::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for RawConfigBuilder {
    fn default() -> Self {
        Self::valid()
    }
}

pub fn raw_shift(state: &str, base: u64, variance: u64) -> RawShift {
    RawShift {
        state: state.to_string(),
        duration: SecondsDuration::new(base, variance),
    }
}

/// Swarm member with its own credentials and one active shift.
pub fn raw_instance(token: &str, channel_id: &str) -> RawInstance {
    RawInstance {
        token: token.to_string(),
        channel_id: channel_id.to_string(),
        shifts: vec![raw_shift("active", 3600, 600)],
    }
}
