// src/config/validate.rs

use std::str::FromStr;

use tracing::{debug, warn};

use crate::config::model::{Config, CooldownAction, Instance, RawConfig, RawInstance, RawShift};
use crate::errors::{GrinderError, Result};
use crate::schedule::{Shift, ShiftState};

/// Order in which cooldowns are checked. Only the first failure is reported,
/// so this order decides which message a user sees.
const COOLDOWN_CHECK_ORDER: [CooldownAction; 7] = [
    CooldownAction::Postmeme,
    CooldownAction::Hunt,
    CooldownAction::Highlow,
    CooldownAction::Fish,
    CooldownAction::Search,
    CooldownAction::Beg,
    CooldownAction::Margin,
];

/// How much of the document is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// Only the top-level agent. Swarm instances are passed through as-is.
    #[default]
    TopLevel,
    /// Top-level agent first, then every swarm instance in order.
    IncludeSwarm,
}

impl TryFrom<RawConfig> for Config {
    type Error = GrinderError;

    fn try_from(raw: RawConfig) -> std::result::Result<Self, Self::Error> {
        Config::from_raw(raw, ValidationPolicy::TopLevel)
    }
}

impl Config {
    /// Validate `raw` under `policy` and build the typed configuration.
    pub fn from_raw(raw: RawConfig, policy: ValidationPolicy) -> Result<Self> {
        let shifts = check_raw_config(&raw, policy)?;
        Ok(Config::new_unchecked(raw, shifts))
    }
}

impl Instance {
    /// Typed shift schedule of this instance.
    ///
    /// Errors name the field as `swarm.instances[<index>].shifts[<n>].state`.
    pub fn schedule(&self) -> Result<Vec<Shift>> {
        typed_shifts(&instance_prefix(self.index, "shifts"), &self.shifts)
    }
}

/// Run the top-level checks against a decoded configuration.
///
/// Checks, in this order, stopping at the first violation:
/// - `token` and `channel_id` are non-empty
/// - `suspicion_avoidance.shifts` has at least one shift
/// - `compatibility.postmeme_options` and `compatibility.allowed_searches`
///   are non-empty
/// - every cooldown except `margin` is > 0, `margin` is >= 0
/// - every shift state is `active` or `dormant`
///
/// Swarm instances are **not** checked; use [`validate_config_with_policy`]
/// with [`ValidationPolicy::IncludeSwarm`] for that.
pub fn validate_config(cfg: &RawConfig) -> Result<()> {
    validate_config_with_policy(cfg, ValidationPolicy::TopLevel)
}

pub fn validate_config_with_policy(cfg: &RawConfig, policy: ValidationPolicy) -> Result<()> {
    check_raw_config(cfg, policy).map(|_| ())
}

fn check_raw_config(cfg: &RawConfig, policy: ValidationPolicy) -> Result<Vec<Shift>> {
    ensure_not_empty("token", &cfg.token, "no authorization token")?;
    ensure_not_empty("channel_id", &cfg.channel_id, "no channel id")?;
    if cfg.suspicion_avoidance.shifts.is_empty() {
        return Err(GrinderError::validation(
            "suspicion_avoidance.shifts",
            "no shifts, at least 1 is required",
        ));
    }
    validate_compat_options(cfg)?;
    validate_cooldowns(cfg)?;
    let shifts = typed_shifts(
        "suspicion_avoidance.shifts",
        &cfg.suspicion_avoidance.shifts,
    )?;

    match policy {
        ValidationPolicy::TopLevel => {
            if !cfg.swarm.instances.is_empty() {
                warn!(
                    instances = cfg.swarm.instances.len(),
                    "swarm instances are not validated; credentials and shifts are used as-is"
                );
            }
        }
        ValidationPolicy::IncludeSwarm => {
            for (idx, inst) in cfg.swarm.instances.iter().enumerate() {
                validate_instance(idx, inst)?;
            }
        }
    }

    debug!(shifts = shifts.len(), ?policy, "configuration validated");
    Ok(shifts)
}

fn ensure_not_empty(field: &str, value: &str, reason: &str) -> Result<()> {
    if value.is_empty() {
        return Err(GrinderError::validation(field, reason));
    }
    Ok(())
}

fn validate_compat_options(cfg: &RawConfig) -> Result<()> {
    if cfg.compat.postmeme_opts.is_empty() {
        return Err(GrinderError::validation(
            "compatibility.postmeme_options",
            "no compatibility options",
        ));
    }
    if cfg.compat.allowed_searches.is_empty() {
        return Err(GrinderError::validation(
            "compatibility.allowed_searches",
            "no compatibility options",
        ));
    }
    Ok(())
}

fn validate_cooldowns(cfg: &RawConfig) -> Result<()> {
    let cooldown = &cfg.compat.cooldown;
    for action in COOLDOWN_CHECK_ORDER {
        let value = cooldown.seconds(action);
        let field = format!("compatibility.cooldown.{}", action.key());
        match action {
            CooldownAction::Margin if value < 0 => {
                return Err(GrinderError::validation(
                    field,
                    format!("value must be greater than or equal to 0 (got {value})"),
                ));
            }
            CooldownAction::Margin => {}
            _ if value <= 0 => {
                return Err(GrinderError::validation(
                    field,
                    format!("value must be greater than 0 (got {value})"),
                ));
            }
            _ => {}
        }
    }
    Ok(())
}

fn validate_instance(idx: usize, inst: &RawInstance) -> Result<()> {
    ensure_not_empty(
        &instance_prefix(idx, "token"),
        &inst.token,
        "no authorization token",
    )?;
    ensure_not_empty(
        &instance_prefix(idx, "channel_id"),
        &inst.channel_id,
        "no channel id",
    )?;
    let shifts_field = instance_prefix(idx, "shifts");
    if inst.shifts.is_empty() {
        return Err(GrinderError::validation(
            shifts_field,
            "no shifts, at least 1 is required",
        ));
    }
    typed_shifts(&shifts_field, &inst.shifts)?;
    Ok(())
}

fn instance_prefix(idx: usize, field: &str) -> String {
    format!("swarm.instances[{idx}].{field}")
}

/// Convert raw shifts, failing on the first unknown state.
fn typed_shifts(field: &str, shifts: &[RawShift]) -> Result<Vec<Shift>> {
    shifts
        .iter()
        .enumerate()
        .map(|(idx, raw)| {
            let state = ShiftState::from_str(&raw.state).map_err(|reason| {
                GrinderError::validation(format!("{field}[{idx}].state"), reason)
            })?;
            Ok(Shift::new(state, raw.duration))
        })
        .collect()
}
