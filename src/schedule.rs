// src/schedule.rs

//! Schedule model: randomized durations and active/dormant shifts.
//!
//! Two duration types share the same `{base, variance}` shape but not the
//! same unit. `MillisDuration` drives typing and message delays,
//! `SecondsDuration` drives shifts. Both wrap a [`Jitter`] instead of
//! exposing it, so a value of one unit can never be passed where the other
//! is expected.
//!
//! The scheduler that cycles through shifts lives outside this crate; the
//! types here only describe *when* a state change should happen.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use rand::Rng;
use serde::Deserialize;

/// Unit-less `base + [0, variance)` shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Jitter {
    pub base: u64,
    pub variance: u64,
}

impl Jitter {
    pub const fn new(base: u64, variance: u64) -> Self {
        Self { base, variance }
    }

    /// Draw `base + r` where `r` is uniform in `[0, variance)`.
    ///
    /// A variance of 0 always yields exactly `base`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        if self.variance == 0 {
            return self.base;
        }
        self.base.saturating_add(rng.gen_range(0..self.variance))
    }

    /// Upper bound (exclusive when `variance > 0`).
    pub fn max(&self) -> u64 {
        self.base.saturating_add(self.variance)
    }
}

/// Randomized duration measured in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(transparent)]
pub struct MillisDuration(Jitter);

impl MillisDuration {
    pub const fn new(base_ms: u64, variance_ms: u64) -> Self {
        Self(Jitter::new(base_ms, variance_ms))
    }

    pub fn base(&self) -> u64 {
        self.0.base
    }

    pub fn variance(&self) -> u64 {
        self.0.variance
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        Duration::from_millis(self.0.sample(rng))
    }

    pub fn max(&self) -> Duration {
        Duration::from_millis(self.0.max())
    }
}

/// Randomized duration measured in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(transparent)]
pub struct SecondsDuration(Jitter);

impl SecondsDuration {
    pub const fn new(base_secs: u64, variance_secs: u64) -> Self {
        Self(Jitter::new(base_secs, variance_secs))
    }

    pub fn base(&self) -> u64 {
        self.0.base
    }

    pub fn variance(&self) -> u64 {
        self.0.variance
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        Duration::from_secs(self.0.sample(rng))
    }

    pub fn max(&self) -> Duration {
        Duration::from_secs(self.0.max())
    }
}

/// Behavioural state of the agent during a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftState {
    Active,
    Dormant,
}

impl ShiftState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftState::Active => "active",
            ShiftState::Dormant => "dormant",
        }
    }
}

impl fmt::Display for ShiftState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ShiftState {
    type Err = String;

    /// Case-sensitive: only the exact literals are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ShiftState::Active),
            "dormant" => Ok(ShiftState::Dormant),
            other => Err(format!(
                "invalid shift state: {other:?} (expected \"active\" or \"dormant\")"
            )),
        }
    }
}

/// One timed interval of a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shift {
    pub state: ShiftState,
    pub duration: SecondsDuration,
}

impl Shift {
    pub fn new(state: ShiftState, duration: SecondsDuration) -> Self {
        Self { state, duration }
    }

    pub fn is_active(&self) -> bool {
        self.state == ShiftState::Active
    }
}
