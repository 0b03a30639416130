// src/config/model.rs

use serde::{Deserialize, Deserializer};

use crate::schedule::{MillisDuration, SecondsDuration, Shift};

/// Top-level configuration exactly as decoded from `config.yml`.
///
/// ```yaml
/// token: "..."
/// channel_id: "123"
/// features:
///   commands: { fish: true, hunt: true }
///   balance_check: true
/// compatibility:
///   postmeme_options: [d, e]
///   allowed_searches: [bus, coat]
///   cooldown: { beg: 45, fish: 60, hunt: 60, postmeme: 60, search: 30, highlow: 30, margin: 2 }
/// suspicion_avoidance:
///   typing: { base: 0, speed: 450, variance: 250 }
///   message_delay: { base: 100, variance: 400 }
///   shifts:
///     - state: active
///       duration: { base: 7200, variance: 1800 }
/// swarm:
///   instances: []
/// ```
///
/// Every section is optional; absent keys keep their zero value. Nothing here
/// is checked, see [`Config`] for the validated form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    #[serde(deserialize_with = "null_as_empty")]
    pub token: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub channel_id: String,
    pub features: Features,
    #[serde(rename = "compatibility")]
    pub compat: Compat,
    pub suspicion_avoidance: RawSuspicionAvoidance,
    pub swarm: RawSwarm,
}

/// `features` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Features {
    pub commands: Commands,
    pub auto_buy: AutoBuy,
    pub balance_check: bool,
    pub log_to_file: bool,
    pub debug: bool,
}

/// Optional commands that can be switched on individually.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct Commands {
    pub fish: bool,
    pub hunt: bool,
}

/// Items bought automatically when they are missing.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct AutoBuy {
    pub fishing_pole: bool,
    pub hunting_rifle: bool,
    pub laptop: bool,
}

/// `compatibility` section: menu options and cooldowns.
///
/// The option lists are free-form; only their non-emptiness is validated.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Compat {
    #[serde(rename = "postmeme_options")]
    pub postmeme_opts: Vec<String>,
    pub allowed_searches: Vec<String>,
    pub cooldown: Cooldown,
    pub auto_sell: Vec<String>,
}

/// Cooldowns in seconds.
///
/// Signed so that negative values from the file reach validation instead of
/// failing as a decode error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Cooldown {
    pub beg: i64,
    pub fish: i64,
    pub hunt: i64,
    pub postmeme: i64,
    pub search: i64,
    pub highlow: i64,
    pub margin: i64,
}

/// The actions that carry a cooldown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CooldownAction {
    Beg,
    Fish,
    Hunt,
    Postmeme,
    Search,
    Highlow,
    /// Extra seconds added on top of every other cooldown.
    Margin,
}

impl CooldownAction {
    pub const ALL: [CooldownAction; 7] = [
        CooldownAction::Beg,
        CooldownAction::Fish,
        CooldownAction::Hunt,
        CooldownAction::Postmeme,
        CooldownAction::Search,
        CooldownAction::Highlow,
        CooldownAction::Margin,
    ];

    /// Key under `compatibility.cooldown`.
    pub fn key(&self) -> &'static str {
        match self {
            CooldownAction::Beg => "beg",
            CooldownAction::Fish => "fish",
            CooldownAction::Hunt => "hunt",
            CooldownAction::Postmeme => "postmeme",
            CooldownAction::Search => "search",
            CooldownAction::Highlow => "highlow",
            CooldownAction::Margin => "margin",
        }
    }
}

impl Cooldown {
    pub fn seconds(&self, action: CooldownAction) -> i64 {
        match action {
            CooldownAction::Beg => self.beg,
            CooldownAction::Fish => self.fish,
            CooldownAction::Hunt => self.hunt,
            CooldownAction::Postmeme => self.postmeme,
            CooldownAction::Search => self.search,
            CooldownAction::Highlow => self.highlow,
            CooldownAction::Margin => self.margin,
        }
    }
}

/// Simulated typing. `base` and `variance` are milliseconds, `speed` is
/// keystrokes per minute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Typing {
    pub base: u64,
    pub speed: u32,
    pub variance: u64,
}

impl Typing {
    pub fn delay(&self) -> MillisDuration {
        MillisDuration::new(self.base, self.variance)
    }
}

/// `suspicion_avoidance` section as decoded.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSuspicionAvoidance {
    pub typing: Typing,
    pub message_delay: MillisDuration,
    pub shifts: Vec<RawShift>,
}

/// A shift whose state has not been checked yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawShift {
    pub state: String,
    pub duration: SecondsDuration,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSwarm {
    pub instances: Vec<RawInstance>,
}

/// One swarm member as decoded.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawInstance {
    #[serde(deserialize_with = "null_as_empty")]
    pub token: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub channel_id: String,
    pub shifts: Vec<RawShift>,
}

/// `token: ~` and `token: null` decode to an empty string, not the literal.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Opaque identifiers used by the network client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub channel_id: String,
}

/// Validated configuration.
///
/// Only constructed by validation (`Config::try_from` or `Config::from_raw`),
/// so the top-level shift schedule is non-empty and fully typed.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub features: Features,
    pub compat: Compat,
    pub suspicion_avoidance: SuspicionAvoidance,
    pub swarm: Swarm,
}

#[derive(Debug, Clone)]
pub struct SuspicionAvoidance {
    pub typing: Typing,
    pub message_delay: MillisDuration,
    pub shifts: Vec<Shift>,
}

#[derive(Debug, Clone, Default)]
pub struct Swarm {
    pub instances: Vec<Instance>,
}

/// One swarm member.
///
/// Members only differ from the main agent by identity and timing. Their
/// shifts stay raw because the default validation policy does not look at
/// them; use [`Instance::schedule`] to get the typed form.
#[derive(Debug, Clone)]
pub struct Instance {
    /// Position in `swarm.instances`.
    pub index: usize,
    pub credentials: Credentials,
    pub shifts: Vec<RawShift>,
}

impl Config {
    pub(crate) fn new_unchecked(raw: RawConfig, shifts: Vec<Shift>) -> Self {
        let RawConfig {
            token,
            channel_id,
            features,
            compat,
            suspicion_avoidance,
            swarm,
        } = raw;

        let instances = swarm
            .instances
            .into_iter()
            .enumerate()
            .map(|(index, inst)| Instance {
                index,
                credentials: Credentials {
                    token: inst.token,
                    channel_id: inst.channel_id,
                },
                shifts: inst.shifts,
            })
            .collect();

        Self {
            credentials: Credentials { token, channel_id },
            features,
            compat,
            suspicion_avoidance: SuspicionAvoidance {
                typing: suspicion_avoidance.typing,
                message_delay: suspicion_avoidance.message_delay,
                shifts,
            },
            swarm: Swarm { instances },
        }
    }
}
