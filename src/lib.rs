// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod schedule;

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::model::{Config, CooldownAction, Credentials};
use crate::config::{ValidationPolicy, load_and_validate_with_policy};

/// High-level entry point used by `main.rs`.
///
/// Loads `config.yml` from `args.dir`, validates it and prints a summary.
/// Any loader or validation error is returned to the caller as fatal.
pub fn run(args: CliArgs) -> Result<()> {
    let policy = if args.include_swarm {
        ValidationPolicy::IncludeSwarm
    } else {
        ValidationPolicy::TopLevel
    };

    let cfg = load_and_validate_with_policy(&args.dir, policy)
        .with_context(|| format!("invalid configuration in {}", args.dir.display()))?;

    print_summary(&cfg);
    Ok(())
}

/// Hide all but the last four characters of a secret.
pub fn redact(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 8 {
        return "****".to_string();
    }
    let tail: String = secret.chars().skip(count - 4).collect();
    format!("****{tail}")
}

fn describe(credentials: &Credentials) -> String {
    format!("token={} channel_id={}", redact(&credentials.token), credentials.channel_id)
}

fn print_summary(cfg: &Config) {
    println!("grinder config OK");
    println!("  {}", describe(&cfg.credentials));

    let features = &cfg.features;
    println!(
        "  features: fish={} hunt={} balance_check={} log_to_file={} debug={}",
        features.commands.fish,
        features.commands.hunt,
        features.balance_check,
        features.log_to_file,
        features.debug
    );
    println!(
        "  auto_buy: fishing_pole={} hunting_rifle={} laptop={}",
        features.auto_buy.fishing_pole, features.auto_buy.hunting_rifle, features.auto_buy.laptop
    );

    println!("  cooldowns (s):");
    for action in CooldownAction::ALL {
        println!("    {:<8} {}", action.key(), cfg.compat.cooldown.seconds(action));
    }

    let sa = &cfg.suspicion_avoidance;
    let typing = sa.typing.delay();
    println!(
        "  typing: {} keystrokes/min, base {}ms + [0, {}ms)",
        sa.typing.speed,
        typing.base(),
        typing.variance()
    );
    println!(
        "  message delay: base {}ms + [0, {}ms)",
        sa.message_delay.base(),
        sa.message_delay.variance()
    );

    println!("  shifts ({}):", sa.shifts.len());
    for shift in &sa.shifts {
        println!(
            "    - {:<7} {}s + [0, {}s)",
            shift.state,
            shift.duration.base(),
            shift.duration.variance()
        );
    }

    if !cfg.swarm.instances.is_empty() {
        println!("  swarm ({} instances):", cfg.swarm.instances.len());
        for inst in &cfg.swarm.instances {
            println!("    - {} shifts={}", describe(&inst.credentials), inst.shifts.len());
        }
    }

    debug!("summary printed");
}
