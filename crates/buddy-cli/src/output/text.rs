//! Plain-text rendering of a companion snapshot.

use std::fmt::Write;

use buddy_core::{CompanionSnapshot, LifecycleState, MAX_HEALTH};

const BAR_WIDTH: i32 = 20;

#[must_use]
pub fn render_snapshot(snapshot: &CompanionSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ccbuddy", state_icon(&snapshot.state));
    let _ = writeln!(out, "state:     {}", snapshot.state);
    let _ = writeln!(
        out,
        "health:    {}/{MAX_HEALTH} {} {}",
        snapshot.health,
        health_bar(snapshot.health),
        health_level(snapshot.health)
    );
    let _ = writeln!(out, "age:       {}", format_duration(snapshot.age_secs));
    let _ = write!(
        out,
        "last fed:  {} ago",
        format_duration(snapshot.since_fed_secs)
    );
    if !snapshot.alive {
        out.push_str("\n\nYour companion is not moving. Try `ccbuddy feed`.");
    }
    out
}

const fn state_icon(state: &LifecycleState) -> &'static str {
    match state {
        LifecycleState::Egg => "🥚",
        LifecycleState::Hatched => "🐣",
        LifecycleState::Unrecognized(_) => "❓",
    }
}

/// Fixed-width bar, one cell per five health points.
#[must_use]
pub fn health_bar(health: i32) -> String {
    let filled = health.clamp(0, MAX_HEALTH) * BAR_WIDTH / MAX_HEALTH;
    let empty = BAR_WIDTH - filled;
    format!(
        "[{}{}]",
        "#".repeat(filled as usize),
        "-".repeat(empty as usize)
    )
}

/// Severity label shown next to the bar.
#[must_use]
pub const fn health_level(health: i32) -> &'static str {
    if health > 70 {
        "good"
    } else if health > 30 {
        "hungry"
    } else {
        "starving"
    }
}

/// Human-scale duration: seconds, minutes, then hours and days with one decimal.
#[must_use]
pub fn format_duration(secs: i64) -> String {
    let secs = secs.max(0);
    match secs {
        0..60 => format!("{secs}s"),
        60..3600 => format!("{:.0}m", secs as f64 / 60.0),
        3600..86_400 => format!("{:.1}h", secs as f64 / 3600.0),
        _ => format!("{:.1}d", secs as f64 / 86_400.0),
    }
}
