//! Approximate optimal bipartition of a small directed system.
//!
//! The universe of node labels is repeatedly scored with a transport cost
//! between a subset and its complement. A greedy sequence identifies a
//! candidate pair, the last element of which is split off as a partition,
//! and the pair is merged into one compound label. This continues until two
//! labels remain; the cheapest recorded partition wins.
//!
//! ## Modules
//!
//! - [`transport`]: distributions, cost matrices, assignment solver, EMD
//! - [`partition`]: labels, marginal gain, candidate pairs, the search loop
//! - [`dto`]: request/response shapes for the outer shell
pub mod dto;
pub mod partition;
pub mod transport;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Transport costs, marginal gains, and matrix entries.
pub type Energy = f32;
/// Distribution weights.
pub type Probability = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// SEARCH PARAMETERS
// ============================================================================
/// Joins the display strings of two merged labels.
pub const MERGE_SEPARATOR: &str = "_";
/// Smallest universe the candidate pair search accepts.
pub const MIN_UNIVERSE: usize = 2;
/// Demo system: two variables observed at t and t+1.
pub const DEMO_NODES: [&str; 4] = ["at", "bt", "at+1", "bt+1"];
/// Environment variable holding an optional search deadline ("30s", "5m", ...).
pub const DEADLINE_VAR: &str = "BISECT_DURATION";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging. Debug level when verbose, Info otherwise.
#[cfg(feature = "cli")]
pub fn log(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}

/// Optional search budget from the BISECT_DURATION env var.
pub fn deadline() -> Option<std::time::Duration> {
    std::env::var(DEADLINE_VAR)
        .ok()
        .and_then(|s| parse_duration(&s))
        .inspect(|d| log::info!("search will stop after {:?}", d))
}

/// Parse duration string like "30s", "5m", "2h", "1d" into Duration.
pub fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    let at = s.len().saturating_sub(1);
    if !s.is_char_boundary(at) {
        return None;
    }
    let (num, unit) = s.split_at(at);
    let value: u64 = num.parse().ok()?;
    let scale: u64 = match unit {
        "s" => 1,
        "m" => 60,
        "h" => 3600,
        "d" => 86400,
        _ => return None,
    };
    value.checked_mul(scale).map(std::time::Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn parses_durations() {
        assert_eq!(parse_duration("30s"), Some(Duration::from_secs(30)));
        assert_eq!(parse_duration("5m"), Some(Duration::from_secs(300)));
        assert_eq!(parse_duration(" 2h "), Some(Duration::from_secs(7200)));
        assert_eq!(parse_duration("1d"), Some(Duration::from_secs(86400)));
    }

    #[test]
    fn rejects_bad_durations() {
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("10"), None);
        assert_eq!(parse_duration("xs"), None);
        assert_eq!(parse_duration("3w"), None);
        assert_eq!(parse_duration("5µ"), None);
    }

    #[test]
    fn rejects_overflowing_durations() {
        assert_eq!(parse_duration("213503982334602d"), None);
        assert_eq!(parse_duration("18446744073709551615m"), None);
        assert_eq!(
            parse_duration("18446744073709551615s"),
            Some(Duration::from_secs(u64::MAX))
        );
    }
}
