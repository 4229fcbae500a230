//! Construction parameters for a simulation run.

use std::time::Duration;

use rand::{thread_rng, Rng};

/// How long one haircut takes: a fixed duration, or a fresh draw from an
/// inclusive millisecond range on every cut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServicePolicy {
    Fixed(Duration),
    BoundedRandom { min: Duration, max: Duration },
}

impl ServicePolicy {
    pub fn next_duration(&self) -> Duration {
        match self {
            ServicePolicy::Fixed(duration) => *duration,
            ServicePolicy::BoundedRandom { min, max } => {
                let millis =
                    thread_rng().gen_range(min.as_millis() as u64..=max.as_millis() as u64);
                Duration::from_millis(millis)
            }
        }
    }

    /// Parses "1500" as a fixed duration and "500:2000" as random bounds.
    pub fn parse(raw: &str) -> Result<Self, String> {
        if raw.contains(':') {
            let (min, max) = parse_millis_bounds(raw)?;
            return Ok(ServicePolicy::BoundedRandom { min, max });
        }
        let millis = raw.parse::<u64>().map_err(|err| err.to_string())?;
        Ok(ServicePolicy::Fixed(Duration::from_millis(millis)))
    }
}

/// Parses an inclusive "min:max" millisecond range.
pub fn parse_millis_bounds(raw: &str) -> Result<(Duration, Duration), String> {
    let (raw_min, raw_max) = raw
        .split_once(':')
        .ok_or_else(|| format!("Expected <min_ms>:<max_ms>, got: {}", raw))?;
    let min = raw_min.parse::<u64>().map_err(|err| err.to_string())?;
    let max = raw_max.parse::<u64>().map_err(|err| err.to_string())?;
    if min > max {
        return Err(format!("Lower bound {} exceeds upper bound {}", min, max));
    }
    Ok((Duration::from_millis(min), Duration::from_millis(max)))
}

#[derive(Debug, Clone)]
pub struct ShopConfig {
    pub waiting_chairs: usize,
    pub total_customers: usize,
    pub cut_policy: ServicePolicy,
    pub arrival_min: Duration,
    pub arrival_max: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_policy_always_returns_the_same_duration() {
        let policy = ServicePolicy::Fixed(Duration::from_millis(1500));
        assert_eq!(policy.next_duration(), Duration::from_millis(1500));
        assert_eq!(policy.next_duration(), Duration::from_millis(1500));
    }

    #[test]
    fn test_bounded_random_policy_stays_within_bounds() {
        let policy = ServicePolicy::BoundedRandom {
            min: Duration::from_millis(2),
            max: Duration::from_millis(5),
        };
        for _ in 0..50 {
            let duration = policy.next_duration();
            assert!(duration >= Duration::from_millis(2));
            assert!(duration <= Duration::from_millis(5));
        }
    }

    #[test]
    fn test_parse_accepts_fixed_and_ranged_durations() {
        assert_eq!(
            ServicePolicy::parse("2000"),
            Ok(ServicePolicy::Fixed(Duration::from_millis(2000)))
        );
        assert_eq!(
            ServicePolicy::parse("500:2000"),
            Ok(ServicePolicy::BoundedRandom {
                min: Duration::from_millis(500),
                max: Duration::from_millis(2000),
            })
        );
        assert!(ServicePolicy::parse("fast").is_err());
    }

    #[test]
    fn test_parse_millis_bounds_rejects_inverted_ranges() {
        assert!(parse_millis_bounds("2000:500").is_err());
        assert!(parse_millis_bounds("500").is_err());
        assert_eq!(
            parse_millis_bounds("1:1"),
            Ok((Duration::from_millis(1), Duration::from_millis(1)))
        );
    }
}
