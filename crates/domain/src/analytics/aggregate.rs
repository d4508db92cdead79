use user_stats_shared_kernel::DomainResult;

use super::Tally;
use crate::model::{Region, UserRecord};

/// Threshold used by the minimum-age filter when none is given.
pub const DEFAULT_MIN_AGE: i64 = 30;

/// Records whose age is at least `threshold`, in input order.
///
/// Every record's age is parsed, so one malformed age fails the whole call.
pub fn filter_by_minimum_age(
    users: &[UserRecord],
    threshold: i64,
) -> DomainResult<Vec<&UserRecord>> {
    let mut kept = Vec::new();
    for user in users {
        if user.parsed_age()? >= threshold {
            kept.push(user);
        }
    }
    Ok(kept)
}

/// Users per country, keyed by the country text exactly as written.
pub fn count_by_country(users: &[UserRecord]) -> Tally<String> {
    users.iter().map(|u| u.country.clone()).collect()
}

/// Mean age rounded to one decimal; `0.0` for no users.
pub fn average_age(users: &[UserRecord]) -> DomainResult<f64> {
    if users.is_empty() {
        return Ok(0.0);
    }

    let mut sum: i64 = 0;
    for user in users {
        sum += user.parsed_age()?;
    }

    #[allow(clippy::cast_precision_loss)]
    let mean = sum as f64 / users.len() as f64;
    Ok(round_one_decimal(mean))
}

/// Users per region, in the order each region is first encountered.
pub fn count_by_region(users: &[UserRecord]) -> Tally<Region> {
    users.iter().map(UserRecord::region).collect()
}

// Rounds the exact stored value: `{:.1}` never rescales first, so 31.85
// (stored slightly above) gives 31.9 and an exact 32.25 gives 32.2.
fn round_one_decimal(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}
