use serde::{Deserialize, Serialize};
use user_stats_shared_kernel::{DomainError, DomainResult};

use super::Region;

/// One row of the users table.
///
/// `age` keeps the raw cell text: the loader never validates it, the
/// age-dependent aggregations parse it on demand and fail on bad input.
/// Columns other than `name`, `age` and `country` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub age: String,
    pub country: String,
}

impl UserRecord {
    pub fn new(
        name: impl Into<String>,
        age: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self { name: name.into(), age: age.into(), country: country.into() }
    }

    /// Parse `age` as an integer. Surrounding whitespace is tolerated.
    pub fn parsed_age(&self) -> DomainResult<i64> {
        self.age.trim().parse::<i64>().map_err(|source| DomainError::InvalidAge {
            name: self.name.clone(),
            value: self.age.clone(),
            source,
        })
    }

    #[inline]
    pub fn region(&self) -> Region {
        Region::from_country(&self.country)
    }
}
