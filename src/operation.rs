// src/operation.rs
use std::{fmt, str::FromStr};

use serde::Serialize;
use user_stats_domain::{
    analytics::{
        Tally, average_age, count_by_country, count_by_region, filter_by_minimum_age, top_n_oldest,
    },
    model::{Region, UserRecord},
};
use user_stats_shared_kernel::{DomainResult, PresentationError, PresentationResult};

use crate::config::Config;

/// The fixed set of aggregations selectable from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Operation {
    /// Every aggregation together, plus the total.
    #[default]
    Summary,
    Filter,
    Group,
    Avg,
    Top,
    Region,
}

impl Operation {
    pub const ALL: [Self; 6] =
        [Self::Summary, Self::Filter, Self::Group, Self::Avg, Self::Top, Self::Region];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Filter => "filter",
            Self::Group => "group",
            Self::Avg => "avg",
            Self::Top => "top",
            Self::Region => "region",
        }
    }

    /// Resolve an optional selector; no selector means [`Operation::Summary`].
    pub fn from_selector(selector: Option<&str>) -> PresentationResult<Self> {
        selector.map_or(Ok(Self::default()), str::parse::<Self>)
    }

    /// Run the aggregation(s) this operation stands for.
    pub fn execute<'a>(self, users: &'a [UserRecord], config: &Config) -> DomainResult<Report<'a>> {
        let report = match self {
            Self::Summary => Report::Summary(Summary {
                total_users: users.len(),
                filtered_count: filter_by_minimum_age(users, config.min_age)?.len(),
                countries: count_by_country(users),
                average_age: average_age(users)?,
                top_n: config.top_n,
                oldest: top_n_oldest(users, config.top_n)?,
                regions: count_by_region(users),
            }),
            Self::Filter => Report::Filter {
                filtered_count: filter_by_minimum_age(users, config.min_age)?.len(),
            },
            Self::Group => Report::Group { countries: count_by_country(users) },
            Self::Avg => Report::Avg { average_age: average_age(users)? },
            Self::Top => Report::Top { oldest: top_n_oldest(users, config.top_n)? },
            Self::Region => Report::Region { regions: count_by_region(users) },
        };
        Ok(report)
    }
}

impl FromStr for Operation {
    type Err = PresentationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| PresentationError::UnknownOperation { selector: s.to_string() })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one operation, ready to be rendered.
#[derive(Debug, Serialize)]
#[serde(tag = "operation", rename_all = "lowercase")]
pub enum Report<'a> {
    Summary(Summary<'a>),
    Filter { filtered_count: usize },
    Group { countries: Tally<String> },
    Avg { average_age: f64 },
    Top { oldest: Vec<&'a UserRecord> },
    Region { regions: Tally<Region> },
}

#[derive(Debug, Serialize)]
pub struct Summary<'a> {
    pub total_users: usize,
    pub filtered_count: usize,
    pub countries: Tally<String>,
    pub average_age: f64,
    pub top_n: usize,
    pub oldest: Vec<&'a UserRecord>,
    pub regions: Tally<Region>,
}
