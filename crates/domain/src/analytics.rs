mod aggregate;
mod sort;
mod tally;

pub use aggregate::{
    DEFAULT_MIN_AGE, average_age, count_by_country, count_by_region, filter_by_minimum_age,
};
pub use sort::{DEFAULT_TOP_N, top_n_oldest};
pub use tally::Tally;
