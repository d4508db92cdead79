// domain analytics ranking utilities
use user_stats_shared_kernel::DomainResult;

use crate::model::UserRecord;

/// Number of users reported by the oldest-users ranking when none is given.
pub const DEFAULT_TOP_N: usize = 3;

/// The `n` oldest users, oldest first.
///
/// The sort is stable: users of equal age keep their input order. Fewer than
/// `n` users yields all of them.
pub fn top_n_oldest(users: &[UserRecord], n: usize) -> DomainResult<Vec<&UserRecord>> {
    let mut ranked = users
        .iter()
        .map(|u| u.parsed_age().map(|age| (age, u)))
        .collect::<DomainResult<Vec<_>>>()?;

    ranked.sort_by(|(a, _), (b, _)| b.cmp(a));
    ranked.truncate(n);
    Ok(ranked.into_iter().map(|(_, u)| u).collect())
}
