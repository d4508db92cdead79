// src/app.rs
use std::{io::Write, path::Path};

use user_stats_domain::model::UserRecord;
use user_stats_infra::persistence::load_users;
use user_stats_shared_kernel::{ErrorContext, PresentationError, Result};

use crate::{config::Config, operation::Operation, output};

/// Load the users table, run the selected operation and write its report.
///
/// A missing table or an unknown selector is reported on `out` and is not an
/// error. With no users nothing else is printed, whatever the selector.
pub fn run(config: &Config, out: &mut impl Write) -> Result<()> {
    let users = load_or_report(&config.data_path, out)?;
    if users.is_empty() {
        out.flush()?;
        return Ok(());
    }

    let operation = match Operation::from_selector(config.selector.as_deref()) {
        Ok(operation) => operation,
        Err(err @ PresentationError::UnknownOperation { .. }) => {
            writeln!(out, "{err}")?;
            out.flush()?;
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let report = operation
        .execute(&users, config)
        .with_context(|| format!("running '{operation}'"))?;
    output::emit(&report, config.format, out)?;
    Ok(())
}

/// Load users from `path`; a missing file prints its diagnostic and yields no
/// users, every other failure is returned.
pub fn load_or_report(path: &Path, out: &mut impl Write) -> Result<Vec<UserRecord>> {
    match load_users(path) {
        Ok(users) => Ok(users),
        Err(err) if err.is_not_found() => {
            writeln!(out, "{err}")?;
            Ok(Vec::new())
        }
        Err(err) => Err(err).context("loading users"),
    }
}
