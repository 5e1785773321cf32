//! Request scope resolution
//!
//! Decides whether a command targets an organization or a repository. Pure
//! decision logic, no network calls; the base-repository accessor is only
//! invoked for the branches that need it.

use crate::error::Result;
use crate::repo::Repository;

/// `--org` value meaning "the organization owning the current repository"
pub const OWNER_SHORTHAND: &str = "@owner";

/// The addressing context of a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Organization-level secrets on a given host
    Organization { host: String, name: String },
    /// Repository-level secrets
    Repository(Repository),
}

/// Resolve the effective scope from the `--org` flag.
///
/// - No value (or an empty one): the current repository.
/// - The `@owner` shorthand: the organization and host of the current
///   repository's owner.
/// - A literal name: that organization on the default host, independent of
///   any repository context.
pub fn resolve<F>(org: Option<&str>, default_host: &str, base_repo: F) -> Result<Scope>
where
    F: FnOnce() -> Result<Repository>,
{
    match org {
        None | Some("") => Ok(Scope::Repository(base_repo()?)),
        Some(OWNER_SHORTHAND) => {
            let repo = base_repo()?;
            Ok(Scope::Organization {
                host: repo.host,
                name: repo.owner,
            })
        }
        Some(name) => Ok(Scope::Organization {
            host: default_host.to_string(),
            name: name.to_string(),
        }),
    }
}
