//! GitHub REST API client

use async_trait::async_trait;

pub mod github;
pub mod models;

#[cfg(test)]
pub mod mock;

pub use github::GitHubClient;
pub use models::{Secret, SecretsPayload, Visibility};

use crate::error::Result;
use crate::repo::Repository;

/// Read access to Actions secrets
#[async_trait]
pub trait SecretsApi: Send + Sync {
    /// List an organization's secrets on the given host
    async fn list_org_secrets(&self, host: &str, org: &str) -> Result<Vec<Secret>>;

    /// List a repository's secrets
    async fn list_repo_secrets(&self, repo: &Repository) -> Result<Vec<Secret>>;
}
