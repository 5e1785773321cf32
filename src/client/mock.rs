//! Mock secrets client for unit tests

use std::sync::Mutex;

use async_trait::async_trait;

use super::github::{org_secrets_path, repo_secrets_path};
use super::{Secret, SecretsApi};
use crate::error::Result;
use crate::repo::Repository;

/// Test double that records the host and path of every request
pub struct MockSecretsClient {
    secrets: Vec<Secret>,
    pub requests: Mutex<Vec<(String, String)>>,
}

impl MockSecretsClient {
    pub fn new(secrets: Vec<Secret>) -> Self {
        Self {
            secrets,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn record(&self, host: &str, path: String) {
        self.requests
            .lock()
            .expect("requests lock")
            .push((host.to_string(), path));
    }
}

#[async_trait]
impl SecretsApi for MockSecretsClient {
    async fn list_org_secrets(&self, host: &str, org: &str) -> Result<Vec<Secret>> {
        self.record(host, org_secrets_path(org));
        Ok(self.secrets.clone())
    }

    async fn list_repo_secrets(&self, repo: &Repository) -> Result<Vec<Secret>> {
        self.record(&repo.host, repo_secrets_path(repo));
        Ok(self.secrets.clone())
    }
}
