//! GitHub API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;

use super::{Secret, SecretsApi, SecretsPayload};
use crate::config::{Config, DEFAULT_HOST};
use crate::error::{ApiError, Error, Result};
use crate::repo::Repository;

/// GitHub REST API client
pub struct GitHubClient {
    http: HttpClient,
    api_url: Option<String>,
}

impl GitHubClient {
    /// Create a client with the token and API URL override from config
    pub fn new(config: &Config) -> Result<Self> {
        let token = config.require_token()?;

        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("token {token}"))
            .map_err(|e| Error::ClientCreation(e.to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("ghsec/", env!("CARGO_PKG_VERSION"))),
        );

        let http = HttpClient::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| Error::ClientCreation(e.to_string()))?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
        })
    }

    /// REST base URL for a host.
    ///
    /// github.com has a dedicated API domain; enterprise instances serve the
    /// same API under `/api/v3`. An `api_url` override wins for every host.
    fn rest_base(&self, host: &str) -> String {
        if let Some(url) = &self.api_url {
            return format!("{}/", url.trim_end_matches('/'));
        }
        if host == DEFAULT_HOST {
            "https://api.github.com/".to_string()
        } else {
            format!("https://{host}/api/v3/")
        }
    }

    /// Perform a single GET and decode the JSON body. No retries.
    async fn get<T: DeserializeOwned>(&self, host: &str, path: &str) -> Result<T> {
        let url = format!("{}{}", self.rest_base(host), path);
        let response = self.http.get(&url).send().await.map_err(ApiError::from)?;

        let status = response.status();
        match status {
            StatusCode::OK => {
                let data = response.json::<T>().await.map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
                })?;
                Ok(data)
            }
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden.into()),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(path.to_string()).into()),
            status if status.is_client_error() => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Bad request".to_string());
                Err(ApiError::BadRequest(error_msg).into())
            }
            status if status.is_server_error() => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Server error: {}", status));
                Err(ApiError::ServerError(error_msg).into())
            }
            _ => {
                let error_msg = format!("Unexpected status code: {}", status);
                Err(ApiError::InvalidResponse(error_msg).into())
            }
        }
    }
}

/// REST path for an organization's secrets collection
pub(crate) fn org_secrets_path(org: &str) -> String {
    format!("orgs/{org}/actions/secrets")
}

/// REST path for a repository's secrets collection
pub(crate) fn repo_secrets_path(repo: &Repository) -> String {
    format!("repos/{}/actions/secrets", repo.full_name())
}

#[async_trait]
impl SecretsApi for GitHubClient {
    async fn list_org_secrets(&self, host: &str, org: &str) -> Result<Vec<Secret>> {
        let payload: SecretsPayload = self.get(host, &org_secrets_path(org)).await?;
        Ok(payload.secrets)
    }

    async fn list_repo_secrets(&self, repo: &Repository) -> Result<Vec<Secret>> {
        let payload: SecretsPayload = self.get(&repo.host, &repo_secrets_path(repo)).await?;
        Ok(payload.secrets)
    }
}
