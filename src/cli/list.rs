//! Secret listing command

use std::io;

use console::Term;
use log::debug;

use crate::client::{GitHubClient, Secret, SecretsApi};
use crate::config::Config;
use crate::error::Result;
use crate::output::render_secrets;
use crate::repo;
use crate::scope::{self, Scope};

/// Run the list command: resolve the scope, fetch once, render once.
pub async fn run(
    org: Option<&str>,
    repo_override: Option<&str>,
    config_path: Option<&str>,
) -> Result<()> {
    let config = Config::load_at(config_path)?;
    let client = GitHubClient::new(&config)?;

    let default_host = config.host();
    let scope = scope::resolve(org, default_host, || {
        repo::resolve(repo_override, default_host)
    })?;
    debug!("resolved scope: {:?}", scope);

    let secrets = fetch_secrets(&client, &scope).await?;
    debug!("fetched {} secrets", secrets.len());

    let tty = Term::stdout().is_term();
    render_secrets(&secrets, tty, io::stdout().lock())
}

/// Issue the single read request for the resolved scope
async fn fetch_secrets(client: &impl SecretsApi, scope: &Scope) -> Result<Vec<Secret>> {
    match scope {
        Scope::Organization { host, name } => client.list_org_secrets(host, name).await,
        Scope::Repository(repo) => client.list_repo_secrets(repo).await,
    }
}
