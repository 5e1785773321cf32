//! Repository context resolution
//!
//! A command either targets an explicitly named repository (`-R/--repo`) or
//! the repository the current working directory belongs to, discovered from
//! the `origin` git remote.

use std::process::Command;

use crate::error::{RepoError, Result};

/// A fully addressed repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// API host the repository lives on
    pub host: String,
    /// Owning user or organization
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl Repository {
    /// `OWNER/NAME`, as used in REST paths
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Parse a `-R/--repo` argument: `OWNER/REPO` or `HOST/OWNER/REPO`
    pub fn from_arg(arg: &str, default_host: &str) -> Result<Self> {
        let parts: Vec<&str> = arg.split('/').collect();
        match parts.as_slice() {
            [owner, name] if !owner.is_empty() && !name.is_empty() => Ok(Self {
                host: default_host.to_string(),
                owner: (*owner).to_string(),
                name: (*name).to_string(),
            }),
            [host, owner, name] if !host.is_empty() && !owner.is_empty() && !name.is_empty() => {
                Ok(Self {
                    host: (*host).to_string(),
                    owner: (*owner).to_string(),
                    name: (*name).to_string(),
                })
            }
            _ => Err(RepoError::InvalidFormat(arg.to_string()).into()),
        }
    }

    /// Parse a git remote URL into a repository.
    ///
    /// Supported forms:
    /// - `https://host/owner/name[.git]`
    /// - `git@host:owner/name[.git]`
    /// - `ssh://git@host/owner/name[.git]`
    pub fn from_remote_url(url: &str) -> Result<Self> {
        let url = url.trim();

        let (host, path) = if let Some(rest) = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
        {
            split_host_path(rest, '/')
        } else if let Some(rest) = url.strip_prefix("ssh://") {
            let rest = rest.split_once('@').map_or(rest, |(_, r)| r);
            split_host_path(rest, '/')
        } else if url.contains('@') && url.contains(':') && !url.contains("://") {
            // scp-like syntax: git@host:owner/name.git
            let rest = url.split_once('@').map_or(url, |(_, r)| r);
            split_host_path(rest, ':')
        } else {
            None
        }
        .ok_or_else(|| RepoError::UnsupportedRemote(url.to_string()))?;

        let path = path.trim_end_matches('/').trim_end_matches(".git");
        let (owner, name) = path
            .split_once('/')
            .filter(|(o, n)| !o.is_empty() && !n.is_empty() && !n.contains('/'))
            .ok_or_else(|| RepoError::UnsupportedRemote(url.to_string()))?;

        Ok(Self {
            host: host.to_string(),
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

fn split_host_path(rest: &str, sep: char) -> Option<(&str, &str)> {
    rest.split_once(sep).filter(|(host, _)| !host.is_empty())
}

/// Resolve the effective repository: the `-R` override if given, otherwise
/// the `origin` remote of the enclosing git repository.
pub fn resolve(override_arg: Option<&str>, default_host: &str) -> Result<Repository> {
    match override_arg {
        Some(arg) => Repository::from_arg(arg, default_host),
        None => discover_from_git(),
    }
}

/// Read the `origin` remote URL from git and parse it
fn discover_from_git() -> Result<Repository> {
    let output = Command::new("git")
        .args(["config", "--get", "remote.origin.url"])
        .output()
        .map_err(|e| RepoError::Git(e.to_string()))?;

    if !output.status.success() {
        return Err(RepoError::NoRemote.into());
    }

    let url = String::from_utf8_lossy(&output.stdout);
    let url = url.trim();
    if url.is_empty() {
        return Err(RepoError::NoRemote.into());
    }

    Repository::from_remote_url(url)
}
