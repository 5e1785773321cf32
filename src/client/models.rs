//! Secret models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single Actions secret (values are never returned by the list API)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Secret {
    /// Secret name
    pub name: String,

    /// Last modification time
    pub updated_at: DateTime<Utc>,

    /// Visibility tag; only present for organization-scoped secrets,
    /// empty for repository-scoped ones
    #[serde(default)]
    pub visibility: String,
}

/// Wire shape of the secrets list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct SecretsPayload {
    /// Secrets in server order
    pub secrets: Vec<Secret>,
}

/// Which repositories within an organization may use a secret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    All,
    Private,
    Selected,
}

impl Visibility {
    /// Parse a wire tag; unknown tags yield `None`
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "all" => Some(Visibility::All),
            "private" => Some(Visibility::Private),
            "selected" => Some(Visibility::Selected),
            _ => None,
        }
    }

    /// Human-readable description for interactive output
    pub fn description(self) -> &'static str {
        match self {
            Visibility::All => "Visible to all repositories",
            Visibility::Private => "Visible to private repositories",
            Visibility::Selected => "Visible to selected repositories",
        }
    }
}
