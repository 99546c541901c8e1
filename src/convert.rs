//! Conversions from provider API entities to the internal model

use serde::Deserialize;

use crate::avatar::expand_avatar;
use crate::model::{Perm, Repo, ScmKind, Team};

/// Account as returned by the provider API
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Account {
    pub id: i64,
    pub login: String,
    pub full_name: String,
    pub email: String,
    pub avatar_url: String,
}

/// Repository as returned by the provider API
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Repository {
    pub id: i64,
    pub owner: Account,
    pub name: String,
    pub full_name: String,
    pub private: bool,
    pub html_url: String,
    pub clone_url: String,
    pub default_branch: String,
}

/// Repository permission set as returned by the provider API
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct Permission {
    pub admin: bool,
    pub push: bool,
    pub pull: bool,
}

/// Organization as returned by the provider API
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Organization {
    pub id: i64,
    pub username: String,
    pub avatar_url: String,
}

/// Converts a provider repository to the internal representation.
pub fn to_repo(from: &Repository) -> Repo {
    // Full names are `owner/name`; a name without a slash falls back to the
    // repository's own name field.
    let name = from
        .full_name
        .split_once('/')
        .map(|(_, name)| name)
        .unwrap_or(&from.name)
        .to_string();
    let avatar = expand_avatar(&from.html_url, &from.owner.avatar_url);

    Repo {
        kind: ScmKind::Git,
        name,
        owner: from.owner.login.clone(),
        full_name: from.full_name.clone(),
        avatar,
        link: from.html_url.clone(),
        private: from.private,
        clone_url: from.clone_url.clone(),
        branch: from.default_branch.clone(),
    }
}

/// Converts a provider permission set to the internal representation.
pub fn to_perm(from: &Permission) -> Perm {
    Perm {
        pull: from.pull,
        push: from.push,
        admin: from.admin,
    }
}

/// Converts a provider organization to the internal team representation.
pub fn to_team(from: &Organization, link: &str) -> Team {
    Team {
        login: from.username.clone(),
        avatar: expand_avatar(link, &from.avatar_url),
    }
}
