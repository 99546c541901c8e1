//! Wire types for webhook deliveries sent by the provider
//!
//! Field sets follow the provider's payload schemas. Structs decode with
//! `#[serde(default)]` so that missing fields fall back to zero values and
//! unknown fields are ignored; only malformed JSON and type mismatches are
//! decode errors.

use std::io::Read;

use serde::Deserialize;

use crate::error::Result;

/// Account descriptor attached to hook payloads.
///
/// `login` and `username` are alternate identifiers; deliveries populate at
/// least one of them, and which one is filled varies by event kind.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HookAccount {
    pub id: i64,
    pub login: String,
    pub username: String,
    pub email: String,
    #[serde(rename = "avatar_url")]
    pub avatar: String,
}

/// Repository descriptor embedded in hook payloads
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HookRepo {
    pub id: i64,
    pub name: String,
    pub full_name: String,
    pub private: bool,
    #[serde(rename = "html_url")]
    pub url: String,
    pub owner: HookAccount,
}

/// Commit entry of a push delivery
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HookCommit {
    pub id: String,
    pub message: String,
    pub url: String,
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub modified: Vec<String>,
}

/// Payload of `push` and `create` deliveries.
///
/// For branch pushes `ref` is fully qualified (`refs/heads/main`). For
/// created tags it carries the bare tag name, `ref_type` is `tag` and `sha`
/// points at the tagged commit.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PushHook {
    #[serde(rename = "ref")]
    pub reference: String,
    pub before: String,
    pub after: String,
    #[serde(rename = "compare_url")]
    pub compare: String,
    pub ref_type: String,
    pub sha: String,
    #[serde(rename = "repository")]
    pub repo: HookRepo,
    pub commits: Vec<HookCommit>,
    pub sender: HookAccount,
}

/// Head or base side of a pull request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HookBranch {
    pub label: String,
    #[serde(rename = "ref")]
    pub reference: String,
    pub sha: String,
}

/// Pull request descriptor of a `pull_request` delivery
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HookPullRequest {
    pub id: i64,
    pub title: String,
    #[serde(rename = "html_url")]
    pub url: String,
    pub user: HookAccount,
    pub head: HookBranch,
    pub base: HookBranch,
}

/// Payload of `pull_request` deliveries
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PullRequestHook {
    pub action: String,
    pub number: i64,
    pub pull_request: HookPullRequest,
    #[serde(rename = "repository")]
    pub repo: HookRepo,
    pub sender: HookAccount,
}

/// Decodes one push delivery from a raw body stream.
pub fn parse_push(body: impl Read) -> Result<PushHook> {
    Ok(serde_json::from_reader(body)?)
}

/// Decodes one pull request delivery from a raw body stream.
pub fn parse_pull_request(body: impl Read) -> Result<PullRequestHook> {
    Ok(serde_json::from_reader(body)?)
}
