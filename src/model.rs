//! Internal entities handed to the CI engine

use serde::{Deserialize, Serialize};

/// Kind of source control management backing a repository
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScmKind {
    #[default]
    Git,
}

/// Event kind that triggered a build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildEvent {
    Push,
    Tag,
    PullRequest,
}

/// Repository as understood by the CI engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Repo {
    pub kind: ScmKind,
    pub name: String,
    pub owner: String,
    pub full_name: String,
    pub avatar: String,
    pub link: String,
    pub private: bool,
    pub clone_url: String,
    pub branch: String,
}

/// Repository permissions of the authenticated account
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Perm {
    pub pull: bool,
    pub push: bool,
    pub admin: bool,
}

/// Organization the CI engine scopes repositories to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub login: String,
    pub avatar: String,
}

/// Build descriptor extracted from a single hook delivery.
///
/// `reference` is always fully qualified: `refs/heads/<branch>` for pushes,
/// `refs/tags/<tag>` for tag events and `refs/pull/<number>/head` for pull
/// requests. `timestamp` is the wall-clock capture time in unix seconds,
/// never a value carried by the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Build {
    pub event: BuildEvent,
    pub commit: String,
    #[serde(rename = "ref")]
    pub reference: String,
    pub link: String,
    pub branch: String,
    pub message: String,
    pub avatar: String,
    pub author: String,
    pub sender: String,
    pub email: Option<String>,
    pub timestamp: i64,
    pub title: Option<String>,
    pub refspec: Option<String>,
    pub changed_files: Vec<String>,
}
