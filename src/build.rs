//! Build and repository extraction from decoded hook deliveries

use std::collections::HashSet;

use chrono::Utc;

use crate::avatar::{expand_avatar, fix_malformed_avatar};
use crate::hook::{HookAccount, HookRepo, PullRequestHook, PushHook};
use crate::model::{Build, BuildEvent, Repo};

/// Identifier fields carried by hook accounts
#[derive(Debug, Clone, Copy)]
enum IdentityField {
    Login,
    Username,
}

/// Ordered identifier preferences for one event kind, first non-empty wins.
///
/// The orders are asymmetric on purpose: push and tag deliveries prefer
/// `login` for the build author but `username` for the sender, while pull
/// requests take the pull request author's `username` with no fallback at
/// all. Keep the asymmetry here rather than folding it into one shared rule.
struct IdentityPrecedence {
    author: &'static [IdentityField],
    sender: &'static [IdentityField],
}

const PUSH_IDENTITY: IdentityPrecedence = IdentityPrecedence {
    author: &[IdentityField::Login, IdentityField::Username],
    sender: &[IdentityField::Username, IdentityField::Login],
};

const PULL_REQUEST_IDENTITY: IdentityPrecedence = IdentityPrecedence {
    author: &[IdentityField::Username],
    sender: &[IdentityField::Username, IdentityField::Login],
};

/// Picks the first non-empty candidate field from an account.
fn resolve_identity(precedence: &[IdentityField], account: &HookAccount) -> String {
    precedence
        .iter()
        .map(|field| match field {
            IdentityField::Login => account.login.as_str(),
            IdentityField::Username => account.username.as_str(),
        })
        .find(|candidate| !candidate.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// Extracts the build data from a push delivery.
pub fn build_from_push(hook: &PushHook) -> Build {
    let avatar = expand_avatar(&hook.repo.url, &fix_malformed_avatar(&hook.sender.avatar));

    let message = hook
        .commits
        .first()
        .map(|commit| commit.message.clone())
        .unwrap_or_default();

    // A single-commit push links to the commit itself instead of the compare view.
    let link = match hook.commits.as_slice() {
        [only] => only.url.clone(),
        _ => hook.compare.clone(),
    };

    Build {
        event: BuildEvent::Push,
        commit: hook.after.clone(),
        reference: hook.reference.clone(),
        link,
        branch: hook
            .reference
            .strip_prefix("refs/heads/")
            .unwrap_or(&hook.reference)
            .to_string(),
        message,
        avatar,
        author: resolve_identity(PUSH_IDENTITY.author, &hook.sender),
        sender: resolve_identity(PUSH_IDENTITY.sender, &hook.sender),
        email: (!hook.sender.email.is_empty()).then(|| hook.sender.email.clone()),
        timestamp: Utc::now().timestamp(),
        title: None,
        refspec: None,
        changed_files: changed_files_from_push(hook),
    }
}

/// Extracts the build data from a tag creation delivery.
///
/// The hook's `ref` carries only the bare tag name, so the reference, link
/// and message are all synthesized from it. There is no commit message for a
/// created tag.
pub fn build_from_tag(hook: &PushHook) -> Build {
    let avatar = expand_avatar(&hook.repo.url, &fix_malformed_avatar(&hook.sender.avatar));

    Build {
        event: BuildEvent::Tag,
        commit: hook.sha.clone(),
        reference: format!("refs/tags/{}", hook.reference),
        link: format!("{}/src/tag/{}", hook.repo.url, hook.reference),
        branch: format!("refs/tags/{}", hook.reference),
        message: format!("created tag {}", hook.reference),
        avatar,
        author: resolve_identity(PUSH_IDENTITY.author, &hook.sender),
        sender: resolve_identity(PUSH_IDENTITY.sender, &hook.sender),
        email: None,
        timestamp: Utc::now().timestamp(),
        title: None,
        refspec: None,
        changed_files: Vec::new(),
    }
}

/// Extracts the build data from a pull request delivery.
pub fn build_from_pull_request(hook: &PullRequestHook) -> Build {
    // The avatar comes from the pull request author, not the sender.
    let avatar = expand_avatar(
        &hook.repo.url,
        &fix_malformed_avatar(&hook.pull_request.user.avatar),
    );

    Build {
        event: BuildEvent::PullRequest,
        commit: hook.pull_request.head.sha.clone(),
        reference: format!("refs/pull/{}/head", hook.number),
        link: hook.pull_request.url.clone(),
        branch: hook.pull_request.base.reference.clone(),
        message: hook.pull_request.title.clone(),
        avatar,
        author: resolve_identity(PULL_REQUEST_IDENTITY.author, &hook.pull_request.user),
        sender: resolve_identity(PULL_REQUEST_IDENTITY.sender, &hook.sender),
        email: None,
        timestamp: Utc::now().timestamp(),
        title: Some(hook.pull_request.title.clone()),
        refspec: Some(format!(
            "{}:{}",
            hook.pull_request.head.reference, hook.pull_request.base.reference
        )),
        changed_files: Vec::new(),
    }
}

/// Extracts the minimal repository projection from a push delivery.
pub fn repo_from_push(hook: &PushHook) -> Repo {
    minimal_repo(&hook.repo)
}

/// Extracts the minimal repository projection from a pull request delivery.
pub fn repo_from_pull_request(hook: &PullRequestHook) -> Repo {
    minimal_repo(&hook.repo)
}

fn minimal_repo(repo: &HookRepo) -> Repo {
    Repo {
        name: repo.name.clone(),
        owner: repo.owner.username.clone(),
        full_name: repo.full_name.clone(),
        link: repo.url.clone(),
        ..Repo::default()
    }
}

/// Collects every path touched by the delivery's commits, keeping the first
/// occurrence of each path regardless of which change list it appeared in.
fn changed_files_from_push(hook: &PushHook) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();
    for commit in &hook.commits {
        for path in commit
            .added
            .iter()
            .chain(&commit.removed)
            .chain(&commit.modified)
        {
            if seen.insert(path.as_str()) {
                files.push(path.clone());
            }
        }
    }
    files
}
