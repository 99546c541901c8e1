//! Normalization of Gitea webhook deliveries and API entities into the
//! provider-agnostic model consumed by the CI server.
//!
//! The server hands raw delivery bodies to [`parse_hook`] together with the
//! provider's event name; supported deliveries come back as a ([`Repo`],
//! [`Build`]) pair ready for the pipeline engine. The conversion helpers in
//! [`convert`] and the duplicate-registration lookup in [`matcher`] cover
//! the API-entity side of the integration.
//!
//! Everything here is synchronous and stateless: each call works on its own
//! inputs and returns freshly constructed values, so all functions are safe
//! to call concurrently without coordination.

pub mod avatar;
pub mod build;
pub mod convert;
pub mod error;
pub mod hook;
pub mod matcher;
pub mod model;

use std::io::Read;

use tracing::debug;

pub use crate::avatar::{expand_avatar, fix_malformed_avatar};
pub use crate::build::{
    build_from_pull_request, build_from_push, build_from_tag, repo_from_pull_request,
    repo_from_push,
};
pub use crate::convert::{to_perm, to_repo, to_team};
pub use crate::error::{EventError, Result};
pub use crate::hook::{PullRequestHook, PushHook, parse_pull_request, parse_push};
pub use crate::matcher::{RegisteredHook, matching_hooks};
pub use crate::model::{Build, BuildEvent, Perm, Repo, ScmKind, Team};

/// Hook event name for branch pushes
pub const EVENT_PUSH: &str = "push";
/// Hook event name for created refs (branches and tags)
pub const EVENT_CREATE: &str = "create";
/// Hook event name for pull request activity
pub const EVENT_PULL_REQUEST: &str = "pull_request";

const REF_TYPE_TAG: &str = "tag";
const ACTION_OPENED: &str = "opened";
const ACTION_SYNCHRONIZED: &str = "synchronized";

/// Decodes the raw body of the named hook event and derives the repository
/// and build it describes.
///
/// Returns `Ok(None)` for deliveries that never trigger builds: unsupported
/// event names, created refs other than tags, and pull request actions other
/// than `opened` and `synchronized`. Decode failures are the only errors.
pub fn parse_hook(event: &str, body: impl Read) -> Result<Option<(Repo, Build)>> {
    match event {
        EVENT_PUSH => {
            let hook = parse_push(body)?;
            Ok(Some((repo_from_push(&hook), build_from_push(&hook))))
        }
        EVENT_CREATE => {
            let hook = parse_push(body)?;
            if hook.ref_type != REF_TYPE_TAG {
                debug!("Ignoring created {} ref '{}'", hook.ref_type, hook.reference);
                return Ok(None);
            }
            Ok(Some((repo_from_push(&hook), build_from_tag(&hook))))
        }
        EVENT_PULL_REQUEST => {
            let hook = parse_pull_request(body)?;
            if hook.action != ACTION_OPENED && hook.action != ACTION_SYNCHRONIZED {
                debug!("Ignoring pull request action '{}'", hook.action);
                return Ok(None);
            }
            Ok(Some((
                repo_from_pull_request(&hook),
                build_from_pull_request(&hook),
            )))
        }
        other => {
            debug!("Ignoring unsupported hook event '{}'", other);
            Ok(None)
        }
    }
}
