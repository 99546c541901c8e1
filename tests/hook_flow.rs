//! Integration tests for the hook dispatch path: raw delivery body in,
//! normalized repository and build out.

use gitea_events::{
    BuildEvent, EVENT_CREATE, EVENT_PULL_REQUEST, EVENT_PUSH, ScmKind, parse_hook,
};

const PUSH_BODY: &str = r#"{
  "ref": "refs/heads/main",
  "before": "4b2626259b5a97b6b4eab5e6cca66adb986b672b",
  "after": "ef98532add3b2feb7a137426bba1248724367df5",
  "compare_url": "http://gitea.example.com/lena/hello-world/compare/4b2626259b5a...ef98532add3b",
  "secret": "3gEsCfjlV2ugRwgpU230lDyNBNRvu8CN",
  "commits": [
    {
      "id": "ef98532add3b2feb7a137426bba1248724367df5",
      "message": "bump\n",
      "url": "http://gitea.example.com/lena/hello-world/commit/ef98532add3b2feb7a137426bba1248724367df5",
      "author": {
        "name": "Lena Weber",
        "email": "lena@example.com",
        "username": "lena"
      },
      "added": ["CHANGELOG.md"],
      "removed": [],
      "modified": ["app/controller/application.rb"]
    }
  ],
  "repository": {
    "id": 1,
    "name": "hello-world",
    "full_name": "lena/hello-world",
    "html_url": "http://gitea.example.com/lena/hello-world",
    "ssh_url": "git@gitea.example.com:lena/hello-world.git",
    "clone_url": "http://gitea.example.com/lena/hello-world.git",
    "description": "",
    "private": true,
    "fork": false,
    "default_branch": "main",
    "owner": {
      "name": "lena",
      "email": "lena@example.com",
      "username": "lena"
    }
  },
  "pusher": {
    "login": "lena",
    "id": 1,
    "avatar_url": "http://gitea.example.com///1/avatar.png",
    "email": "lena@example.com",
    "username": "lena"
  },
  "sender": {
    "login": "lena",
    "id": 1,
    "avatar_url": "http://gitea.example.com///1/avatar.png",
    "email": "lena@example.com",
    "username": "lena"
  }
}"#;

const TAG_BODY: &str = r#"{
  "sha": "ef98532add3b2feb7a137426bba1248724367df5",
  "ref": "v1.0.0",
  "ref_type": "tag",
  "repository": {
    "id": 1,
    "name": "hello-world",
    "full_name": "lena/hello-world",
    "html_url": "http://gitea.example.com/lena/hello-world",
    "private": true,
    "default_branch": "main",
    "owner": {
      "name": "lena",
      "email": "lena@example.com",
      "username": "lena"
    }
  },
  "sender": {
    "login": "lena",
    "id": 1,
    "avatar_url": "/avatars/1",
    "username": "lena"
  }
}"#;

const BRANCH_CREATE_BODY: &str = r#"{
  "sha": "ef98532add3b2feb7a137426bba1248724367df5",
  "ref": "feature/rollout",
  "ref_type": "branch",
  "repository": {
    "name": "hello-world",
    "full_name": "lena/hello-world",
    "html_url": "http://gitea.example.com/lena/hello-world",
    "owner": {"username": "lena"}
  },
  "sender": {"login": "lena", "username": "lena"}
}"#;

fn pull_request_body(action: &str) -> String {
    format!(
        r#"{{
  "action": "{action}",
  "number": 1,
  "pull_request": {{
    "id": 7,
    "title": "Update the README with new information",
    "body": "please merge",
    "state": "open",
    "html_url": "http://gitea.example.com/lena/hello-world/pulls/1",
    "user": {{
      "id": 2,
      "login": "lena-login",
      "username": "lena",
      "avatar_url": "http://gitea.example.com//avatars/2"
    }},
    "head": {{
      "label": "feature/changes",
      "ref": "feature/changes",
      "sha": "0d1a26e67d8f5eaf1f6ba5c57fc3c7d91ac0fd1c"
    }},
    "base": {{
      "label": "main",
      "ref": "main"
    }}
  }},
  "repository": {{
    "id": 35129377,
    "name": "hello-world",
    "full_name": "lena/hello-world",
    "html_url": "http://gitea.example.com/lena/hello-world",
    "owner": {{"username": "lena"}}
  }},
  "sender": {{
    "id": 1,
    "login": "lena",
    "username": "lena",
    "avatar_url": "http://gitea.example.com/avatars/1"
  }}
}}"#
    )
}

#[test]
fn push_delivery_normalizes_to_repo_and_build() {
    let (repo, build) = parse_hook(EVENT_PUSH, PUSH_BODY.as_bytes())
        .unwrap()
        .expect("push deliveries always build");

    assert_eq!(repo.kind, ScmKind::Git);
    assert_eq!(repo.name, "hello-world");
    assert_eq!(repo.owner, "lena");
    assert_eq!(repo.full_name, "lena/hello-world");
    assert_eq!(repo.link, "http://gitea.example.com/lena/hello-world");

    assert_eq!(build.event, BuildEvent::Push);
    assert_eq!(build.commit, "ef98532add3b2feb7a137426bba1248724367df5");
    assert_eq!(build.reference, "refs/heads/main");
    assert_eq!(build.branch, "main");
    assert_eq!(build.message, "bump\n");
    assert_eq!(build.author, "lena");
    assert_eq!(build.sender, "lena");
    assert_eq!(build.email.as_deref(), Some("lena@example.com"));
    // Single commit: the link is the commit itself, not the compare view.
    assert_eq!(
        build.link,
        "http://gitea.example.com/lena/hello-world/commit/ef98532add3b2feb7a137426bba1248724367df5"
    );
    // The malformed avatar is repaired before being resolved.
    assert_eq!(build.avatar, "http://gitea.example.com/1/avatar.png");
    assert_eq!(
        build.changed_files,
        vec!["CHANGELOG.md", "app/controller/application.rb"]
    );
    assert!(build.timestamp > 0);
}

#[test]
fn created_tag_delivery_builds_a_tag_event() {
    let (repo, build) = parse_hook(EVENT_CREATE, TAG_BODY.as_bytes())
        .unwrap()
        .expect("created tags build");

    assert_eq!(repo.full_name, "lena/hello-world");
    assert_eq!(build.event, BuildEvent::Tag);
    assert_eq!(build.commit, "ef98532add3b2feb7a137426bba1248724367df5");
    assert_eq!(build.reference, "refs/tags/v1.0.0");
    assert_eq!(build.branch, "refs/tags/v1.0.0");
    assert_eq!(
        build.link,
        "http://gitea.example.com/lena/hello-world/src/tag/v1.0.0"
    );
    assert_eq!(build.message, "created tag v1.0.0");
    assert_eq!(build.avatar, "http://gitea.example.com/avatars/1");
}

#[test]
fn created_branch_delivery_is_skipped() {
    let parsed = parse_hook(EVENT_CREATE, BRANCH_CREATE_BODY.as_bytes()).unwrap();
    assert!(parsed.is_none());
}

#[test]
fn opened_pull_request_normalizes_to_repo_and_build() {
    let body = pull_request_body("opened");
    let (repo, build) = parse_hook(EVENT_PULL_REQUEST, body.as_bytes())
        .unwrap()
        .expect("opened pull requests build");

    assert_eq!(repo.name, "hello-world");
    assert_eq!(repo.owner, "lena");

    assert_eq!(build.event, BuildEvent::PullRequest);
    assert_eq!(build.commit, "0d1a26e67d8f5eaf1f6ba5c57fc3c7d91ac0fd1c");
    assert_eq!(build.reference, "refs/pull/1/head");
    assert_eq!(build.branch, "main");
    assert_eq!(build.refspec.as_deref(), Some("feature/changes:main"));
    assert_eq!(
        build.title.as_deref(),
        Some("Update the README with new information")
    );
    assert_eq!(build.message, "Update the README with new information");
    assert_eq!(build.author, "lena");
    assert_eq!(build.avatar, "http://gitea.example.com/avatars/2");
}

#[test]
fn synchronized_pull_request_builds_too() {
    let body = pull_request_body("synchronized");
    assert!(
        parse_hook(EVENT_PULL_REQUEST, body.as_bytes())
            .unwrap()
            .is_some()
    );
}

#[test]
fn other_pull_request_actions_are_skipped() {
    for action in ["closed", "edited", "label_updated"] {
        let body = pull_request_body(action);
        assert!(
            parse_hook(EVENT_PULL_REQUEST, body.as_bytes())
                .unwrap()
                .is_none(),
            "action: {action}"
        );
    }
}

#[test]
fn unsupported_events_are_skipped() {
    assert!(parse_hook("issues", PUSH_BODY.as_bytes()).unwrap().is_none());
    assert!(parse_hook("", PUSH_BODY.as_bytes()).unwrap().is_none());
}

#[test]
fn malformed_bodies_surface_decode_errors() {
    assert!(parse_hook(EVENT_PUSH, &b"{\"ref\": "[..]).is_err());
    assert!(parse_hook(EVENT_PULL_REQUEST, &b"not json"[..]).is_err());
}
