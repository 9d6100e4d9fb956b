#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use nsauthz_core::config;
use nsauthz_core::{DecisionEngine, Request};

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    let engine = DecisionEngine::new(&cfg.engine).unwrap();
    assert_eq!(engine, DecisionEngine::default());
}

#[test]
fn ok_full_config() {
    let ok = r#"
version: 1
engine:
  allowed_paths: ["/version", "/healthz"]
  system_account: "system:serviceaccount:kube-system:coredns"
  system_actions: ["list"]
  namespace_separator: "-"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    let engine = DecisionEngine::new(&cfg.engine).unwrap();

    assert!(engine.evaluate(&Request::non_resource("bob", "get", "/healthz")));
    assert!(!engine.evaluate(&Request::non_resource("bob", "get", "/api")));

    let coredns = "system:serviceaccount:kube-system:coredns";
    assert!(engine.evaluate(&Request::resource(coredns, "list", "team-a-prod")));
    assert!(!engine.evaluate(&Request::resource(coredns, "watch", "team-a-prod")));
}

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
engine:
  allowed_pathz: ["/api"] # typo should fail
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "INVALID_CONFIG");
}

#[test]
fn rejects_unknown_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn rejects_invalid_engine_values() {
    let cases = [
        "engine:\n  allowed_paths: []\n",
        "engine:\n  allowed_paths: [\"api\"]\n",
        "engine:\n  system_actions: []\n",
        "engine:\n  system_actions: [\"list\", \" \"]\n",
        "engine:\n  system_account: \"kube-dns\"\n",
        "engine:\n  system_account: \"system:serviceaccount:kube-system\"\n",
        "engine:\n  namespace_separator: \"\"\n",
    ];
    for body in cases {
        let doc = format!("version: 1\n{body}");
        let err = config::load_from_str(&doc).expect_err(body);
        assert_eq!(err.code().as_str(), "INVALID_CONFIG", "case={body}");
    }
}

#[test]
fn load_from_file_roundtrip() {
    let path = std::env::temp_dir().join(format!("nsauthz-config-{}.yaml", std::process::id()));
    fs::write(&path, "version: 1\nengine:\n  system_actions: [\"list\"]\n").unwrap();

    let engine = config::engine_from_file(&path).unwrap();
    assert_eq!(engine.system_actions(), ["list"]);
    assert_eq!(engine.allowed_paths(), ["/api", "/apis", "/version"]);

    fs::remove_file(&path).unwrap();
}

#[test]
fn missing_file_is_internal() {
    let err = config::load_from_file("/nonexistent/nsauthz.yaml").expect_err("must fail");
    assert_eq!(err.code().as_str(), "INTERNAL");
}
