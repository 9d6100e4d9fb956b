#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::env;
use std::fs;

use nsauthz_core::DecisionEngine;
use nsauthz_eval::{engine_from_env, CONFIG_ENV};

// One test owns the variable so parallel tests never observe a half-set env.
#[test]
fn engine_follows_config_env() {
    env::remove_var(CONFIG_ENV);
    assert_eq!(engine_from_env().unwrap(), DecisionEngine::default());

    let path = env::temp_dir().join(format!("nsauthz-eval-env-{}.yaml", std::process::id()));
    fs::write(&path, "version: 1\nengine:\n  allowed_paths: [\"/healthz\"]\n").unwrap();
    env::set_var(CONFIG_ENV, &path);
    let engine = engine_from_env().unwrap();
    assert_eq!(engine.allowed_paths(), ["/healthz"]);
    assert_eq!(engine.system_actions(), ["list", "watch"]);

    fs::write(&path, "version: 1\nengine:\n  namespace_separator: \"\"\n").unwrap();
    let err = engine_from_env().expect_err("invalid config must fail");
    assert_eq!(err.code().as_str(), "INVALID_CONFIG");

    fs::remove_file(&path).unwrap();
    let err = engine_from_env().expect_err("missing file must fail");
    assert_eq!(err.code().as_str(), "INTERNAL");

    env::remove_var(CONFIG_ENV);
}
