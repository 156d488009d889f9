mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn help_lists_flags() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--domain"))
        .stdout(predicate::str::contains("--sites-available"))
        .stdout(predicate::str::contains("--htaccess-file"));
}

#[test]
fn missing_domain_exits_with_usage() {
    let ctx = TestContext::new();

    ctx.cli()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No domain given!"))
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn path_like_domain_is_rejected() {
    let ctx = TestContext::new();
    let config = ctx.write_config("");

    ctx.cli()
        .args(["--domain", "../escape", "--config"])
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid domain"));

    assert!(!ctx.path().join("escape").exists());
}

#[test]
fn redo_ssl_is_not_supported() {
    let ctx = TestContext::new();
    let config = ctx.write_config("");

    ctx.cli()
        .args(["--domain", "example.org", "--config"])
        .arg(&config)
        .arg("redo-ssl")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not supported"));

    ctx.assert_nothing_provisioned("example.org");
}

#[test]
fn unknown_config_key_is_rejected() {
    let ctx = TestContext::new();
    let config = ctx.write_config("www_usr = \"nginx\"\n");

    ctx.cli()
        .args(["--domain", "example.org", "--config"])
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config file"));
}

#[test]
fn explicit_missing_config_is_rejected() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--domain", "example.org", "--config"])
        .arg(ctx.path().join("missing.toml"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read config file"));
}
