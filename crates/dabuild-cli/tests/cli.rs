//! End-to-end runs of the `dabuild-config` binary.

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Test context with a scratch checkout home and output directories.
struct TestContext {
    temp_dir: TempDir,
}

impl TestContext {
    fn new(packages: &[&str]) -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        for dir in ["home", "source", "orig"] {
            std::fs::create_dir_all(temp_dir.path().join(dir)).expect("failed to create dir");
        }
        for package in packages {
            std::fs::create_dir_all(temp_dir.path().join("home").join(package))
                .expect("failed to create package checkout");
        }
        Self { temp_dir }
    }

    fn path(&self, rel: &str) -> PathBuf {
        self.temp_dir.path().join(rel)
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_dabuild-config"));
        cmd.env("DEBATHENA_CHECKOUT_HOME", self.path("home"));
        cmd.env("DEBATHENA_SOURCE_DIR", self.path("source"));
        cmd.env("DEBATHENA_ORIG_DIR", self.path("orig"));
        cmd.env_remove("RUST_LOG");
        cmd
    }

    fn json(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .cmd()
            .args(args)
            .arg("--json")
            .output()
            .expect("failed to run dabuild-config");
        assert!(
            output.status.success(),
            "{}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("stdout is JSON")
    }
}

#[test]
fn test_help_command() {
    let ctx = TestContext::new(&[]);
    let output = ctx.cmd().arg("--help").output().expect("failed to run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
}

#[test]
fn test_missing_variable_fails() {
    let ctx = TestContext::new(&[]);
    let output = ctx
        .cmd()
        .env_remove("DEBATHENA_SOURCE_DIR")
        .arg("paths")
        .output()
        .expect("failed to run");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("DEBATHENA_SOURCE_DIR"), "{stderr}");
}

#[test]
fn test_flag_replaces_missing_variable() {
    let ctx = TestContext::new(&[]);
    let output = ctx
        .cmd()
        .env_remove("DEBATHENA_ORIG_DIR")
        .arg("--orig-dir")
        .arg(ctx.path("orig"))
        .arg("paths")
        .output()
        .expect("failed to run");
    assert!(output.status.success());
}

#[test]
fn test_releases_json() {
    let ctx = TestContext::new(&[]);
    let releases = ctx.json(&["releases"]);
    let rows = releases.as_array().unwrap();
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0]["release"], "squeeze");
    assert_eq!(rows[0]["family"], "debian");
    assert_eq!(rows[0]["tag"], "6.0");
    assert_eq!(rows[5]["release"], "saucy");
    assert_eq!(rows[5]["family"], "ubuntu");
}

#[test]
fn test_arches_json() {
    let ctx = TestContext::new(&[]);
    let arches = ctx.json(&["arches", "--release", "precise"]);
    let supported: Vec<&str> = arches
        .as_array()
        .unwrap()
        .iter()
        .filter(|row| row["supported"] == true)
        .map(|row| row["arch"].as_str().unwrap())
        .collect();
    assert_eq!(supported, vec!["i386", "amd64"]);
    assert_eq!(arches[4]["builder"], "package-fusion.mit.edu");
}

#[test]
fn test_packages() {
    let ctx = TestContext::new(&["athena/foo", "third/baz"]);

    let map = ctx.json(&["packages"]);
    assert_eq!(map.as_object().unwrap().len(), 2);

    let output = ctx.cmd().args(["packages", "baz"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        ctx.path("home/third/baz").display().to_string()
    );

    let output = ctx.cmd().args(["packages", "nope"]).output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_dump() {
    let ctx = TestContext::new(&["debathena/bar"]);
    let dump = ctx.json(&["dump"]);
    assert_eq!(dump["apt_root_dir"], "/mit/debathena/apt");
    assert_eq!(dump["release_tag_key"], "0D8A9E8F");
    assert_eq!(dump["ubuntu_tags"]["quantal"], "12.10");
    assert!(dump["package_map"]["bar"].is_string());
}

#[test]
fn test_single_package_json() {
    let ctx = TestContext::new(&["athena/foo"]);
    let entry = ctx.json(&["packages", "foo"]);
    assert_eq!(entry["name"], "foo");
    assert_eq!(
        entry["path"],
        ctx.path("home/athena/foo").display().to_string()
    );
    assert_eq!(entry.as_object().unwrap().len(), 2);
}
