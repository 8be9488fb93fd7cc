//! CLI integration tests for sdkshift.
//!
//! These tests run the binary against a temporary install tree and a
//! temporary profile store, covering the full activate/list/deactivate
//! workflow.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

use sdkshift::Platform;

/// Get the sdkshift binary command, routed at a fixture tree.
fn sdkshift(fx: &Fixture) -> Command {
    let mut cmd = Command::cargo_bin("sdkshift").unwrap();
    cmd.arg("--base").arg(fx.base());
    cmd.arg("--profile").arg(fx.profile());
    cmd.env_remove("SDKSHIFT_BASE");
    cmd.env_remove("SDKSHIFT_PROFILE");
    cmd
}

struct Fixture {
    tmp: TempDir,
    prefix: &'static str,
}

impl Fixture {
    /// Build an install tree shaped like a real SDK directory, with
    /// version directories tagged for the host platform.
    fn new() -> Self {
        let tmp = TempDir::new().unwrap();
        let prefix = Platform::host().unwrap().prefix();

        for dir in [
            format!("Node/{}_16.11.1", prefix),
            format!("Git/{}_2.41.0/bin", prefix),
            format!("Git/{}_2.44.0/bin", prefix),
            format!("Java/{}_jdk-17/bin", prefix),
            format!("Java/{}_jdk-21/bin", prefix),
        ] {
            fs::create_dir_all(tmp.path().join("sdk").join(dir)).unwrap();
        }

        fs::write(
            tmp.path().join("sdk/tools.toml"),
            r#"
[Node]
env_vars = [{ name = "PATH", value = "" }]

[Git]
env_vars = [{ name = "PATH", value = "bin" }]

[Java]
env_vars = ["JAVA_HOME", { name = "PATH", value = "bin" }]
"#,
        )
        .unwrap();

        Fixture { tmp, prefix }
    }

    fn base(&self) -> PathBuf {
        self.tmp.path().join("sdk")
    }

    fn profile(&self) -> PathBuf {
        self.tmp.path().join("state/sdk.profile")
    }

    fn profile_contents(&self) -> String {
        fs::read_to_string(self.profile()).unwrap_or_default()
    }
}

// ============================================================================
// sdkshift list / versions
// ============================================================================

#[test]
fn test_list_prints_configured_tools() {
    let fx = Fixture::new();

    sdkshift(&fx)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Git"))
        .stdout(predicate::str::contains("Java"))
        .stdout(predicate::str::contains("Node"));
}

#[test]
fn test_list_with_missing_catalog() {
    let fx = Fixture::new();
    fs::remove_file(fx.base().join("tools.toml")).unwrap();

    sdkshift(&fx)
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("No tools configured"));
}

#[test]
fn test_versions_lists_prefixed_directories() {
    let fx = Fixture::new();

    sdkshift(&fx)
        .args(["versions", "Git"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("{}_2.41.0", fx.prefix)))
        .stdout(predicate::str::contains(format!("{}_2.44.0", fx.prefix)));
}

#[test]
fn test_versions_unknown_tool_fails() {
    let fx = Fixture::new();

    sdkshift(&fx)
        .args(["versions", "Unknown"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown tool `Unknown`"));
}

// ============================================================================
// sdkshift use
// ============================================================================

#[test]
fn test_use_activates_and_creates_link() {
    let fx = Fixture::new();
    let version = format!("{}_16.11.1", fx.prefix);

    sdkshift(&fx)
        .args(["use", "Node", &version])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Using Node version {}",
            version
        )));

    let link = fx.base().join("Node").join(format!("{}_current", fx.prefix));
    assert!(link.symlink_metadata().unwrap().file_type().is_symlink());
    assert_eq!(
        fs::read_link(&link).unwrap(),
        fx.base().join("Node").join(&version)
    );

    // The profile now exports PATH with the current-link segment.
    let profile = fx.profile_contents();
    assert!(profile.contains(&format!("{}_current", fx.prefix)));
}

#[test]
fn test_use_twice_does_not_duplicate_path() {
    let fx = Fixture::new();
    let version = format!("{}_16.11.1", fx.prefix);

    sdkshift(&fx).args(["use", "Node", &version]).assert().success();
    sdkshift(&fx).args(["use", "Node", &version]).assert().success();

    let profile = fx.profile_contents();
    let link = fx.base().join("Node").join(format!("{}_current", fx.prefix));
    let segment = link.to_string_lossy().into_owned();
    assert_eq!(profile.matches(&segment).count(), 1);
}

#[test]
fn test_use_defaults_to_highest_version() {
    let fx = Fixture::new();

    sdkshift(&fx)
        .args(["use", "Git"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Using Git version {}_2.44.0",
            fx.prefix
        )));
}

#[test]
fn test_use_unknown_tool_fails() {
    let fx = Fixture::new();

    sdkshift(&fx)
        .args(["use", "Unknown"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown tool `Unknown`"));
}

#[test]
fn test_use_tool_without_versions_fails() {
    let fx = Fixture::new();
    fs::create_dir_all(fx.base().join("Empty")).unwrap();
    fs::write(
        fx.base().join("tools.toml"),
        "[Empty]\nenv_vars = [\"EMPTY_HOME\"]\n",
    )
    .unwrap();

    sdkshift(&fx)
        .args(["use", "Empty"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No versions found for Empty"));
}

// ============================================================================
// sdkshift current
// ============================================================================

#[test]
fn test_current_reports_link_target() {
    let fx = Fixture::new();
    let version = format!("{}_jdk-17", fx.prefix);

    sdkshift(&fx).args(["use", "Java", &version]).assert().success();

    sdkshift(&fx)
        .args(["current", "Java"])
        .assert()
        .success()
        .stdout(predicate::str::contains(&version));
}

#[test]
fn test_current_without_activation_fails() {
    let fx = Fixture::new();

    sdkshift(&fx)
        .args(["current", "Java"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No current version set"));
}

// ============================================================================
// sdkshift remove
// ============================================================================

#[test]
fn test_remove_round_trip_cleans_environment() {
    let fx = Fixture::new();
    let version = format!("{}_jdk-17", fx.prefix);

    sdkshift(&fx).args(["use", "Java", &version]).assert().success();
    assert!(fx.profile_contents().contains("JAVA_HOME"));

    sdkshift(&fx)
        .args(["remove", "Java"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deactivated Java"));

    let profile = fx.profile_contents();
    assert!(!profile.contains("JAVA_HOME"));
    assert!(!profile.contains(&fx.base().join("Java").to_string_lossy().into_owned()));
}

#[test]
fn test_remove_unconfigured_tool_is_a_noop() {
    let fx = Fixture::new();

    sdkshift(&fx)
        .args(["remove", "Unknown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deactivated Unknown"));
}

#[test]
fn test_remove_preserves_other_tools() {
    let fx = Fixture::new();
    let node = format!("{}_16.11.1", fx.prefix);
    let git = format!("{}_2.44.0", fx.prefix);

    sdkshift(&fx).args(["use", "Node", &node]).assert().success();
    sdkshift(&fx).args(["use", "Git", &git]).assert().success();
    sdkshift(&fx).args(["remove", "Node"]).assert().success();

    let profile = fx.profile_contents();
    assert!(!profile.contains(&fx.base().join("Node").to_string_lossy().into_owned()));
    assert!(profile.contains(&fx.base().join("Git").to_string_lossy().into_owned()));
}
