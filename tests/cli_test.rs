use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn broom() -> Command {
    let mut cmd = Command::cargo_bin("broom").unwrap();
    // Keep the host environment out of config resolution.
    cmd.env_remove("BROOM_CONFIG");
    cmd
}

/// Fixture: a temp tree with a rule file, a src/ directory holding two
/// temp files and one text file, and an empty shelf/ destination.
fn write_fixture() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src");
    let shelf = dir.path().join("shelf");
    std::fs::create_dir(&src).unwrap();
    std::fs::create_dir(&shelf).unwrap();
    std::fs::write(src.join("junk_a.tmp"), "x").unwrap();
    std::fs::write(src.join("junk_b.tmp"), "x").unwrap();
    std::fs::write(src.join("keep.txt"), "precious").unwrap();

    let config = format!(
        r#"api_version = "v1.0"

[[relocate]]
name = "shelve text"
src = "{src}"
dst = "{shelf}"
patterns = ["keep.txt"]
mode = "move"

[[cleanup]]
name = "drop temps"
src = "{src}"
patterns = ["*.tmp"]
"#,
        src = src.display(),
        shelf = shelf.display()
    );
    let config_path = dir.path().join("broom.toml");
    std::fs::write(&config_path, config).unwrap();

    (dir, config_path)
}

// ─── Help & version ──────────────────────────────────────────────────────────

#[test]
fn test_help_flag() {
    broom()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("declarative rules"))
        .stdout(predicate::str::contains("cleanup"))
        .stdout(predicate::str::contains("relocate"))
        .stdout(predicate::str::contains("rules"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_short_help_shows_about_line() {
    broom()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rule-driven file housekeeping"));
}

#[test]
fn test_version_flag() {
    broom()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("broom"));
}

#[test]
fn test_no_subcommand_shows_help() {
    broom()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

// ─── Config resolution ───────────────────────────────────────────────────────

#[test]
fn test_missing_config_file_fails() {
    broom()
        .args(["-c", "/nonexistent/broom.toml", "cleanup", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn test_no_config_found_anywhere() {
    let empty = TempDir::new().unwrap();
    broom()
        .current_dir(empty.path())
        .env("HOME", empty.path())
        .args(["cleanup", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no configuration file found"));
}

#[test]
fn test_config_via_env_var() {
    let (_dir, config_path) = write_fixture();
    Command::cargo_bin("broom")
        .unwrap()
        .env("BROOM_CONFIG", &config_path)
        .args(["rules"])
        .assert()
        .success()
        .stdout(predicate::str::contains("drop temps"));
}

// ─── Cleanup command ─────────────────────────────────────────────────────────

#[test]
fn test_cleanup_dry_run_leaves_files() {
    let (dir, config_path) = write_fixture();
    broom()
        .args(["-c", config_path.to_str().unwrap(), "cleanup", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleanup"))
        .stdout(predicate::str::contains("dry run"));

    assert!(dir.path().join("src").join("junk_a.tmp").exists());
    assert!(dir.path().join("src").join("junk_b.tmp").exists());
}

#[test]
fn test_cleanup_removes_files() {
    let (dir, config_path) = write_fixture();
    broom()
        .args(["-c", config_path.to_str().unwrap(), "cleanup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleanup"));

    assert!(!dir.path().join("src").join("junk_a.tmp").exists());
    assert!(!dir.path().join("src").join("junk_b.tmp").exists());
    assert!(dir.path().join("src").join("keep.txt").exists());
}

#[test]
fn test_cleanup_quiet_output() {
    let (_dir, config_path) = write_fixture();
    broom()
        .args(["-c", config_path.to_str().unwrap(), "--format", "quiet", "cleanup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 0 0"));
}

#[test]
fn test_cleanup_json_output() {
    let (_dir, config_path) = write_fixture();
    broom()
        .args(["-c", config_path.to_str().unwrap(), "--format", "json", "cleanup"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["))
        .stdout(predicate::str::contains("\"status\""))
        .stdout(predicate::str::contains("remove file:"));
}

#[test]
fn test_invalid_glob_pattern_fails() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src");
    std::fs::create_dir(&src).unwrap();
    let config_path = dir.path().join("broom.toml");
    std::fs::write(
        &config_path,
        format!(
            "api_version = \"v1.0\"\n\n[[cleanup]]\nname = \"bad\"\nsrc = \"{}\"\npatterns = [\"[\"]\n",
            src.display()
        ),
    )
    .unwrap();

    broom()
        .args(["-c", config_path.to_str().unwrap(), "cleanup"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid glob pattern"));
}

#[test]
fn test_env_var_in_rule_path() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src");
    std::fs::create_dir(&src).unwrap();
    std::fs::write(src.join("junk.tmp"), "x").unwrap();
    let config_path = dir.path().join("broom.toml");
    std::fs::write(
        &config_path,
        "api_version = \"v1.0\"\n\n[[cleanup]]\nname = \"sweep\"\nsrc = \"$BROOM_TEST_CLI_SRC\"\npatterns = [\"*.tmp\"]\n",
    )
    .unwrap();

    broom()
        .env("BROOM_TEST_CLI_SRC", &src)
        .args(["-c", config_path.to_str().unwrap(), "cleanup"])
        .assert()
        .success();

    assert!(!src.join("junk.tmp").exists());
}

// ─── Relocate command ────────────────────────────────────────────────────────

#[test]
fn test_relocate_moves_files() {
    let (dir, config_path) = write_fixture();
    broom()
        .args(["-c", config_path.to_str().unwrap(), "relocate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Relocate"));

    assert!(!dir.path().join("src").join("keep.txt").exists());
    assert!(dir.path().join("shelf").join("keep.txt").exists());
}

#[test]
fn test_relocate_dry_run_moves_nothing() {
    let (dir, config_path) = write_fixture();
    broom()
        .args(["-c", config_path.to_str().unwrap(), "relocate", "-d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dry run"));

    assert!(dir.path().join("src").join("keep.txt").exists());
    assert!(!dir.path().join("shelf").join("keep.txt").exists());
}

// ─── Rules command ───────────────────────────────────────────────────────────

#[test]
fn test_rules_lists_names() {
    let (_dir, config_path) = write_fixture();
    broom()
        .args(["-c", config_path.to_str().unwrap(), "rules"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shelve text"))
        .stdout(predicate::str::contains("drop temps"));
}

#[test]
fn test_rules_json_output() {
    let (_dir, config_path) = write_fixture();
    broom()
        .args(["-c", config_path.to_str().unwrap(), "--format", "json", "rules"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"relocate\""))
        .stdout(predicate::str::contains("\"cleanup\""));
}

// ─── Logging ─────────────────────────────────────────────────────────────────

#[test]
fn test_verbose_logs_go_to_stderr() {
    let (_dir, config_path) = write_fixture();
    broom()
        .args(["-c", config_path.to_str().unwrap(), "-vvv", "cleanup", "--dry-run"])
        .assert()
        .success()
        .stderr(predicate::str::contains("running cleanup rule"));
}

// ─── Completions ─────────────────────────────────────────────────────────────

#[test]
fn test_completions_need_no_config() {
    let empty = TempDir::new().unwrap();
    broom()
        .current_dir(empty.path())
        .env("HOME", empty.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("broom"));
}
