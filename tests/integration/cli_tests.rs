//! Integration tests for the routegen CLI.
//!
//! Each test runs the binary inside its own temporary project directory and
//! answers the prompts through stdin.

#![allow(deprecated)] // cargo_bin is deprecated but works fine for standard builds

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn routegen(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("routegen").unwrap();
    cmd.current_dir(dir)
        .env_remove("ROUTEGEN_WORKING_DIR")
        .arg("--no-color");
    cmd
}

// ============================================================================
// Help and Version tests
// ============================================================================

#[test]
fn test_help_mentions_skipping() {
    Command::cargo_bin("routegen")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("never overwritten"));
}

#[test]
fn test_version() {
    Command::cargo_bin("routegen")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_shows_all_options() {
    Command::cargo_bin("routegen")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-color"))
        .stdout(predicate::str::contains("--verbose"))
        .stdout(predicate::str::contains("--working-dir"));
}

#[test]
fn test_nonexistent_working_dir_fails() {
    Command::cargo_bin("routegen")
        .unwrap()
        .args(["--working-dir", "/nonexistent/path/that/does/not/exist"])
        .write_stdin("blog\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

// ============================================================================
// Interactive flow
// ============================================================================

#[test]
fn test_empty_route_aborts() {
    let temp_dir = TempDir::new().unwrap();

    routegen(temp_dir.path())
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter route path"))
        .stdout(predicate::str::contains("layout.tsx").not())
        .stderr(predicate::str::contains("Route path is required."));

    assert!(fs::read_dir(temp_dir.path()).unwrap().next().is_none());
}

#[test]
fn test_closed_stdin_aborts() {
    let temp_dir = TempDir::new().unwrap();

    routegen(temp_dir.path())
        .write_stdin("")
        .assert()
        .success()
        .stderr(predicate::str::contains("Route path is required."));

    assert!(!temp_dir.path().join("app").exists());
}

#[test]
fn test_route_with_selected_extras() {
    let temp_dir = TempDir::new().unwrap();

    routegen(temp_dir.path())
        .write_stdin("shop/item\ny\ny\nn\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created app/shop/page.tsx"))
        .stdout(predicate::str::contains("Created app/shop/item/page.tsx"))
        .stdout(predicate::str::contains("Created app/shop/item/layout.tsx"))
        .stdout(predicate::str::contains("Created app/shop/item/loading.tsx"))
        .stdout(predicate::str::contains("Nested route created successfully."));

    let leaf = temp_dir.path().join("app/shop/item");
    assert!(leaf.join("page.tsx").is_file());
    assert!(leaf.join("layout.tsx").is_file());
    assert!(leaf.join("loading.tsx").is_file());
    assert!(!leaf.join("error.tsx").exists());
    assert!(!leaf.join("not-found.tsx").exists());
}

#[test]
fn test_page_content_uses_scoped_identifier() {
    let temp_dir = TempDir::new().unwrap();

    routegen(temp_dir.path())
        .write_stdin("blog/my-post\nn\nn\nn\nn\n")
        .assert()
        .success();

    let root_page = fs::read_to_string(temp_dir.path().join("app/blog/page.tsx")).unwrap();
    let leaf_page =
        fs::read_to_string(temp_dir.path().join("app/blog/my-post/page.tsx")).unwrap();
    assert!(root_page.contains("export default function BlogPage()"));
    assert!(root_page.contains("<div>/blog page</div>"));
    assert!(leaf_page.contains("export default function BlogMyPostPage()"));
    assert!(leaf_page.contains("<div>/blog/my-post page</div>"));
}

#[test]
fn test_second_run_skips_existing_files() {
    let temp_dir = TempDir::new().unwrap();
    let input = "docs/intro\ny\nn\nn\ny\n";

    routegen(temp_dir.path()).write_stdin(input).assert().success();

    routegen(temp_dir.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped (already exists): app/docs/page.tsx"))
        .stdout(predicate::str::contains(
            "Skipped (already exists): app/docs/intro/not-found.tsx",
        ))
        .stdout(predicate::str::contains("Created").not());
}

#[test]
fn test_prefers_src_app() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("src/app")).unwrap();

    routegen(temp_dir.path())
        .write_stdin("about\nn\nn\nn\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created src/app/about/page.tsx"));

    assert!(!temp_dir.path().join("app").exists());
}

#[test]
fn test_working_dir_flag() {
    let project = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();

    routegen(elsewhere.path())
        .arg("--working-dir")
        .arg(project.path())
        .write_stdin("contact\nn\nn\nn\nn\n")
        .assert()
        .success();

    assert!(project.path().join("app/contact/page.tsx").is_file());
    assert!(!elsewhere.path().join("app").exists());
}

#[test]
fn test_verbose_flag() {
    let temp_dir = TempDir::new().unwrap();

    routegen(temp_dir.path())
        .arg("--verbose")
        .write_stdin("blog\nn\nn\nn\nn\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"));
}

#[test]
fn test_invalid_utf8_answer_is_declined() {
    let temp_dir = TempDir::new().unwrap();

    routegen(temp_dir.path())
        .write_stdin(b"blog\n\xFF\xFE\nn\nn\nn\n".to_vec())
        .assert()
        .success()
        .stdout(predicate::str::contains("Nested route created successfully."));

    let leaf = temp_dir.path().join("app/blog");
    assert!(leaf.join("page.tsx").is_file());
    assert!(!leaf.join("layout.tsx").exists());
}
