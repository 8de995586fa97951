/*!
 * Integration tests for the elves command line
 */

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

const TWO_DIRS: &str = r#"[
    {
        "type": "directory",
        "name": "root",
        "contents": [
            { "type": "directory", "name": "dir1" },
            { "type": "directory", "name": "dir2" }
        ]
    }
]"#;

// Temporary working directory holding `test.json`
fn workspace(json: &str) -> TempDir {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("test.json"), json).unwrap();
    temp
}

fn elves(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("elves").unwrap();
    cmd.current_dir(cwd).env_remove("ELVES_LOG");
    cmd
}

fn entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .filter_map(Result::ok)
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[cfg(unix)]
fn mode(path: &Path) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path).unwrap().permissions().mode() & 0o7777
}

#[test]
fn creates_directories_in_current_directory() {
    let temp = workspace(TWO_DIRS);

    elves(temp.path())
        .args(["create", "test.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Directories Created"));

    assert_eq!(entries(temp.path()), ["dir1", "dir2", "test.json"]);
    assert!(entries(&temp.path().join("dir1")).is_empty());
    #[cfg(unix)]
    {
        assert_eq!(mode(&temp.path().join("dir1")), 0o755);
        assert_eq!(mode(&temp.path().join("dir2")), 0o755);
    }
}

#[test]
fn creates_tree_inside_subdirectory() {
    let temp = workspace(TWO_DIRS);

    elves(temp.path())
        .args(["create", "test.json", "--sub", "new-project", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(entries(temp.path()), ["new-project", "test.json"]);
    assert_eq!(entries(&temp.path().join("new-project")), ["dir1", "dir2"]);
}

#[test]
fn creates_gitkeep_files() {
    let temp = workspace(TWO_DIRS);

    elves(temp.path())
        .args(["create", "test.json", "--gitkeep", "-q"])
        .assert()
        .success();

    assert_eq!(entries(&temp.path().join("dir1")), [".gitkeep"]);
    assert_eq!(entries(&temp.path().join("dir2")), [".gitkeep"]);
}

#[cfg(unix)]
#[test]
fn applies_permission_flag() {
    let temp = workspace(TWO_DIRS);

    elves(temp.path())
        .args(["create", "test.json", "--permission", "777", "--sub", "p", "-q"])
        .assert()
        .success();

    assert_eq!(mode(&temp.path().join("p")), 0o777);
    assert_eq!(mode(&temp.path().join("p/dir1")), 0o777);
}

#[test]
fn dry_run_prints_tree_only() {
    let temp = workspace(TWO_DIRS);

    elves(temp.path())
        .args(["create", "test.json", "--dry-run"])
        .assert()
        .success()
        .stdout(".\n├── dir1\n└── dir2\n");

    assert_eq!(entries(temp.path()), ["test.json"]);
}

#[test]
fn dry_run_uses_subdirectory_label_and_markers() {
    let temp = workspace(TWO_DIRS);

    elves(temp.path())
        .args(["create", "test.json", "-d", "-g", "-s", "new-project"])
        .assert()
        .success()
        .stdout("new-project\n├── dir1\n│   └── .gitkeep\n└── dir2\n    └── .gitkeep\n");

    assert_eq!(entries(temp.path()), ["test.json"]);
}

#[test]
fn empty_root_contents_fail_without_changes() {
    let temp = workspace(r#"[{"type": "directory", "name": "root", "contents": []}]"#);

    elves(temp.path())
        .args(["create", "test.json", "--sub", "new-project"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid or empty tree description"));

    assert_eq!(entries(temp.path()), ["test.json"]);
}

#[test]
fn invalid_json_fails_without_changes() {
    let temp = workspace("invalid json");

    elves(temp.path())
        .args(["create", "test.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse tree description"));

    assert_eq!(entries(temp.path()), ["test.json"]);
}

#[test]
fn missing_file_fails() {
    let temp = tempdir().unwrap();

    elves(temp.path())
        .args(["create", "nonexistent.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read nonexistent.json"));
}

#[test]
fn invalid_permission_fails_before_creating() {
    let temp = workspace(TWO_DIRS);

    elves(temp.path())
        .args(["create", "test.json", "--permission", "rwx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid permission value"));

    assert_eq!(entries(temp.path()), ["test.json"]);
}

#[test]
fn dry_run_ignores_permission() {
    let temp = workspace(TWO_DIRS);

    elves(temp.path())
        .args(["create", "test.json", "-d", "-p", "rwx"])
        .assert()
        .success()
        .stdout(".\n├── dir1\n└── dir2\n");

    assert_eq!(entries(temp.path()), ["test.json"]);
}

#[test]
fn invalid_permission_with_sub_creates_nothing() {
    let temp = workspace(TWO_DIRS);

    elves(temp.path())
        .args(["create", "test.json", "-p", "9", "-s", "proj"])
        .assert()
        .failure()
        .code(1);

    assert_eq!(entries(temp.path()), ["test.json"]);
}

#[test]
fn existing_directory_is_reported_with_path() {
    let temp = workspace(TWO_DIRS);
    fs::create_dir(temp.path().join("dir2")).unwrap();

    elves(temp.path())
        .args(["create", "test.json", "-q"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("dir2"));

    assert!(temp.path().join("dir1").is_dir());
}

#[test]
fn prints_version() {
    let temp = tempdir().unwrap();

    elves(temp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(format!("elves version {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn generates_completions() {
    let temp = tempdir().unwrap();

    elves(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("elves"));
}
