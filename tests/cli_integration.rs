//! Integration tests for the ready binary.
//!
//! These tests exercise the full CLI: argument parsing, exit codes, and the
//! messages a user sees in a terminal or from the git hook.

use std::path::Path;
use std::process::Command as StdCommand;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command for running ready in `dir`.
fn ready(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ready").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn run_git(dir: &Path, args: &[&str]) {
    let status = StdCommand::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .expect("failed to run git");
    assert!(status.success(), "git {:?} failed", args);
}

fn git_repo() -> TempDir {
    let dir = TempDir::new().unwrap();
    run_git(dir.path(), &["init", "-q"]);
    dir
}

#[test]
fn version_flag_works() {
    let dir = TempDir::new().unwrap();
    ready(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ready"));
}

#[test]
fn help_flag_works() {
    let dir = TempDir::new().unwrap();
    ready(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--all"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn missing_config_exits_one() {
    let dir = TempDir::new().unwrap();
    ready(dir.path())
        .arg("--all")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to get config"))
        .stderr(predicate::str::contains("💥"));
}

#[test]
fn all_flag_runs_tasks_outside_a_repository() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("ready.yaml"),
        "tasks:\n  - name: hello\n    command: echo hello\n",
    )
    .unwrap();

    ready(dir.path())
        .arg("--all")
        .assert()
        .success()
        .stdout(predicate::str::contains("Running task hello... ⏳ Success ✅"))
        .stdout(predicate::str::contains("1 tasks completed successfully"));
}

#[test]
fn failing_task_exits_one() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("ready.toml"),
        "[[tasks]]\nname = \"ok\"\ncommand = \"true\"\n\n[[tasks]]\nname = \"bad\"\ncommand = \"echo nope; exit 2\"\n",
    )
    .unwrap();

    ready(dir.path())
        .args(["run", "--all"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Failure ❌"))
        .stdout(predicate::str::contains("nope"))
        .stdout(predicate::str::contains("Got 1 failure"));
}

#[test]
fn cwd_flag_changes_lookup_directory() {
    let dir = TempDir::new().unwrap();
    let project = dir.path().join("project");
    std::fs::create_dir(&project).unwrap();
    std::fs::write(
        project.join("ready.yaml"),
        "tasks:\n  - name: where\n    command: echo in-project\n",
    )
    .unwrap();

    ready(dir.path())
        .args(["--all", "--cwd"])
        .arg(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains("in-project"));
}

#[test]
fn quiet_prints_only_the_verdict() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("ready.yaml"),
        "tasks:\n  - name: hello\n    command: echo hello\n",
    )
    .unwrap();

    ready(dir.path())
        .args(["--all", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Running task").not())
        .stdout(predicate::str::contains("1 tasks completed successfully"));
}

#[test]
fn quiet_still_shows_failure_output() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("ready.yaml"),
        "tasks:\n  - name: hello\n    command: echo hello\n  - name: broken\n    command: echo oops && exit 3\n",
    )
    .unwrap();

    ready(dir.path())
        .args(["--all", "-q"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Running task").not())
        .stdout(predicate::str::contains("hello").not())
        .stdout(predicate::str::contains("Task broken failed ❌"))
        .stdout(predicate::str::contains("oops"))
        .stdout(predicate::str::contains("Got 1 failure"));
}

#[cfg(unix)]
#[test]
fn sigterm_stops_a_running_task() {
    use std::process::Stdio;
    use std::time::{Duration, Instant};

    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("ready.yaml"),
        "tasks:\n  - name: slow\n    command: sleep 5\n",
    )
    .unwrap();

    let started = Instant::now();
    let child = StdCommand::new(assert_cmd::cargo::cargo_bin("ready"))
        .arg("--all")
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    std::thread::sleep(Duration::from_millis(700));
    let status = StdCommand::new("kill")
        .args(["-TERM", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(status.success());

    let output = child.wait_with_output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("Ready stopped 🛑"), "stdout: {}", stdout);
    assert!(started.elapsed() < Duration::from_secs(4));
}

#[test]
fn init_installs_hook_without_prompting() {
    let repo = git_repo();

    ready(repo.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ready ready ✅"))
        .stdout(predicate::str::contains("[yes/no]").not());

    let hook = repo.path().join(".git/hooks/pre-commit");
    let script = std::fs::read_to_string(&hook).unwrap();
    assert!(script.starts_with("#!/bin/sh"));

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(&hook).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111, "hook should be executable");
    }
}

#[test]
fn init_declined_keeps_existing_hook() {
    let repo = git_repo();
    let hook = repo.path().join(".git/hooks/pre-commit");
    std::fs::create_dir_all(hook.parent().unwrap()).unwrap();
    std::fs::write(&hook, "#!/bin/sh\necho mine\n").unwrap();

    ready(repo.path())
        .arg("init")
        .write_stdin("no\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"))
        .stdout(predicate::str::contains("Ready stopped 🛑"));

    assert_eq!(
        std::fs::read_to_string(&hook).unwrap(),
        "#!/bin/sh\necho mine\n"
    );
}

#[test]
fn init_from_subdirectory_uses_repository_hooks() {
    let repo = git_repo();
    let sub = repo.path().join("nested");
    std::fs::create_dir(&sub).unwrap();

    ready(&sub).arg("init").assert().success();

    assert!(repo.path().join(".git/hooks/pre-commit").exists());
}

#[test]
fn init_outside_repository_fails() {
    let dir = TempDir::new().unwrap();
    ready(dir.path())
        .arg("init")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to open repository"));
}

#[test]
fn completion_generates_script() {
    let dir = TempDir::new().unwrap();
    ready(dir.path())
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ready"));
}
