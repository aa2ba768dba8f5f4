//! End-to-end tests for the whichpy binary.

use assert_cmd::Command;
use predicates::prelude::*;
use test_support::tree::EnvTree;

fn whichpy() -> Command {
    Command::cargo_bin("whichpy").expect("binary under test")
}

#[test]
fn which_prints_the_resolved_path() {
    let tree = EnvTree::new();
    tree.create_files(&["env/bin/python", "env/bin/pip"]);
    whichpy()
        .args(["--env-dir", tree.path("env").as_str(), "which", "pip"])
        .assert()
        .success()
        .stdout(predicate::str::contains(tree.path("env/bin/pip").as_str()));
}

#[test]
fn which_resolves_from_an_interpreter_path() {
    let tree = EnvTree::new();
    tree.create_files(&["python.exe", "Scripts/pip"]);
    whichpy()
        .args([
            "--interpreter",
            tree.path("python.exe").as_str(),
            "which",
            "pip",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            tree.path("Scripts/pip").as_str(),
        ));
}

#[test]
fn which_lists_every_candidate_on_failure() {
    let tree = EnvTree::new();
    tree.create_files(&["env/bin/python"]);
    whichpy()
        .args(["--env-dir", tree.path("env").as_str(), "which", "pip"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("pip.exe"));
}

#[test]
fn conflicting_base_flags_are_rejected() {
    whichpy()
        .args([
            "--interpreter",
            "python",
            "--env-dir",
            "somewhere",
            "which",
            "pip",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn envs_lists_configured_environments() {
    let tree = EnvTree::new();
    tree.create_files(&["one/bin/python"]);
    let config = tree.path("whichpy.json");
    std::fs::write(
        &config,
        format!("{{\"one\": \"{}\"}}", tree.path("one/bin/python")),
    )
    .expect("write config");
    whichpy()
        .args(["--config", config.as_str(), "envs"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("one\t")
                .and(predicate::str::contains(tree.path("one/bin/python").as_str())),
        );
}

#[test]
fn env_flag_selects_a_configured_environment() {
    let tree = EnvTree::new();
    tree.create_files(&["one/bin/python", "one/bin/pip"]);
    let config = tree.path("whichpy.json");
    std::fs::write(
        &config,
        format!("{{\"one\": \"{}\"}}", tree.path("one/bin/python")),
    )
    .expect("write config");
    whichpy()
        .args([
            "--config",
            config.as_str(),
            "--env",
            "one",
            "which",
            "pip",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(tree.path("one/bin/pip").as_str()));
}

#[cfg(unix)]
#[test]
fn run_invokes_the_resolved_tool() {
    let tree = EnvTree::new();
    tree.create_files(&["env/bin/python"]);
    let (_tool, capture) =
        test_support::exec::fake_tool_capture(tree.path("env/bin").as_std_path(), "pip");
    whichpy()
        .args([
            "--env-dir",
            tree.path("env").as_str(),
            "run",
            "pip",
            "install",
            "requests",
        ])
        .assert()
        .success();
    let recorded = std::fs::read_to_string(capture).expect("read capture");
    assert_eq!(recorded.trim(), "install requests");
}

#[cfg(unix)]
#[test]
fn venv_creates_and_prints_the_new_interpreter() {
    let tree = EnvTree::new();
    tree.create_files(&["env/bin/python"]);
    tree.create_dir("tools");
    let tool = test_support::exec::fake_virtualenv(tree.path("tools").as_std_path());
    whichpy()
        .env(whichpy::venv::VIRTUALENV_ENV, &tool)
        .args([
            "--env-dir",
            tree.path("env").as_str(),
            "venv",
            tree.path("envs/demo").as_str(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            tree.path("envs/demo/bin/python").as_str(),
        ));
}
