//! End-to-end tests that run the compiled `amag` binary against temporary
//! project directories.

use amag_test_utils::project::TestProject;
use amag_test_utils::templates::TemplateTree;
use assert_cmd::Command;
use predicates::prelude::*;

fn amag() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("amag"));
    cmd.env_remove("AMAG_TEMPLATES_DIR").env_remove("RUST_LOG");
    cmd
}

fn amag_in(project: &TestProject) -> Command {
    let mut cmd = amag();
    cmd.current_dir(project.root());
    cmd
}

#[test]
fn test_help_lists_commands() {
    amag()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("uninstall"))
        .stdout(predicate::str::contains("doctor"));
}

#[test]
fn test_no_command_prints_hint() {
    amag()
        .assert()
        .success()
        .stdout(predicate::str::contains("amag --help"));
}

#[test]
fn test_init_then_doctor_reports_everything_installed() {
    let project = TestProject::new();

    amag_in(&project).args(["init", "--yes"]).assert().success();

    amag_in(&project)
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("21 installed, 0 missing out of 21 total"));
}

#[test]
fn test_remove_then_doctor_reports_one_missing() {
    let project = TestProject::new();
    amag_in(&project).args(["init", "--yes"]).assert().success();

    amag_in(&project)
        .args(["remove", "rule", "todo-enforcement"])
        .assert()
        .success();

    project.assert_missing(".agent/rules/todo-enforcement.md");
    amag_in(&project)
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("20 installed, 1 missing out of 21 total"))
        .stdout(predicate::str::contains("rule/todo-enforcement"));
}

#[test]
fn test_init_twice_is_not_interactive_without_tty() {
    let project = TestProject::new();
    amag_in(&project).arg("init").assert().success();
    project.write(".agent/rules/code-quality.md", "edited");

    amag_in(&project)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exist"));

    assert_eq!(project.read(".agent/rules/code-quality.md"), "edited");
}

#[test]
fn test_target_flag() {
    let project = TestProject::new();
    let target = project.path("nested/app");

    amag()
        .args(["add", "skill", "git-master", "-t"])
        .arg(&target)
        .assert()
        .success();

    project.assert_file_exists("nested/app/.agent/skills/git-master/SKILL.md");
}

#[test]
fn test_add_invalid_type_fails() {
    let project = TestProject::new();

    amag_in(&project)
        .args(["add", "plugin", "x"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Invalid type \"plugin\". Must be one of: rule, workflow, skill",
        ));

    assert!(project.top_level_entries().is_empty());
}

#[test]
fn test_remove_unknown_component_fails() {
    let project = TestProject::new();

    amag_in(&project)
        .args(["remove", "skill", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown skill \"nope\""));
}

#[test]
fn test_uninstall_requires_force_without_tty() {
    let project = TestProject::new();
    amag_in(&project).args(["init", "-y"]).assert().success();

    amag_in(&project)
        .arg("uninstall")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    project.assert_file_exists("GEMINI.md");
}

#[test]
fn test_uninstall_force_leaves_user_files() {
    let project = TestProject::new();
    project.write("src/main.rs", "fn main() {}");
    amag_in(&project).args(["init", "-y"]).assert().success();

    amag_in(&project)
        .args(["uninstall", "--force"])
        .assert()
        .success();

    assert_eq!(project.top_level_entries(), vec!["src".to_string()]);
}

#[test]
fn test_list_json_has_three_groups() {
    let output = amag().args(["list", "--json"]).assert().success().get_output().stdout.clone();

    let groups: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let groups = groups.as_array().unwrap();
    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0]["type"], "rule");
    assert_eq!(groups[2]["type"], "skill");
}

#[test]
fn test_doctor_json_counts() {
    let project = TestProject::new();

    let output = amag_in(&project)
        .args(["doctor", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["installed"], 0);
    assert_eq!(report["missing"], 21);
    assert_eq!(report["total"], 21);
    assert!(project.top_level_entries().is_empty());
}

#[test]
fn test_config_set_coerces_numbers() {
    let project = TestProject::new();

    amag_in(&project)
        .args(["config", "set", "review.timeout_ms", "60000"])
        .assert()
        .success();

    let written: serde_json::Value =
        serde_json::from_str(&project.read(".amag/config.json")).unwrap();
    assert_eq!(written["review"]["timeout_ms"], 60000);
}

#[test]
fn test_config_set_null_model() {
    let project = TestProject::new();

    amag_in(&project)
        .args(["config", "set", "review.critic.model", "null"])
        .assert()
        .success();

    let written: serde_json::Value =
        serde_json::from_str(&project.read(".amag/config.json")).unwrap();
    assert!(written["review"]["critic"]["model"].is_null());
}

#[test]
fn test_config_set_numeric_model_is_stored_as_number() {
    let project = TestProject::new();

    amag_in(&project)
        .args(["config", "set", "review.consultant.model", "5"])
        .assert()
        .success();

    let written: serde_json::Value =
        serde_json::from_str(&project.read(".amag/config.json")).unwrap();
    assert_eq!(written["review"]["consultant"]["model"], 5);
    assert_eq!(written["review"]["consultant"]["cli"], "claude");
}

#[test]
fn test_config_set_rejects_scalar_over_section() {
    let project = TestProject::new();

    amag_in(&project)
        .args(["config", "set", "review.critic", "codex"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value for review.critic"));

    project.assert_missing(".amag/config.json");
}

#[test]
fn test_config_show_on_malformed_file_uses_defaults() {
    let project = TestProject::new();
    project.write(".amag/config.json", "{ not json");

    amag_in(&project)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("claude-opus-4-6"))
        .stderr(predicate::str::contains("Invalid .amag/config.json"));
}

#[test]
fn test_missing_template_exits_nonzero_after_full_run() {
    let project = TestProject::new();
    let templates = TemplateTree::new().rule("todo-enforcement").root_context();

    amag_in(&project)
        .env("AMAG_TEMPLATES_DIR", templates.root())
        .args(["init", "-y"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("template(s) missing"));

    project.assert_file_exists(".agent/rules/todo-enforcement.md");
    project.assert_file_exists("GEMINI.md");
    project.assert_file_exists(".amag/config.json");
}

#[test]
fn test_completions_bash() {
    amag()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("amag"));
}
