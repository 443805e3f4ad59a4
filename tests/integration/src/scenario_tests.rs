//! Cross-crate scenarios
//!
//! Each test drives the installer end to end against a temporary project and
//! the packaged templates, then inspects the resulting tree.

use amag_core::{
    Action, ConfigStore, DriftDirection, InitOptions, Installer, ProjectLayout, Registry,
    ReviewCli, Setting, TemplateSource, UninstallOptions, UpdateOptions, check_registry_sync,
};
use amag_test_utils::project::TestProject;
use amag_test_utils::templates::TemplateTree;
use pretty_assertions::assert_eq;

const COMPONENTS: usize = 19;

fn installer<'a>(registry: &'a Registry, project: &TestProject) -> Installer<'a> {
    Installer::new(
        registry,
        TemplateSource::bundled(),
        ProjectLayout::new(project.root()),
    )
}

#[test]
fn fresh_init_remove_then_doctor() {
    let registry = Registry::builtin();
    let project = TestProject::new();
    let installer = installer(&registry, &project);

    let report = installer.init_unattended(&InitOptions::default()).unwrap();
    assert_eq!(report.created(), COMPONENTS + 2);
    assert_eq!(report.skipped(), 0);
    assert!(report.missing_templates().is_empty());

    let removed = installer.remove("rule", "todo-enforcement").unwrap();
    assert_eq!(removed.action, Action::Removed);

    let doctor = installer.doctor();
    assert_eq!(doctor.missing(), 1);
    assert_eq!(doctor.missing_labels(), vec!["rule/todo-enforcement"]);
    assert_eq!(doctor.installed(), COMPONENTS - 1 + 2);
}

#[test]
fn init_is_idempotent() {
    let registry = Registry::builtin();
    let project = TestProject::new();
    let installer = installer(&registry, &project);
    installer.init_unattended(&InitOptions::default()).unwrap();
    let before = project.read(".agent/skills/git-master/SKILL.md");

    let second = installer.init_unattended(&InitOptions::default()).unwrap();

    assert_eq!(second.created(), 0);
    assert_eq!(second.skipped(), COMPONENTS + 2);
    assert_eq!(second.existing.len(), COMPONENTS + 2);
    assert_eq!(project.read(".agent/skills/git-master/SKILL.md"), before);
}

#[test]
fn declined_confirmation_writes_nothing() {
    let registry = Registry::builtin();
    let project = TestProject::new();
    project.write("GEMINI.md", "mine");
    let installer = installer(&registry, &project);

    let report = installer
        .init::<amag_core::Error, _>(&InitOptions::default(), |existing| {
            assert_eq!(existing, ["GEMINI.md".to_string()]);
            Ok(false)
        })
        .unwrap();

    assert!(report.cancelled);
    assert_eq!(project.top_level_entries(), vec!["GEMINI.md".to_string()]);
}

#[test]
fn update_then_doctor_has_nothing_missing() {
    let registry = Registry::builtin();
    let project = TestProject::new();
    project.write(".agent/rules/code-quality.md", "old");
    let installer = installer(&registry, &project);

    let report = installer.update(&UpdateOptions::default()).unwrap();

    assert_eq!(report.updated(), 1);
    assert_eq!(report.created(), COMPONENTS + 1);
    assert!(installer.doctor().is_complete());
}

#[test]
fn update_keeps_config_overrides() {
    let registry = Registry::builtin();
    let project = TestProject::new();
    project.write(
        ".amag/config.json",
        r#"{"extra":true,"review":{"consultant":{"cli":"codex"},"critic":{"model":"my-model","thinking":"ultra"}}}"#,
    );
    let installer = installer(&registry, &project);

    installer.update(&UpdateOptions::default()).unwrap();

    let config = ConfigStore::for_project(installer.project()).read();
    assert_eq!(config.review.consultant.cli, Setting::Typed(Some(ReviewCli::Codex)));
    assert_eq!(
        config.review.consultant.model,
        Setting::Typed(Some("claude-opus-4-6".to_string()))
    );
    assert_eq!(config.review.critic.model, Setting::Typed(Some("my-model".to_string())));
    assert_eq!(config.review.critic.thinking, Setting::Raw(serde_json::json!("ultra")));
    assert_eq!(config.review.timeout_ms, Setting::Typed(120_000));
}

#[test]
fn uninstall_leaves_no_managed_paths() {
    let registry = Registry::builtin();
    let project = TestProject::new();
    project.write("Cargo.toml", "[package]\n");
    project.write(".agent/custom/keep.md", "user file");
    let installer = installer(&registry, &project);
    installer.init_unattended(&InitOptions::default()).unwrap();

    let report = installer.uninstall(&UninstallOptions::default()).unwrap();

    assert_eq!(report.removed(), COMPONENTS + 2);
    assert_eq!(report.absent(), 0);
    project.assert_missing(".agent/rules");
    project.assert_missing(".agent/workflows");
    project.assert_missing(".agent/skills");
    project.assert_missing(".amag");
    project.assert_file_exists(".agent/custom/keep.md");
    assert_eq!(
        project.top_level_entries(),
        vec![".agent".to_string(), "Cargo.toml".to_string()]
    );
    assert!(installer.doctor().entries.iter().all(|e| !e.installed));
}

#[test]
fn uninstall_of_fresh_install_leaves_empty_root() {
    let registry = Registry::builtin();
    let project = TestProject::new();
    let installer = installer(&registry, &project);
    installer.init_unattended(&InitOptions::default()).unwrap();

    installer.uninstall(&UninstallOptions::default()).unwrap();

    assert!(project.root().exists());
    assert!(project.top_level_entries().is_empty());
}

#[test]
fn drift_names_offending_keys_in_both_directions() {
    let registry = Registry::builtin();
    let mut tree = TemplateTree::new().skill("made-up-skill");
    for component in registry.iter().filter(|c| c.key() != "workflow/plan") {
        tree = match component.kind {
            amag_core::ComponentKind::Rule => tree.rule(component.name),
            amag_core::ComponentKind::Workflow => tree.workflow(component.name),
            amag_core::ComponentKind::Skill => tree.skill(component.name),
        };
    }

    let report = check_registry_sync(&registry, tree.root()).unwrap();

    let issues: Vec<(&str, DriftDirection)> = report
        .issues
        .iter()
        .map(|i| (i.key.as_str(), i.direction))
        .collect();
    assert_eq!(
        issues,
        vec![
            ("skill/made-up-skill", DriftDirection::Unregistered),
            ("workflow/plan", DriftDirection::MissingTemplate),
        ]
    );
}

#[test]
fn config_set_coerces_and_persists() {
    let project = TestProject::new();
    let store = ConfigStore::for_project(&ProjectLayout::new(project.root()));

    store.set_value("review.timeout_ms", "60000").unwrap();
    store.set_value("review.consultant.cli", "null").unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&project.read(".amag/config.json")).unwrap();
    assert_eq!(written["review"]["timeout_ms"], serde_json::json!(60000));
    assert!(written["review"]["consultant"]["cli"].is_null());
    assert_eq!(written["review"]["critic"]["cli"], "codex");
}
