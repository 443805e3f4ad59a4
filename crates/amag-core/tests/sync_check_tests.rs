use amag_core::{
    Component, ComponentKind, DriftDirection, Registry, SyncIssue, TemplateSource,
    check_registry_sync, scan_templates,
};
use amag_test_utils::templates::TemplateTree;
use pretty_assertions::assert_eq;

fn small_registry() -> Registry {
    Registry::new(vec![
        Component::new(ComponentKind::Rule, "code-quality", "Standards"),
        Component::new(ComponentKind::Workflow, "plan", "Planning"),
        Component::new(ComponentKind::Skill, "writing", "Prose"),
    ])
}

#[test]
fn test_packaged_templates_match_builtin_registry() {
    let report =
        check_registry_sync(&Registry::builtin(), TemplateSource::bundled().root()).unwrap();

    assert_eq!(report.issues, Vec::<SyncIssue>::new());
    assert_eq!(report.disk_count, Registry::builtin().len());
}

#[test]
fn test_in_sync_tree() {
    let tree = TemplateTree::new().rule("code-quality").workflow("plan").skill("writing");

    let report = check_registry_sync(&small_registry(), tree.root()).unwrap();

    assert!(report.is_in_sync());
    assert_eq!(report.disk_count, 3);
    assert_eq!(report.registry_count, 3);
}

#[test]
fn test_unregistered_template_is_named() {
    let tree = TemplateTree::new()
        .rule("code-quality")
        .rule("extra-rule")
        .workflow("plan")
        .skill("writing");

    let report = check_registry_sync(&small_registry(), tree.root()).unwrap();

    assert_eq!(
        report.issues,
        vec![SyncIssue {
            key: "rule/extra-rule".to_string(),
            direction: DriftDirection::Unregistered,
        }]
    );
}

#[test]
fn test_missing_template_is_named() {
    let tree = TemplateTree::new().rule("code-quality").workflow("plan");

    let report = check_registry_sync(&small_registry(), tree.root()).unwrap();

    assert_eq!(
        report.issues,
        vec![SyncIssue {
            key: "skill/writing".to_string(),
            direction: DriftDirection::MissingTemplate,
        }]
    );
}

#[test]
fn test_both_directions_unregistered_first() {
    let tree = TemplateTree::new()
        .rule("code-quality")
        .skill("writing")
        .workflow("ship-it");

    let report = check_registry_sync(&small_registry(), tree.root()).unwrap();

    assert_eq!(
        report.issues,
        vec![
            SyncIssue {
                key: "workflow/ship-it".to_string(),
                direction: DriftDirection::Unregistered,
            },
            SyncIssue {
                key: "workflow/plan".to_string(),
                direction: DriftDirection::MissingTemplate,
            },
        ]
    );
}

#[test]
fn test_scan_ignores_non_templates() {
    let tree = TemplateTree::new()
        .rule("kept")
        .file("rules/README.txt", "not markdown")
        .file("skills/empty-skill/notes.md", "no manifest")
        .file("skills/stray.md", "file, not a directory")
        .skill("real");

    let keys: Vec<_> = scan_templates(tree.root()).unwrap().into_iter().collect();

    assert_eq!(keys, vec!["rule/kept".to_string(), "skill/real".to_string()]);
}

#[test]
fn test_scan_tolerates_missing_kind_directory() {
    let tree = TemplateTree::new().rule("only");
    std::fs::remove_dir(tree.root().join("skills")).unwrap();

    let keys = scan_templates(tree.root()).unwrap();

    assert_eq!(keys.len(), 1);
}
