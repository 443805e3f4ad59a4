//! The builtin component table.
//!
//! Every entry must have a matching file under `templates/`; the
//! `amag-validate-registry` binary and the registry sync test enforce it.

use super::component::{Component, ComponentKind::*};

pub(crate) const COMPONENTS: &[Component] = &[
    // Rules (always-on behavioral constraints)
    Component::new(
        Rule,
        "todo-enforcement",
        "Task tracking discipline: create task breakdowns, mark progress, never abandon work",
    ),
    Component::new(
        Rule,
        "error-recovery",
        "Failure protocol: fix root causes, no blind retries, escalate after 3 failures, detect command wait loops",
    ),
    Component::new(
        Rule,
        "code-quality",
        "Coding standards: think first, keep it simple, surgical changes, no leftover debug code",
    ),
    Component::new(
        Rule,
        "agentic-rules",
        "Session start checks: read AGENTS.md, detect active plans, guide to /resume",
    ),
    // Workflows (slash-command triggers)
    Component::new(
        Workflow,
        "ultrawork",
        "/ultrawork: maximum effort deep work with full certainty and zero compromises",
    ),
    Component::new(
        Workflow,
        "plan",
        "/plan: structured planning interview before implementation",
    ),
    Component::new(
        Workflow,
        "start-work",
        "/start-work: execute an implementation plan task by task with category awareness",
    ),
    Component::new(
        Workflow,
        "init-deep",
        "/init-deep: generate hierarchical GEMINI.md context files per directory",
    ),
    Component::new(
        Workflow,
        "resume",
        "/resume: cross-session resume from .amag/active-plan.md with self-validation",
    ),
    // Skills (on-demand expertise)
    Component::new(
        Skill,
        "git-master",
        "Git expertise: atomic commits, conventional format, rebasing, conflict resolution",
    ),
    Component::new(
        Skill,
        "browser-testing",
        "Browser testing: browser subagent patterns for visual verification",
    ),
    Component::new(
        Skill,
        "frontend-ui-ux",
        "Design-first frontend: bold aesthetics, typography, responsive patterns, accessibility",
    ),
    Component::new(
        Skill,
        "deep-work",
        "Autonomous exploration: read extensively before acting, goal-driven execution",
    ),
    Component::new(
        Skill,
        "writing",
        "Plain writing: simple words, human tone, no filler, varied sentences",
    ),
    Component::new(
        Skill,
        "architecture-advisor",
        "Architecture consulting: read-only design review, simplicity bias, evidence-based recommendations",
    ),
    Component::new(
        Skill,
        "codebase-explorer",
        "Structured codebase research: multi-angle search, cross-validation, mental model building",
    ),
    Component::new(
        Skill,
        "external-researcher",
        "External library/API research: official docs, production examples, current practice",
    ),
    Component::new(
        Skill,
        "plan-validator",
        "Adversarial plan validation: find gaps, risks and missing requirements before execution",
    ),
    Component::new(
        Skill,
        "planning-critic",
        "Pre-plan gap analysis: identify missing requirements and ambiguities before generating a plan",
    ),
];
