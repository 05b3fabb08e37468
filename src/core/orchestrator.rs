// Executes interpreted plans against the catalog
//
// One upsert per action, awaited in plan order. A failing action becomes an
// error entry and the rest of the plan still runs. Nothing escapes as an Err:
// the caller gets a summary string.

use crate::catalog::{Catalog, WatchStatus};
use crate::interpreter::{resolve_status, Action, Plan, PlanBuilder};
use std::sync::Arc;
use tracing::{debug, warn};

pub const EMPTY_PLAN_MESSAGE: &str = "No actions to perform.";
pub const NOTHING_RECOGNIZED_MESSAGE: &str = "No action recognized.";

/// What one plan execution did, bucket by bucket
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExecutionResult {
    added: Vec<String>,
    removed: Vec<String>,
    status_changes: Vec<String>,
    errors: Vec<String>,
}

impl ExecutionResult {
    pub fn added(&self) -> &[String] {
        &self.added
    }

    pub fn removed(&self) -> &[String] {
        &self.removed
    }

    pub fn status_changes(&self) -> &[String] {
        &self.status_changes
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty()
            && self.removed.is_empty()
            && self.status_changes.is_empty()
            && self.errors.is_empty()
    }

    fn record_added(&mut self, title: &str) {
        push_unique(&mut self.added, title);
    }

    fn record_removed(&mut self, title: &str) {
        push_unique(&mut self.removed, title);
    }

    fn record_status(&mut self, title: &str, status: WatchStatus) {
        self.status_changes.push(format!("{} → {}", title, status));
    }

    fn record_error(&mut self, description: String) {
        self.errors.push(description);
    }

    /// Non-empty sections in fixed order: Added, Removed, Status changes, Errors
    pub fn render(&self) -> String {
        let sections = [
            ("Added", &self.added),
            ("Removed", &self.removed),
            ("Status changes", &self.status_changes),
            ("Errors", &self.errors),
        ];

        let rendered: Vec<String> = sections
            .iter()
            .filter(|(_, items)| !items.is_empty())
            .map(|(label, items)| format!("{}: {}.", label, items.join(", ")))
            .collect();

        if rendered.is_empty() {
            NOTHING_RECOGNIZED_MESSAGE.to_string()
        } else {
            rendered.join(" ")
        }
    }
}

// Set semantics on case-insensitive title identity, first spelling wins
fn push_unique(bucket: &mut Vec<String>, title: &str) {
    let key = title.to_lowercase();
    if !bucket.iter().any(|t| t.to_lowercase() == key) {
        bucket.push(title.to_string());
    }
}

/// Runs plans against a catalog and renders what happened
pub struct Orchestrator {
    catalog: Arc<dyn Catalog>,
}

impl Orchestrator {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }

    /// Interpret an instruction and execute the resulting plan
    ///
    /// Blank input and input with nothing actionable get distinct fixed
    /// messages and cause no storage calls.
    pub async fn interpret_and_execute(&self, instruction: &str) -> String {
        if instruction.trim().is_empty() {
            return EMPTY_PLAN_MESSAGE.to_string();
        }

        let plan = PlanBuilder::build(instruction);
        debug!(actions = plan.len(), "Built plan");

        if plan.is_empty() {
            return NOTHING_RECOGNIZED_MESSAGE.to_string();
        }

        self.execute(&plan).await
    }

    /// Execute a plan and render the summary
    pub async fn execute(&self, plan: &Plan) -> String {
        if plan.is_empty() {
            return EMPTY_PLAN_MESSAGE.to_string();
        }

        self.execute_plan(plan).await.render()
    }

    /// Execute a plan and hand back the raw buckets
    pub async fn execute_plan(&self, plan: &Plan) -> ExecutionResult {
        let mut result = ExecutionResult::default();

        for action in plan {
            self.apply(action, &mut result).await;
        }

        result
    }

    async fn apply(&self, action: &Action, result: &mut ExecutionResult) {
        let (title, status) = match action {
            Action::Add { title } => (title, WatchStatus::Wanted),
            Action::Remove { title } => (title, WatchStatus::Disliked),
            Action::SetStatus { title, status } => match resolve_status(status) {
                Some(resolved) => (title, resolved),
                None => {
                    warn!(title = %title, status = %status, "Unresolvable status");
                    result.record_error(format!("{} → invalid status ({})", title, status));
                    return;
                }
            },
        };

        if let Err(e) = self.catalog.upsert(title, status).await {
            warn!(action = %action, error = %e, "Action failed");
            result.record_error(format!("{}: {}", action, e));
            return;
        }

        debug!(action = %action, "Applied action");

        match action {
            Action::Add { title } => result.record_added(title),
            Action::Remove { title } => result.record_removed(title),
            Action::SetStatus { title, .. } => result.record_status(title, status),
        }
    }
}
