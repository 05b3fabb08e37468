/// Actions and plans
///
/// A plan is the ordered list of catalog mutations read out of one
/// instruction. It lives for a single interpret-and-execute call.

use super::classifier::ClauseClassifier;
use super::segmenter::Segmenter;
use tracing::debug;

/// One catalog mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Put the title on the wishlist
    Add { title: String },
    /// Take the title off the wishlist (it becomes disliked)
    Remove { title: String },
    /// Explicit status; `status` is resolved strictly at execution time
    SetStatus { title: String, status: String },
}

impl Action {
    pub fn title(&self) -> &str {
        match self {
            Action::Add { title } | Action::Remove { title } | Action::SetStatus { title, .. } => title,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Add { title } => write!(f, "add \"{}\"", title),
            Action::Remove { title } => write!(f, "remove \"{}\"", title),
            Action::SetStatus { title, status } => write!(f, "set \"{}\" to {}", title, status),
        }
    }
}

/// Ordered sequence of actions, in clause order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    actions: Vec<Action>,
}

impl Plan {
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.actions.iter()
    }
}

impl From<Vec<Action>> for Plan {
    fn from(actions: Vec<Action>) -> Self {
        Self::new(actions)
    }
}

impl<'a> IntoIterator for &'a Plan {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}

/// Turns an instruction into a plan
pub struct PlanBuilder;

impl PlanBuilder {
    /// Segment, classify every clause, concatenate in clause order.
    /// No deduplication across clauses happens here.
    pub fn build(instruction: &str) -> Plan {
        let mut actions = Vec::new();

        for clause in Segmenter::split(instruction) {
            let clause_actions = ClauseClassifier::classify(&clause);
            debug!(clause = %clause, actions = clause_actions.len(), "Classified clause");
            actions.extend(clause_actions);
        }

        Plan::new(actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(title: &str) -> Action {
        Action::Add {
            title: title.to_string(),
        }
    }

    fn remove(title: &str) -> Action {
        Action::Remove {
            title: title.to_string(),
        }
    }

    fn set(title: &str, status: &str) -> Action {
        Action::SetStatus {
            title: title.to_string(),
            status: status.to_string(),
        }
    }

    #[test]
    fn test_add_and_remove() {
        let plan = PlanBuilder::build("add Drive to my list and remove Dune from my list");
        assert_eq!(plan.actions(), &[add("Drive"), remove("Dune")]);
    }

    #[test]
    fn test_csv_quotes_and_then() {
        let plan = PlanBuilder::build(
            "add Alien, Heat and \"Blade Runner 2049\" to my wishlist; then remove Parasite.",
        );
        assert_eq!(
            plan.actions(),
            &[
                add("Alien"),
                add("Heat"),
                add("Blade Runner 2049"),
                remove("Parasite"),
            ]
        );
    }

    #[test]
    fn test_status_changes() {
        let plan = PlanBuilder::build("mark X as seen and set Y to disliked");
        assert_eq!(plan.actions(), &[set("X", "seen"), set("Y", "disliked")]);
    }

    #[test]
    fn test_french_instruction() {
        let plan = PlanBuilder::build(
            "marque \"Jojo Rabbit\" comme déjà vu et mets Matrix en pas_interesse",
        );
        assert_eq!(
            plan.actions(),
            &[set("Jojo Rabbit", "seen"), set("Matrix", "disliked")]
        );
    }

    #[test]
    fn test_no_cross_clause_dedup() {
        let plan = PlanBuilder::build("add Heat and add Heat");
        assert_eq!(plan.actions(), &[add("Heat"), add("Heat")]);
    }

    #[test]
    fn test_unrecognized_clauses_dropped() {
        assert!(PlanBuilder::build("hello, how are you?").is_empty());
        assert!(PlanBuilder::build("").is_empty());

        let plan = PlanBuilder::build("hi there. add Heat");
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn test_action_display() {
        assert_eq!(add("Heat").to_string(), "add \"Heat\"");
        assert_eq!(set("Dune", "seen").to_string(), "set \"Dune\" to seen");
        assert_eq!(remove("Dune").title(), "Dune");
    }
}
