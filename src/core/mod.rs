/// Core functionality modules
///
/// Contains the plan orchestrator and the catalog tools built on top of
/// the storage collaborator: bulk and single-title updates, housekeeping,
/// picking and searching.

pub mod bulk;
pub mod library;
pub mod maintenance;
pub mod orchestrator;
pub mod searcher;
pub mod viewing;

pub use bulk::BulkTools;
pub use library::{AddOutcome, LibraryTools};
pub use maintenance::{CatalogStats, MaintenanceTools, SortOrder};
pub use orchestrator::{ExecutionResult, Orchestrator, EMPTY_PLAN_MESSAGE, NOTHING_RECOGNIZED_MESSAGE};
pub use searcher::{SearchHit, Searcher};
pub use viewing::{PickStrategy, ViewingTools};
