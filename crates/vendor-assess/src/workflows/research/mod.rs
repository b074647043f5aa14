//! Research planning for a vendor: where to look, what to search for, what to
//! verify, and a coarse read on the collected findings.

mod checklist;
mod evaluation;
mod queries;
mod report;
mod sources;

pub use checklist::{
    research_checklist, ChecklistError, ChecklistItem, ChecklistSection, ResearchChecklist,
};
pub use evaluation::{evaluate_findings, FindingsEvaluation, Recommendation, ResearchFindings};
pub use queries::search_queries;
pub use report::render_research_report;
pub use sources::{research_sources, SourceGroup, SourceKind};
