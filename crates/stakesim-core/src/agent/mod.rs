//! The stakeholder agent: prompt assembly, history compaction, and the
//! per-turn orchestration state machine.

pub mod compactor;
pub mod orchestrator;
pub mod prompt;

pub use compactor::HistoryCompactor;
pub use orchestrator::TurnOrchestrator;
