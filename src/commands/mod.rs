//! Command implementations

pub mod analyze;
pub mod simple;
pub mod simulate;

pub use analyze::{AnalysisResult, FamilySummary, analyze_letter};
pub use simple::{SimpleOptions, run_session, run_simple};
pub use simulate::{GameRecord, SimulateConfig, SimulationResult, play_game, run_simulation};
