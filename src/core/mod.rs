// Core algorithm exports
pub mod engine;
pub mod matcher;
pub mod scheduler;
pub mod scoring;

pub use engine::{MatchingEngine, MatchingError, MatchingOutcome};
pub use matcher::MatchGenerator;
pub use scheduler::{ScheduleResult, Scheduler};
pub use scoring::compatibility_score;
