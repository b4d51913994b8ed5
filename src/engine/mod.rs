pub mod config;
pub mod engine;
pub mod request;
pub mod response;

pub use config::EngineConfig;
pub use engine::AnagramEngine;
pub use request::{MatchMode, MatchRequest};
pub use response::{GroupedMatches, MatchOutcome, MatchResponse, Matches, WordGroup};
