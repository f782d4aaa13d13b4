// Word search engine modules

pub mod generator;
pub mod geometry;
pub mod scorer;
pub mod selection;
pub mod session;

pub use generator::BoardGenerator;
pub use geometry::BoardGeometry;
pub use scorer::{ScoringConfig, Tier, WordScorer};
pub use selection::SelectionTracker;
pub use session::{LevelSession, SessionRegistry, SubmitOutcome};
