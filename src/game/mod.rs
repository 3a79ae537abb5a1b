//! Command line scores, coordinates, collections and iterator exercises

pub mod achievements;
pub mod coordinates;
pub mod dashboard;
pub mod inventory;
pub mod scores;
pub mod stream;

pub use coordinates::Position;
pub use dashboard::{sample_players, Dashboard, Player};
pub use inventory::{Inventory, Restock};
pub use scores::{parse_scores, ParsedScores, ScoreSummary};
pub use stream::{high_level, Fibonacci, GameEvent, GameEventStream, HighLevel, Primes, StreamAnalytics};
