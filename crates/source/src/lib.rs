//! Goal dataset sources for goal-lookup.
//!
//! A [`GoalSource`] produces a fresh [`GoalBook`] on every call. The HTTP source
//! fetches the spreadsheet CSV export, the file source reads a local copy, and
//! the static source serves a preloaded book.

pub mod client;
pub mod error;
pub mod local;
pub mod parse;

use async_trait::async_trait;
use goal_lookup_core::GoalBook;

pub use client::HttpGoalSource;
pub use error::SourceError;
pub use local::{FileGoalSource, StaticGoalSource};
pub use parse::parse_goals;

/// Something that can produce the full goal dataset.
#[async_trait]
pub trait GoalSource: Send + Sync {
    /// Loads every goal, reflecting the current contents of the source.
    async fn load_goals(&self) -> Result<GoalBook, SourceError>;
}
