use std::sync::Arc;

use goal_lookup_core::{Goal, GoalBook, Style, format_matches};
use goal_lookup_source::GoalSource;

use crate::ServiceError;

pub struct GoalService {
    source: Arc<dyn GoalSource>,
}

impl GoalService {
    #[must_use]
    pub fn new(source: Arc<dyn GoalSource>) -> Self {
        Self { source }
    }

    /// Loads the full dataset. Called once per operation; nothing is cached.
    pub async fn load(&self) -> Result<GoalBook, ServiceError> {
        let book = self.source.load_goals().await?;
        tracing::debug!(goals = book.len(), "loaded goal book");
        Ok(book)
    }

    /// All goals matching `query`: the exact match alone, or every fuzzy match.
    pub async fn find(&self, query: &str) -> Result<Vec<Goal>, ServiceError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ServiceError::InvalidInput("name parameter is required".to_owned()));
        }
        let book = self.load().await?;
        let matches: Vec<Goal> = book.search(query).into_iter().cloned().collect();
        if matches.is_empty() {
            return Err(ServiceError::NotFound(format!("no goal found matching \"{query}\"")));
        }
        Ok(matches)
    }

    /// Resolves `query` and renders the result in the requested style.
    pub async fn lookup(&self, query: &str, style: Style) -> Result<String, ServiceError> {
        let matches = self.find(query).await?;
        let refs: Vec<&Goal> = matches.iter().collect();
        Ok(format_matches(query, &refs, style))
    }

    pub async fn list(&self) -> Result<Vec<Goal>, ServiceError> {
        Ok(self.load().await?.into_iter().collect())
    }

    /// Goals whose difficulty contains `difficulty`.
    pub async fn by_difficulty(&self, difficulty: &str) -> Result<Vec<Goal>, ServiceError> {
        let difficulty = difficulty.trim();
        if difficulty.is_empty() {
            return Err(ServiceError::InvalidInput("difficulty is required".to_owned()));
        }
        let book = self.load().await?;
        let goals: Vec<Goal> = book.with_difficulty(difficulty).into_iter().cloned().collect();
        if goals.is_empty() {
            return Err(ServiceError::NotFound(format!(
                "no goals found with difficulty \"{difficulty}\""
            )));
        }
        Ok(goals)
    }

    /// One goal chosen uniformly at random. An empty dataset is `NotFound`.
    pub async fn random(&self) -> Result<Goal, ServiceError> {
        let book = self.load().await?;
        let picked = {
            let mut rng = rand::thread_rng();
            book.pick_random(&mut rng).cloned()
        };
        picked.ok_or_else(|| ServiceError::NotFound("no goals available".to_owned()))
    }
}
