use std::path::PathBuf;

use async_trait::async_trait;
use goal_lookup_core::GoalBook;

use crate::GoalSource;
use crate::error::SourceError;
use crate::parse::parse_goals;

/// Loads goals from a CSV file on disk, re-reading it on every call.
#[derive(Debug, Clone)]
pub struct FileGoalSource {
    path: PathBuf,
}

impl FileGoalSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl GoalSource for FileGoalSource {
    async fn load_goals(&self) -> Result<GoalBook, SourceError> {
        let text = tokio::fs::read_to_string(&self.path).await.map_err(|source| {
            SourceError::Io { path: self.path.display().to_string(), source }
        })?;
        parse_goals(&text)
    }
}

/// Serves a fixed, preloaded goal book.
#[derive(Debug, Clone, Default)]
pub struct StaticGoalSource {
    book: GoalBook,
}

impl StaticGoalSource {
    #[must_use]
    pub fn new(book: GoalBook) -> Self {
        Self { book }
    }

    /// Builds a source from CSV text.
    ///
    /// # Errors
    /// Returns an error if the text is not a valid goal sheet.
    pub fn from_csv(text: &str) -> Result<Self, SourceError> {
        parse_goals(text).map(Self::new)
    }
}

#[async_trait]
impl GoalSource for StaticGoalSource {
    async fn load_goals(&self) -> Result<GoalBook, SourceError> {
        Ok(self.book.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn file_source_reads_csv() {
        let path = std::env::temp_dir().join(format!("goal-lookup-{}.csv", std::process::id()));
        tokio::fs::write(&path, "Name,Description\nJano Skip,Skip it\n").await.unwrap();

        let book = FileGoalSource::new(&path).load_goals().await.unwrap();
        let _ = tokio::fs::remove_file(&path).await;

        assert_eq!(book.len(), 1);
        assert!(book.get("jano skip").is_some());
    }

    #[tokio::test]
    async fn file_source_missing_file_is_io_error() {
        let source = FileGoalSource::new("/nonexistent/goal-lookup/goals.csv");
        let err = source.load_goals().await.unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/goal-lookup/goals.csv"));
    }

    #[tokio::test]
    async fn static_source_returns_same_book_each_time() {
        let source = StaticGoalSource::from_csv("Name,Description\nA,a\nB,b\n").unwrap();
        let first = source.load_goals().await.unwrap();
        let second = source.load_goals().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }
}
