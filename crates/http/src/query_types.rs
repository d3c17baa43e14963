//! Request/query types (Deserialize)

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GoalQuery {
    #[serde(default)]
    pub name: Option<String>,
}

impl GoalQuery {
    /// The trimmed name, or `None` when it is missing or blank.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }
}
