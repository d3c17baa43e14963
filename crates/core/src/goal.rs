use serde::{Deserialize, Serialize};

/// A single goal row from the dataset.
///
/// All fields are trimmed. An empty string means the column was blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub name: String,
    pub description: String,
    pub levels: String,
    pub difficulty: String,
    pub video_link: String,
}

impl Goal {
    /// Builds a goal from raw column values, trimming each.
    ///
    /// Returns `None` when the name or description is blank; such rows are not goals.
    #[must_use]
    pub fn from_row(
        name: &str,
        description: &str,
        levels: &str,
        difficulty: &str,
        video_link: &str,
    ) -> Option<Self> {
        let name = name.trim();
        let description = description.trim();
        if name.is_empty() || description.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_owned(),
            description: description.to_owned(),
            levels: levels.trim().to_owned(),
            difficulty: difficulty.trim().to_owned(),
            video_link: video_link.trim().to_owned(),
        })
    }

    /// Lookup key for this goal: trimmed, lowercased name.
    #[must_use]
    pub fn key(&self) -> String {
        normalize(&self.name)
    }

    #[must_use]
    pub fn has_video(&self) -> bool {
        !self.video_link.is_empty()
    }
}

/// Normalizes a name or query for key comparison.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}
