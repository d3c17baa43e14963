//! Ordered collection of goals keyed by normalized name.
//!
//! Iteration order is the order in which names were first inserted, so match
//! results are deterministic for a given source document.

use indexmap::IndexMap;
use rand::Rng;

use crate::goal::{Goal, normalize};

/// Goals keyed by lowercase trimmed name, in load order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalBook {
    goals: IndexMap<String, Goal>,
}

impl GoalBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a goal under its normalized name.
    ///
    /// A later goal with the same key replaces the earlier one but keeps its position.
    /// Returns the replaced goal, if any.
    pub fn insert(&mut self, goal: Goal) -> Option<Goal> {
        let key = goal.key();
        let replaced = self.goals.insert(key, goal);
        if let Some(ref old) = replaced {
            tracing::debug!(name = %old.name, "duplicate goal name, keeping last row");
        }
        replaced
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.goals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Goals in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Goal> {
        self.goals.values()
    }

    /// Exact lookup by name, case-insensitive and trimmed.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Goal> {
        self.goals.get(&normalize(name))
    }

    /// Resolves a user query to matching goals.
    ///
    /// An exact key match short-circuits to a single result. Otherwise every goal
    /// whose key contains the whole query, or contains each whitespace-separated
    /// token of it, is returned in load order. A blank query matches nothing.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Goal> {
        let query = normalize(query);
        if query.is_empty() {
            return Vec::new();
        }
        if let Some(goal) = self.goals.get(&query) {
            return vec![goal];
        }

        let tokens: Vec<&str> = query.split_whitespace().collect();
        self.goals
            .iter()
            .filter(|(key, _)| {
                key.contains(query.as_str()) || tokens.iter().all(|t| key.contains(*t))
            })
            .map(|(_, goal)| goal)
            .collect()
    }

    /// Goals whose difficulty contains `difficulty` as a substring.
    ///
    /// Containment rather than equality: `★` also selects `★★` and `★★★`.
    #[must_use]
    pub fn with_difficulty(&self, difficulty: &str) -> Vec<&Goal> {
        let difficulty = difficulty.trim();
        if difficulty.is_empty() {
            return Vec::new();
        }
        self.goals.values().filter(|g| g.difficulty.contains(difficulty)).collect()
    }

    /// Picks one goal uniformly by index. `None` when the book is empty.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Goal> {
        if self.goals.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.goals.len());
        self.goals.get_index(index).map(|(_, goal)| goal)
    }
}

impl FromIterator<Goal> for GoalBook {
    fn from_iter<I: IntoIterator<Item = Goal>>(iter: I) -> Self {
        let mut book = Self::new();
        for goal in iter {
            book.insert(goal);
        }
        book
    }
}

impl IntoIterator for GoalBook {
    type Item = Goal;
    type IntoIter = indexmap::map::IntoValues<String, Goal>;

    fn into_iter(self) -> Self::IntoIter {
        self.goals.into_values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn goal(name: &str, difficulty: &str) -> Goal {
        Goal::from_row(name, &format!("{name} description"), "", difficulty, "").expect("valid")
    }

    fn sample_book() -> GoalBook {
        [
            goal("Jano Skip", "★"),
            goal("Jano Skip Glitch", "★★"),
            goal("Skip the Bridge", "★★★"),
            goal("Bomb Jump", ""),
        ]
        .into_iter()
        .collect()
    }

    fn names(goals: &[&Goal]) -> Vec<String> {
        goals.iter().map(|g| g.name.clone()).collect()
    }

    #[test]
    fn exact_match_short_circuits_fuzzy() {
        let book = sample_book();
        let result = book.search("jano skip");
        assert_eq!(names(&result), vec!["Jano Skip"]);
    }

    #[test]
    fn exact_match_is_case_insensitive_and_trimmed() {
        let book = sample_book();
        let result = book.search("  JANO SKIP glitch ");
        assert_eq!(names(&result), vec!["Jano Skip Glitch"]);
    }

    #[test]
    fn substring_match_returns_all_in_load_order() {
        let book = sample_book();
        let result = book.search("skip");
        assert_eq!(names(&result), vec!["Jano Skip", "Jano Skip Glitch", "Skip the Bridge"]);
    }

    #[test]
    fn token_match_requires_every_token() {
        let book = sample_book();
        let result = book.search("glitch jano");
        assert_eq!(names(&result), vec!["Jano Skip Glitch"]);

        let none = book.search("glitch bridge");
        assert!(none.is_empty());
    }

    #[test]
    fn token_query_matches_longer_key() {
        let book: GoalBook = [goal("Jano Skip Glitch", "")].into_iter().collect();
        let result = book.search("jano skip");
        assert_eq!(names(&result), vec!["Jano Skip Glitch"]);
    }

    #[test]
    fn no_match_is_empty() {
        let book = sample_book();
        assert!(book.search("doesnotexist").is_empty());
    }

    #[test]
    fn blank_query_matches_nothing() {
        let book = sample_book();
        assert!(book.search("   ").is_empty());
    }

    #[test]
    fn duplicate_name_keeps_last_row_in_first_position() {
        let mut book = GoalBook::new();
        book.insert(goal("Alpha", "★"));
        book.insert(goal("Beta", "★"));
        let replaced = book.insert(goal("ALPHA", "★★★"));

        assert_eq!(replaced.map(|g| g.name), Some("Alpha".to_owned()));
        assert_eq!(book.len(), 2);
        let first = book.iter().next().expect("first goal");
        assert_eq!(first.name, "ALPHA");
        assert_eq!(first.difficulty, "★★★");
    }

    #[test]
    fn difficulty_filter_uses_containment() {
        let book = sample_book();
        let result = book.with_difficulty("★");
        assert_eq!(names(&result), vec!["Jano Skip", "Jano Skip Glitch", "Skip the Bridge"]);

        let result = book.with_difficulty("★★");
        assert_eq!(names(&result), vec!["Jano Skip Glitch", "Skip the Bridge"]);
    }

    #[test]
    fn difficulty_filter_ignores_blank_token() {
        let book = sample_book();
        assert!(book.with_difficulty(" ").is_empty());
        assert!(book.with_difficulty("impossible").is_empty());
    }

    #[test]
    fn pick_random_on_empty_book_is_none() {
        let book = GoalBook::new();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(book.pick_random(&mut rng).is_none());
    }

    #[test]
    fn pick_random_reaches_every_goal() {
        let book = sample_book();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let goal = book.pick_random(&mut rng).expect("non-empty book");
            seen.insert(goal.name.clone());
        }
        assert_eq!(seen.len(), book.len());
    }

    #[test]
    fn get_is_case_insensitive() {
        let book = sample_book();
        assert_eq!(book.get("BOMB JUMP").map(|g| g.name.as_str()), Some("Bomb Jump"));
        assert!(book.get("bomb").is_none());
    }
}
