//! Text rendering of goals for chat and browser consumers.

use std::fmt::Write as _;

use crate::constants::{
    COMPACT_MATCH_DISPLAY_LIMIT, DESCRIPTION_PREVIEW_CHARS, FULL_MATCH_DISPLAY_LIMIT,
};
use crate::goal::Goal;

/// Presentation mode for a lookup result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Multi-line: name, description, then level/difficulty/video when present.
    #[default]
    Full,
    /// Single line for low character budgets. Video link is omitted.
    Compact,
}

/// Renders one goal.
#[must_use]
pub fn format_goal(goal: &Goal, style: Style) -> String {
    match style {
        Style::Full => format_full(goal),
        Style::Compact => format_compact(goal),
    }
}

fn format_full(goal: &Goal) -> String {
    let mut out = format!("{}\n{}", goal.name, goal.description);
    if !goal.levels.is_empty() {
        let _ = write!(out, "\nLevel(s): {}", goal.levels);
    }
    if !goal.difficulty.is_empty() {
        let _ = write!(out, "\nDifficulty: {}", goal.difficulty);
    }
    if !goal.video_link.is_empty() {
        let _ = write!(out, "\nVideo: {}", goal.video_link);
    }
    out
}

fn format_compact(goal: &Goal) -> String {
    let mut out = format!("{}: {}", goal.name, goal.description);
    if !goal.levels.is_empty() {
        let _ = write!(out, " | {}", goal.levels);
    }
    if !goal.difficulty.is_empty() {
        let _ = write!(out, " | {}", goal.difficulty);
    }
    out
}

/// Renders a lookup result: the goal itself for a single match, otherwise a
/// capped list of candidate names.
///
/// An empty slice renders as an empty string; callers report "not found" instead.
#[must_use]
pub fn format_matches(query: &str, matches: &[&Goal], style: Style) -> String {
    match matches {
        [] => String::new(),
        [goal] => format_goal(goal, style),
        _ => match style {
            Style::Full => format_match_list(query, matches),
            Style::Compact => format_match_line(matches),
        },
    }
}

fn format_match_list(query: &str, matches: &[&Goal]) -> String {
    let mut out = format!("Multiple goals match \"{}\":", query.trim());
    for goal in matches.iter().take(FULL_MATCH_DISPLAY_LIMIT) {
        let _ = write!(out, "\n- {}", goal.name);
    }
    let hidden = matches.len().saturating_sub(FULL_MATCH_DISPLAY_LIMIT);
    if hidden > 0 {
        let _ = write!(out, "\n…and {hidden} more");
    }
    out
}

fn format_match_line(matches: &[&Goal]) -> String {
    let shown: Vec<&str> = matches
        .iter()
        .take(COMPACT_MATCH_DISPLAY_LIMIT)
        .map(|g| g.name.as_str())
        .collect();
    let mut out = format!("Multiple matches: {}", shown.join(", "));
    let hidden = matches.len().saturating_sub(COMPACT_MATCH_DISPLAY_LIMIT);
    if hidden > 0 {
        let _ = write!(out, " (+{hidden} more)");
    }
    out
}

/// Shortens a description for listings: the first 100 chars plus `...`.
#[must_use]
pub fn description_preview(description: &str) -> String {
    if description.chars().count() <= DESCRIPTION_PREVIEW_CHARS {
        return description.to_owned();
    }
    let mut preview: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}
