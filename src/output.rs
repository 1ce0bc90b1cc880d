use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use crate::types::{ClientState, IssueEdge};

/// Global output format setting
static OUTPUT_JSON: AtomicBool = AtomicBool::new(false);

pub fn set_json_output(json: bool) {
    OUTPUT_JSON.store(json, Ordering::Relaxed);
}

pub fn is_json_output() -> bool {
    OUTPUT_JSON.load(Ordering::Relaxed)
}

/// Print a single item or JSON depending on output mode
pub fn print_item<T: Serialize>(item: &T, display: impl FnOnce(&T)) {
    if is_json_output() {
        println!("{}", serde_json::to_string_pretty(item).unwrap_or_default());
    } else {
        display(item);
    }
}

/// Print a message (skipped in JSON mode, or prints simple object)
pub fn print_message(message: &str) {
    if is_json_output() {
        println!("{}", serde_json::json!({ "message": message }));
    } else {
        println!("{message}");
    }
}

pub fn print_state(state: &ClientState) {
    print_item(state, |s| print!("{}", render_state(s)));
}

#[derive(Tabled)]
struct IssueRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Reactions")]
    reactions: String,
    #[tabled(rename = "URL")]
    url: String,
}

impl IssueRow {
    fn new(index: usize, edge: &IssueEdge) -> Self {
        Self {
            index,
            title: truncate(&edge.node.title, 60),
            reactions: edge
                .node
                .reactions
                .edges
                .iter()
                .map(|r| r.node.content.emoji())
                .collect::<Vec<_>>()
                .join(" "),
            url: edge.node.url.clone(),
        }
    }
}

/// Text view of a snapshot. Errors replace the normal view.
pub fn render_state(state: &ClientState) -> String {
    let mut out = String::new();

    if let Some(errors) = state.errors.as_ref().filter(|e| !e.is_empty()) {
        let messages = errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!(
            "{} {}\n",
            "Something went wrong:".red().bold(),
            messages
        ));
        return out;
    }

    let Some(org) = &state.organization else {
        out.push_str("No information yet...\n");
        return out;
    };

    out.push_str(&format!(
        "{} {} ({})\n",
        "Issues from Organization:".bold(),
        org.name.as_deref().unwrap_or(state.path.organization()),
        org.url
    ));
    if let Some(description) = org.description.as_deref().filter(|d| !d.is_empty()) {
        out.push_str(&format!("{description}\n"));
    }

    let Some(repo) = &org.repository else {
        out.push_str(&format!(
            "Repository {} not found\n",
            state.path.repository()
        ));
        return out;
    };

    let star = if repo.viewer_has_starred {
        "★ Starred".yellow().to_string()
    } else {
        "☆ Not starred".bright_black().to_string()
    };
    out.push_str(&format!(
        "{} {} ({})  {}\n",
        "In Repository:".bold(),
        repo.name,
        repo.url,
        star
    ));
    out.push_str(&format!(
        "Total count of issues: {} (showing {})\n",
        repo.issues.total_count,
        repo.issues.edges.len()
    ));

    if !repo.issues.edges.is_empty() {
        let rows: Vec<IssueRow> = repo
            .issues
            .edges
            .iter()
            .enumerate()
            .map(|(i, edge)| IssueRow::new(i + 1, edge))
            .collect();
        let table = Table::new(rows).with(Style::rounded()).to_string();
        out.push_str(&format!("{table}\n"));
    }

    if repo.issues.page_info.has_next_page {
        out.push_str(&format!("{}\n", "More issues available.".cyan()));
    }

    out
}

/// Truncate a string with ellipsis
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::merge;
    use crate::test_utils::{issues_page, repo_path};
    use crate::types::{ClientState, GraphQLError};

    #[test]
    fn test_render_errors_suppress_view() {
        let mut page = issues_page(&["1"], Some("c1"), true);
        page.errors = Some(vec![
            GraphQLError::new("first problem."),
            GraphQLError::new("second problem."),
        ]);
        let state = merge(None, &repo_path("a/b"), page, false);

        let text = render_state(&state);

        assert!(text.contains("first problem. second problem."));
        assert!(!text.contains("Issue 1"));
    }

    #[test]
    fn test_render_empty_state() {
        let text = render_state(&ClientState::empty(repo_path("a/b")));
        assert_eq!(text, "No information yet...\n");
    }

    #[test]
    fn test_render_issues_and_more_hint() {
        let state = merge(
            None,
            &repo_path("a/b"),
            issues_page(&["1", "2"], Some("c1"), true),
            false,
        );

        let text = render_state(&state);

        assert!(text.contains("Issue 1"));
        assert!(text.contains("Issue 2"));
        assert!(text.contains("Total count of issues: 2 (showing 2)"));
        assert!(text.contains("More issues available."));
    }

    #[test]
    fn test_render_last_page_has_no_hint() {
        let state = merge(
            None,
            &repo_path("a/b"),
            issues_page(&["1"], None, false),
            false,
        );
        assert!(!render_state(&state).contains("More issues available."));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer title here", 10), "a longe...");
        assert_eq!(truncate("ééééééééééé", 5), "éé...");
    }
}
