use crate::client::Transport;
use crate::error::{GhIssuesError, Result};
use crate::output;
use crate::pagination::PaginationController;
use crate::star::StarStrategy;
use crate::types::RepoPath;

/// Look up the repository, then flip its star.
pub async fn toggle<T: Transport>(
    controller: &mut PaginationController<T>,
    path: RepoPath,
) -> Result<()> {
    let state = controller.fetch(path).await?;
    if state.has_errors() || state.repository().is_none() {
        output::print_state(&state);
        let messages = match &state.errors {
            Some(errors) if !errors.is_empty() => {
                errors.iter().map(|e| e.message.clone()).collect()
            }
            _ => vec![format!("repository {} not found", state.path)],
        };
        return Err(GhIssuesError::MutationFailed { messages });
    }

    let starred = controller.toggle_star(StarStrategy::Deferred).await?;
    output::print_message(&star_message(&state.path, starred));

    Ok(())
}

pub fn star_message(path: &RepoPath, starred: bool) -> String {
    if starred {
        format!("Starred {path}")
    } else {
        format!("Unstarred {path}")
    }
}
