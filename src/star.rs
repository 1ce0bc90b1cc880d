//! Star and unstar the repository being browsed.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::client::Transport;
use crate::error::{GhIssuesError, Result};
use crate::pagination::PaginationController;
use crate::queries::{ADD_STAR_MUTATION, REMOVE_STAR_MUTATION};
use crate::types::ClientState;

/// How the local `viewerHasStarred` flag follows a star toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StarStrategy {
    /// Leave the snapshot alone; the flag refreshes on the next full query.
    #[default]
    Deferred,
    /// Flip the flag immediately and roll back if the mutation fails.
    Optimistic,
}

#[derive(Deserialize)]
struct StarPayload {
    starrable: Option<Starrable>,
}

#[derive(Deserialize)]
struct Starrable {
    #[serde(rename = "viewerHasStarred")]
    viewer_has_starred: bool,
}

#[derive(Deserialize)]
struct AddStarResponse {
    #[serde(rename = "addStar")]
    add_star: Option<StarPayload>,
}

#[derive(Deserialize)]
struct RemoveStarResponse {
    #[serde(rename = "removeStar")]
    remove_star: Option<StarPayload>,
}

/// Star the repository if it is not starred, unstar it otherwise.
///
/// Returns `viewerHasStarred` as reported by the server.
pub async fn toggle_star<T: Transport + ?Sized>(
    transport: &T,
    repository_id: &str,
    currently_starred: bool,
) -> Result<bool> {
    let variables = json!({ "repositoryId": repository_id });
    let mutation = if currently_starred {
        REMOVE_STAR_MUTATION
    } else {
        ADD_STAR_MUTATION
    };

    debug!(repository_id, currently_starred, "Sending star mutation");
    let envelope = transport.execute(mutation, variables).await?;

    if envelope.has_errors() {
        return Err(GhIssuesError::MutationFailed {
            messages: envelope.error_messages(),
        });
    }

    let payload = if currently_starred {
        envelope
            .decode::<RemoveStarResponse>()?
            .data
            .and_then(|d| d.remove_star)
    } else {
        envelope
            .decode::<AddStarResponse>()?
            .data
            .and_then(|d| d.add_star)
    };

    payload
        .and_then(|p| p.starrable)
        .map(|s| s.viewer_has_starred)
        .ok_or_else(|| GhIssuesError::MutationFailed {
            messages: vec!["response did not include the starred repository".to_string()],
        })
}

impl<T: Transport> PaginationController<T> {
    /// Toggle the star on the repository of the current snapshot.
    ///
    /// A failed mutation is returned as an error. Pagination state is left as
    /// it was (deferred) or restored (optimistic).
    pub async fn toggle_star(&mut self, strategy: StarStrategy) -> Result<bool> {
        let previous = self.snapshot().ok_or(GhIssuesError::NothingToContinue)?;
        let repo = previous
            .repository()
            .ok_or(GhIssuesError::NothingToContinue)?;
        let repository_id = repo.id.clone();
        let currently_starred = repo.viewer_has_starred;

        let optimistic = match strategy {
            StarStrategy::Deferred => None,
            StarStrategy::Optimistic => {
                Some(self.install(previous.with_starred(!currently_starred)))
            }
        };

        match toggle_star(self.transport(), &repository_id, currently_starred).await {
            Ok(starred) => {
                info!(repository_id = %repository_id, starred, "Star toggled");
                if let Some(applied) = &optimistic {
                    if applied.repository().map(|r| r.viewer_has_starred) != Some(starred) {
                        self.reconcile(applied, starred);
                    }
                }
                Ok(starred)
            }
            Err(e) => {
                warn!(repository_id = %repository_id, error = %e, "Star mutation failed");
                if let Some(applied) = &optimistic {
                    self.rollback(applied, previous);
                }
                Err(e)
            }
        }
    }

    fn reconcile(&mut self, applied: &Arc<ClientState>, starred: bool) {
        let confirmed = Arc::new(applied.with_starred(starred));
        self.rollback(applied, confirmed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{issues_page, repo_path, star_response, transport_failure, MockTransport};
    use crate::types::{GraphQLError, ResultEnvelope};

    fn transport_with_page() -> MockTransport {
        let transport = MockTransport::new();
        transport.push_page(issues_page(&["1"], Some("c1"), true));
        transport
    }

    async fn controller_with_page(transport: MockTransport) -> PaginationController<MockTransport> {
        let mut controller = PaginationController::new(transport);
        controller.fetch(repo_path("a/b")).await.unwrap();
        controller
    }

    fn starred(controller: &PaginationController<MockTransport>) -> bool {
        controller
            .snapshot()
            .unwrap()
            .repository()
            .unwrap()
            .viewer_has_starred
    }

    #[tokio::test]
    async fn test_toggle_star_adds_when_not_starred() {
        let transport = MockTransport::new();
        transport.push(star_response("addStar", true));

        let result = toggle_star(&transport, "R_1", false).await.unwrap();

        assert!(result);
        let requests = transport.requests();
        assert_eq!(requests[0].0, ADD_STAR_MUTATION);
        assert_eq!(requests[0].1, json!({ "repositoryId": "R_1" }));
    }

    #[tokio::test]
    async fn test_toggle_star_removes_when_starred() {
        let transport = MockTransport::new();
        transport.push(star_response("removeStar", false));

        let result = toggle_star(&transport, "R_1", true).await.unwrap();

        assert!(!result);
        assert_eq!(transport.requests()[0].0, REMOVE_STAR_MUTATION);
    }

    #[tokio::test]
    async fn test_toggle_star_graphql_error() {
        let transport = MockTransport::new();
        transport.push(ResultEnvelope {
            data: None,
            errors: Some(vec![GraphQLError::new("Resource not accessible by integration")]),
        });

        let err = toggle_star(&transport, "R_1", false).await.unwrap_err();

        match err {
            GhIssuesError::MutationFailed { messages } => {
                assert_eq!(messages, vec!["Resource not accessible by integration"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_toggle_star_missing_starrable() {
        let transport = MockTransport::new();
        transport.push(ResultEnvelope {
            data: Some(json!({ "addStar": { "starrable": null } })),
            errors: None,
        });

        let err = toggle_star(&transport, "R_1", false).await.unwrap_err();

        assert!(matches!(err, GhIssuesError::MutationFailed { .. }));
    }

    #[tokio::test]
    async fn test_deferred_leaves_snapshot_alone() {
        let transport = transport_with_page();
        transport.push(star_response("addStar", true));
        let mut controller = controller_with_page(transport).await;
        let before = controller.snapshot().unwrap();

        let result = controller.toggle_star(StarStrategy::Deferred).await.unwrap();

        assert!(result);
        assert!(Arc::ptr_eq(&before, &controller.snapshot().unwrap()));
        assert!(!starred(&controller));
    }

    #[tokio::test]
    async fn test_optimistic_flips_flag() {
        let transport = transport_with_page();
        transport.push(star_response("addStar", true));
        let mut controller = controller_with_page(transport).await;

        controller.toggle_star(StarStrategy::Optimistic).await.unwrap();

        assert!(starred(&controller));
    }

    #[tokio::test]
    async fn test_optimistic_rolls_back_on_failure() {
        let transport = transport_with_page();
        transport.push_err(transport_failure());
        let mut controller = controller_with_page(transport).await;
        let before = controller.snapshot().unwrap();

        let err = controller
            .toggle_star(StarStrategy::Optimistic)
            .await
            .unwrap_err();

        assert!(matches!(err, GhIssuesError::ApiError { .. }));
        assert!(Arc::ptr_eq(&before, &controller.snapshot().unwrap()));
        assert!(!starred(&controller));
    }

    #[tokio::test]
    async fn test_optimistic_follows_server_answer() {
        let transport = transport_with_page();
        transport.push(star_response("addStar", false));
        let mut controller = controller_with_page(transport).await;

        let result = controller.toggle_star(StarStrategy::Optimistic).await.unwrap();

        assert!(!result);
        assert!(!starred(&controller));
    }

    #[tokio::test]
    async fn test_toggle_without_repository() {
        let mut controller = PaginationController::new(MockTransport::new());

        let err = controller
            .toggle_star(StarStrategy::Deferred)
            .await
            .unwrap_err();

        assert!(matches!(err, GhIssuesError::NothingToContinue));
    }

    #[tokio::test]
    async fn test_failed_star_keeps_edges() {
        let transport = transport_with_page();
        transport.push_err(transport_failure());
        let mut controller = controller_with_page(transport).await;

        let _ = controller.toggle_star(StarStrategy::Deferred).await;

        assert_eq!(controller.snapshot().unwrap().edges().len(), 1);
    }
}
