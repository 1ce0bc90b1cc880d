//! Fixtures and a scripted transport for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use crate::client::Transport;
use crate::error::{GhIssuesError, Result};
use crate::types::{
    ClientState, Cursor, Issue, IssueConnection, IssueEdge, IssuesData, OrganizationView,
    PageInfo, ReactionConnection, RepoPath, RepositoryView, ResultEnvelope,
};

pub fn repo_path(s: &str) -> RepoPath {
    s.parse().unwrap()
}

/// One page of the issues query with the given issue ids.
pub fn issues_page(
    ids: &[&str],
    end_cursor: Option<&str>,
    has_next_page: bool,
) -> ResultEnvelope<IssuesData> {
    let edges = ids
        .iter()
        .map(|id| IssueEdge {
            node: Issue {
                id: id.to_string(),
                title: format!("Issue {id}"),
                url: format!("https://github.com/a/b/issues/{id}"),
                reactions: ReactionConnection::default(),
            },
        })
        .collect::<Vec<_>>();

    ResultEnvelope {
        data: Some(IssuesData {
            organization: Some(OrganizationView {
                name: Some("Org".to_string()),
                url: "https://github.com/a".to_string(),
                description: Some("An organization".to_string()),
                repository: Some(RepositoryView {
                    id: "R_1".to_string(),
                    name: "b".to_string(),
                    url: "https://github.com/a/b".to_string(),
                    viewer_has_starred: false,
                    issues: IssueConnection {
                        total_count: ids.len() as u64,
                        edges,
                        page_info: PageInfo {
                            end_cursor: end_cursor.map(Cursor::new),
                            has_next_page,
                        },
                    },
                }),
            }),
        }),
        errors: None,
    }
}

/// Untyped form of an envelope, as a transport would return it.
pub fn raw<T: serde::Serialize>(envelope: ResultEnvelope<T>) -> ResultEnvelope<serde_json::Value> {
    ResultEnvelope {
        data: envelope.data.map(|d| serde_json::to_value(d).unwrap()),
        errors: envelope.errors,
    }
}

pub fn star_response(field: &str, starred: bool) -> ResultEnvelope<serde_json::Value> {
    ResultEnvelope {
        data: Some(json!({ field: { "starrable": { "viewerHasStarred": starred } } })),
        errors: None,
    }
}

pub fn transport_failure() -> GhIssuesError {
    GhIssuesError::ApiError {
        status: 502,
        message: "Bad Gateway".to_string(),
    }
}

pub fn edge_ids(state: &ClientState) -> Vec<&str> {
    state.edges().iter().map(|e| e.node.id.as_str()).collect()
}

/// Transport that replays scripted responses in order and records requests.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<ResultEnvelope<serde_json::Value>>>>,
    requests: Mutex<Vec<(String, serde_json::Value)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, response: ResultEnvelope<serde_json::Value>) -> &Self {
        self.responses.lock().unwrap().push_back(Ok(response));
        self
    }

    pub fn push_page(&self, page: ResultEnvelope<IssuesData>) -> &Self {
        self.push(raw(page))
    }

    pub fn push_err(&self, error: GhIssuesError) -> &Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<(String, serde_json::Value)> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<ResultEnvelope<serde_json::Value>> {
        self.requests
            .lock()
            .unwrap()
            .push((query.to_string(), variables));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("MockTransport ran out of scripted responses")
    }
}
