use serde::Serialize;

use super::{GraphQLError, IssueEdge, OrganizationView, PageInfo, RepoPath, RepositoryView};

/// Immutable snapshot of everything the presentation layer renders.
///
/// Every fetch produces a new value; nothing updates a snapshot in place.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ClientState {
    pub path: RepoPath,
    pub organization: Option<OrganizationView>,
    pub errors: Option<Vec<GraphQLError>>,
}

impl ClientState {
    /// State at session start: nothing fetched yet.
    pub fn empty(path: RepoPath) -> Self {
        Self {
            path,
            organization: None,
            errors: None,
        }
    }

    pub fn repository(&self) -> Option<&RepositoryView> {
        self.organization.as_ref()?.repository.as_ref()
    }

    pub fn edges(&self) -> &[IssueEdge] {
        self.repository()
            .map(|r| r.issues.edges.as_slice())
            .unwrap_or_default()
    }

    pub fn page_info(&self) -> Option<&PageInfo> {
        self.repository().map(|r| &r.issues.page_info)
    }

    pub fn has_next_page(&self) -> bool {
        self.page_info().is_some_and(|p| p.has_next_page)
    }

    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|e| !e.is_empty())
    }

    /// Copy of this snapshot with `viewerHasStarred` set.
    pub fn with_starred(&self, starred: bool) -> Self {
        let mut next = self.clone();
        if let Some(repo) = next
            .organization
            .as_mut()
            .and_then(|o| o.repository.as_mut())
        {
            repo.viewer_has_starred = starred;
        }
        next
    }
}
