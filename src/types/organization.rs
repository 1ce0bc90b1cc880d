//! Views over the issues query result.

use serde::{Deserialize, Serialize};

use super::ReactionConnection;

/// Opaque server-issued pagination token.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

/// Pagination info for cursor-based pagination.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct PageInfo {
    #[serde(rename = "endCursor")]
    pub end_cursor: Option<Cursor>,
    #[serde(rename = "hasNextPage")]
    pub has_next_page: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Issue {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub reactions: ReactionConnection,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct IssueEdge {
    pub node: Issue,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct IssueConnection {
    #[serde(rename = "totalCount")]
    pub total_count: u64,
    #[serde(default)]
    pub edges: Vec<IssueEdge>,
    #[serde(rename = "pageInfo", default)]
    pub page_info: PageInfo,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RepositoryView {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(rename = "viewerHasStarred")]
    pub viewer_has_starred: bool,
    pub issues: IssueConnection,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct OrganizationView {
    pub name: Option<String>,
    pub url: String,
    pub description: Option<String>,
    pub repository: Option<RepositoryView>,
}

/// `data` payload of the issues query.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct IssuesData {
    pub organization: Option<OrganizationView>,
}
