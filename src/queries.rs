//! GraphQL documents sent to the GitHub API.
//!
//! Only the variables and the response shapes in `types` are relied on;
//! the documents themselves can change without touching the merge logic.

use const_format::concatcp;

/// Issues requested per page.
pub const PAGE_SIZE: usize = 5;

/// Reactions requested per issue.
pub const REACTIONS_PER_ISSUE: usize = 3;

pub const ISSUES_OF_REPOSITORY_QUERY: &str = concatcp!(
    r#"
query IssuesOfRepository($organization: String!, $repository: String!, $cursor: String) {
    organization(login: $organization) {
        name
        url
        description
        repository(name: $repository) {
            id
            name
            url
            viewerHasStarred
            issues(first: "#,
    PAGE_SIZE,
    r#", after: $cursor, states: [OPEN]) {
                totalCount
                edges {
                    node {
                        id
                        title
                        url
                        reactions(last: "#,
    REACTIONS_PER_ISSUE,
    r#") {
                            edges {
                                node {
                                    id
                                    content
                                }
                            }
                        }
                    }
                }
                pageInfo {
                    endCursor
                    hasNextPage
                }
            }
        }
    }
}
"#
);

pub const ADD_STAR_MUTATION: &str = r#"
mutation AddStar($repositoryId: ID!) {
    addStar(input: { starrableId: $repositoryId }) {
        starrable {
            viewerHasStarred
        }
    }
}
"#;

pub const REMOVE_STAR_MUTATION: &str = r#"
mutation RemoveStar($repositoryId: ID!) {
    removeStar(input: { starrableId: $repositoryId }) {
        starrable {
            viewerHasStarred
        }
    }
}
"#;
