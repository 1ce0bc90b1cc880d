mod envelope;
mod organization;
mod path;
mod reaction;
mod state;

pub use envelope::{GraphQLError, ResultEnvelope};
pub use organization::{
    Cursor, Issue, IssueConnection, IssueEdge, IssuesData, OrganizationView, PageInfo,
    RepositoryView,
};
pub use path::RepoPath;
pub use reaction::{Reaction, ReactionConnection, ReactionContent, ReactionEdge};
pub use state::ClientState;
