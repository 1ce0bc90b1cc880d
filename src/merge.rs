//! Folds successive pages of the issues query into one snapshot.

use crate::types::{ClientState, IssuesData, OrganizationView, RepoPath, ResultEnvelope};

/// Produce the next snapshot from `previous` and a freshly received page.
///
/// A fresh query (`is_continuation == false`) replaces everything. A
/// continuation appends the new edges after the previous ones and lets
/// every other field of the new page overwrite the old value. Errors always
/// come from the newest envelope only.
///
/// # Panics
///
/// When `is_continuation` is true but `previous` holds no repository to
/// append to. Callers must fetch a first page before loading more.
pub fn merge(
    previous: Option<&ClientState>,
    path: &RepoPath,
    envelope: ResultEnvelope<IssuesData>,
    is_continuation: bool,
) -> ClientState {
    let organization = envelope.data.and_then(|d| d.organization);

    if !is_continuation {
        return ClientState {
            path: path.clone(),
            organization,
            errors: envelope.errors,
        };
    }

    let previous_org = previous
        .and_then(|s| s.organization.as_ref())
        .filter(|o| o.repository.is_some());
    let Some(previous_org) = previous_org else {
        panic!("continuation merge for {path} without a previously fetched repository");
    };

    let organization = match organization {
        Some(next) => append_page(previous_org, next),
        None => previous_org.clone(),
    };

    ClientState {
        path: path.clone(),
        organization: Some(organization),
        errors: envelope.errors,
    }
}

fn append_page(previous: &OrganizationView, mut next: OrganizationView) -> OrganizationView {
    match next.repository.as_mut() {
        Some(repo) => {
            let old_edges = previous
                .repository
                .as_ref()
                .map(|r| r.issues.edges.as_slice())
                .unwrap_or_default();
            let new_edges = std::mem::take(&mut repo.issues.edges);
            repo.issues.edges = Vec::with_capacity(old_edges.len() + new_edges.len());
            repo.issues.edges.extend_from_slice(old_edges);
            repo.issues.edges.extend(new_edges);
        }
        None => next.repository = previous.repository.clone(),
    }
    next
}
