//! Drives the issues query page by page.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};

use crate::client::Transport;
use crate::error::{GhIssuesError, Result};
use crate::merge::merge;
use crate::queries::ISSUES_OF_REPOSITORY_QUERY;
use crate::types::{ClientState, Cursor, IssuesData, RepoPath, ResultEnvelope};

/// One issued request. Only the most recently issued ticket may update state.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    seq: u64,
    path: RepoPath,
    cursor: Option<Cursor>,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn is_continuation(&self) -> bool {
        self.cursor.is_some()
    }

    /// Variables for the issues query.
    pub fn variables(&self) -> serde_json::Value {
        json!({
            "organization": self.path.organization(),
            "repository": self.path.repository(),
            "cursor": self.cursor,
        })
    }
}

#[derive(Debug)]
pub enum FetchOutcome {
    Applied(Arc<ClientState>),
    /// A newer request was issued after this one; the response was dropped.
    Stale,
}

pub struct PaginationController<T> {
    transport: T,
    current: Option<Arc<ClientState>>,
    last_seq: u64,
}

impl<T: Transport> PaginationController<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            current: None,
            last_seq: 0,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Latest snapshot, if anything has been fetched.
    pub fn snapshot(&self) -> Option<Arc<ClientState>> {
        self.current.clone()
    }

    pub fn has_next_page(&self) -> bool {
        self.current.as_ref().is_some_and(|s| s.has_next_page())
    }

    /// Fetch the first page of `path`, discarding any previous state.
    pub async fn fetch(&mut self, path: RepoPath) -> Result<Arc<ClientState>> {
        self.fetch_next(path, None).await
    }

    /// Fetch the page after the current one.
    ///
    /// Runs even when the last page reported `hasNextPage: false`; whatever
    /// the server returns is merged.
    pub async fn fetch_more(&mut self) -> Result<Arc<ClientState>> {
        let current = self
            .current
            .clone()
            .ok_or(GhIssuesError::NothingToContinue)?;
        let page_info = current.page_info().ok_or(GhIssuesError::NothingToContinue)?;
        let cursor = page_info
            .end_cursor
            .clone()
            .ok_or(GhIssuesError::NoCursor)?;

        self.fetch_next(current.path.clone(), Some(cursor)).await
    }

    /// Fetch the first page and keep loading until the server reports no
    /// further page or `max_pages` pages have been fetched.
    pub async fn fetch_all(
        &mut self,
        path: RepoPath,
        max_pages: Option<usize>,
    ) -> Result<Arc<ClientState>> {
        let mut state = self.fetch(path).await?;
        let mut pages = 1;

        while state.has_next_page() && max_pages.is_none_or(|max| pages < max) {
            state = self.fetch_more().await?;
            pages += 1;
        }

        debug!(pages, edges = state.edges().len(), "Pagination finished");
        Ok(state)
    }

    /// Request the page at `cursor` (or the first page when `None`) and merge it.
    pub async fn fetch_next(
        &mut self,
        path: RepoPath,
        cursor: Option<Cursor>,
    ) -> Result<Arc<ClientState>> {
        if cursor.is_some() {
            self.ensure_continuable(&path)?;
        }
        let ticket = self.begin(path, cursor);

        let result = self
            .transport
            .execute(ISSUES_OF_REPOSITORY_QUERY, ticket.variables())
            .await;

        match self.complete(ticket, result)? {
            FetchOutcome::Applied(state) => Ok(state),
            FetchOutcome::Stale => unreachable!("fetch_next holds the latest ticket"),
        }
    }

    /// Issue a ticket for a request. Any ticket issued earlier becomes stale.
    pub fn begin(&mut self, path: RepoPath, cursor: Option<Cursor>) -> FetchTicket {
        self.last_seq += 1;
        debug!(seq = self.last_seq, %path, cursor = ?cursor, "Requesting issues page");
        FetchTicket {
            seq: self.last_seq,
            path,
            cursor,
        }
    }

    /// Apply the response for `ticket` unless a newer request was issued.
    ///
    /// Transport failures leave the snapshot untouched.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<ResultEnvelope<serde_json::Value>>,
    ) -> Result<FetchOutcome> {
        if ticket.seq != self.last_seq {
            warn!(
                seq = ticket.seq,
                latest = self.last_seq,
                path = %ticket.path,
                "Discarding stale issues response"
            );
            return Ok(FetchOutcome::Stale);
        }

        let envelope = result?.decode::<IssuesData>()?;
        if ticket.is_continuation() {
            self.ensure_continuable(&ticket.path)?;
        }

        if envelope.has_errors() {
            warn!(
                path = %ticket.path,
                errors = ?envelope.error_messages(),
                "GraphQL returned errors"
            );
        }

        let next = merge(
            self.current.as_deref(),
            &ticket.path,
            envelope,
            ticket.is_continuation(),
        );
        debug!(
            seq = ticket.seq,
            edges = next.edges().len(),
            has_next_page = next.has_next_page(),
            "Merged issues page"
        );

        let next = Arc::new(next);
        self.current = Some(Arc::clone(&next));
        Ok(FetchOutcome::Applied(next))
    }

    /// A continuation needs a fetched repository at the same path.
    fn ensure_continuable(&self, path: &RepoPath) -> Result<()> {
        match &self.current {
            Some(state) if state.path == *path && state.repository().is_some() => Ok(()),
            _ => Err(GhIssuesError::NothingToContinue),
        }
    }

    /// Install `next` as the current snapshot.
    pub(crate) fn install(&mut self, next: ClientState) -> Arc<ClientState> {
        let next = Arc::new(next);
        self.current = Some(Arc::clone(&next));
        next
    }

    /// Put `previous` back if `expected` is still the current snapshot.
    pub(crate) fn rollback(
        &mut self,
        expected: &Arc<ClientState>,
        previous: Arc<ClientState>,
    ) -> bool {
        let is_current = self
            .current
            .as_ref()
            .is_some_and(|current| Arc::ptr_eq(current, expected));
        if is_current {
            self.current = Some(previous);
        }
        is_current
    }
}
