use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::GhIssuesError;

static PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9._-]+)/([A-Za-z0-9._-]+)$").unwrap());

/// An `organization/repository` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoPath {
    organization: String,
    repository: String,
}

impl RepoPath {
    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }
}

impl FromStr for RepoPath {
    type Err = GhIssuesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('/');
        let caps = PATH_RE
            .captures(trimmed)
            .ok_or_else(|| GhIssuesError::InvalidPath(s.to_string()))?;

        Ok(Self {
            organization: caps[1].to_string(),
            repository: caps[2].to_string(),
        })
    }
}

impl fmt::Display for RepoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.organization, self.repository)
    }
}

impl Serialize for RepoPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RepoPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
