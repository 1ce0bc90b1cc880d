//! The shape of a single GraphQL response.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Data and/or errors returned by one query or mutation execution.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ResultEnvelope<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

impl<T> ResultEnvelope<T> {
    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|e| !e.is_empty())
    }

    /// Messages of every error in the envelope, in order.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .flatten()
            .map(|e| e.message.clone())
            .collect()
    }
}

impl ResultEnvelope<serde_json::Value> {
    /// Decode the untyped `data` payload, keeping the errors as they are.
    pub fn decode<T: DeserializeOwned>(self) -> serde_json::Result<ResultEnvelope<T>> {
        let data = match self.data {
            Some(serde_json::Value::Null) | None => None,
            Some(value) => Some(serde_json::from_value(value)?),
        };
        Ok(ResultEnvelope {
            data,
            errors: self.errors,
        })
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GraphQLError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<serde_json::Value>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
}

impl GraphQLError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: Vec::new(),
            error_type: None,
        }
    }
}
