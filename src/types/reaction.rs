use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Emoji reaction attached to an issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReactionContent {
    ThumbsUp,
    ThumbsDown,
    Laugh,
    Hooray,
    Confused,
    Heart,
    Rocket,
    Eyes,
    /// A tag this client does not know about yet.
    Other(String),
}

impl ReactionContent {
    /// Create from the GraphQL enum tag.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "THUMBS_UP" => Self::ThumbsUp,
            "THUMBS_DOWN" => Self::ThumbsDown,
            "LAUGH" => Self::Laugh,
            "HOORAY" => Self::Hooray,
            "CONFUSED" => Self::Confused,
            "HEART" => Self::Heart,
            "ROCKET" => Self::Rocket,
            "EYES" => Self::Eyes,
            other => Self::Other(other.to_string()),
        }
    }

    /// Get the GraphQL enum tag.
    pub fn tag(&self) -> &str {
        match self {
            Self::ThumbsUp => "THUMBS_UP",
            Self::ThumbsDown => "THUMBS_DOWN",
            Self::Laugh => "LAUGH",
            Self::Hooray => "HOORAY",
            Self::Confused => "CONFUSED",
            Self::Heart => "HEART",
            Self::Rocket => "ROCKET",
            Self::Eyes => "EYES",
            Self::Other(tag) => tag.as_str(),
        }
    }

    /// Get the emoji for terminal output.
    pub fn emoji(&self) -> &str {
        match self {
            Self::ThumbsUp => "👍",
            Self::ThumbsDown => "👎",
            Self::Laugh => "😄",
            Self::Hooray => "🎉",
            Self::Confused => "😕",
            Self::Heart => "❤️",
            Self::Rocket => "🚀",
            Self::Eyes => "👀",
            Self::Other(tag) => tag.as_str(),
        }
    }
}

impl fmt::Display for ReactionContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl Serialize for ReactionContent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for ReactionContent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&value))
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Reaction {
    pub id: String,
    pub content: ReactionContent,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ReactionEdge {
    pub node: Reaction,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct ReactionConnection {
    #[serde(default)]
    pub edges: Vec<ReactionEdge>,
}
