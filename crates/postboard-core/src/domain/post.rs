use serde::{Deserialize, Serialize};

use super::Record;

/// Post entity - a titled entry written by an author.
///
/// Field names on the wire and on disk are `ID`, `Title` and `Author`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Post {
    #[serde(rename = "ID")]
    pub id: u64,
    pub title: String,
    pub author: String,
}

/// Content fields of a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub author: String,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }
}

impl Record for Post {
    type Draft = PostDraft;

    const KIND: &'static str = "post";

    fn id(&self) -> u64 {
        self.id
    }

    fn from_draft(id: u64, draft: PostDraft) -> Self {
        Self {
            id,
            title: draft.title,
            author: draft.author,
        }
    }
}
