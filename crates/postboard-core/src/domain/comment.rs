use serde::{Deserialize, Serialize};

use super::Record;

/// Comment entity - a body of text attached to a post.
///
/// `post_id` is a plain reference: it is never checked against the
/// existing posts and may point at a post that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "ID")]
    pub id: u64,
    #[serde(rename = "Body")]
    pub body: String,
    #[serde(rename = "PostID")]
    pub post_id: i64,
}

/// Content fields of a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDraft {
    pub body: String,
    pub post_id: i64,
}

impl CommentDraft {
    pub fn new(body: impl Into<String>, post_id: i64) -> Self {
        Self {
            body: body.into(),
            post_id,
        }
    }
}

impl Record for Comment {
    type Draft = CommentDraft;

    const KIND: &'static str = "comment";

    fn id(&self) -> u64 {
        self.id
    }

    fn from_draft(id: u64, draft: CommentDraft) -> Self {
        Self {
            id,
            body: draft.body,
            post_id: draft.post_id,
        }
    }
}
