//! Data Transfer Objects - request bodies accepted by the API.
//!
//! Every field is required; a body missing one is rejected before it
//! reaches the store.

use serde::{Deserialize, Serialize};

/// Body of `POST /posts` and `PUT /posts/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRequest {
    pub title: String,
    pub author: String,
}

/// Body of `POST /comments` and `PUT /comments/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRequest {
    pub body: String,
    #[serde(rename = "postID")]
    pub post_id: i64,
}

/// Body of `POST /profile` and `PUT /profile`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRequest {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_request_uses_camel_case_post_id() {
        let req: CommentRequest = serde_json::from_str(r#"{"body":"hi","postID":7}"#).unwrap();
        assert_eq!(req.post_id, 7);
        assert_eq!(req.body, "hi");
    }

    #[test]
    fn test_comment_request_accepts_negative_post_id() {
        let req: CommentRequest = serde_json::from_str(r#"{"body":"b","postID":-1}"#).unwrap();
        assert_eq!(req.post_id, -1);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let err = serde_json::from_str::<PostRequest>(r#"{"title":"t1"}"#).unwrap_err();
        assert!(err.to_string().contains("author"));
    }
}
