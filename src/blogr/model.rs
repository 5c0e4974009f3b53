use serde::{Deserialize, Serialize};

/// A single blog post.
///
/// `id` doubles as the creation timestamp: it is derived from the clock's
/// current time in milliseconds (plus a positional offset when seeding), and
/// must stay unique within the store after any operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    /// URL or path of the cover image; empty when the post has none.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub content: String,
    /// URL or path of a dedicated detail page; empty when the post is only
    /// reachable through the generated single-post view.
    #[serde(default)]
    pub detail_url: String,
}

impl Post {
    pub fn new(id: i64, draft: PostDraft) -> Self {
        let title = if draft.title.trim().is_empty() {
            "Untitled".to_string()
        } else {
            draft.title
        };
        Self {
            id,
            title,
            image: draft.image,
            content: draft.content,
            detail_url: draft.detail_url,
        }
    }

    /// Creation time in epoch milliseconds, as embedded in the id.
    pub fn created_at_millis(&self) -> i64 {
        self.id
    }
}

/// Input fields for a new post. Empty strings stand for omitted fields;
/// a blank title becomes "Untitled" when the post is built.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub title: String,
    pub image: String,
    pub content: String,
    pub detail_url: String,
}

impl PostDraft {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}
