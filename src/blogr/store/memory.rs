use super::StorageAdapter;
use crate::error::{BlogrError, Result};
use crate::model::Post;

/// In-memory storage for testing and development.
/// Holds the serialized text, so load still goes through a real parse.
#[derive(Default)]
pub struct InMemoryStore {
    value: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw access to the stored value, for asserting on what was persisted.
    pub fn raw(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Overwrites the stored value without going through serialization.
    /// Lets tests stage corrupt or hand-written data.
    pub fn set_raw(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }
}

impl StorageAdapter for InMemoryStore {
    fn save(&mut self, posts: &[Post]) -> Result<()> {
        let content = serde_json::to_string(posts).map_err(BlogrError::Serialization)?;
        self.value = Some(content);
        Ok(())
    }

    fn load(&self) -> Option<Vec<Post>> {
        let content = self.value.as_deref()?;
        serde_json::from_str(content).ok()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Post;

    pub fn post(id: i64, title: &str) -> Post {
        Post {
            id,
            title: title.to_string(),
            image: String::new(),
            content: format!("Content for {}", title),
            detail_url: String::new(),
        }
    }

    pub fn store_with(posts: &[Post]) -> InMemoryStore {
        let mut store = InMemoryStore::new();
        store.save(posts).unwrap();
        store
    }
}
