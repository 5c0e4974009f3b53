use super::StorageAdapter;
use crate::error::{BlogrError, Result};
use crate::model::Post;
use std::fs;
use std::path::{Path, PathBuf};

/// The fixed key the post list lives under.
const POSTS_FILENAME: &str = "posts.json";

/// File-backed storage: the whole list in one `posts.json` under the data
/// directory (project-local `.blogr/` or the user data dir).
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn posts_path(&self) -> PathBuf {
        self.root.join(POSTS_FILENAME)
    }
}

impl StorageAdapter for FileStore {
    fn save(&mut self, posts: &[Post]) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(BlogrError::Io)?;
        }
        let content = serde_json::to_string_pretty(posts).map_err(BlogrError::Serialization)?;
        fs::write(self.posts_path(), content).map_err(BlogrError::Io)?;
        Ok(())
    }

    fn load(&self) -> Option<Vec<Post>> {
        let content = fs::read_to_string(self.posts_path()).ok()?;
        serde_json::from_str(&content).ok()
    }
}
