//! # Storage Layer
//!
//! The [`StorageAdapter`] trait is the only thing the rest of the crate
//! knows about persistence. The whole post list is serialized as one JSON
//! document and written under a single fixed key; there are no partial
//! writes.
//!
//! The read side is deliberately forgiving: [`StorageAdapter::load`] maps a
//! missing key *and* an unparsable value to `None`. Callers must treat
//! `Some(vec![])` ("empty, but present") differently from `None` ("no
//! data"): first-run seeding fires only on `None`, and persisting an
//! explicitly empty list is what keeps seeding from running twice.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one `posts.json` per data
//!   directory.
//! - [`memory::InMemoryStore`]: in-memory storage for tests; holds the
//!   serialized text so the round-trip through serde is still exercised.

use crate::error::Result;
use crate::model::Post;

pub mod fs;
pub mod memory;

/// Abstract interface for post-list persistence.
pub trait StorageAdapter {
    /// Serialize and write the full ordered list, replacing any prior value.
    /// Write failures propagate to the caller.
    fn save(&mut self, posts: &[Post]) -> Result<()>;

    /// Read the stored list. `None` when nothing was ever stored or the
    /// stored text does not parse; never an error.
    fn load(&self) -> Option<Vec<Post>>;
}
